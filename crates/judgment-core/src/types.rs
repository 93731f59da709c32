//! Core types for claim scoring.
//!
//! These types are the data structures shared by the checks, the
//! synthesizer and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The eight checks a claim can be scored against.
///
/// Declaration order is the canonical evaluation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CheckName {
    ValuePluralism,
    JusticeConsiderations,
    ExperientialRichness,
    FormContentCoherence,
    AestheticSignificance,
    Implementability,
    ResourceFeasibility,
    Scalability,
}

impl CheckName {
    /// All checks in canonical order.
    pub const ALL: [CheckName; 8] = [
        CheckName::ValuePluralism,
        CheckName::JusticeConsiderations,
        CheckName::ExperientialRichness,
        CheckName::FormContentCoherence,
        CheckName::AestheticSignificance,
        CheckName::Implementability,
        CheckName::ResourceFeasibility,
        CheckName::Scalability,
    ];

    /// The wire name of this check (e.g. `value_pluralism`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::ValuePluralism => "value_pluralism",
            CheckName::JusticeConsiderations => "justice_considerations",
            CheckName::ExperientialRichness => "experiential_richness",
            CheckName::FormContentCoherence => "form_content_coherence",
            CheckName::AestheticSignificance => "aesthetic_significance",
            CheckName::Implementability => "implementability",
            CheckName::ResourceFeasibility => "resource_feasibility",
            CheckName::Scalability => "scalability",
        }
    }

    /// The dimension this check contributes to.
    pub fn dimension(&self) -> Dimension {
        match self {
            CheckName::ValuePluralism | CheckName::JusticeConsiderations => Dimension::Ethical,
            CheckName::ExperientialRichness
            | CheckName::FormContentCoherence
            | CheckName::AestheticSignificance => Dimension::Aesthetic,
            CheckName::Implementability
            | CheckName::ResourceFeasibility
            | CheckName::Scalability => Dimension::Practical,
        }
    }

    /// What the check looks for, in one line.
    pub fn description(&self) -> &'static str {
        match self {
            CheckName::ValuePluralism => "Recognition of multiple value perspectives",
            CheckName::JusticeConsiderations => "Consideration of justice and fairness",
            CheckName::ExperientialRichness => "Richness of experiential content",
            CheckName::FormContentCoherence => "Alignment of form and content",
            CheckName::AestheticSignificance => "Aesthetic significance of the claim",
            CheckName::Implementability => "Whether the claim can be implemented",
            CheckName::ResourceFeasibility => "Resource requirements and feasibility",
            CheckName::Scalability => "Whether the claim can scale to different contexts",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown check: {0}")]
pub struct ParseCheckNameError(pub String);

impl FromStr for CheckName {
    type Err = ParseCheckNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ParseCheckNameError(s.to_string()))
    }
}

/// The three dimensions checks are grouped under.
///
/// Ordered for deterministic iteration in BTreeMap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Ethical,
    Aesthetic,
    Practical,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Ethical, Dimension::Aesthetic, Dimension::Practical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Ethical => "ethical",
            Dimension::Aesthetic => "aesthetic",
            Dimension::Practical => "practical",
        }
    }

    /// Checks belonging to this dimension, in canonical order.
    pub fn checks(&self) -> impl Iterator<Item = CheckName> + '_ {
        CheckName::ALL
            .into_iter()
            .filter(move |check| check.dimension() == *self)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running a single check against a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckResult {
    /// Which check produced this result
    pub check: CheckName,

    /// Score in `[0, 1]`
    pub score: f64,

    /// Why the score was assigned
    pub reason: String,
}

impl CheckResult {
    pub fn new(check: CheckName, score: f64, reason: impl Into<String>) -> Self {
        Self {
            check,
            score,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_name_round_trips_through_str() {
        for check in CheckName::ALL {
            assert_eq!(check.as_str().parse::<CheckName>(), Ok(check));
            assert_eq!(check.to_string(), check.as_str());
        }
    }

    #[test]
    fn test_unknown_check_name() {
        let err = "beauty".parse::<CheckName>().unwrap_err();
        assert_eq!(err, ParseCheckNameError("beauty".to_string()));
        assert_eq!(err.to_string(), "Unknown check: beauty");
    }

    #[test]
    fn test_check_name_serializes_snake_case() {
        let json = serde_json::to_string(&CheckName::FormContentCoherence).unwrap();
        assert_eq!(json, "\"form_content_coherence\"");

        let parsed: CheckName = serde_json::from_str("\"resource_feasibility\"").unwrap();
        assert_eq!(parsed, CheckName::ResourceFeasibility);
    }

    #[test]
    fn test_dimension_grouping() {
        let ethical: Vec<_> = Dimension::Ethical.checks().collect();
        assert_eq!(
            ethical,
            vec![CheckName::ValuePluralism, CheckName::JusticeConsiderations]
        );
        assert_eq!(Dimension::Aesthetic.checks().count(), 3);
        assert_eq!(Dimension::Practical.checks().count(), 3);
    }

    #[test]
    fn test_check_result_serialization() {
        let result = CheckResult::new(CheckName::Scalability, 0.7, "Implies broad applicability.");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["check"], "scalability");
        assert_eq!(value["score"], 0.7);
        assert_eq!(value["reason"], "Implies broad applicability.");
    }
}
