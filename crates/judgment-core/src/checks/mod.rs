//! The eight claim checks.
//!
//! Each check is an ordered rule table. Tiers are tried top to bottom and the
//! first tier whose condition holds decides the score; when none holds the
//! table's default applies.
//!
//! ## Check Independence
//!
//! - Checks never see each other's results
//! - No shared mutable state; marker tables are immutable statics
//! - Every check is total: any string, including the empty one, scores

mod aesthetic;
mod ethical;
mod practical;

pub use aesthetic::{aesthetic_significance, experiential_richness, form_content_coherence};
pub use ethical::{justice_considerations, value_pluralism};
pub use practical::{implementability, resource_feasibility, scalability};

use std::collections::HashSet;

use crate::types::{CheckName, CheckResult};

/// A claim prepared for marker matching.
///
/// Holds the original text next to its lower-cased form so conditions can
/// pick whichever view they match against.
#[derive(Debug, Clone)]
pub struct ClaimText<'a> {
    original: &'a str,
    lowered: String,
}

impl<'a> ClaimText<'a> {
    pub fn new(claim: &'a str) -> Self {
        Self {
            original: claim,
            lowered: claim.to_lowercase(),
        }
    }

    /// The claim exactly as given.
    pub fn original(&self) -> &str {
        self.original
    }

    /// The claim lower-cased.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// True if any marker occurs as a substring of the lower-cased claim.
    pub fn contains_any(&self, markers: &[&str]) -> bool {
        markers.iter().any(|marker| self.lowered.contains(marker))
    }

    /// Number of markers occurring as substrings of the lower-cased claim.
    pub fn count_present(&self, markers: &[&str]) -> usize {
        markers
            .iter()
            .filter(|marker| self.lowered.contains(*marker))
            .count()
    }

    /// True if any whitespace-separated token of the lower-cased claim is in
    /// `words`.
    ///
    /// Tokens keep their punctuation, and an entry containing a space can
    /// never equal a single token.
    pub fn has_word(&self, words: &HashSet<&str>) -> bool {
        self.lowered
            .split_whitespace()
            .any(|word| words.contains(word))
    }

    /// Number of whitespace-separated words in the original claim.
    pub fn word_count(&self) -> usize {
        self.original.split_whitespace().count()
    }

    /// Number of parts the original claim splits into on `,`.
    pub fn comma_parts(&self) -> usize {
        self.original.split(',').count()
    }
}

/// One precedence level within a check's rule table.
pub(crate) struct Tier {
    pub condition: fn(&ClaimText<'_>) -> bool,
    pub score: f64,
    pub reason: &'static str,
}

/// Ordered tiers plus the fallback outcome for one check.
pub(crate) struct RuleTable {
    pub check: CheckName,
    pub tiers: &'static [Tier],
    pub default_score: f64,
    pub default_reason: &'static str,
}

impl RuleTable {
    /// Apply the table to a claim; the first satisfied tier wins.
    pub fn apply(&self, claim: &ClaimText<'_>) -> CheckResult {
        for (index, tier) in self.tiers.iter().enumerate() {
            if (tier.condition)(claim) {
                tracing::trace!(check = %self.check, tier = index + 1, score = tier.score, "Tier matched");
                return CheckResult::new(self.check, tier.score, tier.reason);
            }
        }

        tracing::trace!(check = %self.check, score = self.default_score, "No tier matched, using default");
        CheckResult::new(self.check, self.default_score, self.default_reason)
    }
}

fn table(check: CheckName) -> &'static RuleTable {
    match check {
        CheckName::ValuePluralism => &ethical::VALUE_PLURALISM,
        CheckName::JusticeConsiderations => &ethical::JUSTICE_CONSIDERATIONS,
        CheckName::ExperientialRichness => &aesthetic::EXPERIENTIAL_RICHNESS,
        CheckName::FormContentCoherence => &aesthetic::FORM_CONTENT_COHERENCE,
        CheckName::AestheticSignificance => &aesthetic::AESTHETIC_SIGNIFICANCE,
        CheckName::Implementability => &practical::IMPLEMENTABILITY,
        CheckName::ResourceFeasibility => &practical::RESOURCE_FEASIBILITY,
        CheckName::Scalability => &practical::SCALABILITY,
    }
}

/// Run a single named check against a claim.
pub fn run_check(check: CheckName, claim: &str) -> CheckResult {
    table(check).apply(&ClaimText::new(claim))
}

/// Run the given checks, in the given order, against a claim.
///
/// The claim is lower-cased once and shared by every check.
pub fn run_checks(checks: &[CheckName], claim: &str) -> Vec<CheckResult> {
    let text = ClaimText::new(claim);
    checks.iter().map(|check| table(*check).apply(&text)).collect()
}

/// Run all eight checks in canonical order.
pub fn score_claim(claim: &str) -> Vec<CheckResult> {
    run_checks(&CheckName::ALL, claim)
}
