//! Ethical checks
//!
//! | Check | Question |
//! |-------|----------|
//! | `value_pluralism` | Does the claim recognise more than one value perspective? |
//! | `justice_considerations` | Does the claim consider justice, fairness or power? |

use super::{ClaimText, RuleTable, Tier};
use crate::types::{CheckName, CheckResult};

/// Language acknowledging several value perspectives.
pub static PLURALISM_MARKERS: &[&str] = &[
    "different perspectives",
    "various values",
    "multiple viewpoints",
    "diversity of",
    "depends on context",
];

/// Language asserting one framework for everyone.
pub static UNIVERSALIST_MARKERS: &[&str] = &[
    "universal",
    "absolute",
    "for all",
    "objective",
    "regardless of",
];

pub static JUSTICE_MARKERS: &[&str] = &[
    "justice",
    "fairness",
    "rights",
    "equality",
    "equity",
    "discrimination",
    "oppression",
];

pub static POWER_MARKERS: &[&str] = &[
    "power",
    "privilege",
    "disadvantage",
    "marginalized",
    "vulnerable",
    "access",
];

fn has_pluralism(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(PLURALISM_MARKERS)
}

fn has_universalism(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(UNIVERSALIST_MARKERS)
}

fn has_justice(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(JUSTICE_MARKERS)
}

fn has_power(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(POWER_MARKERS)
}

pub(crate) static VALUE_PLURALISM: RuleTable = RuleTable {
    check: CheckName::ValuePluralism,
    tiers: &[
        Tier {
            condition: has_pluralism,
            score: 0.9,
            reason: "Explicitly acknowledges value pluralism.",
        },
        Tier {
            condition: has_universalism,
            score: 0.3,
            reason: "Indicates universalist value framework.",
        },
    ],
    default_score: 0.6,
    default_reason: "Neutral on value pluralism.",
};

pub(crate) static JUSTICE_CONSIDERATIONS: RuleTable = RuleTable {
    check: CheckName::JusticeConsiderations,
    tiers: &[
        Tier {
            condition: has_justice,
            score: 0.9,
            reason: "Explicitly addresses justice concerns.",
        },
        Tier {
            condition: has_power,
            score: 0.8,
            reason: "Addresses power dynamics.",
        },
    ],
    default_score: 0.5,
    default_reason: "Limited explicit justice considerations.",
};

/// Score how far a claim recognises multiple value perspectives.
pub fn value_pluralism(claim: &str) -> CheckResult {
    VALUE_PLURALISM.apply(&ClaimText::new(claim))
}

/// Score how far a claim considers justice and power.
pub fn justice_considerations(claim: &str) -> CheckResult {
    JUSTICE_CONSIDERATIONS.apply(&ClaimText::new(claim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralism_marker_scores_high() {
        let result = value_pluralism("There are many different perspectives on this issue.");
        assert_eq!(result.check, CheckName::ValuePluralism);
        assert_eq!(result.score, 0.9);
        assert_eq!(result.reason, "Explicitly acknowledges value pluralism.");
    }

    #[test]
    fn test_universalist_marker_scores_low() {
        let result = value_pluralism("Truth is absolute.");
        assert_eq!(result.score, 0.3);
        assert_eq!(result.reason, "Indicates universalist value framework.");
    }

    #[test]
    fn test_pluralism_wins_over_universalism() {
        let result =
            value_pluralism("Different perspectives exist, yet some truths are universal.");
        assert_eq!(result.score, 0.9);
    }

    #[test]
    fn test_pluralism_default() {
        let result = value_pluralism("The cat sat on the mat.");
        assert_eq!(result.score, 0.6);
        assert_eq!(result.reason, "Neutral on value pluralism.");
    }

    #[test]
    fn test_pluralism_is_case_insensitive() {
        assert_eq!(value_pluralism("It DEPENDS ON CONTEXT.").score, 0.9);
    }

    #[test]
    fn test_justice_marker() {
        let result = justice_considerations("This policy creates discrimination against minorities.");
        assert_eq!(result.check, CheckName::JusticeConsiderations);
        assert_eq!(result.score, 0.9);
        assert_eq!(result.reason, "Explicitly addresses justice concerns.");
    }

    #[test]
    fn test_power_marker() {
        let result = justice_considerations("Vulnerable groups are hit hardest.");
        assert_eq!(result.score, 0.8);
        assert_eq!(result.reason, "Addresses power dynamics.");
    }

    #[test]
    fn test_justice_wins_over_power() {
        assert_eq!(
            justice_considerations("Power imbalances undermine fairness.").score,
            0.9
        );
    }

    #[test]
    fn test_justice_default() {
        let result = justice_considerations("The weather is mild today.");
        assert_eq!(result.score, 0.5);
        assert_eq!(result.reason, "Limited explicit justice considerations.");
    }

    #[test]
    fn test_justice_matches_substrings() {
        // "copyrights" contains "rights"
        assert_eq!(justice_considerations("Copyrights expire.").score, 0.9);
    }
}
