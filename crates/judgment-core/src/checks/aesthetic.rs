//! Aesthetic checks
//!
//! | Check | Question |
//! |-------|----------|
//! | `experiential_richness` | Does the claim carry sensory or emotional content? |
//! | `form_content_coherence` | Does the claim relate form to content, or show structure? |
//! | `aesthetic_significance` | Does the claim assert significance in an aesthetic domain? |

use super::{ClaimText, RuleTable, Tier};
use crate::types::{CheckName, CheckResult};

pub static SENSORY_MARKERS: &[&str] = &[
    "see",
    "hear",
    "feel",
    "touch",
    "taste",
    "smell",
    "sense",
    "experience",
];

pub static EMOTION_MARKERS: &[&str] = &[
    "joy",
    "sorrow",
    "anger",
    "fear",
    "wonder",
    "awe",
    "delight",
    "melancholy",
];

pub static AESTHETIC_MARKERS: &[&str] = &[
    "beauty",
    "aesthetic",
    "form",
    "style",
    "expression",
    "artistic",
    "creative",
];

pub static FORM_CONTENT_MARKERS: &[&str] = &[
    "reflects",
    "expresses",
    "embodies",
    "represents",
    "manifests",
];

pub static SIGNIFICANCE_MARKERS: &[&str] = &[
    "significant",
    "important",
    "meaningful",
    "profound",
    "reveals",
    "illuminates",
];

pub static AESTHETIC_DOMAIN_MARKERS: &[&str] = &[
    "art",
    "beauty",
    "literature",
    "music",
    "poetry",
    "creative",
    "imagination",
];

/// Claims longer than this many words may count as structured.
const STRUCTURAL_MIN_WORDS: usize = 10;

/// Minimum comma-separated parts for a claim to count as structured.
const STRUCTURAL_MIN_PARTS: usize = 3;

fn rich_sensory(claim: &ClaimText<'_>) -> bool {
    claim.count_present(SENSORY_MARKERS) >= 2
}

fn some_sensory(claim: &ClaimText<'_>) -> bool {
    claim.count_present(SENSORY_MARKERS) == 1
}

fn has_emotion(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(EMOTION_MARKERS)
}

fn has_aesthetic(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(AESTHETIC_MARKERS)
}

fn aesthetic_with_form_content(claim: &ClaimText<'_>) -> bool {
    has_aesthetic(claim) && claim.contains_any(FORM_CONTENT_MARKERS)
}

fn has_structure(claim: &ClaimText<'_>) -> bool {
    claim.word_count() > STRUCTURAL_MIN_WORDS && claim.comma_parts() >= STRUCTURAL_MIN_PARTS
}

fn has_significance(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(SIGNIFICANCE_MARKERS)
}

fn significance_in_aesthetic_domain(claim: &ClaimText<'_>) -> bool {
    has_significance(claim) && claim.contains_any(AESTHETIC_DOMAIN_MARKERS)
}

pub(crate) static EXPERIENTIAL_RICHNESS: RuleTable = RuleTable {
    check: CheckName::ExperientialRichness,
    tiers: &[
        Tier {
            condition: rich_sensory,
            score: 0.9,
            reason: "Rich sensory language.",
        },
        Tier {
            condition: some_sensory,
            score: 0.7,
            reason: "Contains some sensory language.",
        },
        Tier {
            condition: has_emotion,
            score: 0.8,
            reason: "Contains emotional richness.",
        },
    ],
    default_score: 0.4,
    default_reason: "Limited experiential content.",
};

pub(crate) static FORM_CONTENT_COHERENCE: RuleTable = RuleTable {
    check: CheckName::FormContentCoherence,
    tiers: &[
        Tier {
            condition: aesthetic_with_form_content,
            score: 0.9,
            reason: "Explicit form-content relationship.",
        },
        Tier {
            condition: has_aesthetic,
            score: 0.7,
            reason: "Contains aesthetic language.",
        },
        Tier {
            condition: has_structure,
            score: 0.8,
            reason: "Contains structural coherence.",
        },
    ],
    default_score: 0.5,
    default_reason: "Neutral form-content relationship.",
};

pub(crate) static AESTHETIC_SIGNIFICANCE: RuleTable = RuleTable {
    check: CheckName::AestheticSignificance,
    tiers: &[
        Tier {
            condition: significance_in_aesthetic_domain,
            score: 0.9,
            reason: "Claims aesthetic significance.",
        },
        Tier {
            condition: has_significance,
            score: 0.6,
            reason: "Claims significance in non-aesthetic domain.",
        },
    ],
    default_score: 0.5,
    default_reason: "Limited claims to aesthetic significance.",
};

/// Score the sensory and emotional richness of a claim.
pub fn experiential_richness(claim: &str) -> CheckResult {
    EXPERIENTIAL_RICHNESS.apply(&ClaimText::new(claim))
}

/// Score how a claim aligns form and content.
pub fn form_content_coherence(claim: &str) -> CheckResult {
    FORM_CONTENT_COHERENCE.apply(&ClaimText::new(claim))
}

/// Score the aesthetic significance a claim asserts.
pub fn aesthetic_significance(claim: &str) -> CheckResult {
    AESTHETIC_SIGNIFICANCE.apply(&ClaimText::new(claim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sensory_markers_are_rich() {
        let result =
            experiential_richness("I could see the light and feel the warmth, a true experience.");
        assert_eq!(result.check, CheckName::ExperientialRichness);
        assert_eq!(result.score, 0.9);
        assert_eq!(result.reason, "Rich sensory language.");
    }

    #[test]
    fn test_one_sensory_marker() {
        let result = experiential_richness("You can hear it.");
        assert_eq!(result.score, 0.7);
        assert_eq!(result.reason, "Contains some sensory language.");
    }

    #[test]
    fn test_repeated_marker_counts_once() {
        assert_eq!(experiential_richness("hear, hear!").score, 0.7);
    }

    #[test]
    fn test_sensory_wins_over_emotion() {
        // One sensory marker and one emotion marker: the count tier comes first.
        assert_eq!(experiential_richness("I hear joy.").score, 0.7);
    }

    #[test]
    fn test_emotion_without_sensory() {
        let result = experiential_richness("A quiet melancholy lingers.");
        assert_eq!(result.score, 0.8);
        assert_eq!(result.reason, "Contains emotional richness.");
    }

    #[test]
    fn test_experiential_default() {
        let result = experiential_richness("Taxes are due in April.");
        assert_eq!(result.score, 0.4);
        assert_eq!(result.reason, "Limited experiential content.");
    }

    #[test]
    fn test_aesthetic_with_form_content() {
        let result = form_content_coherence("Her style embodies restraint.");
        assert_eq!(result.check, CheckName::FormContentCoherence);
        assert_eq!(result.score, 0.9);
        assert_eq!(result.reason, "Explicit form-content relationship.");
    }

    #[test]
    fn test_aesthetic_alone() {
        let result = form_content_coherence("Beauty is rare.");
        assert_eq!(result.score, 0.7);
        assert_eq!(result.reason, "Contains aesthetic language.");
    }

    #[test]
    fn test_form_content_marker_without_aesthetic_is_ignored() {
        assert_eq!(form_content_coherence("The chart reflects sales.").score, 0.5);
    }

    #[test]
    fn test_structural_coherence() {
        let claim = "Bread rises slowly, water boils quickly, and the kitchen hums along all day";
        let result = form_content_coherence(claim);
        assert_eq!(result.score, 0.8);
        assert_eq!(result.reason, "Contains structural coherence.");
    }

    #[test]
    fn test_structure_needs_more_than_ten_words() {
        // Exactly ten words with three comma parts.
        let claim = "red apples, green pears, and yellow bananas sit there quietly";
        assert_eq!(claim.split_whitespace().count(), 10);
        assert_eq!(form_content_coherence(claim).score, 0.5);
    }

    #[test]
    fn test_structure_needs_three_parts() {
        let claim = "Bread rises slowly while water boils quickly, and the kitchen hums along";
        assert_eq!(form_content_coherence(claim).score, 0.5);
    }

    #[test]
    fn test_form_content_default() {
        let result = form_content_coherence("This plain statement has no special qualities.");
        assert_eq!(result.score, 0.5);
        assert_eq!(result.reason, "Neutral form-content relationship.");
    }

    #[test]
    fn test_significance_in_aesthetic_domain() {
        let result = aesthetic_significance("Poetry reveals hidden truths.");
        assert_eq!(result.check, CheckName::AestheticSignificance);
        assert_eq!(result.score, 0.9);
        assert_eq!(result.reason, "Claims aesthetic significance.");
    }

    #[test]
    fn test_significance_outside_aesthetic_domain() {
        let result = aesthetic_significance("Sleep is important.");
        assert_eq!(result.score, 0.6);
        assert_eq!(result.reason, "Claims significance in non-aesthetic domain.");
    }

    #[test]
    fn test_domain_without_significance_is_default() {
        let result = aesthetic_significance("Music plays.");
        assert_eq!(result.score, 0.5);
        assert_eq!(result.reason, "Limited claims to aesthetic significance.");
    }
}
