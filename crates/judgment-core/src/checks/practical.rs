//! Practical checks
//!
//! | Check | Question |
//! |-------|----------|
//! | `implementability` | Can the claim be put into practice? |
//! | `resource_feasibility` | Does the claim weigh what it would cost? |
//! | `scalability` | Does the claim carry over to other contexts? |
//!
//! The universal-language tier of `scalability` matches whole tokens rather
//! than substrings. Tokens are split on whitespace only, so a marker spanning
//! several words never matches.

use lazy_static::lazy_static;
use std::collections::HashSet;

use super::{ClaimText, RuleTable, Tier};
use crate::types::{CheckName, CheckResult};

pub static PRACTICAL_MARKERS: &[&str] = &[
    "implement",
    "apply",
    "use",
    "practice",
    "action",
    "do",
    "perform",
];

pub static ABSTRACT_MARKERS: &[&str] = &[
    "theoretical",
    "abstract",
    "conceptual",
    "philosophical",
    "ideal",
];

pub static METHOD_MARKERS: &[&str] = &[
    "method",
    "step",
    "procedure",
    "process",
    "technique",
    "approach",
];

pub static RESOURCE_MARKERS: &[&str] = &[
    "resources",
    "cost",
    "time",
    "effort",
    "investment",
    "requires",
    "needs",
];

pub static FEASIBILITY_MARKERS: &[&str] = &[
    "feasible",
    "practical",
    "realistic",
    "achievable",
    "doable",
];

pub static IDEALISTIC_MARKERS: &[&str] = &[
    "ideal",
    "perfect",
    "optimal",
    "ultimate",
    "best possible",
];

pub static SCALABILITY_MARKERS: &[&str] = &[
    "scale",
    "expand",
    "grow",
    "widespread",
    "broad application",
    "generalize",
];

pub static SCOPE_MARKERS: &[&str] = &[
    "specific",
    "particular",
    "limited",
    "narrow",
    "certain cases",
    "this context",
];

/// Matched as whole tokens, see the module docs.
pub static UNIVERSAL_MARKERS: &[&str] = &[
    "all",
    "every",
    "universal",
    "always",
    "regardless",
    "in any case",
];

lazy_static! {
    /// Universal markers as a lookup set for whole-token matching.
    static ref UNIVERSAL_WORDS: HashSet<&'static str> =
        UNIVERSAL_MARKERS.iter().copied().collect();
}

fn has_practical(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(PRACTICAL_MARKERS)
}

fn has_abstract(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(ABSTRACT_MARKERS)
}

fn has_method(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(METHOD_MARKERS)
}

fn has_resource(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(RESOURCE_MARKERS)
}

fn resource_with_feasibility(claim: &ClaimText<'_>) -> bool {
    has_resource(claim) && claim.contains_any(FEASIBILITY_MARKERS)
}

fn has_idealism(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(IDEALISTIC_MARKERS)
}

fn has_scalability(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(SCALABILITY_MARKERS)
}

fn has_scope(claim: &ClaimText<'_>) -> bool {
    claim.contains_any(SCOPE_MARKERS)
}

fn has_universal_word(claim: &ClaimText<'_>) -> bool {
    claim.has_word(&UNIVERSAL_WORDS)
}

pub(crate) static IMPLEMENTABILITY: RuleTable = RuleTable {
    check: CheckName::Implementability,
    tiers: &[
        Tier {
            condition: has_practical,
            score: 0.8,
            reason: "Contains practical implementation language.",
        },
        Tier {
            condition: has_abstract,
            score: 0.3,
            reason: "Primarily abstract/theoretical.",
        },
        Tier {
            condition: has_method,
            score: 0.9,
            reason: "Describes specific methods or procedures.",
        },
    ],
    default_score: 0.5,
    default_reason: "Unclear implementability.",
};

pub(crate) static RESOURCE_FEASIBILITY: RuleTable = RuleTable {
    check: CheckName::ResourceFeasibility,
    tiers: &[
        Tier {
            condition: resource_with_feasibility,
            score: 0.9,
            reason: "Explicitly addresses feasibility.",
        },
        Tier {
            condition: has_resource,
            score: 0.7,
            reason: "Mentions resources without clear feasibility.",
        },
        Tier {
            condition: has_idealism,
            score: 0.4,
            reason: "Contains idealistic language.",
        },
    ],
    default_score: 0.6,
    default_reason: "Neutral on resource feasibility.",
};

pub(crate) static SCALABILITY: RuleTable = RuleTable {
    check: CheckName::Scalability,
    tiers: &[
        Tier {
            condition: has_scalability,
            score: 0.9,
            reason: "Explicitly addresses scalability.",
        },
        Tier {
            condition: has_scope,
            score: 0.3,
            reason: "Indicates limited scope.",
        },
        Tier {
            condition: has_universal_word,
            score: 0.7,
            reason: "Implies broad applicability.",
        },
    ],
    default_score: 0.5,
    default_reason: "Unclear scalability.",
};

/// Score whether a claim can be put into practice.
pub fn implementability(claim: &str) -> CheckResult {
    IMPLEMENTABILITY.apply(&ClaimText::new(claim))
}

/// Score how a claim treats resource requirements.
pub fn resource_feasibility(claim: &str) -> CheckResult {
    RESOURCE_FEASIBILITY.apply(&ClaimText::new(claim))
}

/// Score whether a claim carries over to other contexts.
pub fn scalability(claim: &str) -> CheckResult {
    SCALABILITY.apply(&ClaimText::new(claim))
}
