//! # judgment-core
//!
//! Deterministic claim scoring engine.
//!
//! This crate scores a natural-language claim along three dimensions:
//! - **Ethical**: value pluralism, justice considerations
//! - **Aesthetic**: experiential richness, form-content coherence, aesthetic significance
//! - **Practical**: implementability, resource feasibility, scalability
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Total**: Every check scores every string, including the empty one
//! 3. **Traceable**: Every score carries the reason of the tier that produced it
//! 4. **Parallel-safe**: Checks are pure functions over immutable tables
//!
//! ## Example
//!
//! ```rust
//! use judgment_core::{checks, evaluate, CheckName, JudgmentConfig};
//!
//! let result = checks::value_pluralism("There are many different perspectives on this issue.");
//! assert_eq!(result.check, CheckName::ValuePluralism);
//! assert_eq!(result.score, 0.9);
//!
//! let judgment = evaluate("We should implement this method.", &JudgmentConfig::default())?;
//! println!("{:?} ({:.2})", judgment.verdict, judgment.average_score);
//! # Ok::<(), judgment_core::EvaluationError>(())
//! ```

pub mod checks;
pub mod config;
pub mod synthesizer;
pub mod types;

// Re-export main types at crate root
pub use checks::{run_check, run_checks, score_claim};
pub use config::{
    ConfigError, ConsensusThresholds, DimensionWeights, JudgmentConfig, VerdictThresholds,
};
pub use synthesizer::{Consensus, ConsensusLevel, DimensionScore, Judgment, Synthesizer, Verdict};
pub use types::{CheckName, CheckResult, Dimension, ParseCheckNameError};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during evaluation
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("No checks selected")]
    NoChecksSelected,
}

/// Evaluate a claim with the given configuration.
///
/// This is the main entry point for aggregated scoring.
///
/// # Determinism
///
/// This function uses the current system time for `evaluated_at`.
/// For fully deterministic results use [`evaluate_at`].
pub fn evaluate(claim: &str, config: &JudgmentConfig) -> Result<Judgment, EvaluationError> {
    evaluate_at(claim, config, Utc::now())
}

/// Evaluate a claim with an explicit timestamp for deterministic results.
///
/// # Arguments
///
/// * `claim` - The text to score
/// * `config` - Which checks to run and how to aggregate them
/// * `evaluated_at` - Timestamp to record on the judgment
pub fn evaluate_at(
    claim: &str,
    config: &JudgmentConfig,
    evaluated_at: DateTime<Utc>,
) -> Result<Judgment, EvaluationError> {
    config.validate()?;

    if config.checks.is_empty() {
        return Err(EvaluationError::NoChecksSelected);
    }

    let results = run_checks(&config.checks, claim);
    tracing::debug!(checks = results.len(), claim_len = claim.len(), "Ran checks");

    let judgment = Synthesizer::new(config).synthesize_at(claim, results, evaluated_at)?;
    Ok(judgment)
}


/// End-to-end scenarios across all checks
#[cfg(test)]
mod scenario_tests {
    use super::*;

    fn score_of(results: &[CheckResult], check: CheckName) -> f64 {
        results
            .iter()
            .find(|r| r.check == check)
            .map(|r| r.score)
            .unwrap()
    }

    #[test]
    fn test_scenario_pluralism() {
        let result = checks::value_pluralism("There are many different perspectives on this issue.");
        assert_eq!(result.score, 0.9);
        assert_eq!(result.reason, "Explicitly acknowledges value pluralism.");
    }

    #[test]
    fn test_scenario_discrimination() {
        let result = checks::justice_considerations(
            "This policy creates discrimination against minorities.",
        );
        assert_eq!(result.score, 0.9);
    }

    #[test]
    fn test_scenario_sensory() {
        let result = checks::experiential_richness(
            "I could see the light and feel the warmth, a true experience.",
        );
        assert_eq!(result.score, 0.9);
    }

    #[test]
    fn test_scenario_plain_statement() {
        let result = checks::form_content_coherence("This plain statement has no special qualities.");
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_scenario_implement_method() {
        let result =
            checks::implementability("We should implement this method through a careful process.");
        assert_eq!(result.score, 0.8);
    }

    #[test]
    fn test_scenario_all_cases() {
        let result = checks::scalability("This applies in all cases without exception.");
        assert_eq!(result.score, 0.7);
    }

    #[test]
    fn test_full_profile_of_a_claim() {
        let results = score_claim(
            "Art reveals how different perspectives shape our sense of beauty and joy.",
        );

        assert_eq!(score_of(&results, CheckName::ValuePluralism), 0.9);
        assert_eq!(score_of(&results, CheckName::JusticeConsiderations), 0.5);
        // "sense" only; "see" and "feel" are absent
        assert_eq!(score_of(&results, CheckName::ExperientialRichness), 0.7);
        assert_eq!(score_of(&results, CheckName::FormContentCoherence), 0.7);
        assert_eq!(score_of(&results, CheckName::AestheticSignificance), 0.9);
        assert_eq!(score_of(&results, CheckName::Implementability), 0.5);
        assert_eq!(score_of(&results, CheckName::ResourceFeasibility), 0.6);
        assert_eq!(score_of(&results, CheckName::Scalability), 0.5);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let claims = [
            "",
            "   ",
            "All knowledge is ultimately subjective, as it is filtered through human perception.",
            "The universe is deterministic, with every event following necessarily from prior causes.",
            "Democracy is the best form of government because it respects individual autonomy.",
            "Beauty exists objectively in the harmony and proportion of forms.",
            "The most practical approach to climate change involves technological innovation and market incentives.",
        ];

        for claim in claims {
            for result in score_claim(claim) {
                assert!((0.0..=1.0).contains(&result.score), "{claim}: {result:?}");
            }
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scores_stay_in_unit_interval(claim in any::<String>()) {
            for result in score_claim(&claim) {
                prop_assert!((0.0..=1.0).contains(&result.score));
            }
        }

        #[test]
        fn checks_keep_their_names(claim in any::<String>()) {
            for check in CheckName::ALL {
                prop_assert_eq!(run_check(check, &claim).check, check);
            }
        }

        #[test]
        fn checks_are_deterministic(claim in ".{0,200}") {
            prop_assert_eq!(score_claim(&claim), score_claim(&claim));
        }

        #[test]
        fn digits_only_claims_hit_defaults(claim in "[0-9 ]{0,40}") {
            let empty = score_claim("");
            prop_assert_eq!(score_claim(&claim), empty);
        }
    }
}
