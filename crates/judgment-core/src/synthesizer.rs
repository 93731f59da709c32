//! Synthesizer: Aggregates check results into a judgment.
//!
//! The synthesizer applies fixed policy on top of the independent checks:
//! 1. Each dimension scores the mean of its selected checks
//! 2. The average score is the weighted mean of the dimension scores
//! 3. The verdict comes from the average against the verdict thresholds
//! 4. Consensus is `1 - (max - min)` over the dimension scores
//!
//! Dimensions without a selected check are left out entirely; they neither
//! count towards the average nor towards consensus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigError, ConsensusThresholds, JudgmentConfig, VerdictThresholds};
use crate::types::{CheckResult, Dimension};

/// Overall verdict on a claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Average reached the `supported` threshold
    Supported,

    /// Average reached the `qualified` threshold
    Qualified,

    /// Average fell below both thresholds
    Unsupported,
}

impl Verdict {
    pub fn from_score(score: f64, thresholds: &VerdictThresholds) -> Self {
        if score >= thresholds.supported {
            Verdict::Supported
        } else if score >= thresholds.qualified {
            Verdict::Qualified
        } else {
            Verdict::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Supported => "SUPPORTED",
            Verdict::Qualified => "QUALIFIED",
            Verdict::Unsupported => "UNSUPPORTED",
        }
    }
}

/// How closely the dimensions agree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusLevel {
    High,
    Moderate,
    Low,
}

impl ConsensusLevel {
    pub fn from_score(score: f64, thresholds: &ConsensusThresholds) -> Self {
        if score >= thresholds.high {
            ConsensusLevel::High
        } else if score >= thresholds.moderate {
            ConsensusLevel::Moderate
        } else {
            ConsensusLevel::Low
        }
    }
}

/// Agreement between dimension scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Consensus {
    pub level: ConsensusLevel,
    pub score: f64,
}

/// Score of one dimension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DimensionScore {
    /// Mean of the dimension's check scores
    pub score: f64,

    /// How many checks contributed
    pub checks: usize,
}

/// Aggregated evaluation of a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Judgment {
    /// The claim as given
    pub claim: String,

    /// Individual check results, in evaluation order
    pub results: Vec<CheckResult>,

    /// Scores per dimension (BTreeMap for deterministic ordering)
    pub dimensions: BTreeMap<Dimension, DimensionScore>,

    /// Weighted mean of the dimension scores
    pub average_score: f64,

    /// Verdict derived from the average
    pub verdict: Verdict,

    /// Agreement between dimensions
    pub consensus: Consensus,

    /// When the evaluation occurred
    pub evaluated_at: DateTime<Utc>,
}

/// The Synthesizer aggregates check results into a judgment.
pub struct Synthesizer<'a> {
    config: &'a JudgmentConfig,
}

impl<'a> Synthesizer<'a> {
    pub fn new(config: &'a JudgmentConfig) -> Self {
        Self { config }
    }

    /// Synthesize check results using the current time.
    ///
    /// For deterministic output use [`Synthesizer::synthesize_at`].
    pub fn synthesize(
        &self,
        claim: &str,
        results: Vec<CheckResult>,
    ) -> Result<Judgment, ConfigError> {
        self.synthesize_at(claim, results, Utc::now())
    }

    /// Synthesize check results with an explicit timestamp.
    ///
    /// Fails when every dimension that has results carries zero weight.
    pub fn synthesize_at(
        &self,
        claim: &str,
        results: Vec<CheckResult>,
        evaluated_at: DateTime<Utc>,
    ) -> Result<Judgment, ConfigError> {
        let dimensions = dimension_scores(&results);

        let average_score = self.weighted_average(&dimensions)?;
        let verdict = Verdict::from_score(average_score, &self.config.thresholds);

        let consensus_score = consensus_score(&dimensions);
        let consensus = Consensus {
            level: ConsensusLevel::from_score(consensus_score, &self.config.consensus),
            score: consensus_score,
        };

        tracing::debug!(
            checks = results.len(),
            average_score,
            verdict = verdict.as_str(),
            consensus = consensus_score,
            "Synthesized judgment"
        );

        Ok(Judgment {
            claim: claim.to_string(),
            results,
            dimensions,
            average_score,
            verdict,
            consensus,
            evaluated_at,
        })
    }

    fn weighted_average(
        &self,
        dimensions: &BTreeMap<Dimension, DimensionScore>,
    ) -> Result<f64, ConfigError> {
        let (weighted_sum, total_weight) = dimensions.iter().fold(
            (0.0, 0.0),
            |(sum, total), (dimension, dim_score)| {
                let weight = self.config.weights.get(*dimension);
                (sum + weight * dim_score.score, total + weight)
            },
        );

        if total_weight <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Selected checks only cover dimensions with zero weight".to_string(),
            ));
        }

        Ok(weighted_sum / total_weight)
    }
}

/// Mean score per dimension over the given results.
pub fn dimension_scores(results: &[CheckResult]) -> BTreeMap<Dimension, DimensionScore> {
    let mut sums: BTreeMap<Dimension, (f64, usize)> = BTreeMap::new();
    for result in results {
        let entry = sums.entry(result.check.dimension()).or_insert((0.0, 0));
        entry.0 += result.score;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(dimension, (sum, count))| {
            (
                dimension,
                DimensionScore {
                    score: sum / count as f64,
                    checks: count,
                },
            )
        })
        .collect()
}

/// `1 - (max - min)` over the dimension scores; 1.0 with fewer than two.
pub fn consensus_score(dimensions: &BTreeMap<Dimension, DimensionScore>) -> f64 {
    if dimensions.len() < 2 {
        return 1.0;
    }

    let (min, max) = dimensions.values().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), d| (min.min(d.score), max.max(d.score)),
    );

    1.0 - (max - min)
}
