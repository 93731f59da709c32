//! Judgment configuration from YAML/JSON.
//!
//! Every field has a default, so an empty document is a valid config that
//! runs all eight checks with equal dimension weights.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::{CheckName, Dimension};

/// Errors that can occur when loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Configuration for claim evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JudgmentConfig {
    /// Checks to run, in order
    #[serde(default = "default_checks")]
    pub checks: Vec<CheckName>,

    /// Weight of each dimension in the overall average
    #[serde(default)]
    pub weights: DimensionWeights,

    /// Average-score cut-offs for the verdict
    #[serde(default)]
    pub thresholds: VerdictThresholds,

    /// Agreement cut-offs for the consensus level
    #[serde(default)]
    pub consensus: ConsensusThresholds,
}

fn default_checks() -> Vec<CheckName> {
    CheckName::ALL.to_vec()
}

impl Default for JudgmentConfig {
    fn default() -> Self {
        Self {
            checks: default_checks(),
            weights: DimensionWeights::default(),
            thresholds: VerdictThresholds::default(),
            consensus: ConsensusThresholds::default(),
        }
    }
}

/// Per-dimension weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DimensionWeights {
    #[serde(default = "default_weight")]
    pub ethical: f64,

    #[serde(default = "default_weight")]
    pub aesthetic: f64,

    #[serde(default = "default_weight")]
    pub practical: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            ethical: 1.0,
            aesthetic: 1.0,
            practical: 1.0,
        }
    }
}

impl DimensionWeights {
    /// Weight for a given dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Ethical => self.ethical,
            Dimension::Aesthetic => self.aesthetic,
            Dimension::Practical => self.practical,
        }
    }
}

/// Average-score cut-offs: `supported` if the average reaches `supported`,
/// `qualified` if it reaches `qualified`, otherwise `unsupported`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VerdictThresholds {
    #[serde(default = "default_supported")]
    pub supported: f64,

    #[serde(default = "default_qualified")]
    pub qualified: f64,
}

fn default_supported() -> f64 {
    0.7
}

fn default_qualified() -> f64 {
    0.5
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            supported: 0.7,
            qualified: 0.5,
        }
    }
}

/// Consensus cut-offs, applied to `1 - (max - min)` of the dimension scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConsensusThresholds {
    #[serde(default = "default_high")]
    pub high: f64,

    #[serde(default = "default_moderate")]
    pub moderate: f64,
}

fn default_high() -> f64 {
    0.8
}

fn default_moderate() -> f64 {
    0.6
}

impl Default for ConsensusThresholds {
    fn default() -> Self {
        Self {
            high: 0.8,
            moderate: 0.6,
        }
    }
}

impl JudgmentConfig {
    /// Parse a config from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: JudgmentConfig = if yaml.trim().is_empty() {
            JudgmentConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: JudgmentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a config file, choosing JSON for `.json` and YAML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::from_json_file(path)
        } else {
            Self::from_yaml_file(path)
        }
    }

    /// Replace the check selection, keeping weights and thresholds.
    pub fn with_checks(mut self, checks: Vec<CheckName>) -> Self {
        self.checks = checks;
        self
    }

    /// Validate the config structure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_unique_checks()?;

        for dimension in Dimension::ALL {
            let weight = self.weights.get(dimension);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "Weight for {} must be a non-negative number, got {}",
                    dimension, weight
                )));
            }
        }

        check_unit("thresholds.supported", self.thresholds.supported)?;
        check_unit("thresholds.qualified", self.thresholds.qualified)?;
        if self.thresholds.qualified > self.thresholds.supported {
            return Err(ConfigError::ValidationError(
                "thresholds.qualified must not exceed thresholds.supported".to_string(),
            ));
        }

        check_unit("consensus.high", self.consensus.high)?;
        check_unit("consensus.moderate", self.consensus.moderate)?;
        if self.consensus.moderate > self.consensus.high {
            return Err(ConfigError::ValidationError(
                "consensus.moderate must not exceed consensus.high".to_string(),
            ));
        }

        Ok(())
    }

    /// Ensure no check is listed twice.
    fn validate_unique_checks(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for check in &self.checks {
            if !seen.insert(check) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate check: {}",
                    check
                )));
            }
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be within [0, 1], got {}",
            field, value
        )))
    }
}
