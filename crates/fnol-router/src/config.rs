//! Configuration for the routing rules.
//!
//! Loads the fast-track threshold, fraud keyword set, and injury signal
//! keywords from TOML. Every key is optional; defaults reproduce the
//! standard rule set.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range or empty
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid {
        /// Offending key
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Routing rule configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Damage strictly below this amount is eligible for fast-track
    pub fast_track_threshold: f64,

    /// Keywords whose presence anywhere in the document flags fraud
    pub fraud_keywords: Vec<String>,

    /// Claim-type wording that marks an injury claim
    pub injury_claim_keyword: String,

    /// Wording in the injury block that marks reported injuries
    pub injury_affirmative: String,
}

/// Default fast-track threshold: 25,000
pub const DEFAULT_FAST_TRACK_THRESHOLD: f64 = 25_000.0;

/// Default fraud keyword set, in reporting order
pub const DEFAULT_FRAUD_KEYWORDS: [&str; 5] =
    ["fraud", "staged", "inconsistent", "suspicious", "contradictions"];

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: DEFAULT_FAST_TRACK_THRESHOLD,
            fraud_keywords: DEFAULT_FRAUD_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            injury_claim_keyword: "injury".to_string(),
            injury_affirmative: "yes".to_string(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fast_track_threshold.is_finite() || self.fast_track_threshold <= 0.0 {
            return Err(invalid("fast_track_threshold", "must be a positive number"));
        }
        if self.fraud_keywords.is_empty() {
            return Err(invalid("fraud_keywords", "must list at least one keyword"));
        }
        if self.fraud_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(invalid("fraud_keywords", "must not contain blank keywords"));
        }
        if self.injury_claim_keyword.trim().is_empty() {
            return Err(invalid("injury_claim_keyword", "must not be empty"));
        }
        if self.injury_affirmative.trim().is_empty() {
            return Err(invalid("injury_affirmative", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
