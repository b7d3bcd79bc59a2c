//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Marker text meaning "no value"; matched case-insensitively as a substring
    pub sentinel: String,

    /// Stand-in for the missing half of the composite asset identifier
    pub asset_id_placeholder: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.sentinel.trim().is_empty() {
            return Err(ExtractorError::Config("sentinel must not be empty".to_string()));
        }
        if self.asset_id_placeholder.trim().is_empty() {
            return Err(ExtractorError::Config(
                "asset_id_placeholder must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sentinel: "NOT PROVIDED".to_string(),
            asset_id_placeholder: "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sentinel, "NOT PROVIDED");
    }

    #[test]
    fn test_blank_sentinel_rejected() {
        let config = ExtractorConfig {
            sentinel: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractorConfig::from_toml(r#"sentinel = "UNKNOWN""#).unwrap();
        assert_eq!(config.sentinel, "UNKNOWN");
        assert_eq!(config.asset_id_placeholder, "N/A");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
