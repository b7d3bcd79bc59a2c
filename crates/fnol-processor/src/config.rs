//! Combined pipeline configuration

use crate::error::{ProcessorError, Result};
use fnol_extractor::ExtractorConfig;
use fnol_gatekeeper::ValidationConfig;
use fnol_router::RouterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for every stage, one TOML table per stage
///
/// ```toml
/// [extractor]
/// sentinel = "NOT PROVIDED"
///
/// [validation]
/// mandatory_fields = ["policy_number", "claim_type"]
///
/// [router]
/// fast_track_threshold = 25000.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Field extraction settings
    pub extractor: ExtractorConfig,

    /// Mandatory-field checklist
    pub validation: ValidationConfig,

    /// Routing rules
    pub router: RouterConfig,
}

impl ProcessorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ProcessorError::io(path, e))?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: ProcessorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ProcessorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Validate every stage
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.validation.validate()?;
        self.router.validate()?;
        Ok(())
    }
}
