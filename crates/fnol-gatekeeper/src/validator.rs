//! Mandatory field validation logic

use crate::{GatekeeperError, ValidationConfig};
use fnol_domain::{ExtractedRecord, Field};
use tracing::debug;

/// Result of validating one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether every mandatory field is present
    pub status: ValidationStatus,

    /// Missing mandatory fields, in checklist order
    pub missing: Vec<Field>,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// All mandatory fields present
    Complete,

    /// At least one mandatory field absent or blank
    Incomplete,
}

impl ValidationResult {
    /// Display labels of the missing fields ("Policy Number", ...)
    pub fn labels(&self) -> Vec<String> {
        self.missing.iter().map(Field::label).collect()
    }

    /// True when nothing is missing
    pub fn is_complete(&self) -> bool {
        self.status == ValidationStatus::Complete
    }
}

/// The Gatekeeper checks records against the mandatory-field checklist
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Result<Self, GatekeeperError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a Gatekeeper with the default checklist
    pub fn default_config() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a record against the checklist
    ///
    /// A field is missing when it is absent or, for text and list fields,
    /// present but blank. No format or range checks happen here.
    pub fn validate(&self, record: &ExtractedRecord) -> ValidationResult {
        let missing: Vec<Field> = self
            .config
            .mandatory_fields
            .iter()
            .copied()
            .filter(|field| match record.value(*field) {
                None => true,
                Some(value) => value.is_blank(),
            })
            .collect();

        debug!(missing = missing.len(), "validated mandatory fields");

        let status = if missing.is_empty() {
            ValidationStatus::Complete
        } else {
            ValidationStatus::Incomplete
        };

        ValidationResult { status, missing }
    }

    /// Convenience wrapper returning only the missing-field labels
    pub fn missing_fields(&self, record: &ExtractedRecord) -> Vec<String> {
        self.validate(record).labels()
    }
}
