//! Gatekeeper configuration

use crate::GatekeeperError;
use fnol_domain::Field;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fields every claim must carry, in reporting order
pub const DEFAULT_MANDATORY_FIELDS: [Field; 8] = [
    Field::PolicyNumber,
    Field::PolicyholderName,
    Field::IncidentDate,
    Field::IncidentLocation,
    Field::IncidentDescription,
    Field::ClaimantName,
    Field::ClaimType,
    Field::EstimatedDamage,
];

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Mandatory fields; missing ones are reported in this order
    pub mandatory_fields: Vec<Field>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mandatory_fields: DEFAULT_MANDATORY_FIELDS.to_vec(),
        }
    }
}

impl ValidationConfig {
    /// Validate the checklist itself
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.mandatory_fields.is_empty() {
            return Err(GatekeeperError::Config(
                "mandatory_fields must list at least one field".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.mandatory_fields {
            if !seen.insert(field) {
                return Err(GatekeeperError::Config(format!(
                    "mandatory field '{}' is listed more than once",
                    field
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GatekeeperError> {
        toml::from_str(toml_str)
            .map_err(|e| GatekeeperError::Config(format!("Failed to parse TOML: {}", e)))
    }
}
