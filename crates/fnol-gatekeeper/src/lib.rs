//! FNOL Gatekeeper
//!
//! Checks extracted records for completeness before they are routed.
//!
//! The Gatekeeper provides:
//! - Mandatory-field presence checking (absent or blank values)
//! - Missing-field labels in checklist order
//! - A configurable checklist
//!
//! # Examples
//!
//! ```
//! use fnol_domain::ExtractedRecord;
//! use fnol_gatekeeper::{Gatekeeper, ValidationStatus};
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let result = gatekeeper.validate(&ExtractedRecord::default());
//!
//! assert_eq!(result.status, ValidationStatus::Incomplete);
//! assert_eq!(result.labels()[0], "Policy Number");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::{ValidationConfig, DEFAULT_MANDATORY_FIELDS};
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, ValidationResult, ValidationStatus};
