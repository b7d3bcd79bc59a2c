//! FNOL Extractor
//!
//! Converts semi-structured First-Notice-of-Loss text into an
//! [`ExtractedRecord`](fnol_domain::ExtractedRecord) using anchored patterns.
//!
//! # Architecture
//!
//! ```text
//! Text → pattern table → raw captures → normalization → ExtractedRecord
//! ```
//!
//! # Key Features
//!
//! - **Declarative pattern table**: one entry per labeled field
//! - **Block capture**: multi-line fields stop at the next section keyword
//! - **Sentinel handling**: "not provided" markers become absent fields
//! - **Composite fields**: third parties, asset identifier, attachments
//!
//! # Example Usage
//!
//! ```
//! use fnol_extractor::FieldExtractor;
//!
//! let extractor = FieldExtractor::default();
//! let record = extractor.extract("POLICY NUMBER: PA-1001\nCLAIM TYPE: Collision\n");
//!
//! assert_eq!(record.policy_number.as_deref(), Some("PA-1001"));
//! assert_eq!(record.claim_type.as_deref(), Some("Collision"));
//! assert!(record.asset_id.is_none());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod patterns;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{parse_amount, FieldExtractor};
pub use patterns::Anchor;
