//! FNOL Domain Layer
//!
//! This crate contains the core data model shared by every stage of the
//! First-Notice-of-Loss pipeline. It holds no behavior beyond simple value
//! accessors: extraction, validation, and routing live in their own crates.
//!
//! ## Key Concepts
//!
//! - **ExtractedRecord**: Flat record of independently optional fields
//! - **Field**: Canonical field names and their human-readable labels
//! - **ClaimRoute**: The closed set of routing destinations
//! - **RouteDecision**: A route plus the reasoning that selected it
//! - **ProcessingResult**: The decision bundle handed back to callers
//!
//! ## Pipeline
//!
//! ```text
//! text → Extractor → ExtractedRecord → Gatekeeper → missing fields → Router → ProcessingResult
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decision;
pub mod field;
pub mod record;
pub mod route;

// Re-exports for convenience
pub use decision::{ProcessingResult, RouteDecision};
pub use field::{title_case, Field};
pub use record::{ExtractedRecord, FieldValue};
pub use route::ClaimRoute;
