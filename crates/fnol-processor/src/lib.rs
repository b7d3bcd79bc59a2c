//! FNOL Processor
//!
//! Wires extraction, validation and routing into a single pipeline and
//! runs it over documents on disk.
//!
//! ```
//! use fnol_domain::ClaimRoute;
//! use fnol_processor::FnolProcessor;
//!
//! let processor = FnolProcessor::default();
//! let result = processor.process("CLAIM TYPE: Collision\nNotes: suspicious timing\n");
//!
//! assert_eq!(result.recommended_route, ClaimRoute::FraudInvestigation);
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod error;
pub mod processor;

pub use batch::{
    load_summary, route_distribution, BatchRunner, BatchSummary, DocumentFailure, DocumentResult,
    SUMMARY_FILE,
};
pub use config::ProcessorConfig;
pub use error::{ProcessorError, Result};
pub use processor::FnolProcessor;
