//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while setting up extraction
///
/// Extraction itself never fails: a pattern that does not match simply
/// leaves the field absent.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
