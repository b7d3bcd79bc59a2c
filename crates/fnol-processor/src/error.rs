//! Error types for the processor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the pipeline over files
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Invalid configuration for one of the pipeline stages
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration TOML could not be parsed
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ProcessorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<fnol_extractor::ExtractorError> for ProcessorError {
    fn from(err: fnol_extractor::ExtractorError) -> Self {
        match err {
            fnol_extractor::ExtractorError::Config(msg) => Self::Config(msg),
        }
    }
}

impl From<fnol_gatekeeper::GatekeeperError> for ProcessorError {
    fn from(err: fnol_gatekeeper::GatekeeperError) -> Self {
        match err {
            fnol_gatekeeper::GatekeeperError::Config(msg) => Self::Config(msg),
        }
    }
}

impl From<fnol_router::RouterError> for ProcessorError {
    fn from(err: fnol_router::RouterError) -> Self {
        match err {
            fnol_router::RouterError::Config(inner) => inner.into(),
        }
    }
}

impl From<fnol_router::ConfigError> for ProcessorError {
    fn from(err: fnol_router::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for processor operations
pub type Result<T> = std::result::Result<T, ProcessorError>;
