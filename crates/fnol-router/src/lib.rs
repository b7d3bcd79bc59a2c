//! FNOL Router
//!
//! Fraud keyword scanning and the priority-ordered route decision chain.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. any fraud keyword in the raw text routes to Fraud Investigation
//! 2. any missing mandatory field routes to Manual Review
//! 3. injury wording in the claim type, or an affirmative injury block,
//!    routes to the Specialist Queue
//! 4. damage strictly below the threshold routes to Fast-Track, otherwise
//!    Manual Review
//! 5. no damage amount at all falls back to Manual Review
//!
//! # Example
//!
//! ```
//! use fnol_domain::{ClaimRoute, ExtractedRecord};
//! use fnol_router::RouteEngine;
//!
//! let engine = RouteEngine::default();
//! let record = ExtractedRecord {
//!     estimated_damage: Some(4_200.0),
//!     ..Default::default()
//! };
//!
//! let decision = engine.decide(&record, &[], "Minor bumper damage.");
//! assert_eq!(decision.route, ClaimRoute::FastTrack);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod fraud;

pub use config::{ConfigError, RouterConfig, DEFAULT_FAST_TRACK_THRESHOLD, DEFAULT_FRAUD_KEYWORDS};
pub use engine::{format_currency, RouteEngine};
pub use fraud::{FraudMatches, FraudScanner};

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
