//! Route module - the closed set of claim routing destinations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a claim is sent after evaluation
///
/// Serialized as the display label (e.g. `"Fast-Track Processing"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClaimRoute {
    /// Low-value, complete, clean claims
    #[serde(rename = "Fast-Track Processing")]
    FastTrack,

    /// Incomplete or high-value claims
    #[serde(rename = "Manual Review Required")]
    ManualReview,

    /// Injury-related claims
    #[serde(rename = "Specialist Queue (Injury)")]
    SpecialistQueue,

    /// Claims carrying fraud indicators
    #[serde(rename = "Fraud Investigation")]
    FraudInvestigation,
}

impl ClaimRoute {
    /// Every route, in evaluation-priority order of the rules that produce them
    pub const ALL: [ClaimRoute; 4] = [
        ClaimRoute::FraudInvestigation,
        ClaimRoute::ManualReview,
        ClaimRoute::SpecialistQueue,
        ClaimRoute::FastTrack,
    ];

    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimRoute::FastTrack => "Fast-Track Processing",
            ClaimRoute::ManualReview => "Manual Review Required",
            ClaimRoute::SpecialistQueue => "Specialist Queue (Injury)",
            ClaimRoute::FraudInvestigation => "Fraud Investigation",
        }
    }

    /// Parse a route from its display label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        ClaimRoute::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for ClaimRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClaimRoute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid route: {}", s))
    }
}
