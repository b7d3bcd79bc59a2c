//! Decision module - routing outcome and the per-document result bundle

use crate::record::ExtractedRecord;
use crate::route::ClaimRoute;
use serde::{Deserialize, Serialize};

/// A route together with the explanation of the rule that selected it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision {
    /// Selected destination
    pub route: ClaimRoute,

    /// Explanation from the single matching rule
    pub reasoning: String,
}

impl RouteDecision {
    /// Create a new decision
    pub fn new(route: ClaimRoute, reasoning: impl Into<String>) -> Self {
        Self {
            route,
            reasoning: reasoning.into(),
        }
    }
}

/// The decision bundle produced for one document
///
/// Serializes with the member names `extractedFields`, `missingFields`,
/// `recommendedRoute` and `reasoning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Fields that were found; absent fields are omitted
    pub extracted_fields: ExtractedRecord,

    /// Display labels of missing mandatory fields, in checklist order
    pub missing_fields: Vec<String>,

    /// Selected route
    pub recommended_route: ClaimRoute,

    /// Reasoning behind the route
    pub reasoning: String,
}

impl ProcessingResult {
    /// Assemble the bundle from the outputs of each pipeline stage
    pub fn new(
        extracted_fields: ExtractedRecord,
        missing_fields: Vec<String>,
        decision: RouteDecision,
    ) -> Self {
        Self {
            extracted_fields,
            missing_fields,
            recommended_route: decision.route,
            reasoning: decision.reasoning,
        }
    }

    /// The routing decision carried by this bundle
    pub fn decision(&self) -> RouteDecision {
        RouteDecision::new(self.recommended_route, self.reasoning.clone())
    }
}
