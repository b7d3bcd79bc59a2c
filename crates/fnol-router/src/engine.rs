//! Route decision engine

use crate::config::RouterConfig;
use crate::fraud::FraudScanner;
use crate::RouterError;
use fnol_domain::{ClaimRoute, ExtractedRecord, RouteDecision};
use tracing::info;

/// Applies the routing rule chain to one processed document
///
/// Exactly one rule fires per document and its sentence becomes the
/// reasoning.
#[derive(Debug, Clone)]
pub struct RouteEngine {
    config: RouterConfig,
    scanner: FraudScanner,
    injury_claim_keyword: String,
    injury_affirmative: String,
}

impl RouteEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: RouterConfig) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RouterConfig) -> Self {
        let scanner = FraudScanner::new(config.fraud_keywords.iter().cloned());
        let injury_claim_keyword = config.injury_claim_keyword.to_lowercase();
        let injury_affirmative = config.injury_affirmative.to_lowercase();
        Self {
            config,
            scanner,
            injury_claim_keyword,
            injury_affirmative,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Get the fraud scanner built from the configured keywords
    pub fn scanner(&self) -> &FraudScanner {
        &self.scanner
    }

    /// Select a route for a record
    ///
    /// `missing` holds the display labels reported by the mandatory-field
    /// check and `text` is the raw document the record came from.
    pub fn decide(&self, record: &ExtractedRecord, missing: &[String], text: &str) -> RouteDecision {
        let decision = self.evaluate(record, missing, text);
        info!(
            route = decision.route.as_str(),
            missing = missing.len(),
            "routing decision"
        );
        decision
    }

    fn evaluate(&self, record: &ExtractedRecord, missing: &[String], text: &str) -> RouteDecision {
        let fraud = self.scanner.scan(text);
        if !fraud.is_empty() {
            return RouteDecision::new(
                ClaimRoute::FraudInvestigation,
                format!("Fraud indicators detected: {}", fraud.joined()),
            );
        }

        if !missing.is_empty() {
            return RouteDecision::new(
                ClaimRoute::ManualReview,
                format!("Missing mandatory fields: {}", missing.join(", ")),
            );
        }

        if contains_lowered(record.claim_type.as_deref(), &self.injury_claim_keyword) {
            return RouteDecision::new(ClaimRoute::SpecialistQueue, "Claim type is injury-related.");
        }

        if contains_lowered(record.injuries.as_deref(), &self.injury_affirmative) {
            return RouteDecision::new(ClaimRoute::SpecialistQueue, "Injuries reported in claim.");
        }

        let threshold = self.config.fast_track_threshold;
        match record.estimated_damage {
            Some(damage) if damage < threshold => RouteDecision::new(
                ClaimRoute::FastTrack,
                format!(
                    "Estimated damage ({}) is below fast-track threshold of {}. \
                     All mandatory fields present. No fraud indicators or injuries.",
                    format_currency(damage),
                    format_currency(threshold)
                ),
            ),
            Some(damage) => RouteDecision::new(
                ClaimRoute::ManualReview,
                format!(
                    "Estimated damage ({}) exceeds fast-track threshold of {}. \
                     Requires manual review for complex claims.",
                    format_currency(damage),
                    format_currency(threshold)
                ),
            ),
            None => RouteDecision::new(
                ClaimRoute::ManualReview,
                "Unable to determine routing due to insufficient data.",
            ),
        }
    }
}

impl Default for RouteEngine {
    fn default() -> Self {
        Self::build(RouterConfig::default())
    }
}

fn contains_lowered(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Render an amount as `$12,345.67`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record(damage: f64) -> ExtractedRecord {
        ExtractedRecord {
            policy_number: Some("PA-2024-001".to_string()),
            claim_type: Some("Collision".to_string()),
            injuries: Some("None reported".to_string()),
            estimated_damage: Some(damage),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(25000.0), "$25,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1500.0), "-$1,500.00");
    }

    #[test]
    fn test_fast_track_reasoning() {
        let engine = RouteEngine::default();
        let decision = engine.decide(&complete_record(3500.0), &[], "clean");

        assert_eq!(decision.route, ClaimRoute::FastTrack);
        assert_eq!(
            decision.reasoning,
            "Estimated damage ($3,500.00) is below fast-track threshold of $25,000.00. \
             All mandatory fields present. No fraud indicators or injuries."
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let engine = RouteEngine::default();

        let at = engine.decide(&complete_record(25000.0), &[], "");
        assert_eq!(at.route, ClaimRoute::ManualReview);
        assert_eq!(
            at.reasoning,
            "Estimated damage ($25,000.00) exceeds fast-track threshold of $25,000.00. \
             Requires manual review for complex claims."
        );

        assert_eq!(
            engine.decide(&complete_record(24999.99), &[], "").route,
            ClaimRoute::FastTrack
        );
        assert_eq!(
            engine.decide(&complete_record(25000.01), &[], "").route,
            ClaimRoute::ManualReview
        );
    }

    #[test]
    fn test_fraud_wins_over_everything() {
        let engine = RouteEngine::default();
        let missing = vec!["Policy Number".to_string()];
        let mut record = complete_record(100.0);
        record.claim_type = Some("Bodily Injury".to_string());

        let decision = engine.decide(&record, &missing, "Witness found the story inconsistent.");

        assert_eq!(decision.route, ClaimRoute::FraudInvestigation);
        assert_eq!(decision.reasoning, "Fraud indicators detected: inconsistent");
    }

    #[test]
    fn test_missing_fields_reasoning() {
        let engine = RouteEngine::default();
        let missing = vec!["Policy Number".to_string(), "Claim Type".to_string()];
        let decision = engine.decide(&ExtractedRecord::default(), &missing, "");

        assert_eq!(decision.route, ClaimRoute::ManualReview);
        assert_eq!(decision.reasoning, "Missing mandatory fields: Policy Number, Claim Type");
    }

    #[test]
    fn test_claim_type_injury_takes_reasoning_priority() {
        let engine = RouteEngine::default();
        let mut record = complete_record(5000.0);
        record.claim_type = Some("INJURY".to_string());
        record.injuries = Some("Yes - whiplash".to_string());

        let decision = engine.decide(&record, &[], "");
        assert_eq!(decision.route, ClaimRoute::SpecialistQueue);
        assert_eq!(decision.reasoning, "Claim type is injury-related.");
    }

    #[test]
    fn test_injury_block_affirmative() {
        let engine = RouteEngine::default();
        let mut record = complete_record(5000.0);
        record.injuries = Some("Injuries: yes, driver taken to hospital".to_string());

        let decision = engine.decide(&record, &[], "");
        assert_eq!(decision.route, ClaimRoute::SpecialistQueue);
        assert_eq!(decision.reasoning, "Injuries reported in claim.");
    }

    #[test]
    fn test_missing_damage_falls_back() {
        let engine = RouteEngine::default();
        let mut record = complete_record(0.0);
        record.estimated_damage = None;

        let decision = engine.decide(&record, &[], "");
        assert_eq!(decision.route, ClaimRoute::ManualReview);
        assert_eq!(decision.reasoning, "Unable to determine routing due to insufficient data.");
    }

    #[test]
    fn test_custom_threshold() {
        let config = RouterConfig {
            fast_track_threshold: 1000.0,
            ..Default::default()
        };
        let engine = RouteEngine::new(config).unwrap();

        let decision = engine.decide(&complete_record(1500.0), &[], "");
        assert_eq!(decision.route, ClaimRoute::ManualReview);
        assert!(decision.reasoning.contains("$1,000.00"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RouterConfig {
            fraud_keywords: vec![],
            ..Default::default()
        };
        assert!(RouteEngine::new(config).is_err());
    }
}
