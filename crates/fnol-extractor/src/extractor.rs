//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::patterns::{Anchor, FieldPattern, WITNESS_PATTERN};
use fnol_domain::{ExtractedRecord, Field};
use tracing::debug;

/// Simple text fields: one anchor each, value stored as captured
const TEXT_FIELDS: &[(Field, Anchor)] = &[
    (Field::PolicyNumber, Anchor::PolicyNumber),
    (Field::PolicyholderName, Anchor::InsuredName),
    (Field::EffectiveDates, Anchor::EffectiveDates),
    (Field::IncidentDate, Anchor::DateOfLoss),
    (Field::IncidentTime, Anchor::TimeOfLoss),
    (Field::IncidentLocation, Anchor::LossLocation),
    (Field::IncidentDescription, Anchor::AccidentDescription),
    (Field::ClaimantName, Anchor::ClaimantName),
    (Field::ClaimantContact, Anchor::ContactPhone),
    (Field::AssetType, Anchor::BodyType),
    (Field::ClaimType, Anchor::ClaimType),
    (Field::PoliceReport, Anchor::PoliceContacted),
    (Field::Injuries, Anchor::Injury),
];

/// The Extractor turns raw FNOL text into an [`ExtractedRecord`]
///
/// Extraction is a pure function of the text: no state is kept between
/// documents and a document that matches nothing yields an empty record.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    config: ExtractorConfig,
    sentinel_upper: String,
}

impl FieldExtractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        let sentinel_upper = config.sentinel.to_uppercase();
        Ok(Self {
            config,
            sentinel_upper,
        })
    }

    /// Create an Extractor with default configuration
    pub fn default_config() -> Self {
        let config = ExtractorConfig::default();
        let sentinel_upper = config.sentinel.to_uppercase();
        Self {
            config,
            sentinel_upper,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract every known field from a document
    pub fn extract(&self, text: &str) -> ExtractedRecord {
        let mut record = ExtractedRecord::default();

        for (field, anchor) in TEXT_FIELDS {
            let value = self.extract_field(text, *anchor);
            debug!(field = field.as_str(), found = value.is_some(), "extracted field");
            assign_text(&mut record, *field, value);
        }

        record.third_parties = self.extract_third_parties(text);
        record.asset_id = self.extract_asset_id(text);
        record.estimated_damage = self.extract_damage(text);
        record.attachments = self.extract_attachments(text);

        debug!(
            present = record.present_fields().len(),
            "extraction complete"
        );

        record
    }

    /// Apply one anchor pattern and normalize the result
    ///
    /// Returns the first capture, trimmed, or `None` when the pattern does
    /// not match, the capture is blank or contains the sentinel, or the
    /// capture is a cut-off prefix of a sentinel that opens its line
    /// (`NOT` out of `NOT PROVIDED`).
    pub fn extract_field(&self, text: &str, anchor: Anchor) -> Option<String> {
        let capture = FieldPattern::get(anchor)?.capture(text)?;
        let value = capture.value.trim();

        if value.is_empty()
            || self.is_sentinel(value)
            || self.opens_with_sentinel(capture.line_rest)
        {
            return None;
        }

        Some(value.to_string())
    }

    /// Other vehicle owner first, then every witness in document order
    fn extract_third_parties(&self, text: &str) -> Option<Vec<String>> {
        let mut parties = Vec::new();

        if let Some(owner) = self.extract_field(text, Anchor::OtherVehicleOwner) {
            parties.push(owner);
        }

        parties.extend(
            WITNESS_PATTERN
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|name| !name.is_empty() && !self.is_sentinel(name))
                .map(str::to_string),
        );

        if parties.is_empty() {
            None
        } else {
            Some(parties)
        }
    }

    /// Composite of VIN and plate, present iff at least one of them is
    fn extract_asset_id(&self, text: &str) -> Option<String> {
        let vin = self.extract_field(text, Anchor::Vin);
        let plate = self.extract_field(text, Anchor::PlateNumber);

        if vin.is_none() && plate.is_none() {
            return None;
        }

        let placeholder = self.config.asset_id_placeholder.as_str();
        Some(format!(
            "VIN: {}, Plate: {}",
            vin.as_deref().unwrap_or(placeholder),
            plate.as_deref().unwrap_or(placeholder)
        ))
    }

    /// Damage amount with thousands separators stripped
    ///
    /// A capture that does not parse as a number is treated as missing.
    fn extract_damage(&self, text: &str) -> Option<f64> {
        let raw = self.extract_field(text, Anchor::DamageAmount)?;
        match parse_amount(&raw) {
            Some(amount) => Some(amount),
            None => {
                debug!(raw = raw.as_str(), "unparsable damage amount");
                None
            }
        }
    }

    fn extract_attachments(&self, text: &str) -> Option<Vec<String>> {
        let raw = self.extract_field(text, Anchor::Attachments)?;
        Some(raw.split(',').map(|a| a.trim().to_string()).collect())
    }

    fn is_sentinel(&self, value: &str) -> bool {
        value.to_uppercase().contains(&self.sentinel_upper)
    }

    fn opens_with_sentinel(&self, line_rest: &str) -> bool {
        line_rest
            .trim_start()
            .to_uppercase()
            .starts_with(&self.sentinel_upper)
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Parse a captured amount such as `12,500.00`
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

fn assign_text(record: &mut ExtractedRecord, field: Field, value: Option<String>) {
    let slot = match field {
        Field::PolicyNumber => &mut record.policy_number,
        Field::PolicyholderName => &mut record.policyholder_name,
        Field::EffectiveDates => &mut record.effective_dates,
        Field::IncidentDate => &mut record.incident_date,
        Field::IncidentTime => &mut record.incident_time,
        Field::IncidentLocation => &mut record.incident_location,
        Field::IncidentDescription => &mut record.incident_description,
        Field::ClaimantName => &mut record.claimant_name,
        Field::ClaimantContact => &mut record.claimant_contact,
        Field::AssetType => &mut record.asset_type,
        Field::AssetId => &mut record.asset_id,
        Field::ClaimType => &mut record.claim_type,
        Field::PoliceReport => &mut record.police_report,
        Field::Injuries => &mut record.injuries,
        Field::ThirdParties | Field::EstimatedDamage | Field::Attachments => return,
    };
    *slot = value;
}
