//! Record module - the structured result of field extraction

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Structured fields pulled from one FNOL document
///
/// Every field is independently optional. The only derived field is
/// `asset_id`, which is present iff a VIN or a plate number was found.
/// Absent fields are omitted entirely from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Policy number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,

    /// Named insured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policyholder_name: Option<String>,

    /// Effective dates text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_dates: Option<String>,

    /// Date of loss
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_date: Option<String>,

    /// Time of loss
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_time: Option<String>,

    /// Loss location (street)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_location: Option<String>,

    /// Accident description block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_description: Option<String>,

    /// Claimant name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_name: Option<String>,

    /// Third parties in discovery order: other vehicle owner, then witnesses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_parties: Option<Vec<String>>,

    /// Claimant contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_contact: Option<String>,

    /// Vehicle body type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,

    /// Composite VIN / plate identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,

    /// Estimated damage amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_damage: Option<f64>,

    /// Claim type free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_type: Option<String>,

    /// Attachment names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,

    /// Police-contacted flag text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub police_report: Option<String>,

    /// Injury free-text block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injuries: Option<String>,
}

/// Borrowed view of a single present field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A text field
    Text(&'a str),
    /// A list field
    List(&'a [String]),
    /// A monetary amount
    Amount(f64),
}

impl FieldValue<'_> {
    /// Whether the value carries no usable content (blank text or empty list)
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Amount(_) => false,
        }
    }
}

impl ExtractedRecord {
    /// Look up a field by its canonical name
    pub fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        fn text(v: &Option<String>) -> Option<FieldValue<'_>> {
            v.as_deref().map(FieldValue::Text)
        }

        fn list(v: &Option<Vec<String>>) -> Option<FieldValue<'_>> {
            v.as_deref().map(FieldValue::List)
        }

        match field {
            Field::PolicyNumber => text(&self.policy_number),
            Field::PolicyholderName => text(&self.policyholder_name),
            Field::EffectiveDates => text(&self.effective_dates),
            Field::IncidentDate => text(&self.incident_date),
            Field::IncidentTime => text(&self.incident_time),
            Field::IncidentLocation => text(&self.incident_location),
            Field::IncidentDescription => text(&self.incident_description),
            Field::ClaimantName => text(&self.claimant_name),
            Field::ThirdParties => list(&self.third_parties),
            Field::ClaimantContact => text(&self.claimant_contact),
            Field::AssetType => text(&self.asset_type),
            Field::AssetId => text(&self.asset_id),
            Field::EstimatedDamage => self.estimated_damage.map(FieldValue::Amount),
            Field::ClaimType => text(&self.claim_type),
            Field::Attachments => list(&self.attachments),
            Field::PoliceReport => text(&self.police_report),
            Field::Injuries => text(&self.injuries),
        }
    }

    /// Fields that carry a value, in declaration order
    pub fn present_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.value(*f).is_some())
            .collect()
    }

    /// True when no field was extracted at all
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}
