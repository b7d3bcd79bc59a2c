//! Field module - canonical names for every extractable FNOL field

use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical field of an [`ExtractedRecord`](crate::ExtractedRecord)
///
/// The snake_case name is the key used in serialized output; the display
/// label is what reviewers see in missing-field lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Policy number
    PolicyNumber,
    /// Named insured on the policy
    PolicyholderName,
    /// Policy effective dates, as written
    EffectiveDates,
    /// Date of loss
    IncidentDate,
    /// Time of loss
    IncidentTime,
    /// Street where the loss occurred
    IncidentLocation,
    /// Free-text accident description
    IncidentDescription,
    /// Person making the claim
    ClaimantName,
    /// Other parties (other vehicle owner, witnesses)
    ThirdParties,
    /// Claimant phone or contact string
    ClaimantContact,
    /// Vehicle body type
    AssetType,
    /// Composite VIN / plate identifier
    AssetId,
    /// Estimated damage amount
    EstimatedDamage,
    /// Claim type free text
    ClaimType,
    /// Attachment names
    Attachments,
    /// Whether police were contacted
    PoliceReport,
    /// Injury free-text block
    Injuries,
}

impl Field {
    /// Every field, in record declaration order
    pub const ALL: [Field; 17] = [
        Field::PolicyNumber,
        Field::PolicyholderName,
        Field::EffectiveDates,
        Field::IncidentDate,
        Field::IncidentTime,
        Field::IncidentLocation,
        Field::IncidentDescription,
        Field::ClaimantName,
        Field::ThirdParties,
        Field::ClaimantContact,
        Field::AssetType,
        Field::AssetId,
        Field::EstimatedDamage,
        Field::ClaimType,
        Field::Attachments,
        Field::PoliceReport,
        Field::Injuries,
    ];

    /// Get the canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PolicyNumber => "policy_number",
            Field::PolicyholderName => "policyholder_name",
            Field::EffectiveDates => "effective_dates",
            Field::IncidentDate => "incident_date",
            Field::IncidentTime => "incident_time",
            Field::IncidentLocation => "incident_location",
            Field::IncidentDescription => "incident_description",
            Field::ClaimantName => "claimant_name",
            Field::ThirdParties => "third_parties",
            Field::ClaimantContact => "claimant_contact",
            Field::AssetType => "asset_type",
            Field::AssetId => "asset_id",
            Field::EstimatedDamage => "estimated_damage",
            Field::ClaimType => "claim_type",
            Field::Attachments => "attachments",
            Field::PoliceReport => "police_report",
            Field::Injuries => "injuries",
        }
    }

    /// Human-readable label derived from the canonical name
    ///
    /// # Examples
    ///
    /// ```
    /// use fnol_domain::Field;
    ///
    /// assert_eq!(Field::PolicyNumber.label(), "Policy Number");
    /// ```
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// Parse a field from its canonical name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Field::ALL.into_iter().find(|f| f.as_str() == lowered)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Convert a snake_case name into title case ("claim_type" → "Claim Type")
pub fn title_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_title_case_words(name in "[a-zA-Z_ ]{0,40}") {
            let label = title_case(&name);
            prop_assert!(!label.contains('_'));
            prop_assert!(!label.contains("  "));
            for word in label.split(' ').filter(|w| !w.is_empty()) {
                prop_assert!(word.chars().next().is_some_and(|c| c.is_uppercase()));
                prop_assert!(word.chars().skip(1).all(|c| c.is_lowercase()));
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::PolicyNumber.label(), "Policy Number");
        assert_eq!(Field::IncidentDescription.label(), "Incident Description");
        assert_eq!(Field::EstimatedDamage.label(), "Estimated Damage");
        assert_eq!(Field::Injuries.label(), "Injuries");
    }

    #[test]
    fn test_title_case_normalizes_case() {
        assert_eq!(title_case("CLAIM_type"), "Claim Type");
        assert_eq!(title_case("already spaced"), "Already Spaced");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_parse_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
        assert_eq!(Field::parse("  Claim_Type "), Some(Field::ClaimType));
        assert!(Field::parse("vin").is_none());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Field::ClaimantName).unwrap();
        assert_eq!(json, "\"claimant_name\"");
        let parsed: Field = serde_json::from_str("\"asset_id\"").unwrap();
        assert_eq!(parsed, Field::AssetId);
    }
}
