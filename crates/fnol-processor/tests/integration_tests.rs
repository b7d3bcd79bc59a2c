//! Integration tests for the processing pipeline and batch runner

use fnol_domain::ClaimRoute;
use fnol_processor::{load_summary, BatchRunner, FnolProcessor, ProcessorError, SUMMARY_FILE};
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

#[test]
fn test_fast_track_document() {
    let result = FnolProcessor::default().process(&fixture("FNOL_001.txt"));

    assert_eq!(result.recommended_route, ClaimRoute::FastTrack);
    assert!(result.missing_fields.is_empty());
    assert_eq!(
        result.reasoning,
        "Estimated damage ($3,500.00) is below fast-track threshold of $25,000.00. \
         All mandatory fields present. No fraud indicators or injuries."
    );

    let fields = &result.extracted_fields;
    assert_eq!(fields.injuries.as_deref(), Some("None reported"));
    assert_eq!(
        fields.third_parties,
        Some(vec!["Jane Doe".to_string(), "Mary Johnson".to_string()])
    );
}

#[test]
fn test_high_damage_document() {
    let result = FnolProcessor::default().process(&fixture("FNOL_002.txt"));

    assert_eq!(result.recommended_route, ClaimRoute::ManualReview);
    assert!(result.reasoning.starts_with("Estimated damage ($48,750.00) exceeds"));
    assert_eq!(
        result.extracted_fields.asset_id.as_deref(),
        Some("VIN: 5YJSA1E26HF000337, Plate: N/A")
    );
    assert!(result.extracted_fields.third_parties.is_none());
}

#[test]
fn test_fraud_document() {
    let result = FnolProcessor::default().process(&fixture("FNOL_003.txt"));

    assert_eq!(result.recommended_route, ClaimRoute::FraudInvestigation);
    assert_eq!(result.reasoning, "Fraud indicators detected: suspicious");
}

#[test]
fn test_injury_document() {
    let result = FnolProcessor::default().process(&fixture("FNOL_004.txt"));

    assert_eq!(result.recommended_route, ClaimRoute::SpecialistQueue);
    assert_eq!(result.reasoning, "Claim type is injury-related.");
    assert!(result.missing_fields.is_empty());
}

#[test]
fn test_incomplete_document() {
    let result = FnolProcessor::default().process(&fixture("FNOL_005.txt"));

    assert_eq!(result.recommended_route, ClaimRoute::ManualReview);
    assert_eq!(result.missing_fields, vec!["Policy Number", "Estimated Damage"]);
    assert_eq!(
        result.reasoning,
        "Missing mandatory fields: Policy Number, Estimated Damage"
    );
    assert!(result.extracted_fields.claimant_contact.is_none());
}

#[test]
fn test_bundle_json_shape() {
    let result = FnolProcessor::default().process(&fixture("FNOL_005.txt"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["recommendedRoute"], "Manual Review Required");
    assert_eq!(json["missingFields"][0], "Policy Number");
    let fields = json["extractedFields"].as_object().unwrap();
    assert!(!fields.contains_key("policy_number"));
    assert!(!fields.contains_key("estimated_damage"));
    assert_eq!(fields["claim_type"], "Comprehensive");
}

#[tokio::test]
async fn test_batch_run_writes_results() {
    let output = TempDir::new().unwrap();
    let runner = BatchRunner::default();

    let summary = runner.run(fixtures_dir(), output.path()).await.unwrap();

    assert_eq!(summary.processed(), 5);
    assert!(summary.failures.is_empty());
    let names: Vec<&str> = summary.entries.iter().map(|e| e.document.as_str()).collect();
    assert_eq!(
        names,
        vec!["FNOL_001.txt", "FNOL_002.txt", "FNOL_003.txt", "FNOL_004.txt", "FNOL_005.txt"]
    );

    let distribution: Vec<(String, usize)> = summary.route_distribution().into_iter().collect();
    assert_eq!(
        distribution,
        vec![
            ("Fast-Track Processing".to_string(), 1),
            ("Fraud Investigation".to_string(), 1),
            ("Manual Review Required".to_string(), 2),
            ("Specialist Queue (Injury)".to_string(), 1),
        ]
    );

    for name in ["FNOL_001", "FNOL_005"] {
        let path = output.path().join(format!("{}_RESULT.json", name));
        assert!(path.exists(), "missing {}", path.display());
    }

    let loaded = load_summary(output.path()).await.unwrap();
    assert_eq!(loaded, summary.entries);
}

#[tokio::test]
async fn test_batch_skips_unrelated_files_and_creates_output_dir() {
    let input = TempDir::new().unwrap();
    std::fs::write(input.path().join("FNOL_010.txt"), fixture("FNOL_001.txt")).unwrap();
    std::fs::write(input.path().join("notes.txt"), "staged").unwrap();
    std::fs::write(input.path().join("FNOL_011.json"), "{}").unwrap();

    let output = TempDir::new().unwrap();
    let nested = output.path().join("results/today");

    let summary = BatchRunner::default().run(input.path(), &nested).await.unwrap();

    assert_eq!(summary.processed(), 1);
    assert_eq!(summary.entries[0].document, "FNOL_010.txt");
    assert!(nested.join("FNOL_010_RESULT.json").exists());
    assert!(nested.join(SUMMARY_FILE).exists());
}

#[tokio::test]
async fn test_batch_records_unreadable_document() {
    let input = TempDir::new().unwrap();
    std::fs::write(input.path().join("FNOL_001.txt"), fixture("FNOL_001.txt")).unwrap();
    // Invalid UTF-8 cannot be read as text
    std::fs::write(input.path().join("FNOL_002.txt"), [0xff, 0xfe, 0xfd]).unwrap();

    let output = TempDir::new().unwrap();
    let summary = BatchRunner::default().run(input.path(), output.path()).await.unwrap();

    assert_eq!(summary.processed(), 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].document, "FNOL_002.txt");
    assert!(!output.path().join("FNOL_002_RESULT.json").exists());
}

#[tokio::test]
async fn test_batch_missing_input_dir() {
    let output = TempDir::new().unwrap();
    let err = BatchRunner::default()
        .run("/nonexistent/fnol_documents", output.path())
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessorError::Io { .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_processing_is_idempotent(text in "[ -~\n]{0,400}") {
        let processor = FnolProcessor::default();
        prop_assert_eq!(processor.process(&text), processor.process(&text));
    }

    #[test]
    fn prop_fraud_keyword_in_any_document(
        doc in 1usize..=5,
        keyword in prop::sample::select(vec!["fraud", "staged", "inconsistent", "suspicious", "contradictions"]),
    ) {
        let text = format!("{}\nNOTES: {}\n", fixture(&format!("FNOL_00{}.txt", doc)), keyword.to_uppercase());
        let result = FnolProcessor::default().process(&text);

        prop_assert_eq!(result.recommended_route, ClaimRoute::FraudInvestigation);
    }

    #[test]
    fn prop_damage_threshold(whole in 0u32..60_000u32, cents in 0u32..100u32) {
        let amount = format!("{}.{:02}", whole, cents);
        let text = fixture("FNOL_001.txt").replace("$3,500.00", &format!("${}", amount));
        let result = FnolProcessor::default().process(&text);

        let damage: f64 = amount.parse().unwrap();
        let expected = if damage < 25_000.0 {
            ClaimRoute::FastTrack
        } else {
            ClaimRoute::ManualReview
        };
        prop_assert_eq!(result.recommended_route, expected);
    }
}
