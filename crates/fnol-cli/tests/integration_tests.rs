//! End-to-end tests for the CLI building blocks

use fnol_cli::config::OutputFormat;
use fnol_cli::{Config, Formatter};
use fnol_processor::{load_summary, BatchRunner, FnolProcessor};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../fnol-processor/tests/fixtures")
}

#[tokio::test]
async fn test_batch_then_summary_report() {
    let output = TempDir::new().unwrap();
    let config = Config::default();
    let runner = BatchRunner::new(FnolProcessor::new(config.processing.clone()).unwrap());

    let summary = runner.run(fixtures_dir(), output.path()).await.unwrap();
    let formatter = Formatter::new(OutputFormat::Table, false);

    let batch = formatter.format_batch(&summary).unwrap();
    assert!(batch.contains("FNOL_005.txt"));
    assert!(batch.contains("Policy Number, Estimated Damage"));
    assert!(batch.contains("Processed 5 documents."));

    let entries = load_summary(output.path()).await.unwrap();
    let report = formatter.format_summary(&entries).unwrap();
    assert!(report.contains("PA-2024-001234"));
    assert!(report.contains("$48,750.00"));
    assert!(report.contains("Total documents: 5"));
}

#[tokio::test]
async fn test_config_threshold_flows_into_routing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[settings]\nformat = \"quiet\"\n\n[processing.router]\nfast_track_threshold = 1000.0\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.settings.format, OutputFormat::Quiet);

    let processor = FnolProcessor::new(config.processing).unwrap();
    let result = processor
        .process_document(fixtures_dir().join("FNOL_001.txt"))
        .await
        .unwrap();

    let formatter = Formatter::new(OutputFormat::Quiet, false);
    assert_eq!(
        formatter.format_result("FNOL_001.txt", &result).unwrap(),
        "Manual Review Required"
    );
}
