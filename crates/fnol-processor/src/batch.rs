//! Directory batch runner
//!
//! Picks up every `FNOL_*.txt` file in an input directory, processes the
//! documents concurrently and writes one `<stem>_RESULT.json` per document
//! plus a `PROCESSING_SUMMARY.json` covering the whole batch.

use crate::error::{ProcessorError, Result};
use crate::processor::FnolProcessor;
use fnol_domain::ProcessingResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// File name prefix of batch input documents
pub const DOCUMENT_PREFIX: &str = "FNOL_";

/// File name extension of batch input documents
pub const DOCUMENT_EXTENSION: &str = ".txt";

/// Suffix replacing the extension for per-document result files
pub const RESULT_SUFFIX: &str = "_RESULT.json";

/// Name of the batch summary file
pub const SUMMARY_FILE: &str = "PROCESSING_SUMMARY.json";

/// One entry of the summary file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Input file name
    pub document: String,

    /// Decision bundle for the document
    pub result: ProcessingResult,
}

/// A document that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    /// Input file name
    pub document: String,

    /// Error message
    pub error: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    /// Processed documents, in file name order
    pub entries: Vec<DocumentResult>,

    /// Documents that could not be read, in file name order
    pub failures: Vec<DocumentFailure>,
}

impl BatchSummary {
    /// Number of documents that produced a result
    pub fn processed(&self) -> usize {
        self.entries.len()
    }

    /// Number of documents per route label, sorted by label
    pub fn route_distribution(&self) -> BTreeMap<String, usize> {
        route_distribution(&self.entries)
    }
}

/// Count documents per route label
pub fn route_distribution(entries: &[DocumentResult]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts
            .entry(entry.result.recommended_route.to_string())
            .or_insert(0) += 1;
    }
    counts
}

/// Whether a file name selects it for batch processing
pub fn is_batch_document(name: &str) -> bool {
    name.starts_with(DOCUMENT_PREFIX) && name.ends_with(DOCUMENT_EXTENSION)
}

/// Result file name for an input document (`FNOL_001.txt` → `FNOL_001_RESULT.json`)
pub fn result_file_name(document: &str) -> String {
    let stem = document.strip_suffix(DOCUMENT_EXTENSION).unwrap_or(document);
    format!("{}{}", stem, RESULT_SUFFIX)
}

/// Processes whole directories of documents
#[derive(Debug, Clone)]
pub struct BatchRunner {
    processor: Arc<FnolProcessor>,
}

impl BatchRunner {
    /// Create a runner around a shared processor
    pub fn new(processor: FnolProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    /// Get the underlying processor
    pub fn processor(&self) -> &FnolProcessor {
        &self.processor
    }

    /// Batch input documents in `input_dir`, sorted by file name
    pub async fn discover(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        let mut dir = tokio::fs::read_dir(input_dir)
            .await
            .map_err(|e| ProcessorError::io(input_dir, e))?;

        let mut documents = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| ProcessorError::io(input_dir, e))?
        {
            let path = entry.path();
            let selected = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_batch_document);
            let is_file = entry.file_type().await.is_ok_and(|t| t.is_file());
            if selected && is_file {
                documents.push(path);
            }
        }

        documents.sort();
        Ok(documents)
    }

    /// Process every document in `input_dir` and write results to `output_dir`
    ///
    /// Unreadable documents are recorded as failures and the rest of the
    /// batch continues. Failing to write output aborts the run.
    pub async fn run(
        &self,
        input_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<BatchSummary> {
        let output_dir = output_dir.as_ref();
        let documents = self.discover(input_dir.as_ref()).await?;
        info!(count = documents.len(), "starting batch");

        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| ProcessorError::io(output_dir, e))?;

        let handles: Vec<_> = documents
            .into_iter()
            .map(|path| {
                let processor = Arc::clone(&self.processor);
                let name = display_name(&path);
                let handle =
                    tokio::spawn(async move { processor.process_document(&path).await });
                (name, handle)
            })
            .collect();

        let mut summary = BatchSummary::default();
        for (document, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome.map_err(|e| e.to_string()),
                Err(join_error) => Err(join_error.to_string()),
            };

            match outcome {
                Ok(result) => {
                    let path = output_dir.join(result_file_name(&document));
                    write_json(&path, &result).await?;
                    info!(
                        document = document.as_str(),
                        route = result.recommended_route.as_str(),
                        "wrote result"
                    );
                    summary.entries.push(DocumentResult { document, result });
                }
                Err(error) => {
                    warn!(document = document.as_str(), error = error.as_str(), "document failed");
                    summary.failures.push(DocumentFailure { document, error });
                }
            }
        }

        write_json(&output_dir.join(SUMMARY_FILE), &summary.entries).await?;
        info!(
            processed = summary.processed(),
            failed = summary.failures.len(),
            "batch complete"
        );

        Ok(summary)
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(FnolProcessor::default())
    }
}

/// Read a previously written summary file from `output_dir`
pub async fn load_summary(output_dir: impl AsRef<Path>) -> Result<Vec<DocumentResult>> {
    let path = output_dir.as_ref().join(SUMMARY_FILE);
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ProcessorError::io(&path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| ProcessorError::io(path, e))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
