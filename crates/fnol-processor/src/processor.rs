//! Pipeline facade: extraction, validation and routing for one document

use crate::config::ProcessorConfig;
use crate::error::{ProcessorError, Result};
use fnol_domain::ProcessingResult;
use fnol_extractor::FieldExtractor;
use fnol_gatekeeper::{Gatekeeper, ValidationResult};
use fnol_router::RouteEngine;
use std::path::Path;
use tracing::{debug, info};

/// Runs every stage over raw document text
///
/// Processing is a pure function of the text and the configuration, so
/// one processor can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct FnolProcessor {
    extractor: FieldExtractor,
    gatekeeper: Gatekeeper,
    engine: RouteEngine,
}

impl FnolProcessor {
    /// Build a processor, validating each stage's configuration
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        let ProcessorConfig {
            extractor,
            validation,
            router,
        } = config;

        Ok(Self {
            extractor: FieldExtractor::new(extractor)?,
            gatekeeper: Gatekeeper::new(validation)?,
            engine: RouteEngine::new(router)?,
        })
    }

    /// Extractor stage
    pub fn extractor(&self) -> &FieldExtractor {
        &self.extractor
    }

    /// Validation stage
    pub fn gatekeeper(&self) -> &Gatekeeper {
        &self.gatekeeper
    }

    /// Routing stage
    pub fn engine(&self) -> &RouteEngine {
        &self.engine
    }

    /// Process one document's raw text into a decision bundle
    ///
    /// Never fails: data-quality problems surface as missing fields and a
    /// Manual Review route.
    pub fn process(&self, text: &str) -> ProcessingResult {
        self.process_with_validation(text).0
    }

    /// Like [`process`](Self::process), also returning the validation outcome
    pub fn process_with_validation(&self, text: &str) -> (ProcessingResult, ValidationResult) {
        let record = self.extractor.extract(text);
        let validation = self.gatekeeper.validate(&record);
        let missing = validation.labels();
        let decision = self.engine.decide(&record, &missing, text);

        debug!(
            present = record.present_fields().len(),
            missing = missing.len(),
            "processed document"
        );

        (ProcessingResult::new(record, missing, decision), validation)
    }

    /// Read a UTF-8 document from disk and process it
    pub async fn process_document(&self, path: impl AsRef<Path>) -> Result<ProcessingResult> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ProcessorError::io(path, e))?;

        let result = self.process(&text);
        info!(
            document = %path.display(),
            route = result.recommended_route.as_str(),
            "processed document file"
        );
        Ok(result)
    }
}

impl Default for FnolProcessor {
    fn default() -> Self {
        Self {
            extractor: FieldExtractor::default(),
            gatekeeper: Gatekeeper::default_config(),
            engine: RouteEngine::default(),
        }
    }
}
