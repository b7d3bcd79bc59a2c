//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fnol_domain::{ClaimRoute, Field, FieldValue, ProcessingResult};
use fnol_processor::{route_distribution, BatchSummary, DocumentResult};
use fnol_router::format_currency;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the result of a single document.
    pub fn format_result(&self, document: &str, result: &ProcessingResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Quiet => Ok(result.recommended_route.to_string()),
            OutputFormat::Table => Ok(self.format_result_table(document, result)),
        }
    }

    fn format_result_table(&self, document: &str, result: &ProcessingResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for field in result.extracted_fields.present_fields() {
            if let Some(value) = result.extracted_fields.value(field) {
                builder.push_record([field.label(), render_value(value)]);
            }
        }

        let mut lines = vec![self.colorize(&format!("Document: {}", document), "cyan")];
        if result.extracted_fields.is_empty() {
            lines.push(self.warning("No fields extracted."));
        } else {
            lines.push(styled(builder));
        }

        let status = if result.missing_fields.is_empty() {
            self.colorize("Complete", "green")
        } else {
            self.colorize(
                &format!("Incomplete (missing: {})", result.missing_fields.join(", ")),
                "yellow",
            )
        };
        lines.push(format!("Validation: {}", status));
        lines.push(format!("Route:      {}", self.route(result.recommended_route)));
        lines.push(format!("Reasoning:  {}", result.reasoning));

        lines.join("\n")
    }

    /// Format the outcome of a batch run.
    pub fn format_batch(&self, summary: &BatchSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let failures: Vec<serde_json::Value> = summary
                    .failures
                    .iter()
                    .map(|f| serde_json::json!({ "document": f.document, "error": f.error }))
                    .collect();
                let json = serde_json::json!({
                    "documents": summary.entries,
                    "failures": failures,
                    "routeDistribution": summary.route_distribution(),
                    "processed": summary.processed(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(summary
                .entries
                .iter()
                .map(|e| format!("{}\t{}", e.document, e.result.recommended_route))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut lines = Vec::new();
                if summary.entries.is_empty() && summary.failures.is_empty() {
                    lines.push(self.warning("No FNOL documents found."));
                }

                if !summary.entries.is_empty() {
                    let mut builder = Builder::default();
                    builder.push_record(["Document", "Recommended Route", "Missing Fields"]);
                    for entry in &summary.entries {
                        builder.push_record([
                            entry.document.clone(),
                            entry.result.recommended_route.to_string(),
                            join_or_dash(&entry.result.missing_fields),
                        ]);
                    }
                    lines.push(styled(builder));
                }

                for failure in &summary.failures {
                    lines.push(self.error(&format!("{}: {}", failure.document, failure.error)));
                }

                if !summary.entries.is_empty() {
                    lines.push(self.format_distribution(&summary.route_distribution()));
                }
                lines.push(self.info(&format!("Processed {} documents.", summary.processed())));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a stored summary report.
    pub fn format_summary(&self, entries: &[DocumentResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|e| format!("{}\t{}", e.document, e.result.recommended_route))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.warning("Summary contains no documents."));
                }

                let mut builder = Builder::default();
                builder.push_record([
                    "Document",
                    "Route",
                    "Policy Number",
                    "Policyholder",
                    "Claim Type",
                    "Damage",
                    "Missing Fields",
                    "Reasoning",
                ]);
                for entry in entries {
                    let fields = &entry.result.extracted_fields;
                    builder.push_record([
                        entry.document.clone(),
                        entry.result.recommended_route.to_string(),
                        text_or_dash(fields.value(Field::PolicyNumber)),
                        text_or_dash(fields.value(Field::PolicyholderName)),
                        text_or_dash(fields.value(Field::ClaimType)),
                        text_or_dash(fields.value(Field::EstimatedDamage)),
                        join_or_dash(&entry.result.missing_fields),
                        entry.result.reasoning.clone(),
                    ]);
                }

                let lines = [
                    styled(builder),
                    self.format_distribution(&route_distribution(entries)),
                    self.info(&format!("Total documents: {}", entries.len())),
                ];
                Ok(lines.join("\n"))
            }
        }
    }

    fn format_distribution(&self, counts: &BTreeMap<String, usize>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Route", "Documents"]);
        for (route, count) in counts {
            builder.push_record([route.clone(), count.to_string()]);
        }
        format!("{}\n{}", self.colorize("Route distribution", "cyan"), styled(builder))
    }

    /// Route label, colored by severity.
    pub fn route(&self, route: ClaimRoute) -> String {
        let color = match route {
            ClaimRoute::FastTrack => "green",
            ClaimRoute::ManualReview => "yellow",
            ClaimRoute::SpecialistQueue => "magenta",
            ClaimRoute::FraudInvestigation => "red",
        };
        self.colorize(route.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a field value for display.
pub fn render_value(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => text.to_string(),
        FieldValue::List(items) => items.join(", "),
        FieldValue::Amount(amount) => format_currency(amount),
    }
}

fn text_or_dash(value: Option<FieldValue<'_>>) -> String {
    value.map(render_value).unwrap_or_else(|| "-".to_string())
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
