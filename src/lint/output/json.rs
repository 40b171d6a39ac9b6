//! JSON output formatter.
//!
//! Formats file reports as machine-readable JSON for tooling integration.
//! Line numbers are 1-based here, matching the human rendering.

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::lint::report::FileReport;
use crate::lint::rule::Severity;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<JsonFile>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile {
    filename: String,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    line: usize,
    severity: &'static str,
    source: String,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        let files: Vec<JsonFile> = reports
            .iter()
            .map(|report| JsonFile {
                filename: report.filename().to_string(),
                diagnostics: report
                    .sorted(false)
                    .into_iter()
                    .map(|d| JsonDiagnostic {
                        line: d.display_line(),
                        severity: d.severity.name(),
                        source: d.source.to_string(),
                        message: d.message.clone(),
                    })
                    .collect(),
            })
            .collect();

        let all: Vec<&FileReport> = reports.iter().collect();
        let total: usize = all.iter().map(|r| r.diagnostics().len()).sum();
        let errors: usize = all
            .iter()
            .flat_map(|r| r.diagnostics())
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warnings: usize = all
            .iter()
            .flat_map(|r| r.diagnostics())
            .filter(|d| d.severity == Severity::Warning)
            .count();

        let output = JsonOutput {
            files,
            summary: JsonSummary {
                total,
                errors,
                warnings,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
