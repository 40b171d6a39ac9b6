//! Human-readable output formatter.
//!
//! Renders one block per file: a `Linting: <filename>` header, an underline
//! of matching length, then the file's diagnostics in render order (or
//! "No results"), with a blank separator line between files of a batch.

use std::io::Write;

use console::style;

use super::ReportFormatter;
use crate::lint::report::{FileReport, RenderOptions};
use crate::lint::rule::Severity;

/// Formats lint output for terminal display.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
    /// Rendering options forwarded to each report.
    pub options: RenderOptions,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool, options: RenderOptions) -> Self {
        Self { use_color, options }
    }

    fn paint(&self, severity: Severity, line: String) -> String {
        if !self.use_color {
            return line;
        }
        // The color decision is made once at the CLI boundary; force styling
        // so redirected output matches what the caller asked for.
        let styled = match severity {
            Severity::Error => style(line).red(),
            Severity::Warning => style(line).yellow(),
        };
        styled.force_styling(true).to_string()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(writer)?;
            }

            let header = format!("Linting: {}", report.filename());
            writeln!(writer, "{header}")?;
            writeln!(writer, "{}", "-".repeat(header.len()))?;

            if report.diagnostics().is_empty() {
                writeln!(writer, "No results")?;
                continue;
            }

            for diagnostic in report.sorted(self.options.sort_by_severity) {
                let line = report.format_line(diagnostic, self.options);
                writeln!(writer, "{}", self.paint(diagnostic.severity, line))?;
            }
        }

        Ok(())
    }
}
