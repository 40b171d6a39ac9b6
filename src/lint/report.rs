//! Per-file diagnostic accumulation and rendering.
//!
//! A [`FileReport`] collects every diagnostic one file produced and renders
//! them in a deterministic order. The [`DiagnosticSink`] owns one report per
//! linted file for the duration of a batch, so multi-file output can be
//! rendered at the end or incrementally; re-linting a filename discards only
//! that file's previous results.

use super::diagnostic::Diagnostic;
use super::rule::Severity;

/// Options controlling how a report is rendered as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Prefix each diagnostic with its severity name.
    pub show_severity: bool,
    /// Order by severity (errors first), then line, instead of line only.
    pub sort_by_severity: bool,
}

/// The accumulated, orderable diagnostic set for one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    filename: String,
    line_count: usize,
    diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    fn new(filename: impl Into<String>, line_count: usize) -> Self {
        Self {
            filename: filename.into(),
            line_count,
            diagnostics: Vec::new(),
        }
    }

    /// The file this report belongs to.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// All diagnostics in insertion order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether any diagnostic carries `Error` severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Whether any diagnostic carries `Warning` severity.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Diagnostics in render order. The sort is stable, so insertion order
    /// is preserved among equal keys.
    pub fn sorted(&self, by_severity: bool) -> Vec<&Diagnostic> {
        let mut sorted: Vec<&Diagnostic> = self.diagnostics.iter().collect();
        if by_severity {
            sorted.sort_by_key(|d| (d.severity, d.line));
        } else {
            sorted.sort_by_key(|d| d.line);
        }
        sorted
    }

    /// Width of the widest rendered line number, for column alignment.
    pub fn number_width(&self) -> usize {
        let largest = self
            .diagnostics
            .iter()
            .map(Diagnostic::display_line)
            .chain(std::iter::once(self.line_count))
            .max()
            .unwrap_or(1);
        largest.max(1).to_string().len()
    }

    /// Render one diagnostic as a report line.
    pub fn format_line(&self, diagnostic: &Diagnostic, options: RenderOptions) -> String {
        let width = self.number_width();
        let number = diagnostic.display_line();
        if options.show_severity {
            format!(
                "line: {number:>width$} - {}: {}",
                diagnostic.severity, diagnostic.message
            )
        } else {
            format!("line: {number:>width$} - {}", diagnostic.message)
        }
    }

    /// Render the whole report as text, or "No results" if the file came
    /// through clean.
    pub fn render(&self, options: RenderOptions) -> String {
        if self.diagnostics.is_empty() {
            return "No results".to_string();
        }

        let lines: Vec<String> = self
            .sorted(options.sort_by_severity)
            .into_iter()
            .map(|d| self.format_line(d, options))
            .collect();
        lines.join("\n").trim_matches('\n').to_string()
    }
}

/// Accumulates diagnostics per file across a batch.
#[derive(Default)]
pub struct DiagnosticSink {
    reports: Vec<FileReport>,
    current: Option<usize>,
}

impl DiagnosticSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or restart) accumulation for `filename`.
    ///
    /// Idempotent per filename: an existing report for the same file is
    /// cleared, while other files' reports are retained for batch output.
    pub fn reset(&mut self, filename: &str, line_count: usize) {
        if let Some(index) = self.reports.iter().position(|r| r.filename == filename) {
            self.reports[index] = FileReport::new(filename, line_count);
            self.current = Some(index);
        } else {
            self.reports.push(FileReport::new(filename, line_count));
            self.current = Some(self.reports.len() - 1);
        }
    }

    /// Append one diagnostic to the current file's report.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if let Some(index) = self.current {
            self.reports[index].diagnostics.push(diagnostic);
        }
    }

    /// Append a batch of diagnostics to the current file's report.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.add(diagnostic);
        }
    }

    /// The report currently being accumulated.
    pub fn current(&self) -> Option<&FileReport> {
        self.current.map(|index| &self.reports[index])
    }

    /// All reports, in first-lint order.
    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    /// Look up a file's report by name.
    pub fn report(&self, filename: &str) -> Option<&FileReport> {
        self.reports.iter().find(|r| r.filename == filename)
    }

    /// Render a file's report, if that file was linted.
    pub fn render(&self, filename: &str, options: RenderOptions) -> Option<String> {
        self.report(filename).map(|r| r.render(options))
    }
}
