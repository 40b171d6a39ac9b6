//! Linting orchestration.
//!
//! The [`LintRunner`] sequences one pass per file: reset the sink, split the
//! content into a [`LineBuffer`], run the structural validator, then every
//! enabled rule, and leave the accumulated [`FileReport`] ready for the
//! rendering layer. Files are processed strictly sequentially; an unreadable
//! file is an error on the caller's channel, never an empty report.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::buffer::LineBuffer;
use super::config::LintConfig;
use super::registry::RuleRegistry;
use super::report::{DiagnosticSink, FileReport};
use super::structural;
use crate::error::{JsonlintError, Result};

/// Runs linting passes and accumulates their reports for a batch.
pub struct LintRunner {
    config: LintConfig,
    registry: RuleRegistry,
    sink: DiagnosticSink,
}

impl LintRunner {
    /// Create a runner with the built-in rule set.
    pub fn new(config: LintConfig) -> Self {
        Self::with_registry(config, RuleRegistry::with_builtins())
    }

    /// Create a runner with a custom rule registry.
    pub fn with_registry(config: LintConfig, registry: RuleRegistry) -> Self {
        Self {
            config,
            registry,
            sink: DiagnosticSink::new(),
        }
    }

    /// The resolved configuration this runner was constructed with.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lint pre-split lines under the given filename.
    pub fn lint_lines(&mut self, filename: &str, lines: Vec<String>) -> &FileReport {
        let buffer = LineBuffer::new(lines);
        self.lint_buffer(filename, &buffer)
    }

    /// Lint a line buffer under the given filename.
    ///
    /// Diagnostics are computed unconditionally; whether they are rendered is
    /// the reporting layer's decision.
    pub fn lint_buffer(&mut self, filename: &str, buffer: &LineBuffer) -> &FileReport {
        self.sink.reset(filename, buffer.len());
        self.sink.extend(structural::validate(buffer));

        for rule in self.registry.enabled(&self.config) {
            let diagnostics = rule.check(buffer, &self.config);
            debug!(
                rule = %rule.id(),
                count = diagnostics.len(),
                file = filename,
                "rule checked"
            );
            self.sink.extend(diagnostics);
        }

        // reset() always sets a current report, so this cannot miss.
        self.sink
            .current()
            .unwrap_or_else(|| unreachable!("sink has a current report after reset"))
    }

    /// Read and lint one file from disk.
    ///
    /// A missing or unreadable file is returned as an error without creating
    /// a report entry; the caller reports it and moves on to the next file.
    pub fn lint_file(&mut self, path: &Path) -> Result<&FileReport> {
        if !path.exists() {
            return Err(JsonlintError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| JsonlintError::FileUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let buffer = LineBuffer::from_content(&content);
        debug!(file = %path.display(), lines = buffer.len(), "linting");
        Ok(self.lint_buffer(&path.display().to_string(), &buffer))
    }

    /// All accumulated reports, in first-lint order.
    pub fn reports(&self) -> &[FileReport] {
        self.sink.reports()
    }

    /// Look up one file's report.
    pub fn report(&self, filename: &str) -> Option<&FileReport> {
        self.sink.report(filename)
    }

    /// Whether any linted file produced an error diagnostic.
    pub fn has_errors(&self) -> bool {
        self.sink.reports().iter().any(FileReport::has_errors)
    }

    /// Whether any linted file produced a warning diagnostic.
    pub fn has_warnings(&self) -> bool {
        self.sink.reports().iter().any(FileReport::has_warnings)
    }
}
