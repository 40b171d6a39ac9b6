//! Lint diagnostic messages.
//!
//! This module provides the [`Diagnostic`] type for representing one problem
//! found during a linting pass, tied to the line that produced it.

use super::rule::{RuleId, Severity};

/// A single reported problem, tied to a line index and a severity.
///
/// `line` is 0-based internally and rendered 1-based. An index equal to the
/// buffer length (one past the end) marks a whole-file diagnostic, such as
/// unbalanced braces counted at end of file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 0-based line index within the buffer that produced this diagnostic.
    pub line: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// The rule that produced this diagnostic, or the structural validator.
    pub source: RuleId,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(line: usize, source: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity,
            source,
        }
    }

    /// Create an error diagnostic from the structural validator.
    pub fn structural(line: usize, message: impl Into<String>) -> Self {
        Self::new(line, RuleId::structural(), Severity::Error, message)
    }

    /// The 1-based line number used when rendering.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }
}
