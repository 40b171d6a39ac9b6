//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining style rules:
//!
//! - [`StyleRule`] - The trait that all style rules must implement
//! - [`RuleId`] - Unique identifier for a rule (or the structural validator)
//! - [`Severity`] - Severity level for diagnostics (Warning, Error)

use super::buffer::LineBuffer;
use super::config::LintConfig;
use super::diagnostic::Diagnostic;

/// Unique identifier for a lint rule.
///
/// The structural validator reports under the reserved id
/// [`RuleId::structural`], which is not a style rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved id used by the structural validator.
    pub fn structural() -> Self {
        Self::new("structural")
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
///
/// Errors sort before warnings when a report is ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The file content is not well-formed JSON by the validator's heuristics.
    Error,
    /// A style rule was violated; never blocks the rest of the pass.
    Warning,
}

impl Severity {
    /// The severity's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A style rule checked over one file's line buffer.
///
/// Rules are pure: each invocation is a function of the buffer and the
/// resolved configuration, with no state retained across invocations. A rule
/// reads its own parameters (and, for the indent rule, the tab policy) from
/// the [`LintConfig`] it is handed; it never mutates the buffer.
pub trait StyleRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks, shown in `--help`-style listings.
    fn description(&self) -> &str;

    /// Check the buffer and return any diagnostics.
    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic>;
}
