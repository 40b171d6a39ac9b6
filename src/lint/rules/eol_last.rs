//! Trailing newline enforcement.

use crate::lint::buffer::LineBuffer;
use crate::lint::config::LintConfig;
use crate::lint::diagnostic::Diagnostic;
use crate::lint::rule::{RuleId, StyleRule};

const MESSAGE: &str = "File is missing a blank line at the end.";

/// Requires the file to end with a newline.
///
/// A file that ends in `\n` splits into a final empty line; a non-empty last
/// line means the trailing newline is missing.
pub struct EolLastRule;

impl StyleRule for EolLastRule {
    fn id(&self) -> RuleId {
        RuleId::new("eol-last")
    }

    fn name(&self) -> &str {
        "EOL Last"
    }

    fn description(&self) -> &str {
        "Enforces a blank line at the end of the file"
    }

    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic> {
        match buffer.last() {
            Some(last) if !last.is_empty() => vec![Diagnostic::new(
                buffer.len() - 1,
                self.id(),
                config.severity(&self.id()),
                MESSAGE,
            )],
            _ => Vec::new(),
        }
    }
}
