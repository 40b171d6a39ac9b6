//! Trailing whitespace detection.

use crate::lint::buffer::LineBuffer;
use crate::lint::config::LintConfig;
use crate::lint::diagnostic::Diagnostic;
use crate::lint::rule::{RuleId, StyleRule};

const MESSAGE: &str = "Lines may not have a trailing whitespace.";

/// Flags lines ending in whitespace.
pub struct WhitespaceRule;

impl StyleRule for WhitespaceRule {
    fn id(&self) -> RuleId {
        RuleId::new("whitespace")
    }

    fn name(&self) -> &str {
        "Whitespace"
    }

    fn description(&self) -> &str {
        "Warns about lines with trailing whitespace"
    }

    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic> {
        let severity = config.severity(&self.id());

        buffer
            .iter()
            .enumerate()
            .filter(|(_, line)| line.chars().next_back().is_some_and(char::is_whitespace))
            .map(|(i, _)| Diagnostic::new(i, self.id(), severity, MESSAGE))
            .collect()
    }
}
