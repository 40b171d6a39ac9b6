//! Dangling comma detection.

use crate::lint::buffer::LineBuffer;
use crate::lint::config::LintConfig;
use crate::lint::diagnostic::Diagnostic;
use crate::lint::rule::{RuleId, StyleRule};

const MESSAGE: &str = "Dangling comma is not allowed.";

/// Flags a comma separated from a closing brace only by the line break.
pub struct CommaDangleRule;

impl StyleRule for CommaDangleRule {
    fn id(&self) -> RuleId {
        RuleId::new("comma-dangle")
    }

    fn name(&self) -> &str {
        "Comma Dangle"
    }

    fn description(&self) -> &str {
        "Disallows a dangling comma before a closing brace"
    }

    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic> {
        let severity = config.severity(&self.id());
        let mut diagnostics = Vec::new();

        // Evaluate adjacent pairs; the comma line is the one reported.
        for index in 1..buffer.len() {
            let previous = buffer.get(index - 1).unwrap_or_default();
            let current = buffer.get(index).unwrap_or_default();

            if previous.trim_end().ends_with(',') && current.trim_start().starts_with('}') {
                diagnostics.push(Diagnostic::new(index - 1, self.id(), severity, MESSAGE));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rule::Severity;

    fn buffer(lines: &[&str]) -> LineBuffer {
        LineBuffer::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn flags_comma_before_closing_brace() {
        let rule = CommaDangleRule;
        let diags = rule.check(&buffer(&["\"a\": 1,", "}"]), &LintConfig::default());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 0);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].message, "Dangling comma is not allowed.");
    }

    #[test]
    fn tolerates_whitespace_around_the_break() {
        let rule = CommaDangleRule;
        let diags = rule.check(&buffer(&["  \"a\": 1,  ", "  }"]), &LintConfig::default());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 0);
    }

    #[test]
    fn passes_comma_followed_by_key() {
        let rule = CommaDangleRule;
        let diags = rule.check(
            &buffer(&["\"a\": 1,", "\"b\": 2", "}"]),
            &LintConfig::default(),
        );

        assert!(diags.is_empty());
    }

    #[test]
    fn passes_closing_brace_without_comma() {
        let rule = CommaDangleRule;
        let diags = rule.check(&buffer(&["\"a\": 1", "}"]), &LintConfig::default());

        assert!(diags.is_empty());
    }

    #[test]
    fn flags_each_dangling_pair() {
        let rule = CommaDangleRule;
        let diags = rule.check(
            &buffer(&["\"a\": {", "\"b\": 1,", "},", "\"c\": 2,", "}"]),
            &LintConfig::default(),
        );

        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].line, 1);
        assert_eq!(diags[1].line, 3);
    }
}
