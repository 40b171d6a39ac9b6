//! Mixed leading whitespace detection.

use crate::lint::buffer::LineBuffer;
use crate::lint::config::LintConfig;
use crate::lint::diagnostic::Diagnostic;
use crate::lint::rule::{RuleId, StyleRule};

const MESSAGE: &str = "Mixed tabs and spaces are not allowed.";

/// Flags lines whose leading whitespace mixes tabs and spaces.
pub struct MixedWhitespaceRule;

fn leading_mixes_whitespace(line: &str) -> bool {
    let leading: Vec<char> = line.chars().take_while(|c| c.is_whitespace()).collect();
    leading.contains(&'\t') && leading.contains(&' ')
}

impl StyleRule for MixedWhitespaceRule {
    fn id(&self) -> RuleId {
        RuleId::new("mixed-whitespace")
    }

    fn name(&self) -> &str {
        "Mixed Whitespace"
    }

    fn description(&self) -> &str {
        "Disallows leading whitespace mixing tabs and spaces"
    }

    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic> {
        let severity = config.severity(&self.id());

        buffer
            .iter()
            .enumerate()
            .filter(|(_, line)| leading_mixes_whitespace(line))
            .map(|(i, _)| Diagnostic::new(i, self.id(), severity, MESSAGE))
            .collect()
    }
}
