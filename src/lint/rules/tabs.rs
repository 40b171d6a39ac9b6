//! Tab character detection.

use crate::lint::buffer::LineBuffer;
use crate::lint::config::LintConfig;
use crate::lint::diagnostic::Diagnostic;
use crate::lint::rule::{RuleId, StyleRule};

const MESSAGE: &str = "Tabs are not allowed";

/// Flags any line containing a tab character.
pub struct TabsRule;

impl StyleRule for TabsRule {
    fn id(&self) -> RuleId {
        RuleId::new("tabs")
    }

    fn name(&self) -> &str {
        "Tabs"
    }

    fn description(&self) -> &str {
        "Disallows tab characters anywhere on a line"
    }

    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic> {
        let severity = config.severity(&self.id());

        buffer
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains('\t'))
            .map(|(i, _)| Diagnostic::new(i, self.id(), severity, MESSAGE))
            .collect()
    }
}
