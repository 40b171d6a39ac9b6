//! Colon spacing enforcement.
//!
//! Two sub-conditions, either of which flags the line: whitespace before a
//! colon, or a colon followed immediately by a non-space. The rule does not
//! enforce "exactly one space after" - more than one space past the colon is
//! accepted, matching the asymmetry of the original convention.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::buffer::LineBuffer;
use crate::lint::config::LintConfig;
use crate::lint::diagnostic::Diagnostic;
use crate::lint::rule::{RuleId, StyleRule};

const MESSAGE: &str = "There should be a single space after a colon.";

static RE_SPACE_BEFORE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s:").unwrap());
static RE_NO_SPACE_AFTER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\S").unwrap());

/// Enforces the colon spacing convention on every line.
pub struct SpacingRule;

impl StyleRule for SpacingRule {
    fn id(&self) -> RuleId {
        RuleId::new("spacing")
    }

    fn name(&self) -> &str {
        "Spacing"
    }

    fn description(&self) -> &str {
        "Enforces a single space after a colon and none before"
    }

    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic> {
        let severity = config.severity(&self.id());

        buffer
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                RE_SPACE_BEFORE_COLON.is_match(line) || RE_NO_SPACE_AFTER_COLON.is_match(line)
            })
            .map(|(i, _)| Diagnostic::new(i, self.id(), severity, MESSAGE))
            .collect()
    }
}
