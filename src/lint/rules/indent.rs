//! Indentation validation.
//!
//! Three checks per line, the first short-circuiting the other two:
//!
//! 1. the leading whitespace must be a multiple of the configured width
//! 2. a line after an object opener must indent by exactly one unit
//! 3. a line before an object closer must outdent by exactly one unit
//!
//! When the configuration permits tabs but not mixed leading whitespace, the
//! indentation unit becomes a single tab and the multiple-of-width check is
//! skipped (tab stops have no sub-unit).

use crate::lint::buffer::LineBuffer;
use crate::lint::config::LintConfig;
use crate::lint::diagnostic::Diagnostic;
use crate::lint::rule::{RuleId, StyleRule};

/// Validates indentation depth against the configured unit.
pub struct IndentRule;

/// Length of the line's leading whitespace, in characters.
fn leading_whitespace_len(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Number of leading tab characters.
fn leading_tabs(line: &str) -> usize {
    line.chars().take_while(|c| *c == '\t').count()
}

/// Whether the line opens an object literal (ends in `{`).
fn opens_object(line: &str) -> bool {
    line.trim_end().ends_with('{')
}

/// Whether the line closes an object literal (ends in `}` or `},`).
fn closes_object(line: &str) -> bool {
    let trimmed = line.trim_end();
    let trimmed = trimmed.strip_suffix(',').map_or(trimmed, str::trim_end);
    trimmed.ends_with('}')
}

impl IndentRule {
    fn depth(line: &str, tab_mode: bool) -> usize {
        if tab_mode {
            leading_tabs(line)
        } else {
            leading_whitespace_len(line)
        }
    }
}

impl StyleRule for IndentRule {
    fn id(&self) -> RuleId {
        RuleId::new("indent")
    }

    fn name(&self) -> &str {
        "Indent"
    }

    fn description(&self) -> &str {
        "Validates indentation width and object nesting depth"
    }

    fn check(&self, buffer: &LineBuffer, config: &LintConfig) -> Vec<Diagnostic> {
        let severity = config.severity(&self.id());
        let width = config.indent_width();
        let tab_mode = config.tab_indent_mode();
        let unit = if tab_mode { 1 } else { width };
        let mut diagnostics = Vec::new();

        for (i, line) in buffer.iter().enumerate() {
            let indent = Self::depth(line, tab_mode);

            if !tab_mode && indent % width != 0 {
                diagnostics.push(Diagnostic::new(
                    i,
                    self.id(),
                    severity,
                    format!("Indentation uses the wrong number of spaces, it should be {width}"),
                ));
                continue;
            }

            if i > 0 {
                let previous = buffer.get(i - 1).unwrap_or_default();
                if opens_object(previous) {
                    let psize = Self::depth(previous, tab_mode);
                    if indent.abs_diff(psize) != unit {
                        diagnostics.push(Diagnostic::new(
                            i,
                            self.id(),
                            severity,
                            "Indent is incorrect",
                        ));
                    }
                }
            }

            if let Some(next) = buffer.get(i + 1) {
                if closes_object(next) {
                    let nsize = Self::depth(next, tab_mode);
                    if indent.abs_diff(nsize) != unit {
                        diagnostics.push(Diagnostic::new(
                            i,
                            self.id(),
                            severity,
                            "Outdent is incorrect",
                        ));
                    }
                }
            }
        }

        diagnostics
    }
}
