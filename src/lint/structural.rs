//! Heuristic structural validation of JSON-shaped text.
//!
//! The validator scans raw lines without tokenizing: a single forward pass
//! applies ordered per-line and line-pair pattern checks while tracking the
//! running brace balance across the file. The payoff is a line-precise
//! message for the common hand-editing mistakes (forgotten comma, stray
//! brace, missing value); the cost is that exotic but valid formatting can
//! be flagged and some malformed input slips through. That trade-off is
//! deliberate and the predicates below are kept as small named functions so
//! each heuristic stays auditable on its own.
//!
//! All findings are returned as [`Diagnostic`]s with `Error` severity;
//! validation itself never fails.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::buffer::LineBuffer;
use super::diagnostic::Diagnostic;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_BRACE_ONLY, r"^\s*[{}]+\s*,?\s*$");
lazy_regex!(RE_ENDS_OPEN_BRACE, r"\{\s*$");
lazy_regex!(RE_ENDS_CLOSING_BRACE, r"\}\s*,?\s*$");
lazy_regex!(RE_STARTS_CLOSING_BRACE, r"^\s*\}");
lazy_regex!(
    RE_KEY_SHAPED,
    r#"^\s*("(?:[^"\\]|\\.)*"|[A-Za-z_][A-Za-z0-9_]*)\s*:"#
);
lazy_regex!(RE_MISSING_VALUE, r":\s*,");
lazy_regex!(RE_ENDS_COMMA, r",\s*$");

const MSG_MISSING_PAIR: &str = "Invalid syntax: missing key/value pair.";
const MSG_MISSING_KEY: &str = "Invalid syntax: missing property identifier.";
const MSG_MISSING_VALUE: &str = "Invalid syntax: missing value.";
const MSG_MISSING_COMMA: &str = "Invalid syntax: missing comma.";
const MSG_DOUBLE_BRACES: &str = "Invalid syntax: double braces.";

/// Whether the line holds nothing but whitespace.
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether the line consists solely of braces, optionally comma-terminated.
fn is_brace_only(line: &str) -> bool {
    RE_BRACE_ONLY.is_match(line)
}

/// Whether the line opens an object (ends in `{`).
fn ends_open_brace(line: &str) -> bool {
    RE_ENDS_OPEN_BRACE.is_match(line)
}

/// Whether the line ends in a closing brace, optionally comma-terminated.
fn ends_closing_brace(line: &str) -> bool {
    RE_ENDS_CLOSING_BRACE.is_match(line)
}

/// Whether the line begins with a closing brace.
fn starts_closing_brace(line: &str) -> bool {
    RE_STARTS_CLOSING_BRACE.is_match(line)
}

/// Whether the line starts with a `key:` shape - a quoted string or a bare
/// identifier followed by a colon.
fn is_key_shaped(line: &str) -> bool {
    RE_KEY_SHAPED.is_match(line)
}

/// Whether a colon is followed by a comma with no value in between.
fn has_missing_value(line: &str) -> bool {
    RE_MISSING_VALUE.is_match(line)
}

/// Whether the line is comma-terminated.
fn ends_with_comma(line: &str) -> bool {
    RE_ENDS_COMMA.is_match(line)
}

/// Whether the line contains doubled braces.
fn has_double_brace(line: &str) -> bool {
    line.contains("{{") || line.contains("}}")
}

/// Net brace contribution of one line.
fn brace_delta(line: &str) -> i64 {
    let opens = line.matches('{').count() as i64;
    let closes = line.matches('}').count() as i64;
    opens - closes
}

/// Parse the minimal synthetic fragment built around a `... {` line.
///
/// Wrapping the line as `{ <line> } }` turns a well-formed object opener into
/// a complete document; anything else surfaces the parser's own message.
fn check_open_brace_fragment(line: &str) -> Option<String> {
    let fragment = format!("{{{line} }} }}");
    match serde_json::from_str::<serde_json::Value>(&fragment) {
        Ok(_) => None,
        Err(err) => Some(err.to_string()),
    }
}

/// Validate a line buffer, returning one diagnostic per detected violation
/// plus at most one trailing diagnostic for unbalanced braces.
///
/// Per-line checks are ordered and short-circuit: the first matching pattern
/// on a line claims it. Whole-file brace diagnostics are reported at index
/// `buffer.len()`, one past the last line.
pub fn validate(buffer: &LineBuffer) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut balance: i64 = 0;
    let len = buffer.len();

    for (i, line) in buffer.iter().enumerate() {
        balance += brace_delta(line);
        let is_last = i + 1 == len;
        let next = buffer.get(i + 1);

        if is_blank(line) {
            continue;
        }

        if is_brace_only(line) {
            // Pair heuristics are the only checks that apply to a bare brace:
            // a closing line must still be comma-separated from a following
            // key, and doubled braces are suspect while the file is open.
            let closes = line.contains('}');
            if closes
                && !ends_with_comma(line)
                && next.is_some_and(|n| !is_blank(n) && is_key_shaped(n))
            {
                diagnostics.push(Diagnostic::structural(i, MSG_MISSING_COMMA));
                continue;
            }
            if has_double_brace(line) && !is_last && balance > 0 {
                diagnostics.push(Diagnostic::structural(i, MSG_DOUBLE_BRACES));
            }
            continue;
        }

        if !line.contains(':') && !ends_open_brace(line) && !ends_closing_brace(line) {
            diagnostics.push(Diagnostic::structural(i, MSG_MISSING_PAIR));
            continue;
        }

        if !is_key_shaped(line) && !ends_open_brace(line) && !ends_closing_brace(line) {
            diagnostics.push(Diagnostic::structural(i, MSG_MISSING_KEY));
            continue;
        }

        if has_missing_value(line) {
            diagnostics.push(Diagnostic::structural(i, MSG_MISSING_VALUE));
            continue;
        }

        if ends_open_brace(line) {
            if let Some(message) = check_open_brace_fragment(line) {
                trace!(line = i, "synthetic fragment rejected");
                diagnostics.push(Diagnostic::structural(i, message));
            }
            continue;
        }

        if !is_last && !next.is_some_and(|n| starts_closing_brace(n)) && !ends_with_comma(line) {
            diagnostics.push(Diagnostic::structural(i, MSG_MISSING_COMMA));
            continue;
        }

        if has_double_brace(line) && !is_last && balance > 0 {
            diagnostics.push(Diagnostic::structural(i, MSG_DOUBLE_BRACES));
        }
    }

    if balance > 0 {
        diagnostics.push(Diagnostic::structural(
            len,
            format!("Invalid syntax: {balance} unclosed brace(s)."),
        ));
    } else if balance < 0 {
        diagnostics.push(Diagnostic::structural(
            len,
            format!("Invalid syntax: {} extra closing brace(s).", -balance),
        ));
    }

    diagnostics
}
