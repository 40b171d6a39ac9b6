//! jsonlint - Line-oriented JSON linting.
//!
//! jsonlint validates the textual form of JSON documents against structural
//! correctness and a configurable set of style rules, reporting per-line
//! diagnostics instead of a single pass/fail parse result. The structural
//! scanner is deliberately heuristic: it works on raw lines rather than a
//! token stream so every finding points at the exact line a human would edit.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the top-level run loop
//! - [`error`] - Error types and result aliases
//! - [`files`] - File discovery (recursive directory expansion)
//! - [`lint`] - The linting engine: buffer, structural validator, rules,
//!   reports, and output formatters
//!
//! # Example
//!
//! ```
//! use jsonlint::lint::{LintConfig, LintRunner};
//!
//! let mut runner = LintRunner::new(LintConfig::default());
//! let report = runner.lint_lines(
//!     "config.json",
//!     vec!["\"name\": \"demo\"".to_string(), "\"port\": 8080".to_string()],
//! );
//!
//! // The first line is missing its trailing comma.
//! assert!(!report.diagnostics().is_empty());
//! ```

pub mod cli;
pub mod error;
pub mod files;
pub mod lint;

pub use error::{JsonlintError, Result};
