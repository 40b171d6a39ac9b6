//! JSON linting engine.
//!
//! This module provides line-oriented JSON validation through a pluggable
//! rule-based system layered over a heuristic structural scanner.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Buffer** - The immutable per-file line view ([`LineBuffer`])
//! - **Structural validation** - Heuristic well-formedness scanning
//!   ([`structural::validate`])
//! - **Rules** - Individual style checks ([`StyleRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Reports** - Per-file diagnostic accumulation and ordering
//!   ([`FileReport`], [`DiagnosticSink`])
//! - **Runner** - The per-file orchestration pipeline ([`LintRunner`])
//!
//! # Example
//!
//! ```
//! use jsonlint::lint::{LintConfig, LintRunner};
//!
//! let mut runner = LintRunner::new(LintConfig::default());
//! let report = runner.lint_lines(
//!     "example.json",
//!     vec![
//!         "{".to_string(),
//!         "    \"name\": \"demo\"".to_string(),
//!         "}".to_string(),
//!         String::new(),
//!     ],
//! );
//! assert!(report.diagnostics().is_empty());
//! ```

pub mod buffer;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod runner;
pub mod structural;

pub use buffer::LineBuffer;
pub use config::{LintConfig, RuleDescriptor, Toggle};
pub use diagnostic::Diagnostic;
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use registry::RuleRegistry;
pub use report::{DiagnosticSink, FileReport, RenderOptions};
pub use rule::{RuleId, Severity, StyleRule};
pub use rules::{
    CommaDangleRule, EolLastRule, IndentRule, MixedWhitespaceRule, SpacingRule, TabsRule,
    WhitespaceRule,
};
pub use runner::LintRunner;
