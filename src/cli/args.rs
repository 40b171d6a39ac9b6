//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! Rule options take a `STATE` value: `true` or `false`, with an optional
//! comma-separated parameter where the rule has one (`--indent true,2`).
//! For the allowance-style rules (`--comma`, `--mixed`, `--tabs`) the value
//! states what the file may contain; for the others it toggles the check.

use clap::Parser;
use std::path::PathBuf;

use tracing::warn;

use crate::lint::{LintConfig, RenderOptions};

/// jsonlint - Line-oriented JSON linting.
#[derive(Debug, Parser)]
#[command(name = "jsonlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to lint (directories are walked recursively)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Dangling commas: true allows a comma before a closing brace
    #[arg(short = 'c', long = "comma", value_name = "STATE")]
    pub comma: Option<String>,

    /// Indentation: true/false with an optional width, e.g. "true,2"
    #[arg(short = 'i', long = "indent", value_name = "STATE")]
    pub indent: Option<String>,

    /// Mixed whitespace: true allows leading tabs and spaces together
    #[arg(short = 'm', long = "mixed", value_name = "STATE")]
    pub mixed: Option<String>,

    /// Tabs: false flags any line containing a tab character
    #[arg(short = 't', long = "tabs", value_name = "STATE")]
    pub tabs: Option<String>,

    /// Blank line at end of file: true/false
    #[arg(short = 'e', long = "eol", value_name = "STATE")]
    pub eol: Option<String>,

    /// Colon spacing: true/false
    #[arg(short = 's', long = "space", value_name = "STATE")]
    pub space: Option<String>,

    /// Trailing whitespace: true/false
    #[arg(short = 'w', long = "whitespace", value_name = "STATE")]
    pub whitespace: Option<String>,

    /// Prefix each diagnostic with its severity name
    #[arg(long)]
    pub severity: bool,

    /// Sort diagnostics by severity (errors first), then line
    #[arg(long = "sort-severity")]
    pub sort_severity: bool,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Suppress per-file reports (diagnostics are still computed)
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit non-zero on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Resolve the rule configuration from the parsed arguments.
    ///
    /// An unparseable rule value fails closed: the rule is disabled for this
    /// run, a warning is logged, and resolution continues for the remaining
    /// rules.
    pub fn resolve_config(&self) -> LintConfig {
        let mut config = LintConfig::default();

        let overrides: [(&str, &Option<String>); 7] = [
            ("comma", &self.comma),
            ("indent", &self.indent),
            ("mixed", &self.mixed),
            ("tabs", &self.tabs),
            ("eol", &self.eol),
            ("space", &self.space),
            ("whitespace", &self.whitespace),
        ];

        for (option, value) in overrides {
            if let Some(value) = value {
                if let Err(e) = config.apply(option, value) {
                    warn!("{e}; the rule is disabled for this run");
                }
            }
        }

        config
    }

    /// Rendering options implied by the parsed arguments.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_severity: self.severity,
            sort_by_severity: self.sort_severity,
        }
    }
}
