//! Command-line interface for jsonlint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the top-level run loop: expand the path arguments, lint each file to
//! completion in order, then render the batch in the requested format.

pub mod args;

pub use args::Cli;

use std::io::Write;

use tracing::error;

use crate::error::Result;
use crate::files;
use crate::lint::{HumanFormatter, JsonFormatter, LintRunner, OutputFormat, ReportFormatter};

/// Exit code when no input files survive discovery.
pub const EXIT_NO_INPUT: i32 = 2;

/// Run the linter with parsed arguments, writing reports to `out` and
/// per-file access errors to `err`.
///
/// Returns the process exit code: 0 for a clean run (warnings tolerated
/// unless `--strict`), 1 when any file produced an error diagnostic, and
/// [`EXIT_NO_INPUT`] when there was nothing to lint. A file that cannot be
/// read is reported on `err` and skipped; the batch always continues.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> Result<i32> {
    let config = cli.resolve_config();
    let files = files::expand_paths(&cli.paths);

    if files.is_empty() {
        writeln!(err, "File list is empty")?;
        return Ok(EXIT_NO_INPUT);
    }

    let mut runner = LintRunner::new(config);

    for file in &files {
        if let Err(e) = runner.lint_file(file) {
            error!(file = %file.display(), "unreadable input");
            writeln!(err, "{e}")?;
        }
    }

    if !cli.quiet {
        match OutputFormat::from_name(&cli.format) {
            OutputFormat::Json => JsonFormatter::new().format(runner.reports(), out)?,
            OutputFormat::Human => {
                let use_color = !cli.no_color && console::colors_enabled();
                HumanFormatter::new(use_color, cli.render_options())
                    .format(runner.reports(), out)?;
            }
        }
    }

    let failed = runner.has_errors() || (cli.strict && runner.has_warnings());
    Ok(if failed { 1 } else { 0 })
}
