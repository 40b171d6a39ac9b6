//! Error types for jsonlint operations.
//!
//! This module defines [`JsonlintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lint findings are never errors: they are collected as diagnostics and
//!   reported at the end of a file's pass
//! - `JsonlintError` covers the conditions that prevent a file from being
//!   linted at all (missing file, unreadable content)
//! - Use `anyhow::Error` (via `JsonlintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jsonlint operations.
#[derive(Debug, Error)]
pub enum JsonlintError {
    /// The file does not exist on disk.
    #[error("File \"{path}\" does not exist.")]
    FileNotFound { path: PathBuf },

    /// The file exists but its content could not be read.
    #[error("Failed to read {path}: {message}")]
    FileUnreadable { path: PathBuf, message: String },

    /// A rule was given a parameter it cannot interpret.
    #[error("Invalid value \"{value}\" for rule '{rule}'")]
    InvalidRuleParameter { rule: String, value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for jsonlint operations.
pub type Result<T> = std::result::Result<T, JsonlintError>;
