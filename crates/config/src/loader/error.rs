//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Report `.env` failures without carrying any file contents.
//!
//! Does NOT handle:
//! - Deciding which dotenv failures are ignorable (see `defaults.rs`).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, positions, etc.).
//! - No variant ever includes a variable value or raw `.env` line content.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Interpolation did not reach a fixed point.
    #[error("Environment variables reference each other in a cycle: {}", keys.join(", "))]
    InterpolationCycle { keys: Vec<String> },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the line number of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at line {line}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { line: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },
}

impl ConfigError {
    pub(crate) fn invalid(var: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            var: var.to_string(),
            message: message.into(),
        }
    }
}

