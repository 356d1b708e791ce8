//! CLI-specific error types and mappings.
//!
//! This module maps location errors to exit codes and user-facing messages.

use stdloc_core::LocationError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A location could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (directory creation, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Output could not be serialized.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
            Self::Io(_) => 73,     // EX_CANTCREAT
            Self::Output(_) => 74, // EX_IOERR
        }
    }
}

impl From<LocationError> for CliError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::NotADirectory(_) | LocationError::CreateFailed { .. } => {
                Self::Io(err.to_string())
            }
            LocationError::EmptyValue { .. }
            | LocationError::NoHomeDir
            | LocationError::NotInitialized(_)
            | LocationError::EmptyPath
            | LocationError::CurrentDirError(_) => Self::Config(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
