//! Location-related error types.
//!
//! Provides semantic errors for location resolution and directory operations
//! without exposing which OS facility produced the failure.

use std::path::PathBuf;
use thiserror::Error;

use super::category::{Category, StandardLocation};

/// Errors that can occur during location resolution and directory operations.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The OS facility returned no usable path for a location.
    #[error("No writable location available for {location}")]
    EmptyValue { location: StandardLocation },

    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// An accessor was called before the matching initializer ran.
    #[error("Location {0} has not been initialized")]
    NotInitialized(Category),

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

impl LocationError {
    /// Whether this error means the OS facility had nothing to offer.
    pub const fn is_empty_value(&self) -> bool {
        matches!(self, Self::EmptyValue { .. })
    }
}
