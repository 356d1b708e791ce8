//! Command-line front end for `stdloc-core`.
//!
//! Parses the global location overrides, runs the `paths` and `init`
//! commands, and maps location errors to exit codes.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use anyhow as _;
use tracing as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
