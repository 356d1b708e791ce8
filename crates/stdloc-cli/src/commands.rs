//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the location resolver.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show resolved locations without creating anything
    Paths {
        /// Print as JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },

    /// Initialize locations, create the directories and tag the cache
    Init,
}
