//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use stdloc_core::DirOverrides;

use crate::commands::Commands;

/// Default application name used for directory names.
pub const DEFAULT_APP_NAME: &str = "stdloc";

/// Command-line interface definition for the location resolver.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "stdloc")]
#[command(about = "Resolve config, data, cache, runtime and download locations")]
#[command(version)]
pub struct Cli {
    /// Base directory for all storage, replacing the platform locations
    #[arg(long = "basedir", global = true, env = "STDLOC_BASEDIR")]
    pub basedir: Option<PathBuf>,

    /// Path to the settings file, relative to the working directory
    #[arg(long = "config-py", global = true, env = "STDLOC_CONFIG_PY")]
    pub config_py: Option<PathBuf>,

    /// Application name used for directory names
    #[arg(long = "app-name", global = true, default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The location overrides requested on the command line.
    pub fn overrides(&self) -> DirOverrides {
        DirOverrides {
            basedir: self.basedir.clone(),
            config_py: self.config_py.clone(),
        }
    }
}
