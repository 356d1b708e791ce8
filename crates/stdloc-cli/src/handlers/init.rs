//! Init command handler.
//!
//! Runs the full startup sequence: resolve every location, create the
//! directories that are created on access, and tag the cache directory.

use std::fmt::Write as _;

use stdloc_core::{CacheTagStatus, Category, DirOverrides, Locations};

use crate::error::CliError;

/// Execute the init command.
///
/// The download directory is reported but never created.
pub fn execute(locations: &mut Locations, overrides: &DirOverrides) -> Result<String, CliError> {
    locations.init_dirs(overrides)?;
    let tag = locations.write_cache_tag();

    let created = [
        (Category::Config, locations.config(false)?),
        (Category::AutoConfig, locations.config(true)?),
        (Category::AppData, locations.data(false)?),
        (Category::Cache, locations.cache()?),
        (Category::Runtime, locations.runtime()?),
        (Category::Download, locations.download()?),
        (Category::ConfigPy, locations.config_py()?),
    ];

    let mut output = String::new();
    for (category, path) in created {
        let _ = writeln!(output, "{category} = {}", path.display());
    }
    let tag = match tag {
        CacheTagStatus::Written => "written",
        CacheTagStatus::AlreadyPresent => "already present",
        CacheTagStatus::Failed => "failed",
    };
    let _ = writeln!(output, "cache_tag = {tag}");
    Ok(output)
}
