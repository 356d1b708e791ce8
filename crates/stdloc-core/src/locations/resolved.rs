//! Snapshot of resolved locations for diagnostics.
//!
//! This module provides a single struct that captures every cached location
//! in one call, making it easy to compare resolution between runs and to
//! expose it via the `stdloc paths` CLI command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::category::Category;
use super::overrides::LocationMode;
use super::store::Locations;

/// All cached locations captured in a single struct.
///
/// Capturing never creates directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocations {
    /// Application name the locations were resolved for
    pub app_name: String,
    /// How the locations were derived
    pub mode: Option<LocationMode>,
    /// Base directory, in base directory mode
    pub basedir: Option<PathBuf>,
    /// Every initialized category
    pub locations: BTreeMap<Category, PathBuf>,
}

impl ResolvedLocations {
    /// Capture the current contents of `locations`.
    pub fn capture(locations: &Locations) -> Self {
        Self {
            app_name: locations.app_name().to_string(),
            mode: locations.mode(),
            basedir: locations.basedir().map(std::path::Path::to_path_buf),
            locations: locations.entries().clone(),
        }
    }
}

impl std::fmt::Display for ResolvedLocations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "app_name = {}", self.app_name)?;
        match self.mode {
            Some(mode) => writeln!(f, "mode = {mode:?}")?,
            None => writeln!(f, "mode = uninitialized")?,
        }
        if let Some(basedir) = &self.basedir {
            writeln!(f, "basedir = {}", basedir.display())?;
        }
        for category in Category::ALL {
            if let Some(path) = self.locations.get(&category) {
                writeln!(f, "{category} = {}", path.display())?;
            }
        }
        Ok(())
    }
}
