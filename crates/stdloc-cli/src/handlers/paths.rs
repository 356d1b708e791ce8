//! Paths command handler.
//!
//! Displays all resolved locations for diagnostics and debugging.
//! Resolution only: nothing is created on disk.

use stdloc_core::{DirOverrides, Locations, ResolvedLocations};

use crate::error::CliError;

/// Execute the paths command.
///
/// Resolves every category and renders it in `key = value` format, or as
/// pretty-printed JSON with `json`.
pub fn execute(
    locations: &mut Locations,
    overrides: &DirOverrides,
    json: bool,
) -> Result<String, CliError> {
    locations.init_dirs(overrides)?;
    let snapshot = ResolvedLocations::capture(locations);

    if json {
        let mut rendered = serde_json::to_string_pretty(&snapshot)?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(snapshot.to_string())
    }
}
