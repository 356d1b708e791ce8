//! OS path-query port and its implementations.
//!
//! The [`LocationProvider`] trait is the only place where the host OS is
//! asked for directories. Everything above it (platform strategies, override
//! mode, the location cache) is pure and can be driven by a
//! [`FixedProvider`] in tests or embedded setups.
//!
//! # Design Notes
//!
//! - A provider answers `None` (or an empty path) when it has no usable
//!   location; the resolver turns that into `LocationError::EmptyValue`
//! - Providers never append the application name, the resolver does

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use super::category::StandardLocation;

/// Port for querying writable standard locations from the host.
#[cfg_attr(test, mockall::automock)]
pub trait LocationProvider: Send + Sync {
    /// Return the writable location for `location`, or `None` if unavailable.
    fn writable_location(&self, location: StandardLocation) -> Option<PathBuf>;
}

/// Provider backed by the running host: XDG environment variables on
/// Linux/BSD, known folders on Windows and macOS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl SystemProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl LocationProvider for SystemProvider {
    fn writable_location(&self, location: StandardLocation) -> Option<PathBuf> {
        native_location(location)
    }
}

/// Read a path from an environment variable.
///
/// Empty values count as unset. So do relative ones, which the XDG base
/// directory rules declare invalid.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn env_path(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        return None;
    }
    let path = PathBuf::from(value);
    if path.is_relative() {
        tracing::warn!(var = name, path = %path.display(), "Ignoring relative path");
        return None;
    }
    Some(path)
}

/// `$var` if set, otherwise `~/<components...>`.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn xdg_home(var: &str, components: &[&str]) -> Option<PathBuf> {
    if let Some(path) = env_path(var) {
        return Some(path);
    }
    let mut path = dirs::home_dir()?;
    for component in components {
        path.push(component);
    }
    Some(path)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn native_location(location: StandardLocation) -> Option<PathBuf> {
    match location {
        StandardLocation::AppData | StandardLocation::AppLocalData => {
            xdg_home("XDG_DATA_HOME", &[".local", "share"])
        }
        StandardLocation::Config => xdg_home("XDG_CONFIG_HOME", &[".config"]),
        StandardLocation::Cache => xdg_home("XDG_CACHE_HOME", &[".cache"]),
        StandardLocation::Download => dirs::home_dir().map(|home| home.join("Downloads")),
        StandardLocation::Runtime => xdg_runtime_dir(),
        StandardLocation::Home => dirs::home_dir(),
        StandardLocation::Temp => Some(env::temp_dir()),
    }
}

/// `$XDG_RUNTIME_DIR`, if it is an existing directory owned with mode 0700.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn xdg_runtime_dir() -> Option<PathBuf> {
    let dir = env_path("XDG_RUNTIME_DIR")?;
    let metadata = match std::fs::metadata(&dir) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "XDG_RUNTIME_DIR is not accessible");
            return None;
        }
    };
    if !metadata.is_dir() {
        tracing::warn!(path = %dir.display(), "XDG_RUNTIME_DIR is not a directory");
        return None;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = metadata.permissions().mode() & 0o777;
        if mode != 0o700 {
            tracing::warn!(
                path = %dir.display(),
                mode = %format!("{mode:o}"),
                "XDG_RUNTIME_DIR has wrong permissions, expected 700"
            );
            return None;
        }
    }

    Some(dir)
}

#[cfg(target_os = "macos")]
fn native_location(location: StandardLocation) -> Option<PathBuf> {
    match location {
        StandardLocation::AppData | StandardLocation::AppLocalData => dirs::data_dir(),
        StandardLocation::Config => dirs::preference_dir(),
        StandardLocation::Cache => dirs::cache_dir(),
        StandardLocation::Download => dirs::download_dir(),
        StandardLocation::Runtime => dirs::runtime_dir(),
        StandardLocation::Home => dirs::home_dir(),
        StandardLocation::Temp => Some(env::temp_dir()),
    }
}

#[cfg(target_os = "windows")]
fn native_location(location: StandardLocation) -> Option<PathBuf> {
    match location {
        StandardLocation::AppData | StandardLocation::Config => dirs::data_dir(),
        StandardLocation::AppLocalData | StandardLocation::Cache => dirs::data_local_dir(),
        StandardLocation::Download => dirs::download_dir(),
        StandardLocation::Runtime => None,
        StandardLocation::Home => dirs::home_dir(),
        StandardLocation::Temp => Some(env::temp_dir()),
    }
}

/// Provider answering from a fixed table.
///
/// Kinds missing from the table fall back to the catch-all path if one was
/// set with [`FixedProvider::uniform`], otherwise they are unavailable.
#[derive(Debug, Clone, Default)]
pub struct FixedProvider {
    entries: HashMap<StandardLocation, PathBuf>,
    fallback: Option<PathBuf>,
}

impl FixedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that answers every kind with the same path.
    pub fn uniform(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: HashMap::new(),
            fallback: Some(path.into()),
        }
    }

    /// Answer `location` with `path`. An empty path simulates a failing lookup.
    #[must_use]
    pub fn with(mut self, location: StandardLocation, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(location, path.into());
        self
    }
}

impl LocationProvider for FixedProvider {
    fn writable_location(&self, location: StandardLocation) -> Option<PathBuf> {
        self.entries
            .get(&location)
            .or(self.fallback.as_ref())
            .cloned()
    }
}
