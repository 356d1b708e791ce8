//! Standard application locations: config, data, cache, runtime and download.
//!
//! This module provides the canonical location resolution for an application:
//! - Platform conventions (XDG, macOS, Windows, degraded platforms)
//! - A base-directory override that places everything under one root
//! - Lazy, race-safe directory creation with private permissions
//! - A `CACHEDIR.TAG` marker in the cache directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `LocationError` for clear error handling
//! - No global state: a [`Locations`] value is created at startup and passed around
//! - OS queries go through the [`LocationProvider`] port, so tests inject fakes

mod cache_tag;
mod category;
mod ensure;
mod error;
mod overrides;
mod platform;
mod provider;
mod resolved;
mod store;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::LocationError;

// Categories
pub use category::{Category, StandardLocation};

// OS path-query port
pub use provider::{FixedProvider, LocationProvider, SystemProvider};

// Platform strategies
pub use platform::Platform;

// Overrides
pub use overrides::{CONFIG_PY, DirOverrides, LocationMode};

// Location cache
pub use store::{Locations, LocationsBuilder, SYSTEM_DATA_ROOT};

// Directory operations
pub use ensure::ensure_exists;

// Cache directory tag
pub use cache_tag::{
    CACHEDIR_SIGNATURE, CACHEDIR_TAG, CacheTagStatus, cache_tag_contents, write_cache_tag,
};

// Snapshot for diagnostics and CLI
pub use resolved::ResolvedLocations;
