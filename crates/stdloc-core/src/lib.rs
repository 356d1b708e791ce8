//! Platform-appropriate application locations.
//!
//! See [`locations`] for the full API. The most common entry points are
//! re-exported here.

#![deny(unused_crate_dependencies)]

pub mod locations;

pub use locations::{
    CacheTagStatus, Category, DirOverrides, FixedProvider, LocationError, LocationMode,
    LocationProvider, Locations, LocationsBuilder, Platform, ResolvedLocations, StandardLocation,
    SystemProvider, ensure_exists,
};

// Dev-dependencies only exercised by some test targets
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tracing_test as _;
