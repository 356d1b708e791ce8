//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(locations: &mut Locations, overrides: &DirOverrides, ...) -> Result<String, CliError>`
//! - Thin wrappers that:
//!   1. Initialize the location cache
//!   2. Call `Locations` accessors
//!   3. Return the text to print
//!
//! Handlers should NOT print or exit; `main` does that.

pub mod init;
pub mod paths;
