//! Base-directory override mode.
//!
//! When the user passes an explicit base directory, every category lives in
//! a fixed subdirectory of it and the OS is never asked.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::category::Category;
use super::error::LocationError;
use super::platform::normalize_user_path;

/// File name of the user settings file inside the config directory.
pub const CONFIG_PY: &str = "config.py";

/// User-supplied location overrides, typically from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirOverrides {
    /// Root under which every category is placed.
    pub basedir: Option<PathBuf>,
    /// Explicit settings file, replacing `<config>/config.py`.
    pub config_py: Option<PathBuf>,
}

impl DirOverrides {
    /// No overrides: resolve everything through the platform.
    pub fn none() -> Self {
        Self::default()
    }

    /// Place every category under `basedir`.
    pub fn with_basedir(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: Some(basedir.into()),
            config_py: None,
        }
    }

    /// Use `path` as the settings file.
    #[must_use]
    pub fn config_py(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_py = Some(path.into());
        self
    }

    /// The explicit settings file, made absolute against the working directory.
    pub(super) fn resolved_config_py(&self) -> Result<Option<PathBuf>, LocationError> {
        self.config_py
            .as_deref()
            .map(normalize_user_path)
            .transpose()
    }
}

/// How the cached locations were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Every category lives under a user-supplied base directory.
    BaseDir,
    /// Categories were resolved through the platform strategy.
    Platform,
}

/// An absolute base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct BaseDir {
    root: PathBuf,
}

impl BaseDir {
    /// Build from `overrides`, resolving a relative root against the cwd.
    pub(super) fn from_overrides(overrides: &DirOverrides) -> Result<Option<Self>, LocationError> {
        let Some(raw) = overrides.basedir.as_deref() else {
            return Ok(None);
        };
        let root = normalize_user_path(raw)?;
        tracing::debug!(basedir = %root.display(), "Using base directory");
        Ok(Some(Self { root }))
    }

    pub(super) fn root(&self) -> &Path {
        &self.root
    }

    /// `root/<label>` for `category`.
    pub(super) fn path(&self, category: Category) -> PathBuf {
        self.root.join(label(category))
    }
}

/// Subdirectory name of `category` under a base directory.
///
/// Auto-generated config shares the user config directory, and the settings
/// file lives inside it.
pub(super) const fn label(category: Category) -> &'static str {
    match category {
        Category::Config | Category::AutoConfig | Category::ConfigPy => "config",
        Category::AppData => "data",
        Category::Cache => "cache",
        Category::Download => "download",
        Category::Runtime => "runtime",
    }
}
