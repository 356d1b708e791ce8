//! Location categories.
//!
//! [`Category`] is what the application asks for; [`StandardLocation`] is
//! what the OS path-query facility understands. The platform strategies map
//! one onto the other.

use std::fmt;

use serde::Serialize;

/// A logical location the application asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Persistent application data.
    #[serde(rename = "data")]
    AppData,
    /// User-edited configuration.
    Config,
    /// Configuration written by the application itself (autoconfig files).
    AutoConfig,
    /// Regeneratable cached data.
    Cache,
    /// Per-session runtime files such as sockets.
    Runtime,
    /// Default destination for downloads.
    Download,
    /// The user settings file (`config.py`).
    ConfigPy,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 7] = [
        Self::Config,
        Self::AutoConfig,
        Self::ConfigPy,
        Self::AppData,
        Self::Cache,
        Self::Download,
        Self::Runtime,
    ];

    /// Stable snake_case name, used in diagnostics output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AppData => "data",
            Self::Config => "config",
            Self::AutoConfig => "auto_config",
            Self::Cache => "cache",
            Self::Runtime => "runtime",
            Self::Download => "download",
            Self::ConfigPy => "config_py",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A location kind the OS path-query facility can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardLocation {
    /// The user's home directory.
    Home,
    /// Roaming application data (XDG data home on Linux).
    AppData,
    /// Machine-local application data.
    AppLocalData,
    /// Configuration root.
    Config,
    /// Cache root.
    Cache,
    /// Per-user runtime directory.
    Runtime,
    /// Temporary files.
    Temp,
    /// Downloads folder.
    Download,
}

impl StandardLocation {
    /// Whether resolved paths of this kind get the application name appended.
    pub(super) const fn is_app_specific(self) -> bool {
        !matches!(self, Self::Home | Self::Download)
    }
}

impl fmt::Display for StandardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Home => "HomeLocation",
            Self::AppData => "AppDataLocation",
            Self::AppLocalData => "AppLocalDataLocation",
            Self::Config => "ConfigLocation",
            Self::Cache => "CacheLocation",
            Self::Runtime => "RuntimeLocation",
            Self::Temp => "TempLocation",
            Self::Download => "DownloadLocation",
        };
        f.write_str(name)
    }
}
