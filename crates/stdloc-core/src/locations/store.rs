//! The location cache.
//!
//! [`Locations`] is owned by the application's startup sequence: it is
//! initialized once (from command-line overrides or through the platform
//! strategy) and then passed by reference to whoever needs a directory.
//! Directories are created lazily by the accessors, never by the
//! initializers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::cache_tag::{self, CacheTagStatus};
use super::category::Category;
use super::ensure::ensure_exists;
use super::error::LocationError;
use super::overrides::{BaseDir, CONFIG_PY, DirOverrides, LocationMode};
use super::platform::{Platform, Resolver};
use super::provider::{LocationProvider, SystemProvider};

/// Root of package-installed, read-only application data on Linux.
pub const SYSTEM_DATA_ROOT: &str = "/usr/share";

/// Builder for [`Locations`].
pub struct LocationsBuilder {
    app_name: String,
    platform: Platform,
    provider: Arc<dyn LocationProvider>,
    system_data_root: Option<PathBuf>,
}

impl LocationsBuilder {
    /// Start from the host platform and provider.
    pub fn new(app_name: impl Into<String>) -> Self {
        let platform = Platform::current();
        let system_data_root = (platform == Platform::Xdg && cfg!(target_os = "linux"))
            .then(|| PathBuf::from(SYSTEM_DATA_ROOT));
        Self {
            app_name: app_name.into(),
            platform,
            provider: Arc::new(SystemProvider::new()),
            system_data_root,
        }
    }

    /// Use a different platform strategy.
    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Use a different OS path-query provider.
    #[must_use]
    pub fn provider(mut self, provider: impl LocationProvider + 'static) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Look for system data under `root` instead of `/usr/share`.
    ///
    /// `None` disables the system data lookup. Ignored off XDG platforms.
    #[must_use]
    pub fn system_data_root(mut self, root: Option<PathBuf>) -> Self {
        self.system_data_root = root;
        self
    }

    pub fn build(self) -> Locations {
        let platform = self.platform;
        Locations {
            app_name: self.app_name,
            platform,
            provider: self.provider,
            system_data_root: self.system_data_root.filter(|_| platform == Platform::Xdg),
            mode: None,
            basedir: None,
            entries: BTreeMap::new(),
        }
    }
}

/// Cache of resolved application locations.
pub struct Locations {
    app_name: String,
    platform: Platform,
    provider: Arc<dyn LocationProvider>,
    system_data_root: Option<PathBuf>,
    mode: Option<LocationMode>,
    basedir: Option<PathBuf>,
    entries: BTreeMap<Category, PathBuf>,
}

impl std::fmt::Debug for Locations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Locations")
            .field("app_name", &self.app_name)
            .field("platform", &self.platform)
            .field("mode", &self.mode)
            .field("basedir", &self.basedir)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl Locations {
    /// Locations for `app_name` on the host platform.
    pub fn new(app_name: impl Into<String>) -> Self {
        LocationsBuilder::new(app_name).build()
    }

    pub fn builder(app_name: impl Into<String>) -> LocationsBuilder {
        LocationsBuilder::new(app_name)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// How the cached locations were derived, if any initializer ran.
    pub const fn mode(&self) -> Option<LocationMode> {
        self.mode
    }

    /// The absolute base directory, in base directory mode.
    pub fn basedir(&self) -> Option<&Path> {
        self.basedir.as_deref()
    }

    /// Initialize every category, then tag the cache directory.
    ///
    /// Does not reset previously cached locations; call [`Locations::reset`]
    /// first to start over.
    pub fn init(&mut self, overrides: &DirOverrides) -> Result<(), LocationError> {
        self.init_dirs(overrides)?;
        self.write_cache_tag();
        Ok(())
    }

    /// Initialize every category without touching the disk.
    pub fn init_dirs(&mut self, overrides: &DirOverrides) -> Result<(), LocationError> {
        self.init_config(overrides)?;
        self.init_data(overrides)?;
        self.init_cache(overrides)?;
        self.init_download(overrides)?;
        self.init_runtime(overrides)?;
        tracing::debug!(mode = ?self.mode, entries = ?self.entries, "Locations initialized");
        Ok(())
    }

    /// Forget every cached location.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.mode = None;
        self.basedir = None;
    }

    /// Populate `Config`, `AutoConfig` and `ConfigPy`.
    pub fn init_config(&mut self, overrides: &DirOverrides) -> Result<(), LocationError> {
        let (config, auto_config) = match self.enter_mode(overrides)? {
            Some(basedir) => (
                basedir.path(Category::Config),
                basedir.path(Category::AutoConfig),
            ),
            None => {
                let resolver = self.resolver();
                (
                    self.platform.config(&resolver)?,
                    self.platform.auto_config(&resolver)?,
                )
            }
        };

        let config_py = match overrides.resolved_config_py()? {
            Some(path) => path,
            None => config.join(CONFIG_PY),
        };

        self.entries.insert(Category::Config, config);
        self.entries.insert(Category::AutoConfig, auto_config);
        self.entries.insert(Category::ConfigPy, config_py);
        Ok(())
    }

    /// Populate `AppData`.
    pub fn init_data(&mut self, overrides: &DirOverrides) -> Result<(), LocationError> {
        self.init_category(Category::AppData, overrides, Platform::data)
    }

    /// Populate `Cache`.
    pub fn init_cache(&mut self, overrides: &DirOverrides) -> Result<(), LocationError> {
        self.init_category(Category::Cache, overrides, Platform::cache)
    }

    /// Populate `Download`.
    pub fn init_download(&mut self, overrides: &DirOverrides) -> Result<(), LocationError> {
        self.init_category(Category::Download, overrides, Platform::download)
    }

    /// Populate `Runtime`.
    ///
    /// On XDG platforms an unusable `XDG_RUNTIME_DIR` falls back to the temp
    /// location; elsewhere the temp location is used directly.
    pub fn init_runtime(&mut self, overrides: &DirOverrides) -> Result<(), LocationError> {
        self.init_category(Category::Runtime, overrides, Platform::runtime)
    }

    fn init_category(
        &mut self,
        category: Category,
        overrides: &DirOverrides,
        strategy: fn(Platform, &Resolver<'_>) -> Result<PathBuf, LocationError>,
    ) -> Result<(), LocationError> {
        let path = match self.enter_mode(overrides)? {
            Some(basedir) => basedir.path(category),
            None => strategy(self.platform, &self.resolver())?,
        };
        self.entries.insert(category, path);
        Ok(())
    }

    /// Record which mode `overrides` select and return the base directory, if any.
    fn enter_mode(&mut self, overrides: &DirOverrides) -> Result<Option<BaseDir>, LocationError> {
        let basedir = BaseDir::from_overrides(overrides)?;
        match &basedir {
            Some(basedir) => {
                self.mode = Some(LocationMode::BaseDir);
                self.basedir = Some(basedir.root().to_path_buf());
            }
            None => {
                self.mode = Some(LocationMode::Platform);
                self.basedir = None;
            }
        }
        Ok(basedir)
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.provider.as_ref(), &self.app_name)
    }

    /// The cached path for `category`, without creating anything.
    pub fn path(&self, category: Category) -> Result<&Path, LocationError> {
        self.entries
            .get(&category)
            .map(PathBuf::as_path)
            .ok_or(LocationError::NotInitialized(category))
    }

    /// Cached path for `category`, created on disk first.
    fn materialized(&self, category: Category) -> Result<PathBuf, LocationError> {
        ensure_exists(self.path(category)?)
    }

    /// The configuration directory, created if missing.
    ///
    /// `auto` selects the directory for auto-generated config. It only
    /// differs from the user config directory on macOS, outside base
    /// directory mode.
    pub fn config(&self, auto: bool) -> Result<PathBuf, LocationError> {
        if auto {
            self.materialized(Category::AutoConfig)
        } else {
            self.materialized(Category::Config)
        }
    }

    /// The settings file path. Never created.
    pub fn config_py(&self) -> Result<PathBuf, LocationError> {
        self.path(Category::ConfigPy).map(Path::to_path_buf)
    }

    /// The data directory, created if missing.
    ///
    /// With `system`, a package-installed `/usr/share/<app>` is preferred when
    /// it exists; it is looked up on every call and never created.
    pub fn data(&self, system: bool) -> Result<PathBuf, LocationError> {
        if system {
            if let Some(path) = self.system_data() {
                return Ok(path);
            }
        }
        self.materialized(Category::AppData)
    }

    fn system_data(&self) -> Option<PathBuf> {
        let path = self.system_data_root.as_ref()?.join(&self.app_name);
        path.exists().then_some(path)
    }

    /// The cache directory, created if missing.
    pub fn cache(&self) -> Result<PathBuf, LocationError> {
        self.materialized(Category::Cache)
    }

    /// The download directory. Never created here.
    pub fn download(&self) -> Result<PathBuf, LocationError> {
        self.path(Category::Download).map(Path::to_path_buf)
    }

    /// The runtime directory, created if missing on XDG platforms.
    pub fn runtime(&self) -> Result<PathBuf, LocationError> {
        if self.platform.creates_runtime_dir() {
            self.materialized(Category::Runtime)
        } else {
            self.path(Category::Runtime).map(Path::to_path_buf)
        }
    }

    /// Write `CACHEDIR.TAG` into the cache directory.
    ///
    /// Best effort: failures (including failing to create the cache
    /// directory) are logged, never returned.
    pub fn write_cache_tag(&self) -> CacheTagStatus {
        match self.cache() {
            Ok(dir) => cache_tag::write_cache_tag(&dir, &self.app_name),
            Err(e) => {
                let path = self.path(Category::Cache).unwrap_or_else(|_| Path::new(""));
                cache_tag::log_failure(&path.join(cache_tag::CACHEDIR_TAG), &e);
                CacheTagStatus::Failed
            }
        }
    }

    pub(super) fn entries(&self) -> &BTreeMap<Category, PathBuf> {
        &self.entries
    }
}
