//! Platform strategies and path resolution.
//!
//! This module contains the per-OS rules that turn provider answers into
//! application locations, plus helpers for normalizing user-supplied paths.
//! Public API is exposed through sibling modules.

use std::env;
use std::ffi::OsStr;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use super::category::StandardLocation;
use super::error::LocationError;
use super::provider::LocationProvider;

/// The closed set of platform conventions, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and the BSDs: XDG base directories.
    Xdg,
    /// macOS: `~/Library` folders and a dotfile config directory.
    MacOs,
    /// Windows: known folders with `data`/`config`/`cache` sub-labels.
    Windows,
    /// Anything else (e.g. Haiku), where lookups may come back empty.
    Other,
}

impl Platform {
    /// The strategy for the platform this binary was built for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            Self::Xdg
        } else {
            Self::Other
        }
    }

    /// Whether the runtime directory is created on access.
    ///
    /// Elsewhere the runtime location is a shared temp path we only read.
    pub const fn creates_runtime_dir(self) -> bool {
        matches!(self, Self::Xdg)
    }

    pub(super) fn data(self, resolver: &Resolver<'_>) -> Result<PathBuf, LocationError> {
        match self {
            Self::Windows => Ok(resolver
                .writable_location(StandardLocation::AppData)?
                .join("data")),
            Self::Other => match resolver.writable_location(StandardLocation::AppData) {
                Err(e) if e.is_empty_value() => {
                    tracing::debug!("No app data location, deriving it from the config location");
                    Ok(resolver
                        .writable_location(StandardLocation::Config)?
                        .join("data"))
                }
                other => other,
            },
            Self::Xdg | Self::MacOs => resolver.writable_location(StandardLocation::AppData),
        }
    }

    pub(super) fn config(self, resolver: &Resolver<'_>) -> Result<PathBuf, LocationError> {
        match self {
            Self::MacOs => Ok(resolver.home()?.join(format!(".{}", resolver.app_name()))),
            _ => self.auto_config(resolver),
        }
    }

    pub(super) fn auto_config(self, resolver: &Resolver<'_>) -> Result<PathBuf, LocationError> {
        match self {
            Self::Windows => Ok(resolver
                .writable_location(StandardLocation::AppData)?
                .join("config")),
            Self::Xdg | Self::MacOs | Self::Other => {
                resolver.writable_location(StandardLocation::Config)
            }
        }
    }

    pub(super) fn cache(self, resolver: &Resolver<'_>) -> Result<PathBuf, LocationError> {
        match self {
            // Local, not roaming
            Self::Windows => Ok(resolver
                .writable_location(StandardLocation::AppLocalData)?
                .join("cache")),
            Self::Xdg | Self::MacOs | Self::Other => {
                resolver.writable_location(StandardLocation::Cache)
            }
        }
    }

    pub(super) fn download(self, resolver: &Resolver<'_>) -> Result<PathBuf, LocationError> {
        resolver.writable_location(StandardLocation::Download)
    }

    pub(super) fn runtime(self, resolver: &Resolver<'_>) -> Result<PathBuf, LocationError> {
        if self != Self::Xdg {
            return resolver.writable_location(StandardLocation::Temp);
        }

        match resolver.writable_location(StandardLocation::Runtime) {
            Err(e) if e.is_empty_value() => {
                tracing::warn!("Runtime location is missing or invalid, falling back to temp location");
                resolver.writable_location(StandardLocation::Temp)
            }
            other => other,
        }
    }
}

/// Path Resolver: queries a provider and normalizes its answers.
pub(super) struct Resolver<'a> {
    provider: &'a dyn LocationProvider,
    app_name: &'a str,
}

impl<'a> Resolver<'a> {
    pub(super) fn new(provider: &'a dyn LocationProvider, app_name: &'a str) -> Self {
        Self { provider, app_name }
    }

    pub(super) const fn app_name(&self) -> &str {
        self.app_name
    }

    /// Query `location`, failing with `EmptyValue` if nothing usable comes back.
    /// Empty and relative answers are not usable.
    ///
    /// The application name is appended to app-specific kinds unless the
    /// provider already returned a path ending in it.
    pub(super) fn writable_location(
        &self,
        location: StandardLocation,
    ) -> Result<PathBuf, LocationError> {
        let answer = self.provider.writable_location(location);
        tracing::debug!(%location, path = ?answer, "writable location");

        let mut path = answer
            .filter(|path| !path.as_os_str().is_empty())
            .map(native_separators)
            .filter(|path| absolute_answer(location, path))
            .ok_or(LocationError::EmptyValue { location })?;

        if location.is_app_specific() && path.file_name() != Some(OsStr::new(self.app_name)) {
            path.push(self.app_name);
        }
        Ok(path)
    }

    pub(super) fn home(&self) -> Result<PathBuf, LocationError> {
        self.provider
            .writable_location(StandardLocation::Home)
            .filter(|path| !path.as_os_str().is_empty())
            .map(native_separators)
            .filter(|path| absolute_answer(StandardLocation::Home, path))
            .ok_or(LocationError::NoHomeDir)
    }
}

/// Whether `path` is absolute. Relative answers are logged and rejected.
fn absolute_answer(location: StandardLocation, path: &Path) -> bool {
    if path.is_absolute() {
        return true;
    }
    tracing::warn!(%location, path = %path.display(), "Ignoring relative location");
    false
}

/// Replace foreign separators in a provider answer with the native one.
fn native_separators(path: PathBuf) -> PathBuf {
    if MAIN_SEPARATOR == '/' {
        return path;
    }
    match path.to_str() {
        Some(raw) if raw.contains('/') => PathBuf::from(replace_separators(raw, MAIN_SEPARATOR)),
        _ => path,
    }
}

fn replace_separators(raw: &str, separator: char) -> String {
    raw.chars()
        .map(|c| if c == '/' { separator } else { c })
        .collect()
}

/// Make a user-provided path absolute.
///
/// Relative paths are resolved against the current working directory, and
/// `.`/`..` components are folded lexically. `~` is not expanded.
pub(super) fn normalize_user_path(raw: &Path) -> Result<PathBuf, LocationError> {
    if raw.as_os_str().is_empty() {
        return Err(LocationError::EmptyPath);
    }

    if raw.is_absolute() {
        return Ok(clean(raw));
    }

    env::current_dir()
        .map(|cwd| clean(&cwd.join(raw)))
        .map_err(|e| LocationError::CurrentDirError(e.to_string()))
}

fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                // `..` above the root is the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::provider::{FixedProvider, MockLocationProvider};
    use crate::locations::test_utils::{CwdGuard, ENV_LOCK};
    use tempfile::tempdir;

    const APP: &str = "stdloc_test";

    type Strategy = fn(Platform, &Resolver<'_>) -> Result<PathBuf, LocationError>;

    fn resolve(
        platform: Platform,
        provider: &FixedProvider,
        f: Strategy,
    ) -> Result<PathBuf, LocationError> {
        f(platform, &Resolver::new(provider, APP))
    }

    #[test]
    fn empty_answer_is_an_error() {
        let provider = FixedProvider::uniform("");
        let resolver = Resolver::new(&provider, APP);
        let err = resolver
            .writable_location(StandardLocation::AppData)
            .unwrap_err();
        assert!(matches!(
            err,
            LocationError::EmptyValue {
                location: StandardLocation::AppData
            }
        ));
    }

    #[test]
    fn app_name_is_appended_once() {
        let provider = FixedProvider::new()
            .with(StandardLocation::Config, "/home/u/.config")
            .with(StandardLocation::Cache, "/home/u/.cache/stdloc_test");
        let resolver = Resolver::new(&provider, APP);

        assert_eq!(
            resolver.writable_location(StandardLocation::Config).unwrap(),
            Path::new("/home/u/.config/stdloc_test")
        );
        assert_eq!(
            resolver.writable_location(StandardLocation::Cache).unwrap(),
            Path::new("/home/u/.cache/stdloc_test")
        );
    }

    #[test]
    fn download_is_not_suffixed() {
        let provider = FixedProvider::new().with(StandardLocation::Download, "/home/u/Downloads");
        let path = resolve(Platform::Xdg, &provider, Platform::download).unwrap();
        assert_eq!(path, Path::new("/home/u/Downloads"));
    }

    #[test]
    fn replace_separators_uses_only_the_given_separator() {
        let replaced = replace_separators("C:/Users/u/AppData/Roaming", '\\');
        assert!(!replaced.contains('/'));
        assert_eq!(replaced, "C:\\Users\\u\\AppData\\Roaming");
    }

    #[cfg(windows)]
    #[test]
    fn provider_answers_get_native_separators() {
        let provider = FixedProvider::new().with(StandardLocation::AppData, "C:/Users/u/AppData");
        let path = Resolver::new(&provider, APP)
            .writable_location(StandardLocation::AppData)
            .unwrap();
        let raw = path.to_str().unwrap();
        assert!(!raw.contains('/'));
        assert!(raw.contains('\\'));
    }

    #[test]
    fn fake_windows_uses_sub_labels() {
        let root = Path::new("/fake/AppData").join(APP);
        let provider = FixedProvider::uniform(&root);

        let cases: [(Strategy, &str); 4] = [
            (Platform::data, "data"),
            (Platform::config, "config"),
            (Platform::auto_config, "config"),
            (Platform::cache, "cache"),
        ];
        for (f, label) in cases {
            let path = resolve(Platform::Windows, &provider, f).unwrap();
            assert_eq!(path, root.join(label));
        }
    }

    #[test]
    fn fake_haiku_derives_data_from_config() {
        let config = Path::new("/boot/home/config").join(APP);
        let provider = FixedProvider::new()
            .with(StandardLocation::AppData, "")
            .with(StandardLocation::Config, &config);

        let path = resolve(Platform::Other, &provider, Platform::data).unwrap();
        assert_eq!(path, config.join("data"));
    }

    #[test]
    fn fake_mac_config_is_a_home_dotfile() {
        let provider = FixedProvider::new()
            .with(StandardLocation::Home, "/Users/u")
            .with(StandardLocation::Config, "/Users/u/Library/Preferences");

        let config = resolve(Platform::MacOs, &provider, Platform::config).unwrap();
        assert_eq!(config, Path::new("/Users/u/.stdloc_test"));

        let auto = resolve(Platform::MacOs, &provider, Platform::auto_config).unwrap();
        assert_eq!(auto, Path::new("/Users/u/Library/Preferences/stdloc_test"));
    }

    #[test]
    fn mac_config_without_home_fails() {
        let provider = FixedProvider::new();
        let err = resolve(Platform::MacOs, &provider, Platform::config).unwrap_err();
        assert!(matches!(err, LocationError::NoHomeDir));
    }

    #[test]
    fn xdg_runtime_falls_back_to_temp() {
        let provider = FixedProvider::new().with(StandardLocation::Temp, "/var/tmp");
        let path = resolve(Platform::Xdg, &provider, Platform::runtime).unwrap();
        assert_eq!(path, Path::new("/var/tmp/stdloc_test"));
    }

    #[test]
    fn runtime_with_empty_temp_fails_off_xdg() {
        let provider = FixedProvider::uniform("");
        let err = resolve(Platform::Windows, &provider, Platform::runtime).unwrap_err();
        assert!(err.is_empty_value());
    }

    #[test]
    fn non_xdg_runtime_never_queries_runtime_location() {
        let mut provider = MockLocationProvider::new();
        provider
            .expect_writable_location()
            .withf(|location| *location == StandardLocation::Temp)
            .times(1)
            .returning(|_| Some(PathBuf::from("/tmp")));

        let path = Platform::MacOs
            .runtime(&Resolver::new(&provider, APP))
            .unwrap();
        assert_eq!(path, Path::new("/tmp/stdloc_test"));
    }

    #[test]
    fn only_xdg_creates_runtime_dir() {
        assert!(Platform::Xdg.creates_runtime_dir());
        assert!(!Platform::MacOs.creates_runtime_dir());
        assert!(!Platform::Windows.creates_runtime_dir());
        assert!(!Platform::Other.creates_runtime_dir());
    }

    #[test]
    fn clean_folds_dot_components() {
        assert_eq!(
            clean(Path::new("/work/./basedir/x/../config.py")),
            Path::new("/work/basedir/config.py")
        );
    }

    #[test]
    fn normalize_rejects_empty_path() {
        assert!(matches!(
            normalize_user_path(Path::new("")),
            Err(LocationError::EmptyPath)
        ));
    }

    #[test]
    fn clean_drops_parent_above_root() {
        assert_eq!(clean(Path::new("/..")), Path::new("/"));
        assert_eq!(clean(Path::new("/../../work/..")), Path::new("/"));
        assert_eq!(clean(Path::new("/../basedir")), Path::new("/basedir"));
    }

    #[test]
    fn normalize_does_not_expand_tilde() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let cwd = temp.path().canonicalize().unwrap();
        let _cwd = CwdGuard::change_to(&cwd);

        let path = normalize_user_path(Path::new("~/basedir")).unwrap();
        assert_eq!(path, cwd.join("~").join("basedir"));
    }

    #[test]
    fn relative_answer_is_rejected() {
        let provider = FixedProvider::new().with(StandardLocation::Cache, "cache");
        let err = Resolver::new(&provider, APP)
            .writable_location(StandardLocation::Cache)
            .unwrap_err();
        assert!(matches!(
            err,
            LocationError::EmptyValue {
                location: StandardLocation::Cache
            }
        ));
    }

    #[test]
    fn relative_home_is_no_home() {
        let provider = FixedProvider::new().with(StandardLocation::Home, "u");
        let err = resolve(Platform::MacOs, &provider, Platform::config).unwrap_err();
        assert!(matches!(err, LocationError::NoHomeDir));
    }

    #[test]
    fn relative_runtime_falls_back_to_temp() {
        let provider = FixedProvider::new()
            .with(StandardLocation::Runtime, "run/user/1000")
            .with(StandardLocation::Temp, "/var/tmp");
        let path = resolve(Platform::Xdg, &provider, Platform::runtime).unwrap();
        assert_eq!(path, Path::new("/var/tmp/stdloc_test"));
    }

    #[test]
    fn normalize_keeps_absolute_paths() {
        let path = normalize_user_path(Path::new("/tmp/basedir")).unwrap();
        assert_eq!(path, Path::new("/tmp/basedir"));
    }
}
