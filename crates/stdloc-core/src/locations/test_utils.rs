//! Test utilities for location tests that touch process-wide state.
//!
//! Environment variables and the working directory are shared by every test
//! thread, so tests that change either must hold [`ENV_LOCK`].

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Shared lock to serialize tests that depend on environment variables or
/// the current working directory.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
///
/// # Example
///
/// ```ignore
/// let _guard = ENV_LOCK.lock().unwrap();
/// let _env = EnvVarGuard::set("XDG_CONFIG_HOME", "/tmp/test");
/// // ... test code that reads XDG_CONFIG_HOME ...
/// // Original value restored when _env is dropped
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}

/// RAII guard that changes the working directory and restores it on drop.
pub struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub fn change_to(dir: &Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
