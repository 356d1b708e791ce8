//! Directory creation.
//!
//! Follows the XDG base directory rule: a missing destination directory is
//! created with permission 0700, an existing one keeps its permissions.
//!
//! There is no existence pre-check. Creation is attempted directly and
//! "already exists" counts as success when the path is a directory.

use std::fs::{self, DirBuilder};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::LocationError;

/// Ensure `path` exists as a directory and return it.
///
/// Missing parents are created with default permissions; the final component
/// is created with mode 0700 on unix.
pub fn ensure_exists(path: &Path) -> Result<PathBuf, LocationError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LocationError::CreateFailed {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    match private_dir_builder().create(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Created directory");
            Ok(path.to_path_buf())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(path.to_path_buf())
            } else {
                Err(LocationError::NotADirectory(path.to_path_buf()))
            }
        }
        Err(e) => Err(LocationError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn private_dir_builder() -> DirBuilder {
    #[allow(unused_mut)]
    let mut builder = DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder
}
