//! `CACHEDIR.TAG` marker for the cache directory.
//!
//! Backup and indexing tools skip directories containing this file. See
//! <https://bford.info/cachedir/>.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// File name of the cache directory tag.
pub const CACHEDIR_TAG: &str = "CACHEDIR.TAG";

/// First line of every tag; tools match on this exact signature.
pub const CACHEDIR_SIGNATURE: &str = "Signature: 8a477f597d28d172789f06886806bc55";

/// Outcome of writing the cache directory tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTagStatus {
    /// The tag was created by this call.
    Written,
    /// A tag already existed and was left untouched.
    AlreadyPresent,
    /// The tag could not be written; the failure was logged.
    Failed,
}

/// Full tag contents for `app_name`.
pub fn cache_tag_contents(app_name: &str) -> String {
    format!(
        "{CACHEDIR_SIGNATURE}\n\
         # This file is a cache directory tag created by {app_name}.\n\
         # For information about cache directory tags, see:\n\
         #  https://bford.info/cachedir/\n"
    )
}

/// Write `CACHEDIR.TAG` into `cache_dir` unless one already exists.
///
/// Never fails: any I/O error is logged and reported as
/// [`CacheTagStatus::Failed`].
pub fn write_cache_tag(cache_dir: &Path, app_name: &str) -> CacheTagStatus {
    let tag_path = cache_dir.join(CACHEDIR_TAG);

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tag_path);

    let file = match file {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %tag_path.display(), "Cache directory tag already present");
            return CacheTagStatus::AlreadyPresent;
        }
        Err(e) => {
            log_failure(&tag_path, &e);
            return CacheTagStatus::Failed;
        }
    };

    fill_tag(file, &tag_path, app_name)
}

/// Write the tag contents into the freshly created `tag_path`.
///
/// A partially written tag is removed so the next attempt starts over.
fn fill_tag(mut file: impl Write, tag_path: &Path, app_name: &str) -> CacheTagStatus {
    match file.write_all(cache_tag_contents(app_name).as_bytes()) {
        Ok(()) => CacheTagStatus::Written,
        Err(e) => {
            drop(file);
            let _ = fs::remove_file(tag_path);
            log_failure(tag_path, &e);
            CacheTagStatus::Failed
        }
    }
}

pub(super) fn log_failure(path: &Path, error: &dyn std::fmt::Display) {
    tracing::error!(path = %path.display(), error = %error, "Failed to create CACHEDIR.TAG");
}
