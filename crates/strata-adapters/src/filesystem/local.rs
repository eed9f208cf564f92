//! Local filesystem adapter using std::fs.
//!
//! Writes go to a temporary file in the target's directory which is then
//! renamed over the target, so a crash mid-write never leaves a truncated
//! aggregator behind.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use strata_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, LockGuard},
    },
    error::{StrataError, StrataResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_file(&self, path: &Path) -> StrataResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp =
            NamedTempFile::new_in(parent).map_err(|e| map_io_error(path, e, "create temp file"))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| map_io_error(path, e, "write temp file"))?;

        // Keep the original permissions when replacing an existing file.
        if let Ok(meta) = fs::metadata(path) {
            fs::set_permissions(temp.path(), meta.permissions())
                .map_err(|e| map_io_error(path, e, "copy permissions"))?;
        }

        temp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        trace!(path = %path.display(), bytes = content.len(), "File persisted");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn lock(&self, path: &Path) -> StrataResult<LockGuard> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open lock file"))?;

        file.try_lock_exclusive()
            .map_err(|e| -> StrataError {
                ApplicationError::LockFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
                .into()
            })?;

        debug!(path = %path.display(), "Project lock acquired");
        Ok(LockGuard::new(HeldLock(file)))
    }
}

/// Unlocks on drop.
struct HeldLock(File);

impl Drop for HeldLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.0) {
            debug!(error = %e, "Failed to release project lock");
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StrataError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
