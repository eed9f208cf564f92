//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, IdentifierSet, SourceText};
use crate::error::StrataResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> StrataResult<String>;

    /// Replace a file's content atomically: readers see either the old
    /// content or the new one, never a partial write.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Take an exclusive advisory lock on `path`, creating it if needed.
    /// The lock is released when the guard drops.
    fn lock(&self, path: &Path) -> StrataResult<LockGuard>;
}

/// Keeps a filesystem lock alive for as long as it is held.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard {
    inner: Option<Box<dyn Send>>,
}

impl LockGuard {
    pub fn new(inner: impl Send + 'static) -> Self {
        Self {
            inner: Some(Box::new(inner)),
        }
    }

    /// A guard holding nothing, for filesystems without locking.
    pub fn noop() -> Self {
        Self { inner: None }
    }
}

impl std::fmt::Debug for LockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockGuard")
            .field("held", &self.inner.is_some())
            .finish()
    }
}

/// Port for artifact rendering.
///
/// Implemented by:
/// - `strata_adapters::renderer::FiberGormRenderer` (Go Fiber + GORM shapes)
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRenderer: Send + Sync {
    /// Produce the full text of one new source file.
    fn render(
        &self,
        kind: ArtifactKind,
        ids: &IdentifierSet,
        module_root: &str,
    ) -> StrataResult<SourceText>;
}
