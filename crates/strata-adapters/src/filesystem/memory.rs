//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use strata_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, LockGuard},
    },
    error::{StrataError, StrataResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep a handle while the
/// service owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    locks: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (and its parent directories) directly (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.into();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// A file's content, if present (testing helper).
    pub fn contents(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of `write_file` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }

    fn read_guard(&self) -> StrataResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write_guard(&self) -> StrataResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write_guard()?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> StrataResult<String> {
        let inner = self.read_guard()?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        let mut inner = self.write_guard()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn lock(&self, path: &Path) -> StrataResult<LockGuard> {
        let mut inner = self.write_guard()?;
        if !inner.locks.insert(path.to_path_buf()) {
            return Err(ApplicationError::LockFailed {
                path: path.to_path_buf(),
                reason: "already locked".into(),
            }
            .into());
        }
        Ok(LockGuard::new(MemoryLock {
            fs: self.clone(),
            path: path.to_path_buf(),
        }))
    }
}

struct MemoryLock {
    fs: MemoryFilesystem,
    path: PathBuf,
}

impl Drop for MemoryLock {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.fs.inner.write() {
            inner.locks.remove(&self.path);
        }
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn poisoned() -> StrataError {
    StrataError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a/b.go"), "x").is_err());

        fs.create_dir_all(Path::new("/p/a")).unwrap();
        fs.write_file(Path::new("/p/a/b.go"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/p/a/b.go")).unwrap(), "x");
        assert!(fs.exists(Path::new("/p")));
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn seeded_files_are_readable() {
        let fs = MemoryFilesystem::new().with_file("/p/go.mod", "module shop\n");
        assert!(fs.exists(Path::new("/p")));
        assert_eq!(fs.contents(Path::new("/p/go.mod")).as_deref(), Some("module shop\n"));
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn lock_is_exclusive_until_dropped() {
        let fs = MemoryFilesystem::new();
        let guard = fs.lock(Path::new("/p/.strata.lock")).unwrap();
        assert!(fs.lock(Path::new("/p/.strata.lock")).is_err());
        drop(guard);
        assert!(fs.lock(Path::new("/p/.strata.lock")).is_ok());
    }
}
