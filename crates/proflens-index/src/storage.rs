use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by a storage backend
///
/// Profiling directories are written by best-effort external jobs, so
/// `NotFound` is an expected state and is handled separately from
/// operational failures throughout the index.
#[derive(Debug)]
pub enum StorageError {
    /// Path does not exist
    NotFound(PathBuf),
    /// Underlying storage failure (permissions, transient I/O, ...)
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound(path.to_path_buf())
        } else {
            StorageError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(path) => write!(f, "Not found: {}", path.display()),
            StorageError::Io { path, source } => {
                write!(f, "Storage error at {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::NotFound(_) => None,
            StorageError::Io { source, .. } => Some(source),
        }
    }
}

/// Read-only access to the filesystem-like layer holding profiling
/// artifacts.
///
/// Implementations must be callable concurrently; the index keeps no
/// state between calls.
pub trait Storage: Send + Sync {
    /// True if `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Names (not paths) of the entries directly under `path`
    fn list_dir(&self, path: &Path) -> StorageResult<Vec<String>>;

    /// Read the file at `path` fully into memory
    fn read(&self, path: &Path) -> StorageResult<Vec<u8>>;
}

/// `std::fs`-backed storage
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> StorageResult<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| StorageError::from_io(path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::from_io(path, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read(&self, path: &Path) -> StorageResult<Vec<u8>> {
        fs::read(path).map_err(|e| StorageError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_maps_to_not_found() {
        let err = LocalStorage
            .read(Path::new("/nonexistent/proflens/artifact"))
            .expect_err("read of a missing path must fail");
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[test]
    fn is_dir_is_false_for_missing_path() {
        assert!(!LocalStorage.is_dir(Path::new("/nonexistent/proflens/run")));
    }
}
