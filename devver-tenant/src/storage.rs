//! Durable storage for the active tenant selection
//!
//! The store persists exactly one value (the active organization id) under a
//! single fixed key so a new session starts where the last one left off.
//! Storage is best-effort caching: every failure path degrades to
//! in-memory-only behavior instead of surfacing an error to callers.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Environment variable overriding the tenant state file location.
pub const STATE_PATH_ENV: &str = "DEVVER_TENANT_STATE_PATH";

/// File name used when no explicit path is configured.
const STATE_FILE_NAME: &str = "current_organization_id";

/// Storage errors.
///
/// These never reach `TenantStore` callers; the store logs them and keeps
/// going with its in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (missing directory, quota, permissions).
    #[error("tenant storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Durable key-value slot for the active tenant id.
///
/// Implementations hold a single value under a fixed key. `load` returning
/// `Ok(None)` and `load` returning `Err` are treated identically by the
/// store: no tenant selected.
pub trait TenantStorage: Send + Sync {
    /// Read the persisted tenant id, if any.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist a tenant id, replacing any previous value.
    fn save(&self, id: &str) -> Result<(), StorageError>;

    /// Remove the persisted value.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed storage: one small file holding the bare organization id.
///
/// The parent directory is created on first save. A missing file loads as
/// `None`; an empty or whitespace-only file also loads as `None` so a
/// corrupted write never wedges the session.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the path configured in the environment.
    ///
    /// Uses `DEVVER_TENANT_STATE_PATH` when set, else
    /// `$HOME/.devver/current_organization_id`, else a `.devver/` directory
    /// relative to the working directory.
    pub fn from_env() -> Self {
        if let Ok(path) = std::env::var(STATE_PATH_ENV) {
            return Self::new(path);
        }
        let base = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default();
        Self::new(base.join(".devver").join(STATE_FILE_NAME))
    }

    /// The file this storage reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TenantStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, id: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, id)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl<T: TenantStorage + ?Sized> TenantStorage for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, id: &str) -> Result<(), StorageError> {
        (**self).save(id)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a persisted id.
    pub fn with_value(id: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(id.into())),
        }
    }
}

impl TenantStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .value
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone())
    }

    fn save(&self, id: &str) -> Result<(), StorageError> {
        *self.value.lock().unwrap_or_else(|p| p.into_inner()) = Some(id.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.value.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_state_path(tag: &str) -> PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "devver-tenant-{}-{}-{}",
            tag,
            std::process::id(),
            n
        ))
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let storage = FileStorage::new(temp_state_path("roundtrip"));
        assert!(storage.load().unwrap().is_none());

        storage.save("org-123").unwrap();
        assert_eq!(storage.load().unwrap(), Some("org-123".to_string()));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_missing_file_is_none() {
        let storage = FileStorage::new(temp_state_path("missing"));
        assert!(storage.load().unwrap().is_none());
        // Clearing a missing file is not an error.
        storage.clear().unwrap();
    }

    #[test]
    fn test_file_storage_blank_file_is_none() {
        let path = temp_state_path("blank");
        std::fs::write(&path, "  \n").unwrap();
        let storage = FileStorage::new(&path);
        assert!(storage.load().unwrap().is_none());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_storage_trims_value() {
        let path = temp_state_path("trim");
        std::fs::write(&path, "org-123\n").unwrap();
        let storage = FileStorage::new(&path);
        assert_eq!(storage.load().unwrap(), Some("org-123".to_string()));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
        storage.save("org-xyz").unwrap();
        assert_eq!(storage.load().unwrap(), Some("org-xyz".to_string()));
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
