//! Process-wide store of the active tenant selection
//!
//! The store is the single source of truth for "which organization is
//! active". Readers always see the latest write because every access goes
//! through the interior cell, never through a value copied at closure
//! creation time. A request layer wired up once at startup keeps reading the
//! current selection for the lifetime of the session.

use crate::storage::TenantStorage;
use crate::tenant::TenantId;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

/// Shared, mutable record of the currently active tenant.
///
/// Writes are rare and user-initiated; last-write-wins is the intended
/// semantics. The newest selection wins over an in-flight request that read
/// an older value, and each request reads the store at the moment it builds
/// its auth headers.
///
/// Wrap in an [`Arc`](std::sync::Arc) to share with request code.
///
/// # Examples
///
/// ```
/// use devver_tenant::{MemoryStorage, TenantId, TenantStore};
///
/// let store = TenantStore::with_storage(MemoryStorage::with_value("org-1"));
/// // Persisted selection is restored on construction.
/// assert_eq!(store.active(), Some(TenantId::new("org-1")));
///
/// store.set_active(Some(TenantId::new("org-2")));
/// assert_eq!(store.active(), Some(TenantId::new("org-2")));
/// ```
pub struct TenantStore {
    active: RwLock<Option<TenantId>>,
    storage: Option<Box<dyn TenantStorage>>,
}

impl TenantStore {
    /// Store with no persistence; starts with no tenant selected.
    pub fn in_memory() -> Self {
        Self {
            active: RwLock::new(None),
            storage: None,
        }
    }

    /// Store backed by durable storage.
    ///
    /// The persisted selection is loaded immediately. Unreadable storage is
    /// treated as "no tenant selected", never as an error.
    pub fn with_storage(storage: impl TenantStorage + 'static) -> Self {
        let initial = match storage.load() {
            Ok(value) => value.map(TenantId::from),
            Err(e) => {
                warn!(error = %e, "failed to load persisted tenant, starting with none");
                None
            }
        };

        Self {
            active: RwLock::new(initial),
            storage: Some(Box::new(storage)),
        }
    }

    /// The currently active tenant, if any.
    ///
    /// Always returns the latest value set by [`set_active`](Self::set_active),
    /// regardless of when the caller obtained its handle to the store.
    pub fn active(&self) -> Option<TenantId> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Select a tenant, or `None` for the personal (no organization) context.
    ///
    /// The in-memory update always succeeds; persistence is best-effort and a
    /// storage failure only produces a warning.
    pub fn set_active(&self, id: Option<TenantId>) {
        debug!(tenant = id.as_ref().map(TenantId::as_str), "switching active tenant");

        *self.active.write().unwrap_or_else(PoisonError::into_inner) = id.clone();

        if let Some(storage) = &self.storage {
            let result = match &id {
                Some(id) => storage.save(id.as_str()),
                None => storage.clear(),
            };
            if let Err(e) = result {
                warn!(error = %e, "failed to persist tenant selection, keeping in-memory value");
            }
        }
    }

    /// Clear the selection. Equivalent to `set_active(None)`.
    pub fn clear(&self) {
        self.set_active(None);
    }
}

impl std::fmt::Debug for TenantStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantStore")
            .field("active", &self.active())
            .field("persistent", &self.storage.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};
    use std::sync::Arc;

    /// Storage whose writes always fail, for degradation tests.
    struct BrokenStorage;

    impl TenantStorage for BrokenStorage {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
        }

        fn save(&self, _id: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
        }
    }

    #[test]
    fn test_set_then_get() {
        let store = TenantStore::in_memory();
        assert!(store.active().is_none());

        store.set_active(Some(TenantId::new("org-1")));
        assert_eq!(store.active(), Some(TenantId::new("org-1")));

        store.set_active(Some(TenantId::new("org-2")));
        assert_eq!(store.active(), Some(TenantId::new("org-2")));

        store.clear();
        assert!(store.active().is_none());
    }

    #[test]
    fn test_restores_persisted_selection() {
        let store = TenantStore::with_storage(MemoryStorage::with_value("org-saved"));
        assert_eq!(store.active(), Some(TenantId::new("org-saved")));
    }

    #[test]
    fn test_unreadable_storage_starts_with_none() {
        let store = TenantStore::with_storage(BrokenStorage);
        assert!(store.active().is_none());
    }

    #[test]
    fn test_storage_write_failure_keeps_memory_update() {
        let store = TenantStore::with_storage(BrokenStorage);
        store.set_active(Some(TenantId::new("org-1")));
        assert_eq!(store.active(), Some(TenantId::new("org-1")));
    }

    #[test]
    fn test_selection_is_persisted() {
        let storage = Arc::new(MemoryStorage::new());

        let store = TenantStore::with_storage(storage.clone());
        store.set_active(Some(TenantId::new("org-1")));
        assert_eq!(storage.load().unwrap(), Some("org-1".to_string()));

        store.clear();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_latest_value_visible_to_earlier_handles() {
        let store = Arc::new(TenantStore::in_memory());

        // Handle captured before the write still observes the newest value.
        let reader = store.clone();
        store.set_active(Some(TenantId::new("org-late")));
        assert_eq!(reader.active(), Some(TenantId::new("org-late")));
    }

    #[tokio::test]
    async fn test_latest_value_visible_across_await_points() {
        let store = Arc::new(TenantStore::in_memory());
        store.set_active(Some(TenantId::new("org-old")));

        let reader = store.clone();
        let task = async move {
            tokio::task::yield_now().await;
            reader.active()
        };

        store.set_active(Some(TenantId::new("org-new")));
        assert_eq!(task.await, Some(TenantId::new("org-new")));
    }
}
