//! Key/value storage backends for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists two string keys. Browser builds write them to
//! `localStorage`; server rendering has no storage at all, and native tests
//! use the in-memory backend.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Failure reading or writing persisted client state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No backend is reachable: no `window`, `localStorage` is disabled, or
    /// the session handle using it has been disposed.
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the operation on `key`.
    #[error("storage rejected {op} for key {key}")]
    Rejected { op: &'static str, key: String },
}

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read `key`, returning `Ok(None)` when it was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`.
///
/// Only reachable with the `hydrate` feature; elsewhere every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local()?
                .get_item(key)
                .map_err(|_| StorageError::Rejected { op: "get", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local()?
                .set_item(key, value)
                .map_err(|_| StorageError::Rejected { op: "set", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local()?
                .remove_item(key)
                .map_err(|_| StorageError::Rejected { op: "remove", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local storage. Clones share the same entries, so a second store
/// opened over a clone observes what the first one wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored entry, ordered by key.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.lock().map(|entries| entries.clone()).unwrap_or_default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}
