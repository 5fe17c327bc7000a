//! Durable key/value storage for workspace metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tab store persists through the `KeyValueStore` seam. Browser builds
//! write to `localStorage`; SSR and native tests use an in-memory map so the
//! store can be constructed fresh per test.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures come back as `StorageError`. Nothing here logs or
//! panics; the caller decides whether a failure is worth a warning.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by storage backends and the JSON helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No backing store exists (no window, storage disabled, poisoned lock).
    #[error("storage backend unavailable")]
    Unavailable,
    /// The backend refused a read.
    #[error("storage read failed for {key}: {reason}")]
    ReadFailed { key: String, reason: String },
    /// The backend refused a write (quota exceeded, private mode).
    #[error("storage write rejected for {key}: {reason}")]
    WriteRejected { key: String, reason: String },
    /// A value could not be serialized.
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A stored value is not valid JSON for the requested type.
    #[error("failed to decode {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value store with `localStorage` semantics.
pub trait KeyValueStore: Debug + Send + Sync {
    /// Read the raw value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns a `StorageError` if the read fails or the stored text does not
/// decode as `T`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Decode { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns a `StorageError` if encoding fails or the backend rejects the write.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    store.set_item(key, &raw)
}

/// Backend used by the running app: `localStorage` in the browser, memory elsewhere.
pub fn default_backend() -> Arc<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(LocalStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStorage::new())
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-memory store. Clones share the same map, so a test can keep a handle,
/// drop the tab store, and rehydrate a new one from the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a full or read-only backend: writes and removals fail while set.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::Relaxed);
    }

    /// Raw stored text for `key`, bypassing JSON decoding.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        match self.items.lock() {
            Ok(items) => items.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.reject_writes.load(Ordering::Relaxed) {
            return Err(StorageError::WriteRejected { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.remove(key);
        Ok(())
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`. Holds no handle, so it stays `Send + Sync` and can
/// live inside reactive signals.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let Some(window) = web_sys::window() else {
        return Err(StorageError::Unavailable);
    };
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

#[cfg(feature = "hydrate")]
fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        browser_storage()?
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        browser_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        browser_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::WriteRejected { key: key.to_owned(), reason: js_reason(&e) })
    }
}
