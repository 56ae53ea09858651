//! Session signal read by the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login view writes a `SessionUser` under the session key; the guard only
//! asks whether that key exists. The store sits behind `SessionStore` so the
//! guard can be driven by browser `localStorage` in the app and by an
//! in-memory map in tests.
//!
//! Presence is the whole contract: any stored value, including `""` or
//! `"false"`, counts as signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::NavConfig;
use crate::error::StorageError;

/// Value the login view stores for a signed-in visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
}

/// Key-value storage holding the session marker.
pub trait SessionStore: Send + Sync {
    /// Whether `key` is present. Unreadable storage counts as absent.
    fn contains(&self, key: &str) -> bool;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage is unavailable or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage is unavailable or refuses the write.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// `window.localStorage`. Only reachable in the hydrated browser build; on
/// the server every key reads as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStorage {
    fn contains(&self, key: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .and_then(|s| s.get_item(key).ok().flatten())
                .is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            false
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
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
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Shared in-memory store. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl SessionStore for MemoryStore {
    fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map_or(false, |entries| entries.contains_key(key))
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

// =============================================================================
// AUTH CONTEXT
// =============================================================================

/// Injected authentication signal: a store plus the key that marks a session.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    key: String,
}

impl AuthContext {
    pub fn new(store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Context backed by browser `localStorage` under the configured key.
    pub fn browser(config: &NavConfig) -> Self {
        Self::new(Arc::new(BrowserStorage), config.session_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the session key exists.
    pub fn is_authenticated(&self) -> bool {
        self.store.contains(&self.key)
    }

    /// Record `user` as signed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or stored.
    pub fn sign_in(&self, user: &SessionUser) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.key, &raw)?;
        log::info!("auth: signed in as {}", user.name);
        Ok(())
    }

    /// Drop the session key.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage refuses the removal.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        log::info!("auth: signed out");
        Ok(())
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext").field("key", &self.key).finish_non_exhaustive()
    }
}
