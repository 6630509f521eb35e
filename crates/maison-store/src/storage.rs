//! # Key-Value Storage
//!
//! The storage surface every store persists through: string keys mapping to
//! JSON-serialized string values, each key independently readable and
//! writable. This mirrors the browser local-storage the storefront runs
//! against; the file backend exists so the seed binary and tests have
//! something durable to write to.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storage Backends                                │
//! │                                                                         │
//! │  KvBackend (trait)                                                     │
//! │  ├── MemoryBackend   HashMap<String, String>      (tests, defaults)    │
//! │  └── JsonFileBackend one <key>.json file per key  (seed, demo shell)   │
//! │                                                                         │
//! │  Storage (shared handle)                                               │
//! │  └── Arc<Mutex<dyn KvBackend>> + typed get_json/set_json helpers       │
//! │      Several stores share one backend; each store owns its KEYS.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Keys
// =============================================================================

/// The persisted key namespace. One constant per key in the external
/// interface table; no store writes a key it does not own.
pub mod keys {
    /// `"light"` | `"dark"` - written by the theme store.
    pub const THEME: &str = "theme";
    /// Role string - written by the session store.
    pub const USER_ROLE: &str = "userRole";
    /// Email string - written by the session store.
    pub const USER_EMAIL: &str = "userEmail";
    /// `"true"` while signed in - written by the session store.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    /// Array of Product - written by the catalog store on every mutation.
    pub const PRODUCTS: &str = "products";
    /// Array of UserRecord - written by the user store on every mutation.
    pub const USERS: &str = "users";
    /// Array of product ids - written by the wishlist store.
    pub const WISHLIST: &str = "wishlist";
    /// Currency configuration object - written by the currency store.
    pub const CURRENCY: &str = "app-currency";
}

// =============================================================================
// Backend Trait
// =============================================================================

/// A synchronous string-keyed store of JSON string values.
pub trait KvBackend: Send {
    /// Reads the value under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> StoreResult<()>;

    /// Removes the value under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-memory backend. The default for tests and for running without any
/// durable storage at all.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// File-system backend: one `<key>.json` file per key under a directory.
///
/// ## Why one file per key?
/// Keys are independently readable/writable in the reference behavior;
/// separate files keep a write to `products` from ever touching `users`.
#[derive(Debug)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend rooted at `dir` (created on first write).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileBackend { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvBackend for JsonFileBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::Backend(e.to_string()))?;
        std::fs::write(self.path_for(key), value).map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }
}

// =============================================================================
// Shared Storage Handle
// =============================================================================

/// A cloneable handle to a shared backend with typed JSON helpers.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<T>>` the same way the cart state does: the storefront's
/// event model is single-threaded, but the stores hand clones of this handle
/// around and the mutex makes that sharing safe by construction.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<Mutex<dyn KvBackend>>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    /// Wraps a backend in a shared handle.
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Storage {
            backend: Arc::new(Mutex::new(backend)),
        }
    }

    /// Reads and decodes the value under `key`, if any.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let backend = self.backend.lock().expect("storage mutex poisoned");
        match backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encodes and writes `value` under `key`.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        let mut backend = self.backend.lock().expect("storage mutex poisoned");
        backend.set(key, raw)
    }

    /// Removes the value under `key`.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let mut backend = self.backend.lock().expect("storage mutex poisoned");
        backend.remove(key)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
