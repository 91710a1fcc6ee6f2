//! In-memory store and the process-wide standard store.

use crate::store::KeyValueStore;
use crate::value::StoreValue;
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::LazyLock;

/// Name of the store returned by [`standard()`].
pub const STANDARD_STORE_NAME: &str = "standard";

static STANDARD: LazyLock<MemoryStore> = LazyLock::new(|| MemoryStore::named(STANDARD_STORE_NAME));

/// Returns the canonical standard store.
///
/// Accessors that do not name a store read and write here. The store lives
/// for the whole process and is shared by every caller.
pub fn standard() -> &'static MemoryStore {
    &STANDARD
}

/// A thread-safe in-memory [`KeyValueStore`].
///
/// # Example
///
/// ```
/// use stowage_store::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::named("com.example.settings");
/// store.set_value("launches", 3_i64.into());
///
/// assert!(store.contains("launches"));
/// assert_eq!(store.integer("launches"), 3);
/// assert_eq!(store.string("launches"), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    name: Option<String>,
    entries: RwLock<HashMap<String, StoreValue>>,
}

impl MemoryStore {
    /// Creates an empty, unnamed store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with a suite name, used in log events.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: RwLock::default(),
        }
    }

    /// The suite name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes every value.
    pub fn clear(&self) {
        self.entries.write().clear();
        tracing::trace!(store = self.name.as_deref(), "cleared");
    }
}

impl KeyValueStore for MemoryStore {
    fn value(&self, key: &str) -> Option<StoreValue> {
        self.entries.read().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: StoreValue) {
        tracing::trace!(store = self.name.as_deref(), key, kind = value.kind(), "set");
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<StoreValue> {
        let removed = self.entries.write().remove(key);
        tracing::trace!(
            store = self.name.as_deref(),
            key,
            found = removed.is_some(),
            "remove"
        );
        removed
    }
}
