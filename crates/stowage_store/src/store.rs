//! The [`KeyValueStore`] trait.

use crate::value::StoreValue;

/// A key-value store generated accessors read from and write to.
///
/// Implementors provide untyped access; the typed reads are derived from
/// [`StoreValue`]'s coercions. All methods take `&self` so a store can be
/// shared, which means implementations synchronize internally.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`.
    fn value(&self, key: &str) -> Option<StoreValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&self, key: &str, value: StoreValue);

    /// Removes and returns the value stored under `key`.
    fn remove(&self, key: &str) -> Option<StoreValue>;

    /// Returns `true` if any value, of any kind, is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Reads a boolean; `false` if the key is absent.
    fn bool(&self, key: &str) -> bool {
        self.value(key).is_some_and(|value| value.as_bool())
    }

    /// Reads an integer; `0` if the key is absent.
    fn integer(&self, key: &str) -> i64 {
        self.value(key).map_or(0, |value| value.as_integer())
    }

    /// Reads a float; `0.0` if the key is absent.
    fn float(&self, key: &str) -> f64 {
        self.value(key).map_or(0.0, |value| value.as_float())
    }

    /// Reads a string.
    ///
    /// `None` both when the key is absent and when it holds a non-string
    /// value.
    fn string(&self, key: &str) -> Option<String> {
        self.value(key)
            .and_then(|value| value.as_str().map(str::to_owned))
    }
}
