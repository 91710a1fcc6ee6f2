//! Storage key and store handle resolution.

use core::fmt;

/// Which store an accessor reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreRef {
    /// The canonical process-wide standard store.
    Standard,
    /// A caller-supplied store expression, kept verbatim.
    Expr(String),
}

impl StoreRef {
    /// Returns the expression text, rendering [`StoreRef::Standard`] as `standard`.
    pub fn as_source<'a>(&'a self, standard: &'a str) -> &'a str {
        match self {
            Self::Standard => standard,
            Self::Expr(expr) => expr,
        }
    }
}

impl fmt::Display for StoreRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("<standard store>"),
            Self::Expr(expr) => f.write_str(expr),
        }
    }
}

/// Resolves the key expression for a property.
///
/// An explicit key is used verbatim, quotes and escapes included. Otherwise
/// the property name becomes a string literal.
///
/// ```
/// use stowage_engine::resolve_key;
///
/// assert_eq!(resolve_key(None, "userId"), "\"userId\"");
/// assert_eq!(resolve_key(Some("\"custom\""), "userId"), "\"custom\"");
/// ```
pub fn resolve_key(explicit_key: Option<&str>, property_name: &str) -> String {
    match explicit_key {
        Some(key) => key.to_string(),
        None => format!("{property_name:?}"),
    }
}

/// Resolves the store a property targets.
///
/// ```
/// use stowage_engine::{resolve_store, StoreRef};
///
/// assert_eq!(resolve_store(None), StoreRef::Standard);
/// assert_eq!(resolve_store(Some("custom_store()")), StoreRef::Expr("custom_store()".into()));
/// ```
pub fn resolve_store(explicit_store: Option<&str>) -> StoreRef {
    match explicit_store {
        Some(expr) => StoreRef::Expr(expr.to_string()),
        None => StoreRef::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_is_verbatim() {
        assert_eq!(
            resolve_key(Some(r#""enable_notification""#), "enableNotification"),
            r#""enable_notification""#
        );
        // Non-literal key expressions pass through untouched.
        assert_eq!(resolve_key(Some("Self::KEY"), "count"), "Self::KEY");
    }

    #[test]
    fn derived_key_quotes_property_name() {
        assert_eq!(resolve_key(None, "delete_count"), r#""delete_count""#);
    }

    #[test]
    fn store_source_uses_standard_token() {
        assert_eq!(StoreRef::Standard.as_source("standard()"), "standard()");
        assert_eq!(
            StoreRef::Expr("self.store".into()).as_source("standard()"),
            "self.store"
        );
    }
}
