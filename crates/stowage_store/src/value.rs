//! Values held by a key-value store.

/// A scalar stored under a key.
///
/// Typed reads coerce between kinds the way a defaults database does: a
/// stored `Int(1)` reads as `true`, a stored `String("42")` reads as `42`.
/// Only string reads are strict, see [`StoreValue::as_str`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A UTF-8 string.
    String(String),
}

impl StoreValue {
    /// Reads the value as a boolean.
    ///
    /// Numbers are `true` when non-zero; strings are `true` for `true`,
    /// `yes` or `1` (case-insensitive).
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::String(value) => {
                let value = value.trim();
                ["true", "yes", "1"]
                    .iter()
                    .any(|truthy| value.eq_ignore_ascii_case(truthy))
            }
        }
    }

    /// Reads the value as an integer.
    ///
    /// Floats truncate toward zero (saturating, NaN is `0`); strings that do
    /// not parse read as `0`.
    pub fn as_integer(&self) -> i64 {
        match self {
            Self::Bool(value) => i64::from(*value),
            Self::Int(value) => *value,
            Self::Float(value) => *value as i64,
            Self::String(value) => {
                let value = value.trim();
                value
                    .parse::<i64>()
                    .ok()
                    .or_else(|| value.parse::<f64>().ok().map(|float| float as i64))
                    .unwrap_or(0)
            }
        }
    }

    /// Reads the value as a float. Strings that do not parse read as `0.0`.
    pub fn as_float(&self) -> f64 {
        match self {
            Self::Bool(value) => f64::from(u8::from(*value)),
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
            Self::String(value) => value.trim().parse().unwrap_or(0.0),
        }
    }

    /// Returns the string if this is a [`StoreValue::String`].
    ///
    /// Other kinds are not converted, so a key holding a number has no
    /// string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// The kind name, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for StoreValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
