//! Accessor synthesis.
//!
//! The synthesizer turns a resolved type, store and key into an
//! [`AccessorDescription`]: abstract get and set logic that renderers turn
//! into concrete syntax. The get logic follows one fallback rule for every
//! type:
//!
//! 1. If the store holds no value under the key, return the default
//!    literal unchanged.
//! 2. Otherwise read the value with the type's typed accessor. String reads
//!    fall back to the default a second time when the typed read yields
//!    nothing, because a key can be present with a non-string value.

use crate::diagnostic::Diagnostic;
use crate::literal::{DefaultValue, ResolvedType};
use crate::render::{self, RenderedAccessor};
use crate::resolve::StoreRef;

/// Name of the value parameter in the set logic.
pub const NEW_VALUE: &str = "new_value";

/// The typed store read used by the get logic once the key is known to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueRead {
    /// `bool(key)`
    Bool,
    /// `integer(key)`
    Integer,
    /// `float(key)`
    Float,
    /// `string(key)`, falling back to the default when it yields nothing.
    StringOrDefault,
}

impl ValueRead {
    /// The store method performing this read.
    pub fn method(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::StringOrDefault => "string",
        }
    }

    /// Whether the read result itself is optional and needs the default.
    pub fn falls_back_to_default(self) -> bool {
        matches!(self, Self::StringOrDefault)
    }

    fn for_type(value_type: ResolvedType) -> Self {
        match value_type {
            ResolvedType::Bool => Self::Bool,
            ResolvedType::Int => Self::Integer,
            ResolvedType::Float => Self::Float,
            ResolvedType::String => Self::StringOrDefault,
        }
    }
}

/// Get logic: presence check, default fallback, typed read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GetLogic {
    store: StoreRef,
    key: String,
    default: String,
    read: ValueRead,
}

impl GetLogic {
    /// The store read from.
    pub fn store(&self) -> &StoreRef {
        &self.store
    }

    /// The key expression.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The default literal returned when the key is absent, verbatim.
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// The typed read used when the key is present.
    pub fn read(&self) -> ValueRead {
        self.read
    }
}

/// Set logic: an untyped write of [`NEW_VALUE`] under the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetLogic {
    store: StoreRef,
    key: String,
}

impl SetLogic {
    /// The store written to.
    pub fn store(&self) -> &StoreRef {
        &self.store
    }

    /// The key expression.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A fully resolved accessor.
///
/// Always carries a non-empty key, a resolved store and a type; there is no
/// partially-resolved state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorDescription {
    value_type: ResolvedType,
    get: GetLogic,
    set: SetLogic,
}

impl AccessorDescription {
    /// The accessor's value type.
    pub fn value_type(&self) -> ResolvedType {
        self.value_type
    }

    /// The get logic.
    pub fn get(&self) -> &GetLogic {
        &self.get
    }

    /// The set logic.
    pub fn set(&self) -> &SetLogic {
        &self.set
    }

    /// Renders the accessor as Rust-flavored statement text.
    ///
    /// `standard_store` is the expression substituted for
    /// [`StoreRef::Standard`].
    pub fn render(&self, standard_store: &str) -> RenderedAccessor {
        render::render(self, standard_store)
    }
}

/// Builds the accessor description for a classified property.
///
/// `value_type` is a closed enum, so every type reaching this point has a
/// typed read. The output invariants are still checked and a violation fails
/// closed with a [`SyntaxParseError`](crate::DiagnosticKind::SyntaxParseError).
/// An empty key, store or default is malformed input, never an
/// [`UnsupportedType`](crate::DiagnosticKind::UnsupportedType).
///
/// ```
/// use stowage_engine::{synthesize, DefaultValue, LiteralExpr, ResolvedType, StoreRef, ValueRead};
///
/// let default = DefaultValue::from_literal(LiteralExpr::Bool(false));
/// let accessor = synthesize(ResolvedType::Bool, StoreRef::Standard, "\"enabled\"".into(), &default)?;
///
/// assert_eq!(accessor.get().read(), ValueRead::Bool);
/// assert_eq!(accessor.get().default_value(), "false");
/// assert_eq!(accessor.set().key(), "\"enabled\"");
/// # Ok::<(), stowage_engine::Diagnostic>(())
/// ```
pub fn synthesize(
    value_type: ResolvedType,
    store: StoreRef,
    key: String,
    default: &DefaultValue,
) -> Result<AccessorDescription, Diagnostic> {
    if key.trim().is_empty() {
        return Err(Diagnostic::syntax_parse("storage key is empty"));
    }
    if let StoreRef::Expr(expr) = &store
        && expr.trim().is_empty()
    {
        return Err(Diagnostic::syntax_parse("store expression is empty"));
    }
    if default.source().trim().is_empty() {
        return Err(Diagnostic::syntax_parse("default value is empty"));
    }

    let get = GetLogic {
        store: store.clone(),
        key: key.clone(),
        default: default.source().to_string(),
        read: ValueRead::for_type(value_type),
    };
    let set = SetLogic { store, key };

    Ok(AccessorDescription {
        value_type,
        get,
        set,
    })
}
