//! Default-value literals and the type classifier.

use crate::diagnostic::Diagnostic;
use core::fmt;
use serde::Serialize;

/// The syntactic form of a default-value expression.
///
/// The upstream parser decides which variant an expression is; the
/// classifier only looks at the tag. Anything that is not one of the
/// supported scalar forms is carried as [`LiteralExpr::Unsupported`] so that
/// classification stays total.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralExpr {
    /// `true` / `false`.
    Bool(bool),
    /// An integer literal in `i64` range.
    Int(i64),
    /// A floating-point literal, including NaN and the infinities.
    Float(f64),
    /// A string literal (unescaped contents).
    Str(String),
    /// A qualified member reference such as `f64::NAN` or `Float.nan`.
    ///
    /// `type_name` is the base identifier the member is looked up on.
    MemberRef {
        /// Base type identifier.
        type_name: String,
        /// Referenced member.
        member: String,
    },
    /// Any other expression form (arrays, calls, ...), as source text.
    Unsupported(String),
}

impl LiteralExpr {
    /// Returns the canonical Rust source text for this literal.
    pub fn to_source(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) if value.is_nan() => "f64::NAN".to_string(),
            Self::Float(value) if value.is_infinite() && value.is_sign_positive() => {
                "f64::INFINITY".to_string()
            }
            Self::Float(value) if value.is_infinite() => "f64::NEG_INFINITY".to_string(),
            Self::Float(value) => format!("{value:?}"),
            Self::Str(value) => format!("{value:?}"),
            Self::MemberRef { type_name, member } => format!("{type_name}::{member}"),
            Self::Unsupported(source) => source.clone(),
        }
    }
}

/// A default value: its classified form plus the exact source text.
///
/// The source text is what the generated get logic returns when the key is
/// absent, so literal forms such as `f64::NAN` survive untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultValue {
    literal: LiteralExpr,
    source: String,
}

impl DefaultValue {
    /// Creates a default value from a literal and the text it was parsed from.
    pub fn new(literal: LiteralExpr, source: impl Into<String>) -> Self {
        Self {
            literal,
            source: source.into(),
        }
    }

    /// Creates a default value whose source is the literal's canonical text.
    pub fn from_literal(literal: LiteralExpr) -> Self {
        let source = literal.to_source();
        Self { literal, source }
    }

    /// The classified form.
    pub fn literal(&self) -> &LiteralExpr {
        &self.literal
    }

    /// The verbatim source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl From<LiteralExpr> for DefaultValue {
    fn from(literal: LiteralExpr) -> Self {
        Self::from_literal(literal)
    }
}

/// The value type of a generated accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResolvedType {
    /// `bool`
    Bool,
    /// `i64`
    Int,
    /// `f64`
    Float,
    /// `String`
    String,
}

impl ResolvedType {
    /// Every supported type.
    pub const ALL: [Self; 4] = [Self::Bool, Self::Int, Self::Float, Self::String];

    /// The kind name, e.g. `Int`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
        }
    }

    /// The Rust value type, e.g. `i64`.
    pub fn rust_type(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "i64",
            Self::Float => "f64",
            Self::String => "String",
        }
    }

    /// Looks up a type by kind name or by Rust value type name.
    ///
    /// ```
    /// use stowage_engine::ResolvedType;
    ///
    /// assert_eq!(ResolvedType::from_type_name("Float"), Some(ResolvedType::Float));
    /// assert_eq!(ResolvedType::from_type_name("f64"), Some(ResolvedType::Float));
    /// assert_eq!(ResolvedType::from_type_name("u8"), None);
    /// ```
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == name || ty.rust_type() == name)
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Infers the accessor type from a default value.
///
/// Member references resolve through their base type name, so `f64::NAN`
/// and `Float.nan` are both [`ResolvedType::Float`]. Every other form is
/// rejected with an [`UnsupportedType`](crate::DiagnosticKind::UnsupportedType)
/// diagnostic carrying the expression's source text.
///
/// ```
/// use stowage_engine::{classify, DefaultValue, LiteralExpr, ResolvedType};
///
/// let nan = DefaultValue::new(
///     LiteralExpr::MemberRef { type_name: "f64".into(), member: "NAN".into() },
///     "f64::NAN",
/// );
/// assert_eq!(classify(&nan), Ok(ResolvedType::Float));
///
/// let array = DefaultValue::new(LiteralExpr::Unsupported("[1, 2]".into()), "[1, 2]");
/// assert!(classify(&array).is_err());
/// ```
pub fn classify(default: &DefaultValue) -> Result<ResolvedType, Diagnostic> {
    match default.literal() {
        LiteralExpr::Bool(_) => Ok(ResolvedType::Bool),
        LiteralExpr::Int(_) => Ok(ResolvedType::Int),
        LiteralExpr::Float(_) => Ok(ResolvedType::Float),
        LiteralExpr::Str(_) => Ok(ResolvedType::String),
        LiteralExpr::MemberRef { type_name, .. } => ResolvedType::from_type_name(type_name)
            .ok_or_else(|| Diagnostic::unsupported_type(default.source())),
        LiteralExpr::Unsupported(_) => Err(Diagnostic::unsupported_type(default.source())),
    }
}
