//! Accessor-generation engine for Stowage.
//!
//! Given a property declaration (a name plus the argument list of its
//! annotation), the engine infers the property's type from its default
//! value, resolves the storage key and the target store, and synthesizes an
//! [`AccessorDescription`]: structured get and set logic over a key-value
//! store. Hosts such as the `#[store_accessors]` attribute macro render the
//! description into concrete code.
//!
//! Everything here is pure. No function touches a store, keeps global state
//! or blocks, so the engine can be driven from any number of threads.
//!
//! # Pipeline
//!
//! - [`classify`]: default value literal → [`ResolvedType`]
//! - [`resolve_key`]: explicit key or the property name as a string literal
//! - [`resolve_store`]: explicit store or [`StoreRef::Standard`]
//! - [`synthesize`]: the above → [`AccessorDescription`]
//! - [`Reporter`]: collects [`Diagnostic`]s for properties that failed
//!
//! [`Expander`] chains the stages and [`Expander::expand_all`] runs a batch.
//!
//! # Example
//!
//! ```
//! use stowage_engine::{Argument, Expander, LiteralExpr, PropertyDecl};
//!
//! let decls = [
//!     PropertyDecl::new(
//!         "delete_count",
//!         vec![Argument::labeled("default_value", LiteralExpr::Int(0))],
//!     ),
//!     PropertyDecl::new(
//!         "tags",
//!         vec![Argument::labeled("default_value", LiteralExpr::Unsupported("[]".into()))],
//!     ),
//! ];
//!
//! let expansion = Expander::default().expand_all(&decls);
//! assert!(expansion.accessor("delete_count").is_some());
//! assert!(expansion.accessor("tags").is_none());
//! assert_eq!(expansion.diagnostics.len(), 1);
//! ```

mod config;
mod diagnostic;
mod expand;
mod literal;
mod render;
mod resolve;
mod synthesize;

pub use config::{DEFAULT_STANDARD_STORE, ExpansionConfig};
pub use diagnostic::{
    DEFAULT_DOMAIN, Diagnostic, DiagnosticKind, ReportedDiagnostic, Reporter, Severity,
};
pub use expand::{
    Argument, DEFAULT_VALUE_LABEL, ExpandedProperty, Expander, Expansion, KEY_LABEL, PropertyDecl,
    PropertySpec, STORE_LABEL,
};
pub use literal::{DefaultValue, LiteralExpr, ResolvedType, classify};
pub use render::RenderedAccessor;
pub use resolve::{StoreRef, resolve_key, resolve_store};
pub use synthesize::{AccessorDescription, GetLogic, NEW_VALUE, SetLogic, ValueRead, synthesize};
