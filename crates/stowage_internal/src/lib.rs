//! # Stowage Internal Library
//!
//! Re-exports the core Stowage crates for convenience.

/// Accessor-generation engine: classification, resolution, synthesis.
pub use stowage_engine;

/// Key-value stores and the `#[store_accessors]` macro.
pub use stowage_store;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use stowage_engine::{
        AccessorDescription, Diagnostic, DiagnosticKind, Expander, ExpansionConfig, PropertyDecl,
        ResolvedType,
    };
    pub use stowage_store::{KeyValueStore, MemoryStore, StoreValue, standard, store_accessors};
}
