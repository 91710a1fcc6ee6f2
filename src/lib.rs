//! Typed accessors over key-value stores, generated from a default value.
//!

pub use stowage_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use stowage_internal::prelude::*;
}
