//! Key-value store abstraction for Stowage accessors.
//!
//! This crate provides:
//!
//! - [`KeyValueStore`]: the trait generated accessors call into.
//! - [`StoreValue`]: the scalar kinds a store holds.
//! - [`MemoryStore`]: a thread-safe in-memory implementation.
//! - [`standard()`]: the process-wide store used when an accessor names
//!   none.
//! - [`store_accessors`]: the attribute macro generating typed accessors.
//!
//! # Example
//!
//! ```
//! use stowage_store::{KeyValueStore, MemoryStore, store_accessors};
//!
//! #[store_accessors]
//! struct Settings {
//!     store: MemoryStore,
//!
//!     #[store_access(default_value = 0, store = self.store)]
//!     delete_count: i64,
//!
//!     #[store_access(default_value = "", key = "user_id", store = self.store)]
//!     user_id: String,
//! }
//!
//! let settings = Settings { store: MemoryStore::new() };
//! assert_eq!(settings.delete_count(), 0);
//!
//! settings.set_delete_count(5);
//! assert_eq!(settings.delete_count(), 5);
//! assert_eq!(settings.store.integer("delete_count"), 5);
//!
//! settings.set_user_id("ada".to_string());
//! assert_eq!(settings.user_id(), "ada");
//! ```

// Self-reference so `#[store_accessors]` output can use `stowage_store::` paths within this crate.
extern crate self as stowage_store;

mod memory;
mod store;
mod value;

pub use memory::{MemoryStore, STANDARD_STORE_NAME, standard};
pub use store::KeyValueStore;
pub use value::StoreValue;

// Re-export the attribute macro.
pub use accessor_macros::store_accessors;
