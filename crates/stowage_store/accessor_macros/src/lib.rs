//! Procedural macros for `stowage_store`.
//!
//! Provides `#[store_accessors]`, which turns annotated struct fields into
//! typed accessors over a key-value store.

mod accessors;
mod args;
mod codegen;
mod crate_path;

use proc_macro::TokenStream;

/// Generates typed store accessors for annotated fields.
///
/// Each named field carrying `#[store_access(...)]` is removed from the
/// struct and replaced by a getter `fn <field>(&self) -> T` and a setter
/// `fn set_<field>(&self, new_value: T)`, both with the field's visibility.
/// Fields without the attribute are kept as they are.
///
/// # Field Arguments
///
/// - `default_value` (required): a `bool`, integer, float or string literal,
///   or a constant such as `f64::NAN`. Its type selects the typed read.
/// - `key` (optional): the storage key expression. Defaults to the field
///   name as a string literal.
/// - `store` (optional): an expression evaluating to a `KeyValueStore`
///   (or a reference to one). May use `self`. Defaults to
///   `stowage_store::standard()`.
///
/// The getter returns the default when the store holds no value under the
/// key. String getters also return it when the stored value is not a string.
///
/// # Example
///
/// ```
/// use stowage_store::{MemoryStore, store_accessors};
///
/// #[store_accessors]
/// pub struct AppSettings {
///     store: MemoryStore,
///
///     /// Whether notifications are shown.
///     #[store_access(default_value = false, key = "enable_notification", store = self.store)]
///     pub enable_notification: bool,
///
///     #[store_access(default_value = f64::NAN, store = self.store)]
///     pub relative_value: f64,
/// }
///
/// let settings = AppSettings { store: MemoryStore::new() };
/// assert!(!settings.enable_notification());
/// assert!(settings.relative_value().is_nan());
///
/// settings.set_enable_notification(true);
/// assert!(settings.enable_notification());
/// ```
#[proc_macro_attribute]
pub fn store_accessors(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemStruct);
    let kv = crate_path::stowage_store_path();
    accessors::generate_store_accessors(attr.into(), &input, &kv).into()
}
