//! Auto-detection of crate paths for generated code.
//!
//! Generated accessors name `KeyValueStore`, `StoreValue` and `standard()`
//! through a fully-qualified path. The path is resolved from the consuming
//! crate's `Cargo.toml`:
//! 1. A direct (possibly renamed) dependency on `stowage_store`.
//! 2. The `stowage` umbrella crate, as `stowage::stowage_store`.
//! 3. The literal crate name, so the compile error points at the missing
//!    dependency.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

const STORE_CRATE: &str = "stowage_store";
const UMBRELLA_CRATE: &str = "stowage";

/// Returns the token path for `stowage_store` in the consuming crate.
pub(crate) fn stowage_store_path() -> TokenStream {
    match crate_name(STORE_CRATE) {
        Ok(FoundCrate::Itself) => {
            let ident = format_ident!("{}", STORE_CRATE);
            quote!(#ident)
        }
        Ok(FoundCrate::Name(found)) => {
            let ident = format_ident!("{}", found);
            quote!(#ident)
        }
        Err(_) => {
            let store = format_ident!("{}", STORE_CRATE);
            match crate_name(UMBRELLA_CRATE) {
                Ok(FoundCrate::Name(found)) => {
                    let umbrella = format_ident!("{}", found);
                    quote!(#umbrella::#store)
                }
                // The umbrella's own tests and examples.
                Ok(FoundCrate::Itself) => {
                    let umbrella = format_ident!("{}", UMBRELLA_CRATE);
                    quote!(#umbrella::#store)
                }
                Err(_) => quote!(#store),
            }
        }
    }
}
