//! Rendering of accessor descriptions into Rust methods.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stowage_engine::{AccessorDescription, Diagnostic, NEW_VALUE, ResolvedType, StoreRef};
use syn::ext::IdentExt;
use syn::{Attribute, Expr, Ident, Type, Visibility};

/// The field an accessor pair is generated for.
pub(crate) struct AccessorField<'a> {
    /// Field name; the getter takes it, the setter prefixes `set_`.
    pub ident: &'a Ident,
    /// Declared field type, used for the getter's return and setter's parameter.
    pub ty: &'a Type,
    /// Field visibility, applied to both methods.
    pub vis: &'a Visibility,
    /// Doc comments forwarded to the getter.
    pub docs: Vec<&'a Attribute>,
}

/// Generates the getter and setter methods for one field.
///
/// `kv` is the path to `stowage_store`. Expression texts in the description
/// are parsed back into tokens; a text that is not a valid expression fails
/// with a syntax diagnostic.
pub(crate) fn accessor_methods(
    accessor: &AccessorDescription,
    field: &AccessorField<'_>,
    kv: &TokenStream,
) -> Result<TokenStream, Diagnostic> {
    let get = accessor.get();
    let set = accessor.set();

    let get_store = store_expr(get.store(), kv)?;
    let get_key = parse_expr(get.key(), "key")?;
    let default = parse_expr(get.default_value(), "default value")?;
    let set_store = store_expr(set.store(), kv)?;
    let set_key = parse_expr(set.key(), "key")?;

    // String defaults are usually `&str` literals.
    let default = if accessor.value_type() == ResolvedType::String {
        quote! { ::core::convert::Into::into(#default) }
    } else {
        quote! { #default }
    };

    let read_method = format_ident!("{}", get.read().method());
    let read = if get.read().falls_back_to_default() {
        quote! { __store.#read_method(#get_key).unwrap_or_else(|| #default) }
    } else {
        quote! { __store.#read_method(#get_key) }
    };

    let getter = field.ident;
    let setter = format_ident!("set_{}", field.ident.unraw());
    let new_value = format_ident!("{}", NEW_VALUE);
    let ty = field.ty;
    let vis = field.vis;
    let docs = &field.docs;
    let setter_doc = format!(" Stores a new value for [`Self::{getter}`].");

    Ok(quote! {
        #(#docs)*
        #vis fn #getter(&self) -> #ty {
            use #kv::KeyValueStore as _;
            let __store = &(#get_store);
            if !__store.contains(#get_key) {
                return #default;
            }
            #read
        }

        #[doc = #setter_doc]
        #vis fn #setter(&self, #new_value: #ty) {
            use #kv::KeyValueStore as _;
            let __store = &(#set_store);
            __store.set_value(#set_key, #kv::StoreValue::from(#new_value));
        }
    })
}

fn store_expr(store: &StoreRef, kv: &TokenStream) -> Result<TokenStream, Diagnostic> {
    match store {
        StoreRef::Standard => Ok(quote! { #kv::standard() }),
        StoreRef::Expr(text) => parse_expr(text, "store").map(|expr| quote! { #expr }),
    }
}

fn parse_expr(text: &str, what: &str) -> Result<Expr, Diagnostic> {
    syn::parse_str(text)
        .map_err(|err| Diagnostic::syntax_parse(format!("invalid {what} expression `{text}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use stowage_engine::{DefaultValue, LiteralExpr, synthesize};
    use syn::parse_quote;

    fn methods(accessor: &AccessorDescription) -> Vec<syn::ImplItemFn> {
        let ident: Ident = parse_quote!(user_id);
        let ty: Type = parse_quote!(String);
        let vis: Visibility = parse_quote!(pub);
        let field = AccessorField {
            ident: &ident,
            ty: &ty,
            vis: &vis,
            docs: Vec::new(),
        };

        let tokens = accessor_methods(accessor, &field, &quote!(stowage_store)).unwrap();
        let item: syn::ItemImpl = syn::parse2(quote! { impl Settings { #tokens } }).unwrap();
        item.items
            .into_iter()
            .map(|item| match item {
                syn::ImplItem::Fn(method) => method,
                other => panic!("unexpected impl item: {other:?}"),
            })
            .collect()
    }

    fn string_accessor(store: StoreRef) -> AccessorDescription {
        synthesize(
            ResolvedType::String,
            store,
            "\"user_id\"".into(),
            &DefaultValue::from_literal(LiteralExpr::Str(String::new())),
        )
        .unwrap()
    }

    #[test]
    fn generates_getter_and_setter() {
        let methods = methods(&string_accessor(StoreRef::Standard));
        let names: Vec<_> = methods.iter().map(|m| m.sig.ident.to_string()).collect();
        assert_eq!(names, ["user_id", "set_user_id"]);
    }

    #[test]
    fn standard_store_uses_crate_path() {
        let methods = methods(&string_accessor(StoreRef::Standard));
        let getter = methods[0].block.to_token_stream().to_string();
        assert!(getter.contains(&quote!(stowage_store::standard()).to_string()));
    }

    #[test]
    fn string_read_falls_back_to_default() {
        let methods = methods(&string_accessor(StoreRef::Expr("self.store".into())));
        let getter = methods[0].block.to_token_stream().to_string();
        assert!(getter.contains("unwrap_or_else"));
        assert!(getter.contains(&quote!(self.store).to_string()));
    }

    #[test]
    fn invalid_store_text_is_a_syntax_error() {
        let accessor = string_accessor(StoreRef::Expr("self.".into()));
        let ident: Ident = parse_quote!(user_id);
        let ty: Type = parse_quote!(String);
        let vis = Visibility::Inherited;
        let field = AccessorField {
            ident: &ident,
            ty: &ty,
            vis: &vis,
            docs: Vec::new(),
        };

        let err = accessor_methods(&accessor, &field, &quote!(stowage_store)).unwrap_err();
        assert_eq!(err.kind(), stowage_engine::DiagnosticKind::SyntaxParseError);
    }
}
