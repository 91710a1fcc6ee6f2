//! Code generation for `#[store_accessors]` on structs.

use proc_macro2::TokenStream;
use quote::quote;
use stowage_engine::{Diagnostic, Expander, PropertyDecl};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Attribute, Field, Fields, ItemStruct};

use crate::args::{self, ATTRIBUTE};
use crate::codegen::{AccessorField, accessor_methods};

/// Expands `#[store_accessors]`.
///
/// Every field carrying `#[store_access(...)]` is removed from the struct
/// and replaced by a getter/setter pair on an inherent impl. Each field is
/// expanded on its own: a failing field contributes one `compile_error!`
/// and no methods while the other fields still get theirs.
pub(crate) fn generate_store_accessors(
    attr: TokenStream,
    input: &ItemStruct,
    kv: &TokenStream,
) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(attr, "#[store_accessors] does not take arguments")
            .to_compile_error();
    }

    let Fields::Named(named) = &input.fields else {
        return syn::Error::new_spanned(
            input.struct_token,
            "#[store_accessors] requires a struct with named fields",
        )
        .to_compile_error();
    };

    let expander = Expander::default();
    let mut kept = Punctuated::<Field, syn::Token![,]>::new();
    let mut methods = Vec::new();
    let mut errors = Vec::new();

    for field in &named.named {
        let access_attrs: Vec<&Attribute> = field
            .attrs
            .iter()
            .filter(|attr| args::is_store_access(attr))
            .collect();

        match access_attrs.as_slice() {
            [] => kept.push(field.clone()),
            [attr] => match expand_field(field, attr, &expander, kv) {
                Ok(tokens) => methods.push(tokens),
                Err(diagnostic) => errors.push(compile_error(attr, &diagnostic)),
            },
            [_, duplicate, ..] => errors.push(compile_error(
                duplicate,
                &Diagnostic::syntax_parse(format!("duplicate `#[{ATTRIBUTE}]` attribute")),
            )),
        }
    }

    let mut output = input.clone();
    if let Fields::Named(fields) = &mut output.fields {
        fields.named = kept;
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #output

        impl #impl_generics #name #ty_generics #where_clause {
            #(#methods)*
        }

        #(#errors)*
    }
}

fn expand_field(
    field: &Field,
    attr: &Attribute,
    expander: &Expander,
    kv: &TokenStream,
) -> Result<TokenStream, Diagnostic> {
    let Some(ident) = &field.ident else {
        return Err(Diagnostic::syntax_parse("field has no identifier"));
    };

    let name = ident.unraw().to_string();
    let decl = match args::normalize(attr)? {
        Some(arguments) => PropertyDecl::new(name, arguments),
        None => PropertyDecl::without_arguments(name),
    };
    let accessor = expander.expand(&decl)?;

    let docs = field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .collect();

    accessor_methods(
        &accessor,
        &AccessorField {
            ident,
            ty: &field.ty,
            vis: &field.vis,
            docs,
        },
        kv,
    )
}

fn compile_error(attr: &Attribute, diagnostic: &Diagnostic) -> TokenStream {
    syn::Error::new_spanned(attr, diagnostic.to_string()).to_compile_error()
}
