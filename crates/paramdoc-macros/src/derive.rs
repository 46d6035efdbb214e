//! Expansion of `#[derive(Parameters)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, DeriveInput};

use crate::parse::{FieldKind, ParamField, ParamsInput};

/// Expands the derive input into a `Parameters` implementation.
pub fn expand_parameters(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(input)?;
    let parsed = ParamsInput::parse(input)?;

    let ident = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();
    let registrations = parsed.fields.iter().map(registration);

    Ok(quote! {
        impl #impl_generics ::paramdoc_core::Parameters for #ident #ty_generics #where_clause {
            fn bindings() -> ::paramdoc_core::Bindings<Self> {
                ::paramdoc_core::Bindings::<Self>::new()
                    #(#registrations)*
            }
        }
    })
}

/// Generates the builder call registering one field.
fn registration(field: &ParamField) -> TokenStream {
    let ident = &field.ident;
    let name = ident.unraw().to_string();
    let annotation = match &field.annotation {
        Some(text) => quote!(::core::option::Option::Some(#text)),
        None => quote!(::core::option::Option::<&'static str>::None),
    };

    match &field.kind {
        FieldKind::Int => quote! {
            .int(#name, #annotation, |record| &mut record.#ident)
        },
        FieldKind::Bool => quote! {
            .bool(#name, #annotation, |record| &mut record.#ident)
        },
        FieldKind::String => quote! {
            .string(#name, #annotation, |record| &mut record.#ident)
        },
        FieldKind::Unsupported(type_name) => quote! {
            .unsupported(#name, #type_name, #annotation)
        },
    }
}
