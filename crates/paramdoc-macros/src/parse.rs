//! Parsing utilities for the `Parameters` derive.
//!
//! This module reads the derive input: the struct's named fields, their
//! declared types and their `#[param("...")]` annotations.

use quote::ToTokens;
use syn::{
    spanned::Spanned, Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr,
    PathArguments, Type,
};

/// Name of the field attribute carrying an annotation.
pub const PARAM_ATTR: &str = "param";

/// How a field's declared type takes part in the pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `i64`.
    Int,
    /// `bool`.
    Bool,
    /// `String`.
    String,
    /// Anything else, with the type as written.
    Unsupported(String),
}

impl FieldKind {
    /// Classifies a declared type.
    pub fn of(ty: &Type) -> Self {
        match last_segment(ty).as_deref() {
            Some("i64") => Self::Int,
            Some("bool") => Self::Bool,
            Some("String") => Self::String,
            _ => Self::Unsupported(type_name(ty)),
        }
    }
}

/// A parsed struct field.
#[derive(Debug)]
pub struct ParamField {
    /// Field identifier.
    pub ident: Ident,
    /// Type classification.
    pub kind: FieldKind,
    /// Annotation text, if the field has one.
    pub annotation: Option<LitStr>,
}

/// A parsed `#[derive(Parameters)]` input.
#[derive(Debug)]
pub struct ParamsInput {
    /// The struct name.
    pub ident: Ident,
    /// The struct's generics.
    pub generics: Generics,
    /// Named fields in declaration order.
    pub fields: Vec<ParamField>,
}

impl ParamsInput {
    /// Parses a derive input.
    pub fn parse(input: DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => &named.named,
                _ => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "Parameters can only be derived for structs with named fields",
                    ))
                }
            },
            _ => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "Parameters can only be derived for structs",
                ))
            }
        };

        let fields = named
            .iter()
            .map(|field| {
                let ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
                Ok(ParamField {
                    ident,
                    kind: FieldKind::of(&field.ty),
                    annotation: annotation(&field.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: input.ident,
            generics: input.generics,
            fields,
        })
    }
}

/// Reads the single `#[param("...")]` attribute of a field.
fn annotation(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident(PARAM_ATTR)) {
        if found.is_some() {
            return Err(syn::Error::new(attr.span(), "duplicate #[param] attribute"));
        }
        let text: LitStr = attr.parse_args().map_err(|e| {
            syn::Error::new(
                e.span(),
                "expected a string literal, e.g. #[param(\"name: id; kind: path\")]",
            )
        })?;
        found = Some(text);
    }
    Ok(found)
}

/// Returns the last path segment of a plain, non-generic type path.
fn last_segment(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            let segment = type_path.path.segments.last()?;
            match segment.arguments {
                PathArguments::None => Some(segment.ident.to_string()),
                _ => None,
            }
        }
        Type::Group(group) => last_segment(&group.elem),
        Type::Paren(paren) => last_segment(&paren.elem),
        _ => None,
    }
}

/// Renders a type as written, without token spacing.
fn type_name(ty: &Type) -> String {
    let mut name = String::new();
    for token in ty.to_token_stream() {
        let text = token.to_string();
        let needs_space = name
            .chars()
            .last()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
            && text.starts_with(|c: char| c.is_alphanumeric() || c == '_');
        if needs_space {
            name.push(' ');
        }
        name.push_str(&text.replace(' ', ""));
    }
    name
}
