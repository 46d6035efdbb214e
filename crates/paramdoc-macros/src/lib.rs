//! # paramdoc-macros
//!
//! `#[derive(Parameters)]` for paramdoc.
//!
//! The derive registers every named field of a struct with
//! `paramdoc_core::Bindings`, attaching the text of its `#[param("...")]`
//! attribute as the field's annotation. Fields without the attribute are
//! registered unannotated, which both pipelines ignore.
//!
//! ## Example
//!
//! ```rust,ignore
//! use paramdoc::Parameters;
//!
//! #[derive(Debug, Default, Parameters)]
//! struct StarParams {
//!     #[param("name: starid; kind: query; schemaMin: 3")]
//!     star_id: i64,
//!     #[param("name: potato; kind: query; required: true")]
//!     potato: bool,
//!     // Not a request parameter.
//!     internal: String,
//! }
//! ```
//!
//! ## Field types
//!
//! | Declared type | Registered as |
//! |---------------|---------------|
//! | `i64`         | int           |
//! | `bool`        | bool          |
//! | `String`      | string        |
//! | anything else | unsupported   |
//!
//! An annotated field of an unsupported type is not a compile error: both
//! pipelines report it as an unsupported type at runtime, naming the type as
//! written.
//!
//! The generated code refers to `::paramdoc_core`, so that crate must be a
//! direct dependency of the crate using the derive.

#![forbid(unsafe_code)]

use proc_macro::TokenStream;

mod derive;
mod parse;

/// Derives `paramdoc_core::Parameters` for a struct with named fields.
///
/// Annotate request parameters with `#[param("...")]`. The string uses the
/// `key: value; key: value` grammar understood by both pipelines.
#[proc_macro_derive(Parameters, attributes(param))]
pub fn derive_parameters(input: TokenStream) -> TokenStream {
    derive::expand_parameters(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
