//! # paramdoc-docs
//!
//! The describe pipeline: turns annotated parameter records into OpenAPI
//! parameter objects and assembles routes into an OpenAPI 3.0 document.
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use paramdoc_core::{Bindings, Parameters};
//! use paramdoc_docs::{describe_params, ApiDocument, DocOptions, RouteDoc};
//!
//! #[derive(Default)]
//! struct StarParams {
//!     star_id: i64,
//!     potato: bool,
//! }
//!
//! impl Parameters for StarParams {
//!     fn bindings() -> Bindings<Self> {
//!         Bindings::<Self>::new()
//!             .int("star_id", "name: starid; kind: query; schemaMin: 3", |p| &mut p.star_id)
//!             .bool("potato", "name: potato; kind: query; required: true", |p| &mut p.potato)
//!     }
//! }
//!
//! let parameters = describe_params::<StarParams>().unwrap();
//! assert_eq!(parameters.len(), 2);
//! assert_eq!(parameters[0].schema.minimum, Some(3.0));
//! assert!(parameters[1].required);
//!
//! let mut doc = ApiDocument::new(DocOptions::default());
//! doc.add_route(
//!     &RouteDoc::new("/stars", "List stars")
//!         .method(Method::GET)
//!         .parameters::<StarParams>(),
//! )
//! .unwrap();
//! let json = doc.to_json().unwrap();
//! assert!(json.contains("\"starid\""));
//! ```
//!
//! Describe errors are configuration errors: register routes at startup and
//! refuse to start when one fails.

#![forbid(unsafe_code)]

mod document;
mod error;
mod generator;
mod openapi;

pub use document::{
    path_placeholders, unmatched_path_parameters, ApiDocument, DocOptions, RouteDoc, ServerDoc,
};
pub use error::{DocsError, DocsResult};
pub use generator::{describe, describe_all, describe_params, describe_params_with};
pub use openapi::{
    Info, OpenApi, Operation, Parameter, PathItem, Response, Schema, SchemaType, Server,
    OPENAPI_VERSION,
};
