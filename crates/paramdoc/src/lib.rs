//! # paramdoc
//!
//! **Annotation-driven request parameters for HTTP services**
//!
//! One annotation per struct field drives two pipelines:
//!
//! - **decode** fills a parameter struct from an incoming request (path
//!   captures, query string, headers and cookies), coercing each value to
//!   the field's declared type,
//! - **describe** turns the same struct into OpenAPI 3.0 parameter objects
//!   and assembles routes into a document.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paramdoc::prelude::*;
//!
//! #[derive(Debug, Default, Parameters)]
//! struct StarParams {
//!     #[param("name: starid; kind: query; schemaMin: 3")]
//!     star_id: i64,
//!     #[param("name: potato; kind: query; required: true")]
//!     potato: bool,
//! }
//!
//! // Startup: document the route, refusing to start on a bad annotation.
//! let mut doc = ApiDocument::new(DocOptions::default());
//! doc.add_route(
//!     &RouteDoc::new("/stars", "List stars")
//!         .method(http::Method::GET)
//!         .parameters::<StarParams>(),
//! )?;
//!
//! // Per request: decode, answering 400 on failure.
//! let Decoded(params) = Decoded::<StarParams>::from_request(&ctx)?;
//! ```
//!
//! ## Annotation grammar
//!
//! `key: value` pairs separated by `;`. Keys: `name`, `kind` (`path`,
//! `query`, `header`, `cookie`), `desc`, `example`, `required`, `schemaMin`.
//! Unknown keys are ignored.
//!
//! The derive expands to code naming `paramdoc_core`, so depend on it
//! alongside this crate when using `#[derive(Parameters)]`.

#![forbid(unsafe_code)]

pub mod logging;

pub use paramdoc_core as core;
pub use paramdoc_docs as docs;
pub use paramdoc_extract as extract;

pub use paramdoc_core::{Bindings, ErrorKind, ParamError, ParamResult, Parameters};
pub use paramdoc_macros::Parameters;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use paramdoc::prelude::*;
/// ```
pub mod prelude {
    pub use paramdoc_core::{
        Bindings, DecodeOptions, DescribeOptions, EmptyNamePolicy, ErrorKind, Location,
        ParamError, ParamResult, Parameters,
    };

    pub use paramdoc_extract::{
        decode_params, decode_params_with, Decoded, ExtractionContext, ExtractionContextBuilder,
        ExtractionError, FromRequest, PathParams, RequestParts,
    };

    pub use paramdoc_docs::{
        describe_params, describe_params_with, ApiDocument, DocOptions, DocsError, DocsResult,
        Parameter, RouteDoc,
    };

    pub use paramdoc_macros::Parameters;

    pub use crate::logging::{init_logging, LogConfig};
}
