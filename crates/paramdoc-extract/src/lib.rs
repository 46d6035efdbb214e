//! # paramdoc-extract
//!
//! The decode pipeline: reads annotated parameters out of an HTTP request
//! and writes them, coerced, into a record.
//!
//! | Location | Source | Absent value |
//! |----------|--------|--------------|
//! | `query` | first value of the query parameter | empty string |
//! | `path` | capture of the matched route | [`NotFound`](paramdoc_core::ParamError::NotFound) |
//! | `header` | first value of the header | empty string |
//! | `cookie` | first cookie with the name | empty string |
//!
//! ## Example
//!
//! ```rust
//! use paramdoc_core::{Bindings, Parameters};
//! use paramdoc_extract::{Decoded, ExtractionContextBuilder, FromRequest};
//! use http::Uri;
//!
//! #[derive(Debug, Default)]
//! struct StarParams {
//!     star_id: i64,
//!     star_name: String,
//!     session_id: String,
//! }
//!
//! impl Parameters for StarParams {
//!     fn bindings() -> Bindings<Self> {
//!         Bindings::<Self>::new()
//!             .int("star_id", "name: starId; kind: path", |p| &mut p.star_id)
//!             .string("star_name", "name: Star-Name; kind: header", |p| &mut p.star_name)
//!             .string("session_id", "name: sessionId; kind: cookie", |p| &mut p.session_id)
//!     }
//! }
//!
//! let ctx = ExtractionContextBuilder::new()
//!     .uri(Uri::from_static("/stars/5"))
//!     .header("Star-Name", "Sun")
//!     .path_param("starId", "5")
//!     .build();
//!
//! let params = Decoded::<StarParams>::from_request(&ctx).unwrap().into_inner();
//! assert_eq!(params.star_id, 5);
//! assert_eq!(params.star_name, "Sun");
//! assert_eq!(params.session_id, "");
//! ```
//!
//! ## Error Handling
//!
//! Every failure is an [`ExtractionError`] wrapping a
//! [`ParamError`](paramdoc_core::ParamError) and answers `400 Bad Request`.
//! A failed decode never leaves the record partially written.

#![forbid(unsafe_code)]

mod context;
mod cookie;
mod decode;
mod error;
mod extractor;
mod params;
mod query;
mod request;
mod resolve;

pub use context::{ExtractionContext, ExtractionContextBuilder};
pub use cookie::Cookies;
pub use decode::{decode_params, decode_params_with};
pub use error::{ErrorBody, ExtractionError};
pub use extractor::{Decoded, FromRequest};
pub use params::PathParams;
pub use query::query_value;
pub use request::RequestParts;
pub use resolve::{resolve, resolve_descriptor};
