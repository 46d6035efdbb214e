//! Core types for paramdoc.
//!
//! A record type registers its fields together with a small annotation
//! per field. Two pipelines read the same annotations:
//!
//! - **decode** (in `paramdoc-extract`) resolves each field's raw value from
//!   a request and writes it into the record,
//! - **describe** (in `paramdoc-docs`) turns each field into an OpenAPI
//!   parameter object.
//!
//! This crate holds what both share: the annotation grammar, field
//! registrations, descriptors, coercion rules and the error taxonomy.

#![forbid(unsafe_code)]

pub mod annotation;
mod binding;
pub mod coerce;
mod descriptor;
mod error;
mod field;
mod policy;

pub use annotation::Annotation;
pub use binding::{build_descriptors, Bindings, FieldBinding, Parameters, Slot};
pub use coerce::Value;
pub use descriptor::FieldDescriptor;
pub use error::{ErrorKind, ParamError, ParamResult};
pub use field::{FieldType, Location};
pub use policy::{DecodeOptions, DescribeOptions, EmptyNamePolicy};
