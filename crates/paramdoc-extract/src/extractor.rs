//! Extractor trait and the [`Decoded`] extractor.
//!
//! The [`FromRequest`] trait lets handlers declare what they need from a
//! request. [`Decoded<T>`] runs the decode pipeline for any [`Parameters`]
//! record.

use crate::decode::decode_params;
use crate::{ExtractionContext, ExtractionError};
use paramdoc_core::Parameters;
use std::ops::{Deref, DerefMut};

/// Trait for types that can be extracted from an HTTP request.
///
/// # Implementing `FromRequest`
///
/// ```rust
/// use paramdoc_core::ParamError;
/// use paramdoc_extract::{ExtractionContext, ExtractionError, FromRequest};
///
/// struct RequestId(String);
///
/// impl FromRequest for RequestId {
///     fn from_request(ctx: &ExtractionContext) -> Result<Self, ExtractionError> {
///         ctx.header("x-request-id")
///             .map(|id| RequestId(id.to_string()))
///             .ok_or_else(|| {
///                 ParamError::NotFound {
///                     field: "request_id".to_string(),
///                     name: "x-request-id".to_string(),
///                 }
///                 .into()
///             })
///     }
/// }
/// ```
pub trait FromRequest: Sized {
    /// Extracts this type from the request context.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] if extraction fails.
    fn from_request(ctx: &ExtractionContext) -> Result<Self, ExtractionError>;
}

// None when the inner extraction fails.
impl<T: FromRequest> FromRequest for Option<T> {
    fn from_request(ctx: &ExtractionContext) -> Result<Self, ExtractionError> {
        Ok(T::from_request(ctx).ok())
    }
}

impl<T: FromRequest> FromRequest for Result<T, ExtractionError> {
    fn from_request(ctx: &ExtractionContext) -> Result<Self, ExtractionError> {
        Ok(T::from_request(ctx))
    }
}

macro_rules! impl_from_request_for_tuple {
    ($($T:ident),*) => {
        impl<$($T: FromRequest),*> FromRequest for ($($T,)*) {
            fn from_request(ctx: &ExtractionContext) -> Result<Self, ExtractionError> {
                Ok(($($T::from_request(ctx)?,)*))
            }
        }
    };
}

impl_from_request_for_tuple!(T1);
impl_from_request_for_tuple!(T1, T2);
impl_from_request_for_tuple!(T1, T2, T3);
impl_from_request_for_tuple!(T1, T2, T3, T4);

impl FromRequest for () {
    fn from_request(_ctx: &ExtractionContext) -> Result<Self, ExtractionError> {
        Ok(())
    }
}

/// Extractor that decodes an annotated record from the request.
///
/// The record starts from its `Default` value; fields without an
/// annotation keep it.
///
/// # Example
///
/// ```rust
/// use paramdoc_core::{Bindings, Parameters};
/// use paramdoc_extract::{Decoded, ExtractionContextBuilder, FromRequest};
///
/// #[derive(Debug, Default)]
/// struct FishParams {
///     fish_name: String,
/// }
///
/// impl Parameters for FishParams {
///     fn bindings() -> Bindings<Self> {
///         Bindings::<Self>::new()
///             .string("fish_name", "name: fishName; kind: path", |p| &mut p.fish_name)
///     }
/// }
///
/// let ctx = ExtractionContextBuilder::new()
///     .path_param("fishName", "blump")
///     .build();
///
/// let Decoded(params) = Decoded::<FishParams>::from_request(&ctx).unwrap();
/// assert_eq!(params.fish_name, "blump");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded<T>(pub T);

impl<T> Decoded<T> {
    /// Consumes the extractor and returns the record.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Decoded<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Decoded<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Parameters + Default> FromRequest for Decoded<T> {
    fn from_request(ctx: &ExtractionContext) -> Result<Self, ExtractionError> {
        let mut record = T::default();
        decode_params(&mut record, ctx).map_err(|err| {
            tracing::debug!(error = %err, path = ctx.path(), "parameter decoding failed");
            ExtractionError::from(err)
        })?;
        Ok(Self(record))
    }
}
