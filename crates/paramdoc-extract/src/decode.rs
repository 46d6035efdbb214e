//! The decode pipeline.
//!
//! Decoding runs in three phases so a failure never leaves a record half
//! written:
//!
//! 1. every descriptor's location and type are checked,
//! 2. every raw value is resolved from the request and coerced,
//! 3. the coerced values are written into the record.

use crate::request::RequestParts;
use crate::resolve::{location_of, resolve_at};
use paramdoc_core::{
    DecodeOptions, EmptyNamePolicy, FieldDescriptor, FieldType, Location, ParamError,
    ParamResult, Parameters, Value,
};

/// Decodes request parameters into `record` with default options.
///
/// # Errors
///
/// Returns the first [`ParamError`] encountered; `record` is unmodified
/// in that case.
///
/// # Example
///
/// ```rust
/// use paramdoc_core::{Bindings, Parameters};
/// use paramdoc_extract::{decode_params, ExtractionContextBuilder};
/// use http::Uri;
///
/// #[derive(Default)]
/// struct StarParams {
///     star_id: i64,
///     potato: bool,
/// }
///
/// impl Parameters for StarParams {
///     fn bindings() -> Bindings<Self> {
///         Bindings::<Self>::new()
///             .int("star_id", "name: starid; kind: query; schemaMin: 3", |p| &mut p.star_id)
///             .bool("potato", "name: potato; kind: query; required: true", |p| &mut p.potato)
///     }
/// }
///
/// let ctx = ExtractionContextBuilder::new()
///     .uri(Uri::from_static("/stars?starid=10&potato=true"))
///     .build();
///
/// let mut params = StarParams::default();
/// decode_params(&mut params, &ctx).unwrap();
/// assert_eq!(params.star_id, 10);
/// assert!(params.potato);
/// ```
pub fn decode_params<T, R>(record: &mut T, request: &R) -> ParamResult<()>
where
    T: Parameters,
    R: RequestParts + ?Sized,
{
    decode_params_with(record, request, &DecodeOptions::default())
}

/// Decodes request parameters into `record`.
///
/// # Errors
///
/// - [`ParamError::EmptyName`] for a nameless annotation under
///   [`EmptyNamePolicy::Reject`].
/// - [`ParamError::UnsupportedLocation`] for an unknown `kind`.
/// - [`ParamError::UnsupportedType`] for a field outside int, bool and string.
/// - [`ParamError::NotFound`] for a missing path capture.
/// - [`ParamError::TypeMismatch`] for a value that does not coerce.
///
/// `record` is unmodified when an error is returned.
pub fn decode_params_with<T, R>(
    record: &mut T,
    request: &R,
    options: &DecodeOptions,
) -> ParamResult<()>
where
    T: Parameters,
    R: RequestParts + ?Sized,
{
    let bindings = T::bindings();
    let descriptors = bindings.descriptors();

    let targets = plan(&descriptors, options)?;

    let mut values: Vec<(&'static str, Value)> = Vec::with_capacity(targets.len());
    for (descriptor, location) in targets {
        let raw = resolve_at(descriptor, location, request)?;
        let value = bindings.coerce(descriptor.field_name, &raw)?;
        tracing::trace!(
            field = descriptor.field_name,
            parameter = %descriptor.external_name,
            location = %location,
            "resolved parameter"
        );
        values.push((descriptor.field_name, value));
    }

    let count = values.len();
    for (field, value) in values {
        bindings.assign(record, field, value)?;
    }

    tracing::debug!(fields = count, "decoded request parameters");
    Ok(())
}

/// Checks every descriptor before the request is read.
fn plan<'a>(
    descriptors: &'a [FieldDescriptor],
    options: &DecodeOptions,
) -> ParamResult<Vec<(&'a FieldDescriptor, Location)>> {
    let mut targets = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        if descriptor.has_empty_name() {
            match options.empty_name {
                EmptyNamePolicy::Skip => {
                    tracing::debug!(
                        field = descriptor.field_name,
                        "skipping annotated field without a name"
                    );
                    continue;
                }
                EmptyNamePolicy::Reject => {
                    return Err(ParamError::EmptyName {
                        field: descriptor.field_name.to_string(),
                    });
                }
            }
        }

        let location = location_of(descriptor)?;

        if let FieldType::Unsupported(type_name) = descriptor.field_type {
            return Err(ParamError::UnsupportedType {
                field: descriptor.field_name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        targets.push((descriptor, location));
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExtractionContextBuilder;
    use http::Uri;
    use paramdoc_core::{Bindings, ErrorKind};

    #[derive(Debug, Default, PartialEq)]
    struct Nameless {
        limit: i64,
        offset: i64,
    }

    impl Parameters for Nameless {
        fn bindings() -> Bindings<Self> {
            Bindings::<Self>::new()
                .int("limit", "kind: query", |p| &mut p.limit)
                .int("offset", "name: offset; kind: query", |p| &mut p.offset)
        }
    }

    fn ctx() -> crate::ExtractionContext {
        ExtractionContextBuilder::new()
            .uri(Uri::from_static("/?limit=5&offset=7"))
            .build()
    }

    #[test]
    fn test_empty_name_skipped_by_default() {
        let mut record = Nameless::default();
        decode_params(&mut record, &ctx()).unwrap();
        assert_eq!(record, Nameless { limit: 0, offset: 7 });
    }

    #[test]
    fn test_empty_name_rejected_when_configured() {
        let options = DecodeOptions {
            empty_name: EmptyNamePolicy::Reject,
        };
        let mut record = Nameless::default();

        let err = decode_params_with(&mut record, &ctx(), &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyName);
        assert_eq!(err.field(), Some("limit"));
        assert_eq!(record, Nameless::default());
    }

    #[derive(Debug, Default)]
    struct Mass {
        name: String,
        mass: f64,
    }

    impl Parameters for Mass {
        fn bindings() -> Bindings<Self> {
            Bindings::<Self>::new()
                .string("name", "name: name; kind: query", |p| &mut p.name)
                .unsupported("mass", "f64", "name: mass; kind: query")
        }
    }

    #[test]
    fn test_unsupported_type_fails_before_any_write() {
        let ctx = ExtractionContextBuilder::new()
            .uri(Uri::from_static("/?name=earth&mass=5.97"))
            .build();
        let mut record = Mass::default();

        let err = decode_params(&mut record, &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        assert_eq!(record.name, "");
        assert!(record.mass.abs() < f64::EPSILON);
    }
}
