//! Value resolution.
//!
//! Reads the raw text of one parameter from the request location its
//! descriptor names. Absent query, header and cookie values resolve to the
//! empty string; an absent path capture is an error because the route
//! itself declared it.

use crate::request::RequestParts;
use paramdoc_core::{FieldDescriptor, Location, ParamError, ParamResult};
use std::borrow::Cow;

/// Returns the raw value of parameter `name` at `location`.
///
/// # Errors
///
/// - [`ParamError::NotFound`] if a path capture is missing from the route.
/// - [`ParamError::MalformedRequest`] if the request's query source fails;
///   the bundled query parser is lossy and never does.
///
/// # Example
///
/// ```rust
/// use paramdoc_core::Location;
/// use paramdoc_extract::{resolve, ExtractionContextBuilder};
/// use http::Uri;
///
/// let ctx = ExtractionContextBuilder::new()
///     .uri(Uri::from_static("/stars?starid=10"))
///     .build();
///
/// assert_eq!(resolve("starid", Location::Query, &ctx).unwrap(), "10");
/// assert_eq!(resolve("sessionId", Location::Cookie, &ctx).unwrap(), "");
/// assert!(resolve("starId", Location::Path, &ctx).is_err());
/// ```
pub fn resolve<R>(name: &str, location: Location, request: &R) -> ParamResult<String>
where
    R: RequestParts + ?Sized,
{
    match location {
        Location::Query => Ok(request.query_value(name)?.unwrap_or_default()),
        Location::Path => request
            .path_capture(name)
            .map(str::to_string)
            .ok_or_else(|| ParamError::NotFound {
                field: name.to_string(),
                name: name.to_string(),
            }),
        Location::Header => Ok(request
            .header_value(name)
            .map(Cow::into_owned)
            .unwrap_or_default()),
        Location::Cookie => Ok(request.cookie_value(name).unwrap_or_default()),
    }
}

/// Resolves the raw value for a descriptor.
///
/// # Errors
///
/// Fails with [`ParamError::UnsupportedLocation`] if the descriptor's `kind`
/// is not a known location, otherwise as [`resolve`].
pub fn resolve_descriptor<R>(descriptor: &FieldDescriptor, request: &R) -> ParamResult<String>
where
    R: RequestParts + ?Sized,
{
    let location = location_of(descriptor)?;
    resolve_at(descriptor, location, request)
}

/// Resolves a descriptor at a known location, naming its field in errors.
pub(crate) fn resolve_at<R>(
    descriptor: &FieldDescriptor,
    location: Location,
    request: &R,
) -> ParamResult<String>
where
    R: RequestParts + ?Sized,
{
    resolve(&descriptor.external_name, location, request).map_err(|err| match err {
        ParamError::NotFound { name, .. } => ParamError::NotFound {
            field: descriptor.field_name.to_string(),
            name,
        },
        other => other,
    })
}

pub(crate) fn location_of(descriptor: &FieldDescriptor) -> ParamResult<Location> {
    descriptor
        .location
        .ok_or_else(|| ParamError::UnsupportedLocation {
            field: descriptor.field_name.to_string(),
            kind: descriptor.kind.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExtractionContextBuilder;
    use http::Uri;
    use paramdoc_core::{ErrorKind, FieldType};

    fn context() -> crate::ExtractionContext {
        ExtractionContextBuilder::new()
            .uri(Uri::from_static("/stars/5?starid=10&limit="))
            .header("Star-Name", "Sun")
            .cookie("sessionId", "bananas")
            .path_param("starId", "5")
            .build()
    }

    #[test]
    fn test_each_location() {
        let ctx = context();
        assert_eq!(resolve("starid", Location::Query, &ctx).unwrap(), "10");
        assert_eq!(resolve("starId", Location::Path, &ctx).unwrap(), "5");
        assert_eq!(resolve("Star-Name", Location::Header, &ctx).unwrap(), "Sun");
        assert_eq!(resolve("sessionId", Location::Cookie, &ctx).unwrap(), "bananas");
    }

    #[test]
    fn test_absent_values_are_empty() {
        let ctx = context();
        assert_eq!(resolve("potato", Location::Query, &ctx).unwrap(), "");
        assert_eq!(resolve("limit", Location::Query, &ctx).unwrap(), "");
        assert_eq!(resolve("X-Missing", Location::Header, &ctx).unwrap(), "");
        assert_eq!(resolve("VISIT_COUNT", Location::Cookie, &ctx).unwrap(), "");
    }

    #[test]
    fn test_missing_path_capture() {
        let err = resolve("fishName", Location::Path, &context()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("fishName"));
    }

    #[test]
    fn test_missing_path_capture_names_field() {
        let descriptor =
            FieldDescriptor::new("fish_name", FieldType::String, "name: fishName; kind: path");
        let err = resolve_descriptor(&descriptor, &context()).unwrap_err();
        assert_eq!(
            err,
            ParamError::NotFound {
                field: "fish_name".to_string(),
                name: "fishName".to_string(),
            }
        );
        assert_eq!(err.field(), Some("fish_name"));
    }

    #[test]
    fn test_descriptor_with_unknown_kind() {
        let descriptor = FieldDescriptor::new("body", FieldType::String, "name: b; kind: body");
        let err = resolve_descriptor(&descriptor, &context()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedLocation);
    }

    #[test]
    fn test_descriptor_resolution() {
        let descriptor =
            FieldDescriptor::new("star_name", FieldType::String, "name: Star-Name; kind: header");
        assert_eq!(resolve_descriptor(&descriptor, &context()).unwrap(), "Sun");
    }
}
