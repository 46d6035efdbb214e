//! Error types for paramdoc.
//!
//! This module provides [`ParamError`], the error returned by both the
//! decode and describe pipelines. Every variant carries the field (or
//! external parameter name), the offending text and, where relevant, the
//! expected kind, so callers can log or report it without re-deriving
//! context.
//!
//! The decode pipeline's caller translates any [`ParamError`] into a
//! `400 Bad Request`; the describe pipeline's caller treats it as a fatal
//! configuration error at startup.

use crate::field::FieldType;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Classification of a [`ParamError`], cheap to copy and match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed boolean or numeric literal in an annotation.
    InvalidArgument,
    /// A field name that the record does not declare.
    UnknownField,
    /// A declared field that cannot be written.
    Unsettable,
    /// A raw value that cannot be coerced to the declared type.
    TypeMismatch,
    /// A declared field type outside int, bool and string.
    UnsupportedType,
    /// A `kind` the decode pipeline cannot read from.
    UnsupportedLocation,
    /// A `kind` the describe pipeline cannot document.
    InvalidLocation,
    /// A path capture declared by a field but absent from the route.
    NotFound,
    /// An annotated field without an external `name`.
    EmptyName,
    /// A request part that could not be parsed at all.
    MalformedRequest,
}

impl ErrorKind {
    /// Returns a stable error code suitable for error envelopes.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::Unsettable => "UNSETTABLE_FIELD",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::UnsupportedType => "UNSUPPORTED_TYPE",
            Self::UnsupportedLocation => "UNSUPPORTED_LOCATION",
            Self::InvalidLocation => "INVALID_LOCATION",
            Self::NotFound => "NOT_FOUND",
            Self::EmptyName => "EMPTY_NAME",
            Self::MalformedRequest => "MALFORMED_REQUEST",
        }
    }
}

/// Error raised while building descriptors, decoding a request or
/// describing parameters.
///
/// # Example
///
/// ```
/// use paramdoc_core::{ErrorKind, FieldType, ParamError};
///
/// let err = ParamError::TypeMismatch {
///     field: "star_id".to_string(),
///     value: "abc".to_string(),
///     expected: FieldType::Int,
/// };
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// assert!(err.to_string().contains("abc"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// An annotation literal could not be parsed.
    #[error("invalid {key} literal {literal:?} for field '{field}': {reason}")]
    InvalidArgument {
        /// The record field the annotation belongs to.
        field: String,
        /// The annotation key holding the literal.
        key: &'static str,
        /// The literal text.
        literal: String,
        /// Why the literal was rejected.
        reason: String,
    },

    /// The record declares no field with this name.
    #[error("unknown field '{field}'")]
    UnknownField {
        /// The requested field name.
        field: String,
    },

    /// The field exists but was registered without a mutator.
    #[error("field '{field}' cannot be set")]
    Unsettable {
        /// The field name.
        field: String,
    },

    /// The raw value does not parse as the declared type.
    #[error("cannot convert {value:?} to {expected} for field '{field}'")]
    TypeMismatch {
        /// The field name.
        field: String,
        /// The raw textual value.
        value: String,
        /// The declared type.
        expected: FieldType,
    },

    /// The field's declared type is not int, bool or string.
    #[error("unsupported type '{type_name}' for field '{field}'")]
    UnsupportedType {
        /// The field name.
        field: String,
        /// The declared type as written.
        type_name: String,
    },

    /// The decode pipeline cannot read from this location.
    #[error("parameter kind {kind:?} not supported for field '{field}'")]
    UnsupportedLocation {
        /// The field name.
        field: String,
        /// The `kind` literal.
        kind: String,
    },

    /// The describe pipeline cannot document this location.
    #[error("invalid parameter kind {kind:?} for field '{field}'")]
    InvalidLocation {
        /// The field name.
        field: String,
        /// The `kind` literal.
        kind: String,
    },

    /// A declared path capture is missing from the resolved route.
    #[error("parameter {name:?} for field '{field}' not found in path")]
    NotFound {
        /// The field name, or the parameter name when resolved without a
        /// descriptor.
        field: String,
        /// The external parameter name.
        name: String,
    },

    /// An annotated field has no external name.
    #[error("field '{field}' has an annotation without a name")]
    EmptyName {
        /// The field name.
        field: String,
    },

    /// A part of the request could not be parsed.
    #[error("malformed {part}: {reason}")]
    MalformedRequest {
        /// Which part of the request, e.g. `query string`.
        part: &'static str,
        /// The parser's complaint.
        reason: String,
    },
}

impl ParamError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::UnknownField { .. } => ErrorKind::UnknownField,
            Self::Unsettable { .. } => ErrorKind::Unsettable,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            Self::UnsupportedLocation { .. } => ErrorKind::UnsupportedLocation,
            Self::InvalidLocation { .. } => ErrorKind::InvalidLocation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::EmptyName { .. } => ErrorKind::EmptyName,
            Self::MalformedRequest { .. } => ErrorKind::MalformedRequest,
        }
    }

    /// Returns the record field this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. }
            | Self::UnknownField { field }
            | Self::Unsettable { field }
            | Self::TypeMismatch { field, .. }
            | Self::UnsupportedType { field, .. }
            | Self::UnsupportedLocation { field, .. }
            | Self::InvalidLocation { field, .. }
            | Self::NotFound { field, .. }
            | Self::EmptyName { field } => Some(field),
            Self::MalformedRequest { .. } => None,
        }
    }

    /// Returns the HTTP status a request handler should answer with.
    ///
    /// Every decode failure is reported to the client as a bad request.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = ParamError::TypeMismatch {
            field: "potato".to_string(),
            value: "maybe".to_string(),
            expected: FieldType::Bool,
        };

        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.field(), Some("potato"));
        assert!(err.to_string().contains("maybe"));
        assert!(err.to_string().contains("bool"));
    }

    #[test]
    fn test_not_found_names_field() {
        let err = ParamError::NotFound {
            field: "fish_name".to_string(),
            name: "fishName".to_string(),
        };

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.field(), Some("fish_name"));
        assert!(err.to_string().contains("fishName"));
    }

    #[test]
    fn test_invalid_argument_names_key() {
        let err = ParamError::InvalidArgument {
            field: "limit".to_string(),
            key: "schemaMin",
            literal: "three".to_string(),
            reason: "invalid float literal".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("schemaMin"));
        assert!(message.contains("three"));
        assert!(message.contains("limit"));
    }

    #[test]
    fn test_status_code_is_bad_request() {
        let err = ParamError::UnknownField {
            field: "ghost".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let kinds = [
            ErrorKind::InvalidArgument,
            ErrorKind::UnknownField,
            ErrorKind::Unsettable,
            ErrorKind::TypeMismatch,
            ErrorKind::UnsupportedType,
            ErrorKind::UnsupportedLocation,
            ErrorKind::InvalidLocation,
            ErrorKind::NotFound,
            ErrorKind::EmptyName,
            ErrorKind::MalformedRequest,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(ErrorKind::code).collect();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::UnsupportedLocation).unwrap();
        assert_eq!(json, "\"unsupported_location\"");
    }
}
