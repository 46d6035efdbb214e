//! Extraction error types.
//!
//! An [`ExtractionError`] is what an extractor hands back to the framework
//! when a request cannot be decoded. It always maps to `400 Bad Request`.

use http::StatusCode;
use paramdoc_core::{ErrorKind, ParamError};
use serde::Serialize;
use thiserror::Error;

/// Error that occurs while decoding request parameters.
///
/// # Example
///
/// ```rust
/// use paramdoc_core::{ErrorKind, ParamError};
/// use paramdoc_extract::ExtractionError;
/// use http::StatusCode;
///
/// let err = ExtractionError::from(ParamError::NotFound {
///     field: "star_id".to_string(),
///     name: "starId".to_string(),
/// });
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.error_code(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct ExtractionError {
    #[from]
    source: ParamError,
}

impl ExtractionError {
    /// Wraps a parameter error.
    #[must_use]
    pub fn new(source: ParamError) -> Self {
        Self { source }
    }

    /// Returns the underlying parameter error.
    #[must_use]
    pub fn param_error(&self) -> &ParamError {
        &self.source
    }

    /// Consumes the error and returns the underlying parameter error.
    #[must_use]
    pub fn into_param_error(self) -> ParamError {
        self.source
    }

    /// Returns the error classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// Returns the record field the error concerns, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.source.field()
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Returns a stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns a serializable error body for responses.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.error_code(),
            message: self.to_string(),
            field: self.field().map(str::to_string),
        }
    }
}

/// JSON error envelope for a failed extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Stable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Record field, when the error concerns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramdoc_core::FieldType;

    #[test]
    fn test_wraps_param_error() {
        let source = ParamError::TypeMismatch {
            field: "star_id".to_string(),
            value: "abc".to_string(),
            expected: FieldType::Int,
        };
        let err = ExtractionError::new(source.clone());

        assert_eq!(err.param_error(), &source);
        assert_eq!(err.to_string(), source.to_string());
        assert_eq!(err.field(), Some("star_id"));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.into_param_error(), source);
    }

    #[test]
    fn test_body() {
        let err = ExtractionError::from(ParamError::UnsupportedLocation {
            field: "body".to_string(),
            kind: "body".to_string(),
        });
        let body = err.to_body();

        assert_eq!(body.code, "UNSUPPORTED_LOCATION");
        assert_eq!(body.field.as_deref(), Some("body"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
