//! Error types for the documentation crate.
//!
//! Every error here is a startup-time configuration error: routes are
//! documented once, when they are registered.

use paramdoc_core::ParamError;
use thiserror::Error;

/// Errors that can occur while assembling API documentation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to serialize the OpenAPI document to JSON.
    #[error("Failed to serialize OpenAPI document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A route is missing required information.
    #[error("Invalid route '{path}': {reason}")]
    InvalidRoute {
        /// The route path as given.
        path: String,
        /// Why the route was rejected.
        reason: String,
    },

    /// A parameter annotation could not be described.
    #[error("Invalid parameter: {0}")]
    Parameter(#[from] ParamError),

    /// Two operations derived the same operation id.
    #[error("Duplicate operation id '{operation_id}'")]
    DuplicateOperationId {
        /// The colliding operation id.
        operation_id: String,
    },
}

/// Result type for documentation operations.
pub type DocsResult<T> = Result<T, DocsError>;
