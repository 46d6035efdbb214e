//! OpenAPI document types.
//!
//! A deliberately small subset of OpenAPI 3.0: enough to carry route
//! operations and the parameter objects derived from field annotations.
//! Field names and optionality follow <https://spec.openapis.org/oas/v3.0.0>.

use http::Method;
use indexmap::IndexMap;
use paramdoc_core::Location;
use serde::{Deserialize, Serialize};

/// OpenAPI version emitted by [`ApiDocument`](crate::ApiDocument).
pub const OPENAPI_VERSION: &str = "3.0.0";

/// OpenAPI document root object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApi {
    /// OpenAPI version.
    pub openapi: String,
    /// API metadata.
    pub info: Info,
    /// Available servers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Paths in registration order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
}

/// Server information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server URL.
    pub url: String,
    /// Server description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The operations available on a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// TRACE operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Returns true if OpenAPI has an operation slot for `method`.
    #[must_use]
    pub fn supports(method: &Method) -> bool {
        matches!(
            *method,
            Method::GET
                | Method::PUT
                | Method::POST
                | Method::DELETE
                | Method::OPTIONS
                | Method::HEAD
                | Method::PATCH
                | Method::TRACE
        )
    }

    /// Returns the operation slot for `method`.
    ///
    /// Returns `None` for methods OpenAPI has no slot for (e.g. `CONNECT`).
    pub fn slot_mut(&mut self, method: &Method) -> Option<&mut Option<Operation>> {
        let slot = match *method {
            Method::GET => &mut self.get,
            Method::PUT => &mut self.put,
            Method::POST => &mut self.post,
            Method::DELETE => &mut self.delete,
            Method::OPTIONS => &mut self.options,
            Method::HEAD => &mut self.head,
            Method::PATCH => &mut self.patch,
            Method::TRACE => &mut self.trace,
            _ => return None,
        };
        Some(slot)
    }

    /// Returns the operation registered for `method`, if any.
    #[must_use]
    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        match *method {
            Method::GET => self.get.as_ref(),
            Method::PUT => self.put.as_ref(),
            Method::POST => self.post.as_ref(),
            Method::DELETE => self.delete.as_ref(),
            Method::OPTIONS => self.options.as_ref(),
            Method::HEAD => self.head.as_ref(),
            Method::PATCH => self.patch.as_ref(),
            Method::TRACE => self.trace.as_ref(),
            _ => None,
        }
    }
}

/// An API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: String,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameters, in field declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Responses by status code.
    pub responses: IndexMap<String, Response>,
}

/// Response definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Description (required by OpenAPI).
    pub description: String,
}

impl Response {
    /// The placeholder response map every documented operation starts with.
    #[must_use]
    pub fn default_map() -> IndexMap<String, Self> {
        let mut responses = IndexMap::new();
        responses.insert(
            "default".to_string(),
            Self {
                description: "Default response".to_string(),
            },
        );
        responses
    }
}

/// A parameter object derived from one annotated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// External parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: Location,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Typed example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    /// Whether required. Always true for path parameters.
    #[serde(default)]
    pub required: bool,
    /// Value schema.
    pub schema: Schema,
}

/// JSON Schema type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Integer type.
    Integer,
    /// Boolean type.
    Boolean,
    /// String type.
    String,
}

/// Parameter schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema type.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Inclusive numeric minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
}

impl Schema {
    /// Create an integer schema.
    #[must_use]
    pub fn integer() -> Self {
        Self {
            schema_type: SchemaType::Integer,
            minimum: None,
        }
    }

    /// Create a boolean schema.
    #[must_use]
    pub fn boolean() -> Self {
        Self {
            schema_type: SchemaType::Boolean,
            minimum: None,
        }
    }

    /// Create a string schema.
    #[must_use]
    pub fn string() -> Self {
        Self {
            schema_type: SchemaType::String,
            minimum: None,
        }
    }

    /// Set the minimum.
    #[must_use]
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }
}
