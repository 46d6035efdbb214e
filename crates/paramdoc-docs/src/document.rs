//! API document assembly.
//!
//! [`ApiDocument`] collects documented routes into one OpenAPI document.
//! Each [`RouteDoc`] contributes one operation per HTTP method, all sharing
//! the parameters described from the route's parameter record.

use crate::error::{DocsError, DocsResult};
use crate::generator::describe_all;
use crate::openapi::{
    Info, OpenApi, Operation, Parameter, PathItem, Response, Server, OPENAPI_VERSION,
};
use http::Method;
use indexmap::IndexMap;
use paramdoc_core::{DescribeOptions, FieldDescriptor, Location, Parameters};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Top-level document settings.
///
/// Servers are documentation only; they take no part in request matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocOptions {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Servers listed in the document.
    pub servers: Vec<ServerDoc>,
}

impl Default for DocOptions {
    fn default() -> Self {
        Self {
            title: "Default Title".to_string(),
            version: "1.0".to_string(),
            servers: vec![
                ServerDoc::new("https://www.example.com/v3", "Production environment API"),
                ServerDoc::new("https://test.example.com/v3", "Test environment API"),
            ],
        }
    }
}

/// A server entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDoc {
    /// Server URL.
    pub url: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl ServerDoc {
    /// Creates a server entry.
    #[must_use]
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Documentation for one route.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use paramdoc_docs::RouteDoc;
///
/// let route = RouteDoc::new("/stars/{starId}", "Get star")
///     .method(Method::GET)
///     .description("Returns a single star.");
///
/// assert_eq!(route.operation_id(&Method::GET), "get-star");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDoc {
    path: String,
    methods: Vec<Method>,
    summary: String,
    description: Option<String>,
    parameters: Vec<FieldDescriptor>,
}

impl RouteDoc {
    /// Creates a route with a path template and a short summary.
    #[must_use]
    pub fn new(path: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
            summary: summary.into(),
            description: None,
            parameters: Vec::new(),
        }
    }

    /// Adds an HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds several HTTP methods.
    #[must_use]
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Sets the long description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Documents the annotated fields of `T` as the route's parameters.
    #[must_use]
    pub fn parameters<T: Parameters>(mut self) -> Self {
        self.parameters = T::bindings().descriptors();
        self
    }

    /// Sets the parameter descriptors directly.
    #[must_use]
    pub fn descriptors(mut self, descriptors: Vec<FieldDescriptor>) -> Self {
        self.parameters = descriptors;
        self
    }

    /// Returns the path template.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the HTTP methods.
    #[must_use]
    pub fn http_methods(&self) -> &[Method] {
        &self.methods
    }

    /// Returns the operation id for one of this route's methods.
    ///
    /// The summary is lower-cased with spaces replaced by `-`. Routes with
    /// more than one method get the lower-cased method appended.
    #[must_use]
    pub fn operation_id(&self, method: &Method) -> String {
        let base = self.summary.to_lowercase().replace(' ', "-");
        if self.methods.len() > 1 {
            format!("{base}-{}", method.as_str().to_lowercase())
        } else {
            base
        }
    }

    fn validate(&self) -> DocsResult<()> {
        let reason = if self.path.is_empty() {
            "path is empty"
        } else if self.summary.trim().is_empty() {
            "summary is empty"
        } else if self.methods.is_empty() {
            "no HTTP methods"
        } else {
            return Ok(());
        };

        Err(DocsError::InvalidRoute {
            path: self.path.clone(),
            reason: reason.to_string(),
        })
    }
}

/// An OpenAPI document under construction.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use paramdoc_docs::{ApiDocument, DocOptions, RouteDoc};
///
/// let mut doc = ApiDocument::new(DocOptions::default());
/// doc.add_route(&RouteDoc::new("/stars", "List stars").method(Method::GET))
///     .unwrap();
///
/// let json = doc.to_json().unwrap();
/// assert!(json.contains("\"operationId\": \"list-stars\""));
/// ```
#[derive(Debug, Clone)]
pub struct ApiDocument {
    openapi: OpenApi,
    describe_options: DescribeOptions,
    operation_ids: HashSet<String>,
}

impl ApiDocument {
    /// Starts an empty OpenAPI 3.0 document.
    #[must_use]
    pub fn new(options: DocOptions) -> Self {
        let servers = options
            .servers
            .into_iter()
            .map(|server| Server {
                url: server.url,
                description: Some(server.description).filter(|d| !d.is_empty()),
            })
            .collect();

        Self {
            openapi: OpenApi {
                openapi: OPENAPI_VERSION.to_string(),
                info: Info {
                    title: options.title,
                    version: options.version,
                },
                servers,
                paths: IndexMap::new(),
            },
            describe_options: DescribeOptions::default(),
            operation_ids: HashSet::new(),
        }
    }

    /// Sets the options used to describe route parameters.
    #[must_use]
    pub fn with_describe_options(mut self, options: DescribeOptions) -> Self {
        self.describe_options = options;
        self
    }

    /// Adds one operation per method of `route`.
    ///
    /// Nothing is added when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`DocsError::InvalidRoute`] for an empty path or summary, no
    ///   methods, or a method already documented on this path.
    /// - [`DocsError::Parameter`] if a parameter cannot be described.
    /// - [`DocsError::DuplicateOperationId`] if an operation id is taken.
    pub fn add_route(&mut self, route: &RouteDoc) -> DocsResult<()> {
        route.validate()?;

        let parameters = describe_all(&route.parameters, &self.describe_options)?;
        warn_unmatched_path_parameters(&route.path, &parameters);

        let mut new_ids = HashSet::new();
        for method in &route.methods {
            if !PathItem::supports(method) {
                return Err(DocsError::InvalidRoute {
                    path: route.path.clone(),
                    reason: format!("{method} cannot be documented"),
                });
            }

            let taken = self
                .openapi
                .paths
                .get(&route.path)
                .and_then(|item| item.operation(method))
                .is_some();
            if taken {
                return Err(DocsError::InvalidRoute {
                    path: route.path.clone(),
                    reason: format!("{method} is already documented"),
                });
            }

            let operation_id = route.operation_id(method);
            if self.operation_ids.contains(&operation_id) || !new_ids.insert(operation_id.clone())
            {
                return Err(DocsError::DuplicateOperationId { operation_id });
            }
        }

        let item = self.openapi.paths.entry(route.path.clone()).or_default();
        for method in &route.methods {
            if let Some(slot) = item.slot_mut(method) {
                *slot = Some(Operation {
                    operation_id: route.operation_id(method),
                    summary: Some(route.summary.clone()),
                    description: route.description.clone(),
                    parameters: parameters.clone(),
                    responses: Response::default_map(),
                });
            }
        }
        self.operation_ids.extend(new_ids);

        tracing::debug!(
            path = %route.path,
            methods = route.methods.len(),
            parameters = parameters.len(),
            "documented route"
        );
        Ok(())
    }

    /// Returns the document.
    #[must_use]
    pub fn openapi(&self) -> &OpenApi {
        &self.openapi
    }

    /// Consumes the builder and returns the document.
    #[must_use]
    pub fn into_openapi(self) -> OpenApi {
        self.openapi
    }

    /// Renders the document as pretty-printed JSON.
    pub fn to_json(&self) -> DocsResult<String> {
        serde_json::to_string_pretty(&self.openapi).map_err(DocsError::from)
    }
}

/// Matches `{name}` and `{name:pattern}` placeholders.
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^}:]+)(?::[^}]*)?\}").expect("valid regex"))
}

/// Returns the placeholder names of a path template, in order.
#[must_use]
pub fn path_placeholders(path: &str) -> Vec<&str> {
    placeholder_pattern()
        .captures_iter(path)
        .filter_map(|cap| cap.get(1))
        .map(|name| name.as_str())
        .collect()
}

/// Returns the names of `path` parameters that have no placeholder in the
/// route template, in parameter order.
///
/// ```rust
/// use paramdoc_core::Location;
/// use paramdoc_docs::{unmatched_path_parameters, Parameter, Schema};
///
/// let fish = Parameter {
///     name: "fishName".to_string(),
///     location: Location::Path,
///     description: None,
///     example: None,
///     required: true,
///     schema: Schema::string(),
/// };
/// assert_eq!(unmatched_path_parameters("/stars/{starId}", &[fish]), vec!["fishName"]);
/// ```
#[must_use]
pub fn unmatched_path_parameters<'a>(path: &str, parameters: &'a [Parameter]) -> Vec<&'a str> {
    let placeholders = path_placeholders(path);
    parameters
        .iter()
        .filter(|p| p.location == Location::Path)
        .map(|p| p.name.as_str())
        .filter(|name| !placeholders.contains(name))
        .collect()
}

fn warn_unmatched_path_parameters(path: &str, parameters: &[Parameter]) {
    for name in unmatched_path_parameters(path, parameters) {
        tracing::warn!(
            path,
            parameter = name,
            "path parameter does not appear in route template"
        );
    }
}
