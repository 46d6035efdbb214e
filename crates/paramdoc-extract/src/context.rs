//! Extraction context providing access to request data.
//!
//! The [`ExtractionContext`] is what the decode pipeline reads parameters
//! from: the URI (for the query string), the headers (for header and
//! cookie parameters) and the path captures of the matched route.

use crate::cookie::Cookies;
use crate::params::PathParams;
use crate::query::query_value;
use crate::request::RequestParts;
use http::request::Parts;
use http::{HeaderMap, Method, Uri};
use paramdoc_core::ParamResult;
use std::borrow::Cow;

/// Context providing access to the parameter-bearing parts of a request.
///
/// # Example
///
/// ```rust
/// use paramdoc_extract::{ExtractionContext, PathParams};
/// use http::{HeaderMap, Method, Uri};
///
/// let mut params = PathParams::new();
/// params.push("starId", "5");
///
/// let ctx = ExtractionContext::new(
///     Method::GET,
///     Uri::from_static("/stars/5?potato=true"),
///     HeaderMap::new(),
///     params,
/// );
///
/// assert_eq!(ctx.method(), &Method::GET);
/// assert_eq!(ctx.query_string(), Some("potato=true"));
/// assert_eq!(ctx.path_params().get("starId"), Some("5"));
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    path_params: PathParams,
    cookies: Cookies,
}

impl ExtractionContext {
    /// Creates a new extraction context.
    #[must_use]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, path_params: PathParams) -> Self {
        let cookies = Cookies::from_headers(&headers);
        Self {
            method,
            uri,
            headers,
            path_params,
            cookies,
        }
    }

    /// Creates a context from the head of an `http` request.
    #[must_use]
    pub fn from_parts(parts: &Parts, path_params: PathParams) -> Self {
        Self::new(
            parts.method.clone(),
            parts.uri.clone(),
            parts.headers.clone(),
            path_params,
        )
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path portion of the URI.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the query string if present.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the parsed request cookies.
    #[must_use]
    pub fn cookies(&self) -> &Cookies {
        &self.cookies
    }

    /// Returns the path captures of the matched route.
    #[must_use]
    pub fn path_params(&self) -> &PathParams {
        &self.path_params
    }

    /// Returns a mutable reference to the path captures.
    pub fn path_params_mut(&mut self) -> &mut PathParams {
        &mut self.path_params
    }

    /// Returns the first value of a header as a string.
    ///
    /// Header names are case-insensitive. Values are read as UTF-8; invalid
    /// sequences are replaced with `U+FFFD`.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
    }
}

impl RequestParts for ExtractionContext {
    fn query_value(&self, name: &str) -> ParamResult<Option<String>> {
        match self.query_string() {
            Some(query) => query_value(query, name),
            None => Ok(None),
        }
    }

    fn path_capture(&self, name: &str) -> Option<&str> {
        self.path_params.get(name)
    }

    fn header_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.header(name)
    }

    fn cookie_value(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(str::to_string)
    }
}

/// Builder for constructing an [`ExtractionContext`].
///
/// The method defaults to `GET` and the URI to `/`.
#[derive(Debug, Default)]
pub struct ExtractionContextBuilder {
    method: Option<Method>,
    uri: Option<Uri>,
    headers: HeaderMap,
    path_params: PathParams,
}

impl ExtractionContextBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the URI.
    #[must_use]
    pub fn uri(mut self, uri: Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Sets the headers.
    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Appends a single header. Invalid names or values are ignored.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<http::header::HeaderName>(),
            value.parse::<http::HeaderValue>(),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Appends a `Cookie` header carrying one pair.
    #[must_use]
    pub fn cookie(self, name: &str, value: &str) -> Self {
        self.header(http::header::COOKIE.as_str(), &format!("{name}={value}"))
    }

    /// Sets the path captures.
    #[must_use]
    pub fn path_params(mut self, params: PathParams) -> Self {
        self.path_params = params;
        self
    }

    /// Adds a single path capture.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push(name, value);
        self
    }

    /// Builds the extraction context.
    #[must_use]
    pub fn build(self) -> ExtractionContext {
        ExtractionContext::new(
            self.method.unwrap_or(Method::GET),
            self.uri.unwrap_or_else(|| Uri::from_static("/")),
            self.headers,
            self.path_params,
        )
    }
}
