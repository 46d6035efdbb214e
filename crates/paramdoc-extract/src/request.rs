//! The request abstraction the decode pipeline reads from.

use paramdoc_core::ParamResult;
use std::borrow::Cow;

/// Read-only access to the parts of an inbound request that parameters
/// can live in.
///
/// [`ExtractionContext`](crate::ExtractionContext) implements this for
/// `http` requests; routers with their own request types can implement it
/// directly.
pub trait RequestParts {
    /// Returns the first value of the named query parameter, decoded.
    ///
    /// Fails only if the query string cannot be parsed at all.
    fn query_value(&self, name: &str) -> ParamResult<Option<String>>;

    /// Returns the named path capture from the resolved route.
    fn path_capture(&self, name: &str) -> Option<&str>;

    /// Returns the first value of the named header.
    ///
    /// A header that is present always yields its text, even when it is not
    /// visible ASCII.
    fn header_value(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Returns the value of the named cookie.
    fn cookie_value(&self, name: &str) -> Option<String>;
}
