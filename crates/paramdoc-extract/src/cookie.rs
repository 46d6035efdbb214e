//! Cookie parsing.
//!
//! Cookies are read from every `Cookie` header of a request. Within a
//! header pairs are separated by `;`; the first occurrence of a name wins.

use http::header::COOKIE;
use http::HeaderMap;

/// Request cookies in the order they were sent.
///
/// # Example
///
/// ```rust
/// use paramdoc_extract::Cookies;
/// use http::{HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     http::header::COOKIE,
///     HeaderValue::from_static("VISIT_COUNT=999999999; theme=dark"),
/// );
///
/// let cookies = Cookies::from_headers(&headers);
/// assert_eq!(cookies.get("VISIT_COUNT"), Some("999999999"));
/// assert_eq!(cookies.get("session"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    pairs: Vec<(String, String)>,
}

impl Cookies {
    /// Creates an empty cookie set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every `Cookie` header in `headers`.
    ///
    /// Header bytes are read as UTF-8; invalid sequences become `U+FFFD`.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = Self::new();
        for value in headers.get_all(COOKIE) {
            cookies.extend_from_header(&String::from_utf8_lossy(value.as_bytes()));
        }
        cookies
    }

    /// Parses a single `Cookie` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Self {
        let mut cookies = Self::new();
        cookies.extend_from_header(header_value);
        cookies
    }

    fn extend_from_header(&mut self, header_value: &str) {
        for cookie in header_value.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                let value = strip_quotes(value.trim());
                self.pairs.push((name.to_string(), value.to_string()));
            }
        }
    }

    /// Returns the value of the first cookie with this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if a cookie with this name was sent.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of cookie pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no cookies were sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Removes one pair of surrounding double quotes.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_parse_pairs() {
        let cookies = Cookies::parse("session=abc123; theme=dark");
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies.get("session"), Some("abc123"));
        assert_eq!(cookies.get("theme"), Some("dark"));
    }

    #[test]
    fn test_quoted_value() {
        let cookies = Cookies::parse("name=\"quoted value\"");
        assert_eq!(cookies.get("name"), Some("quoted value"));
    }

    #[test]
    fn test_lone_quote_is_kept() {
        let cookies = Cookies::parse("name=\"open");
        assert_eq!(cookies.get("name"), Some("\"open"));
    }

    #[test]
    fn test_value_with_equals() {
        let cookies = Cookies::parse("token=a=b=c");
        assert_eq!(cookies.get("token"), Some("a=b=c"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let cookies = Cookies::parse("id=1; id=2");
        assert_eq!(cookies.get("id"), Some("1"));
    }

    #[test]
    fn test_malformed_pairs_skipped() {
        let cookies = Cookies::parse("novalue; =orphan; ok=1;;");
        assert_eq!(cookies.len(), 1);
        assert!(cookies.contains("ok"));
    }

    #[test]
    fn test_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("b=2; a=3"));

        let cookies = Cookies::from_headers(&headers);
        assert_eq!(cookies.get("a"), Some("1"));
        assert_eq!(cookies.get("b"), Some("2"));
    }

    #[test]
    fn test_non_ascii_header_is_parsed() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_bytes("sid=café".as_bytes()).unwrap());
        headers.append(COOKIE, HeaderValue::from_bytes(b"raw=a\xff; ok=1").unwrap());

        let cookies = Cookies::from_headers(&headers);
        assert_eq!(cookies.get("sid"), Some("café"));
        assert_eq!(cookies.get("raw"), Some("a\u{fffd}"));
        assert_eq!(cookies.get("ok"), Some("1"));
    }

    #[test]
    fn test_no_cookie_header() {
        let cookies = Cookies::from_headers(&HeaderMap::new());
        assert!(cookies.is_empty());
    }
}
