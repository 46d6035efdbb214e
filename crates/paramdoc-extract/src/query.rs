//! Query string lookup.

use paramdoc_core::{ParamError, ParamResult};

/// Returns the first decoded value for `name` in a raw query string.
///
/// Percent-escapes are decoded and `+` stands for a space. A key present
/// without `=` yields an empty value. Decoding is lossy: invalid escapes are
/// kept as written and invalid UTF-8 becomes `U+FFFD`, so any query string
/// parses.
///
/// # Errors
///
/// [`ParamError::MalformedRequest`] is reserved for a parser failure; the
/// lossy decoder above does not produce one for any input.
///
/// ```rust
/// use paramdoc_extract::query_value;
///
/// let query = "starid=10&potato=true&starid=11&q=rust+lang";
/// assert_eq!(query_value(query, "starid").unwrap(), Some("10".to_string()));
/// assert_eq!(query_value(query, "q").unwrap(), Some("rust lang".to_string()));
/// assert_eq!(query_value(query, "limit").unwrap(), None);
/// ```
pub fn query_value(query: &str, name: &str) -> ParamResult<Option<String>> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(|e| ParamError::MalformedRequest {
            part: "query string",
            reason: e.to_string(),
        })?;

    Ok(pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        assert_eq!(
            query_value("a=1&a=2", "a").unwrap(),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(query_value("a=1", "b").unwrap(), None);
        assert_eq!(query_value("", "b").unwrap(), None);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            query_value("name=Hello%20World", "name").unwrap(),
            Some("Hello World".to_string())
        );
        assert_eq!(
            query_value("q=rust%2Blang", "q").unwrap(),
            Some("rust+lang".to_string())
        );
    }

    #[test]
    fn test_key_without_value() {
        assert_eq!(query_value("flag&x=1", "flag").unwrap(), Some(String::new()));
        assert_eq!(query_value("flag=&x=1", "flag").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_invalid_encoding_decodes_lossily() {
        let query = "name=%ZZ&bad=%FF&half=%4";
        assert_eq!(query_value(query, "name").unwrap(), Some("%ZZ".to_string()));
        assert_eq!(query_value(query, "bad").unwrap(), Some("\u{fffd}".to_string()));
        assert_eq!(query_value(query, "half").unwrap(), Some("%4".to_string()));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(query_value("StarID=1", "starid").unwrap(), None);
    }
}
