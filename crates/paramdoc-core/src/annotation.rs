//! Annotation parsing.
//!
//! An annotation is a single string attached to a field:
//!
//! ```text
//! name: starid; kind: query; desc: Star identifier; example: 5; schemaMin: 3
//! ```
//!
//! Segments are separated by `;`. Each segment is split on its *first* `:`
//! into a key and a value, so values may contain `:` but never `;`.
//! Keys and values are trimmed. Lookup compares whole keys, so a value
//! that happens to contain `example:` cannot shadow the real `example` key.

/// Location key (`query`, `path`, `header` or `cookie`).
pub const KEY_KIND: &str = "kind";
/// External parameter name key.
pub const KEY_NAME: &str = "name";
/// Description key.
pub const KEY_DESC: &str = "desc";
/// Example literal key.
pub const KEY_EXAMPLE: &str = "example";
/// Required flag literal key.
pub const KEY_REQUIRED: &str = "required";
/// Numeric minimum literal key.
pub const KEY_SCHEMA_MIN: &str = "schemaMin";

/// Every key the annotation grammar recognizes.
pub const KEYS: [&str; 6] = [
    KEY_KIND,
    KEY_NAME,
    KEY_DESC,
    KEY_EXAMPLE,
    KEY_REQUIRED,
    KEY_SCHEMA_MIN,
];

/// Looks up a single key in an annotation.
///
/// Returns the trimmed value of the first segment whose key equals `key`,
/// or `None` when no such segment exists. Absence is never an error.
///
/// # Example
///
/// ```
/// use paramdoc_core::annotation::lookup;
///
/// let text = "name: starid; desc: see example: below; example: 5";
/// assert_eq!(lookup("name", text), Some("starid"));
/// assert_eq!(lookup("desc", text), Some("see example: below"));
/// assert_eq!(lookup("example", text), Some("5"));
/// assert_eq!(lookup("required", text), None);
/// ```
#[must_use]
pub fn lookup<'a>(key: &str, text: &'a str) -> Option<&'a str> {
    segments(text)
        .find(|(segment_key, _)| *segment_key == key)
        .map(|(_, value)| value)
}

/// Iterates `(key, value)` pairs in annotation order.
///
/// Segments without a `:` carry no key and are skipped.
pub fn segments(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.split(';').filter_map(|segment| {
        segment
            .split_once(':')
            .map(|(key, value)| (key.trim(), value.trim()))
    })
}

/// A parsed annotation with every recognized key looked up.
///
/// Missing keys are empty strings, so the decode and describe pipelines
/// always see the same, complete set of literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// `kind` literal.
    pub kind: String,
    /// `name` literal.
    pub name: String,
    /// `desc` literal.
    pub desc: String,
    /// `example` literal.
    pub example: String,
    /// `required` literal.
    pub required: String,
    /// `schemaMin` literal.
    pub schema_min: String,
}

impl Annotation {
    /// Parses an annotation string.
    ///
    /// ```
    /// use paramdoc_core::Annotation;
    ///
    /// let ann = Annotation::parse("name:potato;desc: This is bool!; required: true");
    /// assert_eq!(ann.name, "potato");
    /// assert_eq!(ann.desc, "This is bool!");
    /// assert_eq!(ann.required, "true");
    /// assert_eq!(ann.kind, "");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let read = |key| lookup(key, text).unwrap_or_default().to_string();
        Self {
            kind: read(KEY_KIND),
            name: read(KEY_NAME),
            desc: read(KEY_DESC),
            example: read(KEY_EXAMPLE),
            required: read(KEY_REQUIRED),
            schema_min: read(KEY_SCHEMA_MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lookup_basic() {
        let text = "name: starid; kind: query; schemaMin: 3";
        assert_eq!(lookup("name", text), Some("starid"));
        assert_eq!(lookup("kind", text), Some("query"));
        assert_eq!(lookup("schemaMin", text), Some("3"));
    }

    #[test]
    fn test_lookup_missing_key() {
        assert_eq!(lookup("desc", "name: starid"), None);
        assert_eq!(lookup("name", ""), None);
    }

    #[test]
    fn test_lookup_without_spaces() {
        let text = "name:starId;desc:Star identifier.; example: 5";
        assert_eq!(lookup("name", text), Some("starId"));
        assert_eq!(lookup("desc", text), Some("Star identifier."));
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let text = "desc: time is 10:30 UTC; name: at";
        assert_eq!(lookup("desc", text), Some("time is 10:30 UTC"));
        assert_eq!(lookup("name", text), Some("at"));
    }

    #[test]
    fn test_key_inside_value_does_not_match() {
        let text = "desc: the example: field is ignored; example: 7";
        assert_eq!(lookup("example", text), Some("7"));
    }

    #[test]
    fn test_key_suffix_does_not_match() {
        // `name` is a suffix of `nickname`; only the exact key counts.
        let text = "nickname: star; name: starid";
        assert_eq!(lookup("name", text), Some("starid"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "name: first; name: second";
        assert_eq!(lookup("name", text), Some("first"));
    }

    #[test]
    fn test_empty_value_is_found() {
        assert_eq!(lookup("example", "example: ; name: x"), Some(""));
    }

    #[test]
    fn test_trailing_semicolon() {
        assert_eq!(lookup("kind", "kind: path;"), Some("path"));
    }

    #[test]
    fn test_segment_without_colon_is_skipped() {
        let pairs: Vec<_> = segments("garbage; name: x").collect();
        assert_eq!(pairs, vec![("name", "x")]);
    }

    #[test]
    fn test_parse_reads_all_keys() {
        let ann = Annotation::parse(
            "name: starid; kind: query; desc: This is int!; example: 5; required: false; schemaMin: 3",
        );
        assert_eq!(
            ann,
            Annotation {
                kind: "query".to_string(),
                name: "starid".to_string(),
                desc: "This is int!".to_string(),
                example: "5".to_string(),
                required: "false".to_string(),
                schema_min: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_annotation() {
        assert_eq!(Annotation::parse(""), Annotation::default());
    }

    proptest! {
        #[test]
        fn prop_lookup_returns_written_value(value in "[a-zA-Z0-9 :!.,-]{0,32}") {
            let text = format!("desc: {value}; name: fixed");
            prop_assert_eq!(lookup("desc", &text), Some(value.trim()));
            prop_assert_eq!(lookup("name", &text), Some("fixed"));
        }

        #[test]
        fn prop_lookup_never_panics(text in ".{0,64}") {
            for key in KEYS {
                let _ = lookup(key, &text);
            }
        }
    }
}
