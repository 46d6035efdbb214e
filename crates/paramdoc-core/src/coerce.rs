//! Type coercion from raw text to declared basic types.
//!
//! The same rules drive request decoding and example literals in the
//! describe pipeline, so a documented example always decodes.

use crate::error::{ParamError, ParamResult};
use crate::field::FieldType;

/// A coerced value of one of the supported basic types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    String(String),
}

impl Value {
    /// Returns the field type this value belongs to.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Int(_) => FieldType::Int,
            Self::Bool(_) => FieldType::Bool,
            Self::String(_) => FieldType::String,
        }
    }

    /// Converts the value into JSON for schema examples.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(v) => serde_json::Value::from(*v),
            Self::Bool(v) => serde_json::Value::Bool(*v),
            Self::String(v) => serde_json::Value::String(v.clone()),
        }
    }
}

/// Parses a base-10 signed integer. An optional leading `+` or `-` is
/// accepted; surrounding whitespace and the empty string are not.
#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Parses the canonical boolean literal set.
///
/// Accepted: `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`,
/// `FALSE`, `false`, `False`.
///
/// ```
/// use paramdoc_core::coerce::parse_bool;
///
/// assert_eq!(parse_bool("T"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Coerces `raw` to the declared type of `field`.
///
/// Strings are taken verbatim, including the empty string. Integers and
/// booleans fail with [`ParamError::TypeMismatch`], also for empty input.
/// Unsupported types fail with [`ParamError::UnsupportedType`].
pub fn coerce(field: &str, field_type: FieldType, raw: &str) -> ParamResult<Value> {
    let mismatch = || ParamError::TypeMismatch {
        field: field.to_string(),
        value: raw.to_string(),
        expected: field_type,
    };

    match field_type {
        FieldType::Int => parse_int(raw).map(Value::Int).ok_or_else(mismatch),
        FieldType::Bool => parse_bool(raw).map(Value::Bool).ok_or_else(mismatch),
        FieldType::String => Ok(Value::String(raw.to_string())),
        FieldType::Unsupported(type_name) => Err(ParamError::UnsupportedType {
            field: field.to_string(),
            type_name: type_name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_int_coercion() {
        assert_eq!(coerce("n", FieldType::Int, "10"), Ok(Value::Int(10)));
        assert_eq!(coerce("n", FieldType::Int, "-42"), Ok(Value::Int(-42)));
        assert_eq!(coerce("n", FieldType::Int, "+7"), Ok(Value::Int(7)));
        assert_eq!(
            coerce("n", FieldType::Int, "999999999"),
            Ok(Value::Int(999_999_999))
        );
    }

    #[test]
    fn test_int_rejects_garbage() {
        for raw in ["abc", "", " 5", "5 ", "1.5", "0x10", "99999999999999999999"] {
            let err = coerce("star_id", FieldType::Int, raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "raw = {raw:?}");
            assert_eq!(err.field(), Some("star_id"));
        }
    }

    #[test]
    fn test_bool_literal_set() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(coerce("b", FieldType::Bool, raw), Ok(Value::Bool(true)));
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(coerce("b", FieldType::Bool, raw), Ok(Value::Bool(false)));
        }
    }

    #[test]
    fn test_bool_rejects_other_literals() {
        for raw in ["", "yes", "no", "tRuE", "2", " true"] {
            let err = coerce("b", FieldType::Bool, raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(
            coerce("s", FieldType::String, ""),
            Ok(Value::String(String::new()))
        );
        assert_eq!(
            coerce("s", FieldType::String, "  purple "),
            Ok(Value::String("  purple ".to_string()))
        );
    }

    #[test]
    fn test_unsupported_type() {
        let err = coerce("mass", FieldType::Unsupported("f64"), "1.0").unwrap_err();
        assert_eq!(
            err,
            ParamError::UnsupportedType {
                field: "mass".to_string(),
                type_name: "f64".to_string(),
            }
        );
    }

    #[test]
    fn test_value_json() {
        assert_eq!(Value::Int(5).to_json(), serde_json::json!(5));
        assert_eq!(Value::Bool(true).to_json(), serde_json::json!(true));
        assert_eq!(
            Value::String("Sun".to_string()).to_json(),
            serde_json::json!("Sun")
        );
        assert_eq!(Value::Int(5).field_type(), FieldType::Int);
    }

    proptest! {
        #[test]
        fn prop_int_text_round_trips(n in any::<i64>()) {
            prop_assert_eq!(coerce("n", FieldType::Int, &n.to_string()), Ok(Value::Int(n)));
        }

        #[test]
        fn prop_string_never_fails(raw in ".*") {
            prop_assert_eq!(coerce("s", FieldType::String, &raw), Ok(Value::String(raw.clone())));
        }
    }
}
