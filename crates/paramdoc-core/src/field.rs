//! Declared field types and parameter locations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The basic type a record field is declared with.
///
/// Only [`FieldType::Int`], [`FieldType::Bool`] and [`FieldType::String`]
/// take part in decoding and schema generation. Fields of any other type
/// are registered as [`FieldType::Unsupported`] so both pipelines can fail
/// on them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Base-10 signed integer (`i64`).
    Int,
    /// Boolean.
    Bool,
    /// UTF-8 string, assigned verbatim.
    String,
    /// Any other declared type, carrying the type as written.
    Unsupported(&'static str),
}

impl FieldType {
    /// Returns the JSON Schema type name used in parameter schemas.
    ///
    /// Returns `None` for unsupported types.
    #[must_use]
    pub const fn schema_type(&self) -> Option<&'static str> {
        match self {
            Self::Int => Some("integer"),
            Self::Bool => Some("boolean"),
            Self::String => Some("string"),
            Self::Unsupported(_) => None,
        }
    }

    /// Returns true for int, bool and string.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Bool => write!(f, "bool"),
            Self::String => write!(f, "string"),
            Self::Unsupported(name) => write!(f, "{name}"),
        }
    }
}

/// The part of an inbound request a parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Query string parameter.
    Query,
    /// Path capture produced by the router.
    Path,
    /// HTTP header.
    Header,
    /// Cookie.
    Cookie,
}

impl Location {
    /// All recognized locations.
    pub const ALL: [Self; 4] = [Self::Query, Self::Path, Self::Header, Self::Cookie];

    /// Parses a `kind` literal. Matching is exact and case-sensitive.
    ///
    /// ```
    /// use paramdoc_core::Location;
    ///
    /// assert_eq!(Location::parse("query"), Some(Location::Query));
    /// assert_eq!(Location::parse("Query"), None);
    /// assert_eq!(Location::parse("body"), None);
    /// ```
    #[must_use]
    pub fn parse(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|location| location.as_str() == kind)
    }

    /// Returns the `kind` literal for this location.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
