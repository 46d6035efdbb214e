//! Field descriptors.
//!
//! A [`FieldDescriptor`] is the parsed form of one annotated field. It is
//! built once from the field's registration and is immutable afterwards.

use crate::annotation::Annotation;
use crate::field::{FieldType, Location};

/// The parsed annotation of a single record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Record field name.
    pub field_name: &'static str,
    /// Declared basic type.
    pub field_type: FieldType,
    /// Parsed location, `None` when `kind` is not a recognized location.
    pub location: Option<Location>,
    /// The `kind` literal as written.
    pub kind: String,
    /// External parameter name.
    pub external_name: String,
    /// Description.
    pub description: String,
    /// Example literal, coerced by the describe pipeline.
    pub example_literal: String,
    /// Required flag literal.
    pub required_literal: String,
    /// Numeric minimum literal.
    pub schema_min_literal: String,
}

impl FieldDescriptor {
    /// Parses `annotation` into a descriptor for the given field.
    #[must_use]
    pub fn new(field_name: &'static str, field_type: FieldType, annotation: &str) -> Self {
        let Annotation {
            kind,
            name,
            desc,
            example,
            required,
            schema_min,
        } = Annotation::parse(annotation);

        Self {
            field_name,
            field_type,
            location: Location::parse(&kind),
            kind,
            external_name: name,
            description: desc,
            example_literal: example,
            required_literal: required,
            schema_min_literal: schema_min,
        }
    }

    /// Returns true if the annotation names no external parameter.
    #[must_use]
    pub fn has_empty_name(&self) -> bool {
        self.external_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_from_annotation() {
        let descriptor = FieldDescriptor::new(
            "star_name",
            FieldType::String,
            "name:Star-Name; kind: header; desc: This is star name header param!; example: Sun; required: true",
        );

        assert_eq!(descriptor.field_name, "star_name");
        assert_eq!(descriptor.location, Some(Location::Header));
        assert_eq!(descriptor.kind, "header");
        assert_eq!(descriptor.external_name, "Star-Name");
        assert_eq!(descriptor.description, "This is star name header param!");
        assert_eq!(descriptor.example_literal, "Sun");
        assert_eq!(descriptor.required_literal, "true");
        assert_eq!(descriptor.schema_min_literal, "");
        assert!(!descriptor.has_empty_name());
    }

    #[test]
    fn test_unknown_kind_keeps_literal() {
        let descriptor = FieldDescriptor::new("body", FieldType::String, "name: b; kind: body");

        assert_eq!(descriptor.location, None);
        assert_eq!(descriptor.kind, "body");
    }

    #[test]
    fn test_missing_name() {
        let descriptor = FieldDescriptor::new("limit", FieldType::Int, "kind: query");
        assert!(descriptor.has_empty_name());
    }
}
