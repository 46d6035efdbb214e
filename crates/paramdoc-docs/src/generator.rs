//! Parameter schema generation.
//!
//! Turns field descriptors into OpenAPI [`Parameter`] objects. Example
//! literals go through the same coercion rules as request values, so an
//! example the decoder would reject fails here, at registration time.

use crate::openapi::{Parameter, Schema};
use paramdoc_core::annotation::{KEY_EXAMPLE, KEY_REQUIRED, KEY_SCHEMA_MIN};
use paramdoc_core::coerce::{coerce, parse_bool};
use paramdoc_core::{
    DescribeOptions, EmptyNamePolicy, FieldDescriptor, FieldType, Location, ParamError,
    ParamResult, Parameters,
};

/// Describes a single field as an OpenAPI parameter.
///
/// # Errors
///
/// - [`ParamError::InvalidLocation`] if `kind` is not a known location.
/// - [`ParamError::UnsupportedType`] if the field is not int, bool or string.
/// - [`ParamError::InvalidArgument`] for a malformed `example`, `required`
///   or `schemaMin` literal.
///
/// # Example
///
/// ```rust
/// use paramdoc_core::{FieldDescriptor, FieldType};
/// use paramdoc_docs::describe;
///
/// let descriptor = FieldDescriptor::new(
///     "star_id",
///     FieldType::Int,
///     "name: starId; kind: path; example: 5; schemaMin: 3",
/// );
/// let parameter = describe(&descriptor).unwrap();
///
/// assert_eq!(parameter.name, "starId");
/// assert!(parameter.required);
/// assert_eq!(parameter.example, Some(serde_json::json!(5)));
/// assert_eq!(parameter.schema.minimum, Some(3.0));
/// ```
pub fn describe(descriptor: &FieldDescriptor) -> ParamResult<Parameter> {
    let field = descriptor.field_name;

    let location = descriptor
        .location
        .ok_or_else(|| ParamError::InvalidLocation {
            field: field.to_string(),
            kind: descriptor.kind.clone(),
        })?;

    let schema = match descriptor.field_type {
        FieldType::Int => Schema::integer(),
        FieldType::Bool => Schema::boolean(),
        FieldType::String => Schema::string(),
        FieldType::Unsupported(type_name) => {
            return Err(ParamError::UnsupportedType {
                field: field.to_string(),
                type_name: type_name.to_string(),
            })
        }
    };

    let example = example_value(descriptor)?;
    let required = location == Location::Path || required_flag(descriptor)?;
    let minimum = schema_minimum(descriptor)?;

    Ok(Parameter {
        name: descriptor.external_name.clone(),
        location,
        description: Some(descriptor.description.clone()).filter(|d| !d.is_empty()),
        example,
        required,
        schema: Schema { minimum, ..schema },
    })
}

/// Describes descriptors in order with the given options.
///
/// # Errors
///
/// Returns the first error; see [`describe`]. Under
/// [`EmptyNamePolicy::Reject`] a nameless annotation fails with
/// [`ParamError::EmptyName`].
pub fn describe_all(
    descriptors: &[FieldDescriptor],
    options: &DescribeOptions,
) -> ParamResult<Vec<Parameter>> {
    let mut parameters = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        if descriptor.has_empty_name() {
            match options.empty_name {
                EmptyNamePolicy::Skip => {
                    tracing::debug!(
                        field = descriptor.field_name,
                        "not documenting annotated field without a name"
                    );
                    continue;
                }
                EmptyNamePolicy::Reject => {
                    return Err(ParamError::EmptyName {
                        field: descriptor.field_name.to_string(),
                    });
                }
            }
        }
        parameters.push(describe(descriptor)?);
    }

    Ok(parameters)
}

/// Describes every annotated field of `T` with default options.
///
/// # Errors
///
/// See [`describe_all`].
pub fn describe_params<T: Parameters>() -> ParamResult<Vec<Parameter>> {
    describe_params_with::<T>(&DescribeOptions::default())
}

/// Describes every annotated field of `T`.
///
/// # Errors
///
/// See [`describe_all`].
pub fn describe_params_with<T: Parameters>(
    options: &DescribeOptions,
) -> ParamResult<Vec<Parameter>> {
    describe_all(&T::bindings().descriptors(), options)
}

fn example_value(descriptor: &FieldDescriptor) -> ParamResult<Option<serde_json::Value>> {
    let literal = &descriptor.example_literal;
    if literal.is_empty() {
        return Ok(None);
    }

    coerce(descriptor.field_name, descriptor.field_type, literal)
        .map(|value| Some(value.to_json()))
        .map_err(|err| invalid(descriptor, KEY_EXAMPLE, literal, &err.to_string()))
}

fn required_flag(descriptor: &FieldDescriptor) -> ParamResult<bool> {
    let literal = &descriptor.required_literal;
    if literal.is_empty() {
        return Ok(false);
    }

    parse_bool(literal).ok_or_else(|| invalid(descriptor, KEY_REQUIRED, literal, "not a boolean"))
}

fn schema_minimum(descriptor: &FieldDescriptor) -> ParamResult<Option<f64>> {
    let literal = &descriptor.schema_min_literal;
    if literal.is_empty() {
        return Ok(None);
    }

    match literal.parse::<f64>() {
        Ok(minimum) if minimum.is_finite() => Ok(Some(minimum)),
        Ok(_) => Err(invalid(descriptor, KEY_SCHEMA_MIN, literal, "not a finite number")),
        Err(err) => Err(invalid(descriptor, KEY_SCHEMA_MIN, literal, &err.to_string())),
    }
}

fn invalid(descriptor: &FieldDescriptor, key: &'static str, literal: &str, reason: &str) -> ParamError {
    ParamError::InvalidArgument {
        field: descriptor.field_name.to_string(),
        key,
        literal: literal.to_string(),
        reason: reason.to_string(),
    }
}
