//! Compile-time field registration.
//!
//! A record type lists its fields once, in declaration order, through a
//! [`Bindings`] builder. Each entry pairs the field's name, declared type
//! and optional annotation with a mutator that hands out `&mut` access to
//! the field. The same list feeds descriptor building (and therefore both
//! pipelines) and the binder that writes decoded values.
//!
//! # Example
//!
//! ```
//! use paramdoc_core::{Bindings, Parameters};
//!
//! #[derive(Debug, Default)]
//! struct StarParams {
//!     star_id: i64,
//!     potato: bool,
//!     cache_key: String,
//! }
//!
//! impl Parameters for StarParams {
//!     fn bindings() -> Bindings<Self> {
//!         Bindings::<Self>::new()
//!             .int("star_id", "name: starid; kind: query; schemaMin: 3", |p| &mut p.star_id)
//!             .bool("potato", "name: potato; kind: query; required: true", |p| &mut p.potato)
//!             .string("cache_key", None, |p| &mut p.cache_key)
//!     }
//! }
//!
//! let mut params = StarParams::default();
//! StarParams::bindings().bind(&mut params, "star_id", "10").unwrap();
//! assert_eq!(params.star_id, 10);
//! assert_eq!(StarParams::bindings().descriptors().len(), 2);
//! ```

use crate::coerce::{coerce, Value};
use crate::descriptor::FieldDescriptor;
use crate::error::{ParamError, ParamResult};
use crate::field::FieldType;
use std::fmt;

/// A record type whose fields are registered for decoding and description.
///
/// Usually derived with `#[derive(Parameters)]`.
pub trait Parameters: Sized {
    /// Returns the ordered field registrations for this type.
    fn bindings() -> Bindings<Self>;
}

/// Write access to a single field.
pub enum Slot<T> {
    /// Integer field.
    Int(fn(&mut T) -> &mut i64),
    /// Boolean field.
    Bool(fn(&mut T) -> &mut bool),
    /// String field.
    String(fn(&mut T) -> &mut String),
    /// A field that cannot be written.
    ReadOnly,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int(_) => "Int",
            Self::Bool(_) => "Bool",
            Self::String(_) => "String",
            Self::ReadOnly => "ReadOnly",
        };
        f.write_str(name)
    }
}

/// A registered field.
pub struct FieldBinding<T> {
    name: &'static str,
    field_type: FieldType,
    annotation: Option<&'static str>,
    slot: Slot<T>,
}

impl<T> Clone for FieldBinding<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            field_type: self.field_type,
            annotation: self.annotation,
            slot: self.slot,
        }
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("annotation", &self.annotation)
            .field("slot", &self.slot)
            .finish()
    }
}

impl<T> FieldBinding<T> {
    /// Returns the record field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the raw annotation, if the field carries one.
    #[must_use]
    pub fn annotation(&self) -> Option<&'static str> {
        self.annotation
    }

    /// Returns true if the field has a mutator.
    #[must_use]
    pub fn is_settable(&self) -> bool {
        !matches!(self.slot, Slot::ReadOnly)
    }
}

/// Ordered field registrations for a record type.
pub struct Bindings<T> {
    fields: Vec<FieldBinding<T>>,
}

impl<T> fmt::Debug for Bindings<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

impl<T> Clone for Bindings<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> Default for Bindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bindings<T> {
    /// Creates an empty registration list.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Registers a field with an explicit type and slot.
    #[must_use]
    pub fn field(
        mut self,
        name: &'static str,
        field_type: FieldType,
        annotation: impl Into<Option<&'static str>>,
        slot: Slot<T>,
    ) -> Self {
        self.fields.push(FieldBinding {
            name,
            field_type,
            annotation: annotation.into(),
            slot,
        });
        self
    }

    /// Registers an `i64` field.
    #[must_use]
    pub fn int(
        self,
        name: &'static str,
        annotation: impl Into<Option<&'static str>>,
        access: fn(&mut T) -> &mut i64,
    ) -> Self {
        self.field(name, FieldType::Int, annotation, Slot::Int(access))
    }

    /// Registers a `bool` field.
    #[must_use]
    pub fn bool(
        self,
        name: &'static str,
        annotation: impl Into<Option<&'static str>>,
        access: fn(&mut T) -> &mut bool,
    ) -> Self {
        self.field(name, FieldType::Bool, annotation, Slot::Bool(access))
    }

    /// Registers a `String` field.
    #[must_use]
    pub fn string(
        self,
        name: &'static str,
        annotation: impl Into<Option<&'static str>>,
        access: fn(&mut T) -> &mut String,
    ) -> Self {
        self.field(name, FieldType::String, annotation, Slot::String(access))
    }

    /// Registers a field whose declared type is not int, bool or string.
    ///
    /// Both pipelines fail with [`ParamError::UnsupportedType`] when the
    /// field is annotated.
    #[must_use]
    pub fn unsupported(
        self,
        name: &'static str,
        type_name: &'static str,
        annotation: impl Into<Option<&'static str>>,
    ) -> Self {
        self.field(
            name,
            FieldType::Unsupported(type_name),
            annotation,
            Slot::ReadOnly,
        )
    }

    /// Registers a field that is documented but cannot be written.
    #[must_use]
    pub fn read_only(
        self,
        name: &'static str,
        field_type: FieldType,
        annotation: impl Into<Option<&'static str>>,
    ) -> Self {
        self.field(name, field_type, annotation, Slot::ReadOnly)
    }

    /// Returns the registered fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldBinding<T>] {
        &self.fields
    }

    /// Looks up a registered field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldBinding<T>> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Builds descriptors for every annotated field, in declaration order.
    ///
    /// Unannotated fields produce no descriptor.
    #[must_use]
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .annotation
                    .map(|text| FieldDescriptor::new(field.name, field.field_type, text))
            })
            .collect()
    }

    /// Coerces `raw` for the named field without writing it.
    ///
    /// Fails with [`ParamError::UnknownField`] if the field is not
    /// registered, [`ParamError::Unsettable`] if it has no mutator, and
    /// with the coercion error otherwise.
    pub fn coerce(&self, field: &str, raw: &str) -> ParamResult<Value> {
        let binding = self.lookup(field)?;
        if let FieldType::Unsupported(type_name) = binding.field_type {
            return Err(ParamError::UnsupportedType {
                field: field.to_string(),
                type_name: type_name.to_string(),
            });
        }
        if !binding.is_settable() {
            return Err(ParamError::Unsettable {
                field: field.to_string(),
            });
        }
        coerce(field, binding.field_type, raw)
    }

    /// Writes an already coerced value into the named field.
    pub fn assign(&self, record: &mut T, field: &str, value: Value) -> ParamResult<()> {
        let binding = self.lookup(field)?;
        match (binding.slot, value) {
            (Slot::Int(access), Value::Int(v)) => *access(record) = v,
            (Slot::Bool(access), Value::Bool(v)) => *access(record) = v,
            (Slot::String(access), Value::String(v)) => *access(record) = v,
            (Slot::ReadOnly, _) => {
                return Err(ParamError::Unsettable {
                    field: field.to_string(),
                })
            }
            (_, value) => {
                return Err(ParamError::TypeMismatch {
                    field: field.to_string(),
                    value: value.to_json().to_string(),
                    expected: binding.field_type,
                })
            }
        }
        tracing::trace!(field = binding.name, "assigned field");
        Ok(())
    }

    /// Coerces `raw` to the named field's type and writes it.
    ///
    /// Performs exactly one field mutation on success and none on failure.
    pub fn bind(&self, record: &mut T, field: &str, raw: &str) -> ParamResult<()> {
        let value = self.coerce(field, raw)?;
        self.assign(record, field, value)
    }

    fn lookup(&self, field: &str) -> ParamResult<&FieldBinding<T>> {
        self.get(field).ok_or_else(|| ParamError::UnknownField {
            field: field.to_string(),
        })
    }
}

/// Builds descriptors for a record type.
///
/// The `&mut` receiver mirrors the record that later receives decoded
/// values; descriptors depend only on the type's registrations.
pub fn build_descriptors<T: Parameters>(_record: &mut T) -> Vec<FieldDescriptor> {
    T::bindings().descriptors()
}
