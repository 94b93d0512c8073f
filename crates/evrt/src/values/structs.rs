// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Native struct values and their builder.
//!
//! A native struct value carries its resolved [`StructType`] and an ordered
//! field slice. The checked builder (obtained through
//! [`crate::TypeManager::new_struct_value_builder`]) validates field names
//! and kinds against the introspector's declaration; the unchecked builder
//! is for embedders assembling structs outside any declaration.

use crate::error::{ValueError, ValueResult};
use crate::memory::{MemoryManager, Shared};
use crate::types::{StructType, TypeIntrospector};
use crate::values::list::check_element_kind;
use crate::values::Value;

/// An immutable, finalized native struct value.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue<'a> {
    ty: StructType<'a>,
    fields: Shared<'a, [(Shared<'a, str>, Value<'a>)]>,
}

impl<'a> StructValue<'a> {
    /// The resolved struct type.
    pub fn struct_type(&self) -> &StructType<'a> {
        &self.ty
    }

    /// Fully-qualified type name.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Number of set fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Value of the named field, or `None` when unset.
    pub fn field(&self, name: &str) -> Option<&Value<'a>> {
        self.fields
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| v)
    }

    /// Returns `true` when the named field is set.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in set order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value<'a>)> {
        self.fields.iter().map(|(n, v)| (&**n, v))
    }
}

/// Builds a [`StructValue`] by `set_field` calls followed by a one-shot,
/// move-only [`build`](Self::build).
pub struct StructValueBuilder<'a, 'i> {
    ty: StructType<'a>,
    memory: MemoryManager<'a>,
    introspector: Option<&'i dyn TypeIntrospector>,
    fields: Vec<(Shared<'a, str>, Value<'a>)>,
}

impl<'a, 'i> StructValueBuilder<'a, 'i> {
    /// Unchecked builder: field names are not validated.
    pub fn new(ty: StructType<'a>, memory: MemoryManager<'a>) -> Self {
        Self {
            ty,
            memory,
            introspector: None,
            fields: Vec::new(),
        }
    }

    /// Declaration-checked builder, as handed out by
    /// [`crate::TypeManager::new_struct_value_builder`].
    pub(crate) fn checked(
        ty: StructType<'a>,
        memory: MemoryManager<'a>,
        introspector: &'i dyn TypeIntrospector,
    ) -> Self {
        Self {
            ty,
            memory,
            introspector: Some(introspector),
            fields: Vec::new(),
        }
    }

    /// Set a field, replacing any earlier value for the same name.
    ///
    /// With a declaration-checked builder, unknown field names are rejected
    /// and values must match the declared field kind unless that kind is
    /// `dyn`; error and unknown values always pass.
    pub fn set_field(&mut self, name: &str, value: Value<'a>) -> ValueResult<()> {
        if let Some(introspector) = self.introspector {
            match introspector.find_struct_field(self.ty.name(), name) {
                Some(decl) => check_element_kind(decl.ty.kind(), &value)?,
                None => {
                    return Err(ValueError::UnknownField {
                        type_name: self.ty.name().to_string(),
                        field: name.to_string(),
                    });
                }
            }
        }
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| &**n == name) {
            slot.1 = value;
        } else {
            self.fields.push((self.memory.allocate_str(name), value));
        }
        Ok(())
    }

    /// Number of fields set so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no field has been set yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finalize into an immutable [`StructValue`].
    pub fn build(self) -> StructValue<'a> {
        StructValue {
            ty: self.ty,
            fields: self.memory.allocate_slice(self.fields),
        }
    }
}

impl std::fmt::Debug for StructValueBuilder<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructValueBuilder")
            .field("type", &self.ty.name())
            .field("checked", &self.introspector.is_some())
            .field("fields", &self.fields.len())
            .finish()
    }
}
