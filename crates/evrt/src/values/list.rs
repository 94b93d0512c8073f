// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! List values and their builder.

use crate::error::{ValueError, ValueResult};
use crate::kind::Kind;
use crate::memory::{MemoryManager, Shared};
use crate::types::{ListType, Type};
use crate::values::Value;

/// An immutable, finalized list value.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue<'a> {
    ty: ListType<'a>,
    elements: Shared<'a, [Value<'a>]>,
}

impl<'a> ListValue<'a> {
    /// The parameterized list type this value was built with.
    pub fn list_type(&self) -> &ListType<'a> {
        &self.ty
    }

    /// The declared element type.
    pub fn element_type(&self) -> &Type<'a> {
        self.ty.element()
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, or `None` out of bounds.
    pub fn get(&self, index: usize) -> Option<&Value<'a>> {
        self.elements.get(index)
    }

    /// All elements in order.
    pub fn elements(&self) -> &[Value<'a>] {
        &self.elements
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value<'a>> {
        self.elements.iter()
    }
}

/// Builds a [`ListValue`] by ordered `add` calls followed by a one-shot,
/// move-only [`build`](Self::build).
#[derive(Debug)]
pub struct ListValueBuilder<'a> {
    ty: ListType<'a>,
    memory: MemoryManager<'a>,
    elements: Vec<Value<'a>>,
}

impl<'a> ListValueBuilder<'a> {
    /// Builder for a list of `ty`, allocating through `memory`.
    pub fn new(ty: ListType<'a>, memory: MemoryManager<'a>) -> Self {
        Self {
            ty,
            memory,
            elements: Vec::new(),
        }
    }

    /// Append an element.
    ///
    /// Elements must match the declared element kind unless that kind is
    /// `dyn`. Error and unknown values propagate through aggregates and are
    /// always accepted.
    pub fn add(&mut self, value: Value<'a>) -> ValueResult<()> {
        check_element_kind(self.ty.element().kind(), &value)?;
        self.elements.push(value);
        Ok(())
    }

    /// Number of elements added so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Finalize into an immutable [`ListValue`].
    pub fn build(self) -> ListValue<'a> {
        ListValue {
            ty: self.ty,
            elements: self.memory.allocate_slice(self.elements),
        }
    }
}

/// Shared element/value kind gate for aggregate builders.
pub(crate) fn check_element_kind(declared: Kind, value: &Value<'_>) -> ValueResult<()> {
    if declared == Kind::Dyn || value.is_terminal() || value.kind() == declared {
        Ok(())
    } else {
        Err(ValueError::TypeMismatch {
            expected: declared,
            actual: value.kind(),
        })
    }
}
