// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Map values and their builder.
//!
//! Map keys are restricted to the bool/int/uint/string kinds. Lookup is a
//! linear scan over the finalized entry slice; the slice representation
//! keeps pooled payloads free of destructor-requiring interior state.

use crate::error::{ValueError, ValueResult};
use crate::memory::{MemoryManager, Shared};
use crate::types::{MapType, Type};
use crate::values::list::check_element_kind;
use crate::values::Value;

/// An immutable, finalized map value.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue<'a> {
    ty: MapType<'a>,
    entries: Shared<'a, [(Value<'a>, Value<'a>)]>,
}

impl<'a> MapValue<'a> {
    /// The parameterized map type this value was built with.
    pub fn map_type(&self) -> &MapType<'a> {
        &self.ty
    }

    /// The declared key type.
    pub fn key_type(&self) -> &Type<'a> {
        self.ty.key()
    }

    /// The declared value type.
    pub fn value_type(&self) -> &Type<'a> {
        self.ty.value()
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key`, or `None` when absent.
    pub fn get(&self, key: &Value<'a>) -> Option<&Value<'a>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` when `key` is present.
    pub fn contains_key(&self, key: &Value<'a>) -> bool {
        self.get(key).is_some()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[(Value<'a>, Value<'a>)] {
        &self.entries
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Value<'a>, Value<'a>)> {
        self.entries.iter()
    }
}

/// Builds a [`MapValue`] by `put` calls followed by a one-shot, move-only
/// [`build`](Self::build).
#[derive(Debug)]
pub struct MapValueBuilder<'a> {
    ty: MapType<'a>,
    memory: MemoryManager<'a>,
    entries: Vec<(Value<'a>, Value<'a>)>,
}

impl<'a> MapValueBuilder<'a> {
    /// Builder for a map of `ty`, allocating through `memory`.
    pub fn new(ty: MapType<'a>, memory: MemoryManager<'a>) -> Self {
        Self {
            ty,
            memory,
            entries: Vec::new(),
        }
    }

    /// Insert an entry.
    ///
    /// The key must be a bool, int, uint, or string value matching the
    /// declared key kind (unless that kind is `dyn`), and must not already
    /// be present. The value must match the declared value kind unless that
    /// kind is `dyn`; error and unknown values always pass.
    pub fn put(&mut self, key: Value<'a>, value: Value<'a>) -> ValueResult<()> {
        if !key.kind().is_map_key() {
            return Err(ValueError::InvalidMapKey(key.kind()));
        }
        check_element_kind(self.ty.key().kind(), &key)?;
        check_element_kind(self.ty.value().kind(), &value)?;
        if self.entries.iter().any(|(k, _)| k == &key) {
            return Err(ValueError::DuplicateMapKey(format!("{key:?}")));
        }
        self.entries.push((key, value));
        Ok(())
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finalize into an immutable [`MapValue`].
    pub fn build(self) -> MapValue<'a> {
        MapValue {
            ty: self.ty,
            entries: self.memory.allocate_slice(self.entries),
        }
    }
}
