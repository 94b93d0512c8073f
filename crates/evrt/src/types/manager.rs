// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type manager: composes a memory strategy with an introspector.
//!
//! All parameterized types built by a manager are allocated through its
//! [`MemoryManager`], so they share that manager's ownership discipline; a
//! manager never mixes strategies even when the introspector was configured
//! independently. List/map types are cached per manager behind a mutex, the
//! same shape the thread-safe manager of the original system uses.

use crate::error::{TypeError, TypeResult};
use crate::kind::Kind;
use crate::memory::{MemoryManagement, MemoryManager};
use crate::types::{ListType, MapType, OpaqueType, StructType, Type, TypeIntrospector};
use crate::values::{ListValueBuilder, MapValueBuilder, StructValueBuilder};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Constructs parameterized types against a backing introspector.
pub struct TypeManager<'a, 'i> {
    memory: MemoryManager<'a>,
    introspector: &'i dyn TypeIntrospector,
    list_types: Mutex<HashMap<Type<'a>, ListType<'a>>>,
    map_types: Mutex<HashMap<(Type<'a>, Type<'a>), MapType<'a>>>,
}

impl<'a, 'i> TypeManager<'a, 'i> {
    /// Create a manager over `memory` and `introspector`.
    pub fn new(memory: MemoryManager<'a>, introspector: &'i dyn TypeIntrospector) -> Self {
        Self {
            memory,
            introspector,
            list_types: Mutex::new(HashMap::new()),
            map_types: Mutex::new(HashMap::new()),
        }
    }

    /// The memory manager types are allocated through.
    pub fn memory(&self) -> MemoryManager<'a> {
        self.memory
    }

    /// The active allocation strategy.
    pub fn memory_management(&self) -> MemoryManagement {
        self.memory.memory_management()
    }

    /// The backing introspector.
    pub fn introspector(&self) -> &'i dyn TypeIntrospector {
        self.introspector
    }

    /// Resolve a named type via the introspector. `None` means unknown.
    pub fn find_type(&self, name: &str) -> Option<Type<'static>> {
        self.introspector.find_type(name)
    }

    /// Build (or return the cached) list type parameterized on `element`.
    ///
    /// Two calls with structurally equal elements yield structurally equal
    /// results.
    pub fn create_list_type(&self, element: Type<'a>) -> ListType<'a> {
        let mut cache = self.list_types.lock();
        if let Some(ty) = cache.get(&element) {
            return ty.clone();
        }
        let ty = ListType::new(&self.memory, element.clone());
        cache.insert(element, ty.clone());
        ty
    }

    /// Build (or return the cached) map type parameterized on `key`/`value`.
    pub fn create_map_type(&self, key: Type<'a>, value: Type<'a>) -> MapType<'a> {
        let mut cache = self.map_types.lock();
        if let Some(ty) = cache.get(&(key.clone(), value.clone())) {
            return ty.clone();
        }
        let ty = MapType::new(&self.memory, key.clone(), value.clone());
        cache.insert((key, value), ty.clone());
        ty
    }

    /// Resolve `name` to a struct type.
    ///
    /// Fails with [`TypeError::TypeNotFound`] when the introspector has no
    /// matching registration. This is a caller error, not a transient
    /// condition.
    pub fn create_struct_type(&self, name: &str) -> TypeResult<StructType<'a>> {
        match self.introspector.find_type(name) {
            Some(Type::Struct(_)) => Ok(StructType::new(&self.memory, name)),
            Some(other) => Err(TypeError::KindMismatch {
                name: name.to_string(),
                expected: Kind::Struct,
                actual: other.kind(),
            }),
            None => {
                log::debug!("struct type '{name}' not found in introspector");
                Err(TypeError::TypeNotFound(name.to_string()))
            }
        }
    }

    /// Resolve `name` to an opaque type carrying `parameters`.
    ///
    /// Same lookup contract as [`Self::create_struct_type`]; parameter order
    /// is preserved.
    pub fn create_opaque_type(
        &self,
        name: &str,
        parameters: Vec<Type<'a>>,
    ) -> TypeResult<OpaqueType<'a>> {
        match self.introspector.find_type(name) {
            Some(Type::Opaque(_)) => Ok(OpaqueType::new(&self.memory, name, parameters)),
            Some(other) => Err(TypeError::KindMismatch {
                name: name.to_string(),
                expected: Kind::Opaque,
                actual: other.kind(),
            }),
            None => {
                log::debug!("opaque type '{name}' not found in introspector");
                Err(TypeError::TypeNotFound(name.to_string()))
            }
        }
    }

    /// Builder for a list value of `list(element)`, allocating through this
    /// manager's memory.
    pub fn new_list_value_builder(&self, element: Type<'a>) -> ListValueBuilder<'a> {
        ListValueBuilder::new(self.create_list_type(element), self.memory)
    }

    /// Builder for a map value of `map(key, value)`.
    pub fn new_map_value_builder(&self, key: Type<'a>, value: Type<'a>) -> MapValueBuilder<'a> {
        MapValueBuilder::new(self.create_map_type(key, value), self.memory)
    }

    /// Builder for a struct value of the named type, with field names
    /// checked against the introspector's declaration.
    pub fn new_struct_value_builder(&self, name: &str) -> TypeResult<StructValueBuilder<'a, 'i>> {
        let ty = self.create_struct_type(name)?;
        Ok(StructValueBuilder::checked(
            ty,
            self.memory,
            self.introspector,
        ))
    }
}

impl std::fmt::Debug for TypeManager<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeManager")
            .field("strategy", &self.memory_management())
            .finish()
    }
}
