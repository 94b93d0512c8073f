// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type introspection: resolving names to structural type metadata.
//!
//! A [`TypeIntrospector`] is a read-only registry built once per runtime
//! configuration and safe for concurrent lookup afterwards. Absence of a
//! name is a normal outcome (`None`), not a fault; callers decide whether
//! absence means "dynamic" or "definite error".

use crate::memory::{MemoryManager, Shared};
use crate::types::{ListType, MapType, OpaqueType, StructType, Type};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only resolver from type names to type metadata.
///
/// Backed either by the native declarative [`TypeRegistry`] or by the
/// legacy descriptor-derived registry
/// ([`crate::legacy::LegacyTypeIntrospector`]).
pub trait TypeIntrospector: Send + Sync {
    /// Look up a named type. Returns `None` when the name is unknown.
    fn find_type(&self, name: &str) -> Option<Type<'static>>;

    /// Look up a declared struct field. Returns `None` when either the type
    /// or the field is unknown.
    fn find_struct_field(&self, type_name: &str, field: &str) -> Option<FieldDecl>;
}

/// Declared struct field: name plus declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared field type. `Type::Dyn` disables kind checking for the field.
    pub ty: Type<'static>,
}

impl FieldDecl {
    /// Create a field declaration.
    pub fn new(name: impl Into<String>, ty: Type<'static>) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Declared struct type: fully-qualified name plus ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    /// Fully-qualified type name.
    pub name: String,
    /// Ordered field declarations.
    pub fields: Vec<FieldDecl>,
}

impl StructDecl {
    /// Create an empty struct declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field declaration.
    pub fn field(mut self, name: impl Into<String>, ty: Type<'static>) -> Self {
        self.fields.push(FieldDecl::new(name, ty));
        self
    }
}

/// Declared opaque extension type: name plus supported operation names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueDecl {
    /// Fully-qualified type name.
    pub name: String,
    /// Names of the operations the extension supports.
    pub operations: Vec<String>,
}

impl OpaqueDecl {
    /// Create an opaque declaration.
    pub fn new(name: impl Into<String>, operations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            operations,
        }
    }
}

/// Native declarative [`TypeIntrospector`] backend.
///
/// Registration happens during runtime configuration; the registry is then
/// handed to a [`crate::TypeManager`] and never mutated again.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    structs: HashMap<String, StructDecl>,
    opaques: HashMap<String, OpaqueDecl>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a struct declaration under its own name.
    pub fn register_struct(&mut self, decl: StructDecl) {
        log::debug!("registering struct type '{}'", decl.name);
        self.structs.insert(decl.name.clone(), decl);
    }

    /// Register an opaque declaration under its own name.
    pub fn register_opaque(&mut self, decl: OpaqueDecl) {
        log::debug!("registering opaque type '{}'", decl.name);
        self.opaques.insert(decl.name.clone(), decl);
    }

    /// Number of registered types (well-known scalars not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.structs.len() + self.opaques.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.opaques.is_empty()
    }
}

impl TypeIntrospector for TypeRegistry {
    fn find_type(&self, name: &str) -> Option<Type<'static>> {
        if let Some(ty) = well_known_type(name) {
            return Some(ty);
        }
        if let Some(decl) = self.structs.get(name) {
            return Some(Type::Struct(StructType::from_shared(Shared::Counted(
                Arc::from(decl.name.as_str()),
            ))));
        }
        if let Some(decl) = self.opaques.get(name) {
            // The registry entry is the generic; parameters are supplied at
            // instantiation through `TypeManager::create_opaque_type`.
            return Some(Type::Opaque(OpaqueType::from_shared(
                Shared::Counted(Arc::from(decl.name.as_str())),
                Shared::Counted(Arc::from(Vec::new())),
            )));
        }
        None
    }

    fn find_struct_field(&self, type_name: &str, field: &str) -> Option<FieldDecl> {
        self.structs
            .get(type_name)?
            .fields
            .iter()
            .find(|f| f.name == field)
            .cloned()
    }
}

/// Resolve well-known type names that need no registration.
fn well_known_type(name: &str) -> Option<Type<'static>> {
    let memory = MemoryManager::reference_counting();
    match name {
        "null_type" => Some(Type::Null),
        "bool" => Some(Type::Bool),
        "int" => Some(Type::Int),
        "uint" => Some(Type::Uint),
        "double" => Some(Type::Double),
        "string" => Some(Type::String),
        "bytes" => Some(Type::Bytes),
        "duration" => Some(Type::Duration),
        "timestamp" => Some(Type::Timestamp),
        "type" => Some(Type::Type),
        "dyn" => Some(Type::Dyn),
        "list" => Some(Type::List(ListType::new(&memory, Type::Dyn))),
        "map" => Some(Type::Map(MapType::new(&memory, Type::Dyn, Type::Dyn))),
        _ => None,
    }
}
