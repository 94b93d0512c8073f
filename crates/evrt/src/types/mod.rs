// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type representation.
//!
//! [`Type`] is a closed, kind-tagged union. Scalar kinds carry no payload;
//! `List`/`Map` are parameterized on element/key/value types, `Struct` and
//! `Opaque` carry a fully-qualified name (and, for opaques, an ordered
//! parameter list). Types are structurally immutable after construction and
//! compare by deep structural equality, so they can serve as map keys and be
//! cached.

mod introspector;
mod manager;

pub use introspector::{FieldDecl, OpaqueDecl, StructDecl, TypeIntrospector, TypeRegistry};
pub use manager::TypeManager;

use crate::kind::Kind;
use crate::memory::{MemoryManager, Shared};
use std::fmt;

/// A runtime type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type<'a> {
    Null,
    Bool,
    Int,
    Uint,
    Double,
    String,
    Bytes,
    Duration,
    Timestamp,
    /// The type of type values.
    Type,
    /// The dynamic type; matches any kind. Type-only, never a value kind.
    Dyn,
    Error,
    Unknown,
    List(ListType<'a>),
    Map(MapType<'a>),
    Struct(StructType<'a>),
    Opaque(OpaqueType<'a>),
}

impl<'a> Type<'a> {
    /// The kind tag of this type. O(1).
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool => Kind::Bool,
            Self::Int => Kind::Int,
            Self::Uint => Kind::Uint,
            Self::Double => Kind::Double,
            Self::String => Kind::String,
            Self::Bytes => Kind::Bytes,
            Self::Duration => Kind::Duration,
            Self::Timestamp => Kind::Timestamp,
            Self::Type => Kind::Type,
            Self::Dyn => Kind::Dyn,
            Self::Error => Kind::Error,
            Self::Unknown => Kind::Unknown,
            Self::List(_) => Kind::List,
            Self::Map(_) => Kind::Map,
            Self::Struct(_) => Kind::Struct,
            Self::Opaque(_) => Kind::Opaque,
        }
    }

    /// Returns the list payload if this is a list type.
    pub fn as_list(&self) -> Option<&ListType<'a>> {
        match self {
            Self::List(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the map payload if this is a map type.
    pub fn as_map(&self) -> Option<&MapType<'a>> {
        match self {
            Self::Map(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the struct payload if this is a struct type.
    pub fn as_struct(&self) -> Option<&StructType<'a>> {
        match self {
            Self::Struct(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the opaque payload if this is an opaque type.
    pub fn as_opaque(&self) -> Option<&OpaqueType<'a>> {
        match self {
            Self::Opaque(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(t) => write!(f, "list({})", t.element()),
            Self::Map(t) => write!(f, "map({}, {})", t.key(), t.value()),
            Self::Struct(t) => f.write_str(t.name()),
            Self::Opaque(t) => {
                f.write_str(t.name())?;
                if !t.parameters().is_empty() {
                    f.write_str("(")?;
                    for (i, param) in t.parameters().iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{param}")?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            _ => f.write_str(self.kind().name()),
        }
    }
}

/// Parameterized list type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListType<'a> {
    element: Shared<'a, Type<'a>>,
}

impl<'a> ListType<'a> {
    /// Build a list type, allocating the element parameter through `memory`.
    pub fn new(memory: &MemoryManager<'a>, element: Type<'a>) -> Self {
        Self {
            element: memory.allocate(element),
        }
    }

    /// The element type.
    pub fn element(&self) -> &Type<'a> {
        &self.element
    }
}

/// Parameterized map type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapType<'a> {
    key: Shared<'a, Type<'a>>,
    value: Shared<'a, Type<'a>>,
}

impl<'a> MapType<'a> {
    /// Build a map type, allocating both parameters through `memory`.
    pub fn new(memory: &MemoryManager<'a>, key: Type<'a>, value: Type<'a>) -> Self {
        Self {
            key: memory.allocate(key),
            value: memory.allocate(value),
        }
    }

    /// The key type.
    pub fn key(&self) -> &Type<'a> {
        &self.key
    }

    /// The value type.
    pub fn value(&self) -> &Type<'a> {
        &self.value
    }
}

/// Named struct type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructType<'a> {
    name: Shared<'a, str>,
}

impl<'a> StructType<'a> {
    /// Build a struct type, copying `name` through `memory`.
    pub fn new(memory: &MemoryManager<'a>, name: &str) -> Self {
        Self {
            name: memory.allocate_str(name),
        }
    }

    /// Build a struct type borrowing an externally-stable name.
    ///
    /// Used by the legacy bridge, where the name lives in a message
    /// descriptor whose identity is stable for the process lifetime.
    pub fn borrowed(name: &'a str) -> Self {
        Self {
            name: Shared::Pooled(name),
        }
    }

    pub(crate) fn from_shared(name: Shared<'a, str>) -> Self {
        Self { name }
    }

    /// Fully-qualified type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Named opaque extension type with ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueType<'a> {
    name: Shared<'a, str>,
    parameters: Shared<'a, [Type<'a>]>,
}

impl<'a> OpaqueType<'a> {
    /// Build an opaque type, copying the name and parameter list through
    /// `memory`. Parameter order is significant and preserved.
    pub fn new(memory: &MemoryManager<'a>, name: &str, parameters: Vec<Type<'a>>) -> Self {
        Self {
            name: memory.allocate_str(name),
            parameters: memory.allocate_slice(parameters),
        }
    }

    pub(crate) fn from_shared(name: Shared<'a, str>, parameters: Shared<'a, [Type<'a>]>) -> Self {
        Self { name, parameters }
    }

    /// Fully-qualified type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered type parameters.
    pub fn parameters(&self) -> &[Type<'a>] {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn test_scalar_kinds_and_display() {
        assert_eq!(Type::Int.kind(), Kind::Int);
        assert_eq!(Type::Dyn.to_string(), "dyn");
        assert_eq!(Type::Error.to_string(), "*error*");
        assert_eq!(Type::Null.to_string(), "null_type");
    }

    #[test]
    fn test_structural_equality_across_strategies() {
        let arena = Bump::new();
        let pooled = MemoryManager::pooling(&arena);
        let counted = MemoryManager::reference_counting();

        let a = ListType::new(&pooled, Type::Int);
        let b = ListType::new(&counted, Type::Int);
        assert_eq!(a, b);
        assert_ne!(a, ListType::new(&counted, Type::Uint));
    }

    #[test]
    fn test_deep_equality() {
        let memory = MemoryManager::reference_counting();
        let inner = Type::List(ListType::new(&memory, Type::String));
        let a = MapType::new(&memory, Type::Int, inner.clone());
        let b = MapType::new(&memory, Type::Int, inner);
        assert_eq!(a, b);
        assert_eq!(Type::Map(a).to_string(), "map(int, list(string))");
    }

    #[test]
    fn test_type_usable_as_hash_key() {
        use std::collections::HashMap;
        let memory = MemoryManager::reference_counting();
        let mut cache: HashMap<Type<'_>, u32> = HashMap::new();
        cache.insert(Type::List(ListType::new(&memory, Type::Int)), 1);
        // Same structure from an independent construction hits the entry.
        let probe = Type::List(ListType::new(&memory, Type::Int));
        assert_eq!(cache.get(&probe), Some(&1));
    }

    #[test]
    fn test_opaque_parameter_order() {
        let memory = MemoryManager::reference_counting();
        let a = OpaqueType::new(&memory, "optional_type", vec![Type::Int, Type::String]);
        let b = OpaqueType::new(&memory, "optional_type", vec![Type::String, Type::Int]);
        assert_ne!(a, b);
        assert_eq!(Type::Opaque(a).to_string(), "optional_type(int, string)");
    }

    #[test]
    fn test_struct_type_name() {
        let memory = MemoryManager::reference_counting();
        let ty = StructType::new(&memory, "com.example.Sensor");
        assert_eq!(ty.name(), "com.example.Sensor");
        assert_eq!(ty, StructType::borrowed("com.example.Sensor"));
        assert_eq!(Type::Struct(ty).to_string(), "com.example.Sensor");
    }
}
