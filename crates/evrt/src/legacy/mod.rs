// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bridge to descriptor-driven legacy message objects.
//!
//! Host applications that already carry reflective message types plug them
//! in through three traits: [`MessageDescriptor`] describes a message's
//! shape, [`LegacyMessage`] exposes one instance's fields, and
//! [`DescriptorPool`] resolves descriptors by full name. On top of those,
//! [`LegacyStructValue`] wraps an instance as a struct-kinded value and
//! [`LegacyTypeIntrospector`] serves type queries straight from the pool.

use std::sync::Arc;

use dashmap::DashMap;

use crate::kind::Kind;
use crate::memory::{MemoryManager, Shared};
use crate::types::{FieldDecl, StructType, Type, TypeIntrospector, TypeManager};
use crate::values::{Duration, Timestamp, Value};

/// Declared name and kind of one legacy message field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyFieldInfo {
    pub name: String,
    pub kind: Kind,
}

/// A borrowed view of one field's current contents.
#[derive(Clone, Copy)]
pub enum LegacyFieldRef<'m> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Double(f64),
    String(&'m str),
    Bytes(&'m [u8]),
    Duration(Duration),
    Timestamp(Timestamp),
    Message(&'m dyn LegacyMessage),
}

impl std::fmt::Debug for LegacyFieldRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegacyFieldRef::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            LegacyFieldRef::Int(v) => f.debug_tuple("Int").field(v).finish(),
            LegacyFieldRef::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            LegacyFieldRef::Double(v) => f.debug_tuple("Double").field(v).finish(),
            LegacyFieldRef::String(v) => f.debug_tuple("String").field(v).finish(),
            LegacyFieldRef::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            LegacyFieldRef::Duration(v) => f.debug_tuple("Duration").field(v).finish(),
            LegacyFieldRef::Timestamp(v) => f.debug_tuple("Timestamp").field(v).finish(),
            LegacyFieldRef::Message(m) => f
                .debug_tuple("Message")
                .field(&m.descriptor().full_name())
                .finish(),
        }
    }
}

/// Reflective description of a legacy message type.
pub trait MessageDescriptor: Send + Sync {
    /// Fully-qualified message name.
    fn full_name(&self) -> &str;

    /// Declared fields, in declaration order.
    fn fields(&self) -> Vec<LegacyFieldInfo>;
}

/// One reflective legacy message instance.
pub trait LegacyMessage: Send + Sync {
    /// The instance's descriptor.
    fn descriptor(&self) -> &dyn MessageDescriptor;

    /// Current contents of the named field, or `None` when unset.
    fn field(&self, name: &str) -> Option<LegacyFieldRef<'_>>;
}

/// Resolves message descriptors by fully-qualified name.
pub trait DescriptorPool: Send + Sync {
    fn find_descriptor(&self, full_name: &str) -> Option<&dyn MessageDescriptor>;
}

/// A legacy message instance wrapped as a struct-kinded value.
///
/// The wrapper borrows the message, so it is `Copy` and building one never
/// allocates. Equality is instance identity.
#[derive(Clone, Copy)]
pub struct LegacyStructValue<'a> {
    message: &'a dyn LegacyMessage,
}

impl<'a> LegacyStructValue<'a> {
    /// Wrap a legacy message instance.
    pub fn new(message: &'a dyn LegacyMessage) -> Self {
        Self { message }
    }

    /// The wrapped message.
    pub fn message(&self) -> &'a dyn LegacyMessage {
        self.message
    }

    /// Fully-qualified type name from the descriptor.
    pub fn type_name(&self) -> &'a str {
        self.message.descriptor().full_name()
    }

    /// Struct type borrowing the descriptor's name. Never allocates.
    pub fn runtime_type(&self) -> Type<'a> {
        Type::Struct(StructType::borrowed(self.type_name()))
    }

    /// Returns `true` when the named field is currently set.
    pub fn has_field(&self, name: &str) -> bool {
        self.message.field(name).is_some()
    }

    /// Convert the named field's contents into a value, or `None` when the
    /// field is unset. String and bytes contents are re-allocated through
    /// `memory`; nested messages stay borrowed.
    pub fn field(&self, memory: &MemoryManager<'a>, name: &str) -> Option<Value<'a>> {
        Some(match self.message.field(name)? {
            LegacyFieldRef::Bool(v) => Value::Bool(v),
            LegacyFieldRef::Int(v) => Value::Int(v),
            LegacyFieldRef::Uint(v) => Value::Uint(v),
            LegacyFieldRef::Double(v) => Value::Double(v),
            LegacyFieldRef::String(v) => Value::String(memory.allocate_str(v)),
            LegacyFieldRef::Bytes(v) => Value::Bytes(memory.allocate_bytes(v)),
            LegacyFieldRef::Duration(v) => Value::Duration(v),
            LegacyFieldRef::Timestamp(v) => Value::Timestamp(v),
            LegacyFieldRef::Message(m) => Value::LegacyStruct(LegacyStructValue::new(m)),
        })
    }
}

impl std::fmt::Debug for LegacyStructValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyStructValue")
            .field("type", &self.type_name())
            .finish()
    }
}

impl PartialEq for LegacyStructValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            self.message as *const dyn LegacyMessage as *const (),
            other.message as *const dyn LegacyMessage as *const (),
        )
    }
}

/// [`TypeIntrospector`] answering from a [`DescriptorPool`].
///
/// Field declarations are computed once per descriptor and memoized, keyed
/// by the descriptor's address. Pools are expected to hand out stable
/// descriptor references for their whole lifetime.
pub struct LegacyTypeIntrospector<'p> {
    pool: &'p dyn DescriptorPool,
    fields: DashMap<usize, Arc<[FieldDecl]>>,
}

impl<'p> LegacyTypeIntrospector<'p> {
    pub fn new(pool: &'p dyn DescriptorPool) -> Self {
        Self {
            pool,
            fields: DashMap::new(),
        }
    }

    fn field_decls(&self, desc: &dyn MessageDescriptor) -> Arc<[FieldDecl]> {
        let key = desc as *const dyn MessageDescriptor as *const () as usize;
        if let Some(decls) = self.fields.get(&key) {
            return Arc::clone(&decls);
        }
        log::trace!("legacy: memoizing field declarations for {}", desc.full_name());
        let decls: Arc<[FieldDecl]> = desc
            .fields()
            .into_iter()
            .map(|info| FieldDecl {
                name: info.name,
                ty: kind_to_type(info.kind),
            })
            .collect();
        self.fields.insert(key, Arc::clone(&decls));
        decls
    }
}

impl TypeIntrospector for LegacyTypeIntrospector<'_> {
    fn find_type(&self, name: &str) -> Option<Type<'static>> {
        let desc = self.pool.find_descriptor(name)?;
        Some(Type::Struct(StructType::from_shared(Shared::Counted(
            Arc::from(desc.full_name()),
        ))))
    }

    fn find_struct_field(&self, type_name: &str, field: &str) -> Option<FieldDecl> {
        let desc = self.pool.find_descriptor(type_name)?;
        self.field_decls(desc)
            .iter()
            .find(|decl| decl.name == field)
            .cloned()
    }
}

impl std::fmt::Debug for LegacyTypeIntrospector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyTypeIntrospector")
            .field("memoized", &self.fields.len())
            .finish()
    }
}

/// Scalar kinds map to their unit types; aggregates and anything without a
/// standalone type degrade to `dyn`.
fn kind_to_type(kind: Kind) -> Type<'static> {
    match kind {
        Kind::Null => Type::Null,
        Kind::Bool => Type::Bool,
        Kind::Int => Type::Int,
        Kind::Uint => Type::Uint,
        Kind::Double => Type::Double,
        Kind::String => Type::String,
        Kind::Bytes => Type::Bytes,
        Kind::Duration => Type::Duration,
        Kind::Timestamp => Type::Timestamp,
        _ => Type::Dyn,
    }
}

/// Convenience: a [`TypeManager`] backed by a legacy introspector.
pub fn new_legacy_type_manager<'a, 'i>(
    memory: MemoryManager<'a>,
    introspector: &'i LegacyTypeIntrospector<'_>,
) -> TypeManager<'a, 'i> {
    TypeManager::new(memory, introspector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    struct PointDescriptor;

    impl MessageDescriptor for PointDescriptor {
        fn full_name(&self) -> &str {
            "geom.Point"
        }

        fn fields(&self) -> Vec<LegacyFieldInfo> {
            vec![
                LegacyFieldInfo {
                    name: "x".to_string(),
                    kind: Kind::Int,
                },
                LegacyFieldInfo {
                    name: "label".to_string(),
                    kind: Kind::String,
                },
            ]
        }
    }

    struct Point {
        descriptor: PointDescriptor,
        x: i64,
        label: String,
    }

    impl LegacyMessage for Point {
        fn descriptor(&self) -> &dyn MessageDescriptor {
            &self.descriptor
        }

        fn field(&self, name: &str) -> Option<LegacyFieldRef<'_>> {
            match name {
                "x" => Some(LegacyFieldRef::Int(self.x)),
                "label" => Some(LegacyFieldRef::String(&self.label)),
                _ => None,
            }
        }
    }

    struct PointPool {
        descriptor: PointDescriptor,
    }

    impl DescriptorPool for PointPool {
        fn find_descriptor(&self, full_name: &str) -> Option<&dyn MessageDescriptor> {
            (full_name == "geom.Point").then_some(&self.descriptor as &dyn MessageDescriptor)
        }
    }

    fn point() -> Point {
        Point {
            descriptor: PointDescriptor,
            x: 3,
            label: "origin".to_string(),
        }
    }

    #[test]
    fn test_legacy_struct_value_fields() {
        let msg = point();
        let value = LegacyStructValue::new(&msg);
        let memory = MemoryManager::reference_counting();

        assert_eq!(value.type_name(), "geom.Point");
        assert!(value.has_field("x"));
        assert_eq!(value.field(&memory, "x"), Some(Value::Int(3)));
        assert_eq!(
            value.field(&memory, "label"),
            Some(Value::String(memory.allocate_str("origin")))
        );
        assert_eq!(value.field(&memory, "missing"), None);
    }

    #[test]
    fn test_runtime_type_borrows_descriptor_name() {
        let msg = point();
        let value = LegacyStructValue::new(&msg);
        match value.runtime_type() {
            Type::Struct(ty) => assert_eq!(ty.name(), "geom.Point"),
            other => panic!("unexpected type {other:?}"),
        }
    }

    #[test]
    fn test_identity_equality() {
        let a = point();
        let b = point();
        assert_eq!(LegacyStructValue::new(&a), LegacyStructValue::new(&a));
        assert_ne!(LegacyStructValue::new(&a), LegacyStructValue::new(&b));
    }

    #[test]
    fn test_introspector_resolves_pool_types() {
        let pool = PointPool {
            descriptor: PointDescriptor,
        };
        let introspector = LegacyTypeIntrospector::new(&pool);

        match introspector.find_type("geom.Point") {
            Some(Type::Struct(ty)) => assert_eq!(ty.name(), "geom.Point"),
            other => panic!("unexpected lookup result {other:?}"),
        }
        assert!(introspector.find_type("geom.Line").is_none());

        let decl = introspector.find_struct_field("geom.Point", "x").unwrap();
        assert_eq!(decl.name, "x");
        assert_eq!(decl.ty, Type::Int);
        // Second lookup hits the memo.
        assert!(introspector.find_struct_field("geom.Point", "label").is_some());
        assert!(introspector.find_struct_field("geom.Point", "z").is_none());
    }

    #[test]
    fn test_legacy_type_manager() {
        let pool = PointPool {
            descriptor: PointDescriptor,
        };
        let introspector = LegacyTypeIntrospector::new(&pool);
        let arena = Bump::new();
        let manager = new_legacy_type_manager(MemoryManager::pooling(&arena), &introspector);

        let ty = manager.create_struct_type("geom.Point").unwrap();
        assert_eq!(ty.name(), "geom.Point");
    }
}
