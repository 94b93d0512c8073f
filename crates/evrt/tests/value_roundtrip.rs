// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end construction and inspection of values across both memory
//! strategies, driven through the public API only.

use bumpalo::Bump;
use evrt::legacy::{
    new_legacy_type_manager, DescriptorPool, LegacyFieldInfo, LegacyFieldRef, LegacyMessage,
    LegacyStructValue, LegacyTypeIntrospector, MessageDescriptor,
};
use evrt::testing::{assert_value, ErrorValueIs, IntValueIs, StatusMatcher, ValueKindIs};
use evrt::{
    ErrorValue, Kind, MemoryManagement, MemoryManager, StatusCode, StructDecl, Type, TypeError,
    TypeManager, TypeRegistry, UnknownValue, Value, ValueError,
};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register_struct(
        StructDecl::new("example.Reading")
            .field("sensor", Type::String)
            .field("value", Type::Double)
            .field("tags", Type::Dyn),
    );
    registry
}

#[test]
fn nested_aggregates_under_reference_counting() {
    let registry = registry();
    let manager = TypeManager::new(MemoryManager::reference_counting(), &registry);
    assert_eq!(
        manager.memory_management(),
        MemoryManagement::ReferenceCounting
    );

    // map(string, list(int))
    let list_ty = manager.create_list_type(Type::Int);
    let mut inner = manager.new_list_value_builder(Type::Int);
    inner.add(Value::Int(10)).unwrap();
    inner.add(Value::Int(20)).unwrap();

    let mut map = manager.new_map_value_builder(Type::String, Type::List(list_ty));
    let memory = manager.memory();
    map.put(
        Value::String(memory.allocate_str("a")),
        Value::from(inner.build()),
    )
    .unwrap();
    let map = map.build();

    assert_eq!(map.size(), 1);
    let key = Value::String(memory.allocate_str("a"));
    let nested = map.get(&key).unwrap().as_list().unwrap();
    assert_eq!(nested.size(), 2);
    assert_value(nested.get(1).unwrap(), &IntValueIs(20));
}

#[test]
fn nested_aggregates_under_pooling() {
    let registry = registry();
    let arena = Bump::new();
    let manager = TypeManager::new(MemoryManager::pooling(&arena), &registry);
    assert_eq!(manager.memory_management(), MemoryManagement::Pooling);

    let mut builder = manager.new_struct_value_builder("example.Reading").unwrap();
    let memory = manager.memory();
    builder
        .set_field("sensor", Value::String(memory.allocate_str("t-01")))
        .unwrap();
    builder.set_field("value", Value::Double(21.5)).unwrap();
    let reading = builder.build();

    assert_eq!(reading.type_name(), "example.Reading");
    assert_eq!(reading.field("value"), Some(&Value::Double(21.5)));

    let value = Value::from(reading);
    assert_eq!(value.kind(), Kind::Struct);
    assert_value(&value, &ValueKindIs(Kind::Struct));
}

#[test]
fn struct_field_checks_against_declaration() {
    let registry = registry();
    let manager = TypeManager::new(MemoryManager::reference_counting(), &registry);
    let mut builder = manager.new_struct_value_builder("example.Reading").unwrap();

    assert!(matches!(
        builder.set_field("missing", Value::Int(1)),
        Err(ValueError::UnknownField { .. })
    ));
    assert!(matches!(
        builder.set_field("value", Value::Int(1)),
        Err(ValueError::TypeMismatch { .. })
    ));
    // Dyn-declared fields take anything.
    builder.set_field("tags", Value::Bool(true)).unwrap();
}

#[test]
fn unknown_struct_type_is_reported() {
    let registry = registry();
    let manager = TypeManager::new(MemoryManager::reference_counting(), &registry);
    assert_eq!(
        manager.create_struct_type("example.Nope"),
        Err(TypeError::TypeNotFound("example.Nope".to_string()))
    );
}

#[test]
fn terminal_values_pass_aggregate_checks() {
    let registry = registry();
    let manager = TypeManager::new(MemoryManager::reference_counting(), &registry);
    let memory = manager.memory();

    let mut list = manager.new_list_value_builder(Type::Int);
    list.add(Value::from(ErrorValue::new(
        &memory,
        StatusCode::OutOfRange,
        "index 9 out of range",
    )))
    .unwrap();
    list.add(Value::from(UnknownValue::new(&memory, ["request.id"])))
        .unwrap();
    let list = list.build();

    assert!(list.get(0).unwrap().is_terminal());
    assert_value(
        list.get(0).unwrap(),
        &ErrorValueIs(
            StatusMatcher::new()
                .code(StatusCode::OutOfRange)
                .message_contains("out of range"),
        ),
    );
    assert!(list.get(1).unwrap().is_unknown());
}

#[test]
fn map_key_restrictions() {
    let registry = registry();
    let manager = TypeManager::new(MemoryManager::reference_counting(), &registry);

    let mut map = manager.new_map_value_builder(Type::Int, Type::Bool);
    assert_eq!(
        map.put(Value::Double(1.0), Value::Bool(true)),
        Err(ValueError::InvalidMapKey(Kind::Double))
    );
    map.put(Value::Int(1), Value::Bool(true)).unwrap();
    assert!(matches!(
        map.put(Value::Int(1), Value::Bool(false)),
        Err(ValueError::DuplicateMapKey(_))
    ));
}

struct TempDescriptor;

impl MessageDescriptor for TempDescriptor {
    fn full_name(&self) -> &str {
        "example.Temperature"
    }

    fn fields(&self) -> Vec<LegacyFieldInfo> {
        vec![
            LegacyFieldInfo {
                name: "celsius".to_string(),
                kind: Kind::Double,
            },
            LegacyFieldInfo {
                name: "station".to_string(),
                kind: Kind::String,
            },
        ]
    }
}

struct TempMessage {
    descriptor: TempDescriptor,
    celsius: f64,
    station: String,
}

impl LegacyMessage for TempMessage {
    fn descriptor(&self) -> &dyn MessageDescriptor {
        &self.descriptor
    }

    fn field(&self, name: &str) -> Option<LegacyFieldRef<'_>> {
        match name {
            "celsius" => Some(LegacyFieldRef::Double(self.celsius)),
            "station" => Some(LegacyFieldRef::String(&self.station)),
            _ => None,
        }
    }
}

struct TempPool {
    descriptor: TempDescriptor,
}

impl DescriptorPool for TempPool {
    fn find_descriptor(&self, full_name: &str) -> Option<&dyn MessageDescriptor> {
        (full_name == "example.Temperature").then_some(&self.descriptor as &dyn MessageDescriptor)
    }
}

#[test]
fn legacy_bridge_end_to_end() {
    let pool = TempPool {
        descriptor: TempDescriptor,
    };
    let introspector = LegacyTypeIntrospector::new(&pool);
    let manager = new_legacy_type_manager(MemoryManager::reference_counting(), &introspector);

    // Descriptor-backed names resolve through the standard manager.
    let ty = manager.create_struct_type("example.Temperature").unwrap();
    assert_eq!(ty.name(), "example.Temperature");
    assert!(manager.create_struct_type("example.Missing").is_err());

    let msg = TempMessage {
        descriptor: TempDescriptor,
        celsius: 19.5,
        station: "north".to_string(),
    };
    let wrapped = LegacyStructValue::new(&msg);
    let value = Value::from(wrapped);
    assert_eq!(value.kind(), Kind::Struct);
    assert!(value.is_legacy_struct());
    assert!(!value.is_struct());
    assert_eq!(value.runtime_type(), Type::Struct(ty.clone()));

    let memory = manager.memory();
    assert_eq!(
        wrapped.field(&memory, "celsius"),
        Some(Value::Double(19.5))
    );
    assert_eq!(wrapped.field(&memory, "missing"), None);

    // Checked struct building works against descriptor-derived declarations.
    let mut builder = manager
        .new_struct_value_builder("example.Temperature")
        .unwrap();
    builder.set_field("celsius", Value::Double(21.0)).unwrap();
    assert!(builder.set_field("celsius", Value::Bool(true)).is_err());
    assert!(builder.set_field("bogus", Value::Int(1)).is_err());
    let built = builder.build();
    assert_eq!(built.field("celsius"), Some(&Value::Double(21.0)));
}

#[test]
fn runtime_types_cross_strategy_equality() {
    let registry = registry();
    let arena = Bump::new();
    let pooled = TypeManager::new(MemoryManager::pooling(&arena), &registry);
    let counted = TypeManager::new(MemoryManager::reference_counting(), &registry);

    let a = pooled.create_list_type(Type::String);
    let b = counted.create_list_type(Type::String);
    assert_eq!(Type::List(a), Type::List(b));

    let s1 = pooled.create_struct_type("example.Reading").unwrap();
    let s2 = counted.create_struct_type("example.Reading").unwrap();
    assert_eq!(s1, s2);
}
