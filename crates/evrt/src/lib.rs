// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # EVRT - Expression Value Runtime
//!
//! Value and type representation core for an embeddable expression
//! evaluation runtime: a closed set of value kinds, structural types with
//! parameterized aggregates, pluggable type resolution, and a dual memory
//! model (reference counting or arena pooling) selected per evaluation.
//!
//! ## Quick Start
//!
//! ```rust
//! use evrt::{MemoryManager, Type, TypeManager, TypeRegistry, Value};
//!
//! let registry = TypeRegistry::new();
//! let manager = TypeManager::new(MemoryManager::reference_counting(), &registry);
//!
//! let mut builder = manager.new_list_value_builder(Type::Int);
//! builder.add(Value::Int(1)).unwrap();
//! builder.add(Value::Int(2)).unwrap();
//!
//! let list = builder.build();
//! assert_eq!(list.size(), 2);
//! assert_eq!(list.get(0), Some(&Value::Int(1)));
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Value`] | Kind-tagged runtime value (scalars, aggregates, error, unknown) |
//! | [`Type`] | Structural runtime type, cheap to clone and compare |
//! | [`TypeManager`] | Facade for type creation and checked value builders |
//! | [`TypeIntrospector`] | Pluggable name-to-type resolution |
//! | [`MemoryManager`] | Allocation strategy handle (counted or pooled) |
//!
//! ## Modules Overview
//!
//! - [`values`] - Value kinds, aggregate builders, time scalars
//! - [`types`] - Structural types, introspection, the type manager
//! - [`memory`] - Dual-strategy allocation and the [`Shared`] handle
//! - [`legacy`] - Bridge for descriptor-driven host message objects
//! - [`testing`] - Value matchers for tests

// Clippy: No blanket suppressions. Fix issues properly or use inline #[allow] with justification.

/// Error types for type resolution and value construction.
pub mod error;
/// The closed set of value kinds.
pub mod kind;
/// Bridge to descriptor-driven legacy message objects.
pub mod legacy;
/// Dual-strategy allocation (reference counting or arena pooling).
pub mod memory;
/// Value matchers and assertion helpers for tests.
pub mod testing;
/// Structural runtime types, introspection, and the type manager.
pub mod types;
/// Runtime values and aggregate builders.
pub mod values;

pub use error::{TypeError, TypeResult, ValueError, ValueResult};
pub use kind::Kind;
pub use legacy::{
    DescriptorPool, LegacyFieldInfo, LegacyFieldRef, LegacyMessage, LegacyStructValue,
    LegacyTypeIntrospector, MessageDescriptor,
};
pub use memory::{MemoryManagement, MemoryManager, Shared};
pub use types::{
    FieldDecl, ListType, MapType, OpaqueDecl, OpaqueType, StructDecl, StructType, Type,
    TypeIntrospector, TypeManager, TypeRegistry,
};
pub use values::{
    Duration, ErrorValue, ListValue, ListValueBuilder, MapValue, MapValueBuilder, OpaqueValue,
    StatusCode, StructValue, StructValueBuilder, Timestamp, UnknownValue, Value,
};
