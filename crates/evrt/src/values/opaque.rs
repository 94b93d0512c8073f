// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Opaque values: embedder-defined payloads behind a named, parameterized
//! type. The runtime never inspects the payload; embedders downcast it back
//! with [`OpaqueValue::downcast_ref`].

use std::any::Any;

use crate::memory::{MemoryManager, Shared};
use crate::types::OpaqueType;

/// A value of an embedder-defined opaque type.
///
/// Equality is identity-based on the payload: two opaque values are equal
/// only when they share the same payload allocation and type.
#[derive(Clone)]
pub struct OpaqueValue<'a> {
    ty: OpaqueType<'a>,
    payload: Shared<'a, dyn Any + Send + Sync>,
}

impl<'a> OpaqueValue<'a> {
    /// Wrap `payload` as an opaque value of type `ty`.
    ///
    /// Under pooling the payload is leaked into the arena's lifetime; keep
    /// pooled opaque payloads free of heavyweight owned state.
    pub fn new<T: Any + Send + Sync>(
        memory: &MemoryManager<'a>,
        ty: OpaqueType<'a>,
        payload: T,
    ) -> Self {
        Self {
            ty,
            payload: memory.allocate_any(payload),
        }
    }

    /// The value's opaque type.
    pub fn opaque_type(&self) -> &OpaqueType<'a> {
        &self.ty
    }

    /// Type name, without parameters.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Downcast the payload to its concrete type.
    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        (*self.payload).downcast_ref::<T>()
    }
}

impl std::fmt::Debug for OpaqueValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpaqueValue")
            .field("type", &self.ty)
            .finish_non_exhaustive()
    }
}

impl PartialEq for OpaqueValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.payload.ptr_eq(&other.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;
    use bumpalo::Bump;

    #[derive(Debug, PartialEq)]
    struct Vault {
        secret: u32,
    }

    #[test]
    fn test_downcast_roundtrip() {
        let memory = MemoryManager::reference_counting();
        let ty = OpaqueType::new(&memory, "vault", vec![Type::Int]);
        let value = OpaqueValue::new(&memory, ty, Vault { secret: 5 });

        assert_eq!(value.type_name(), "vault");
        assert_eq!(value.downcast_ref::<Vault>(), Some(&Vault { secret: 5 }));
        assert!(value.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_identity_equality() {
        let memory = MemoryManager::reference_counting();
        let ty = OpaqueType::new(&memory, "vault", vec![]);
        let a = OpaqueValue::new(&memory, ty.clone(), Vault { secret: 1 });
        let b = OpaqueValue::new(&memory, ty, Vault { secret: 1 });

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_pooled_payload() {
        let arena = Bump::new();
        let memory = MemoryManager::pooling(&arena);
        let ty = OpaqueType::new(&memory, "vault", vec![]);
        let value = OpaqueValue::new(&memory, ty, Vault { secret: 9 });
        assert_eq!(value.downcast_ref::<Vault>().unwrap().secret, 9);
    }
}
