// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dual memory-management abstraction.
//!
//! Every heap-backed value/type payload is constructed through a
//! [`MemoryManager`], which selects one of two ownership disciplines at
//! construction time:
//!
//! - **Pooling**: allocations are carved from a caller-owned
//!   [`bumpalo::Bump`] arena and released all at once when the arena is
//!   dropped. Individual objects are never freed and their destructors do
//!   not run; nothing built this way may outlive the arena.
//! - **Reference counting**: allocations are `Arc`-backed and released when
//!   the last owner goes away. Refcount updates are atomic, so these graphs
//!   may be shared across threads.
//!
//! A value/type behaves identically under either strategy; the strategy is
//! never mixed within one logical graph. Allocation failure is not a
//! recoverable condition at this layer.

use bumpalo::Bump;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// The active allocation strategy of a [`MemoryManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryManagement {
    /// Arena allocation; bulk release, no individual destruction.
    Pooling,
    /// Atomic reference counting; release on last owner.
    ReferenceCounting,
}

impl fmt::Display for MemoryManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pooling => f.write_str("pooling"),
            Self::ReferenceCounting => f.write_str("reference_counting"),
        }
    }
}

/// Handle selecting and performing heap allocation for values and types.
///
/// Cheap to copy; copies share the same strategy (and arena, if pooling).
/// A pooling manager is scoped to a single logical evaluation and is not
/// safe for concurrent allocation without external synchronization.
#[derive(Clone, Copy)]
pub struct MemoryManager<'a> {
    arena: Option<&'a Bump>,
}

impl<'a> MemoryManager<'a> {
    /// Manager whose allocations are reference counted.
    pub const fn reference_counting() -> Self {
        Self { arena: None }
    }

    /// Manager whose allocations are carved from `arena`.
    pub const fn pooling(arena: &'a Bump) -> Self {
        Self { arena: Some(arena) }
    }

    /// The strategy this manager allocates under.
    pub const fn memory_management(&self) -> MemoryManagement {
        match self.arena {
            Some(_) => MemoryManagement::Pooling,
            None => MemoryManagement::ReferenceCounting,
        }
    }

    /// Allocate a single object.
    pub fn allocate<T>(&self, value: T) -> Shared<'a, T> {
        match self.arena {
            Some(arena) => Shared::Pooled(arena.alloc(value)),
            None => Shared::Counted(Arc::new(value)),
        }
    }

    /// Allocate an owned copy of a string.
    pub fn allocate_str(&self, value: &str) -> Shared<'a, str> {
        match self.arena {
            Some(arena) => Shared::Pooled(arena.alloc_str(value)),
            None => Shared::Counted(Arc::from(value)),
        }
    }

    /// Allocate an owned copy of a byte sequence.
    pub fn allocate_bytes(&self, value: &[u8]) -> Shared<'a, [u8]> {
        match self.arena {
            Some(arena) => Shared::Pooled(arena.alloc_slice_copy(value)),
            None => Shared::Counted(Arc::from(value)),
        }
    }

    /// Allocate a slice, taking ownership of the elements.
    pub fn allocate_slice<T>(&self, values: Vec<T>) -> Shared<'a, [T]> {
        match self.arena {
            Some(arena) => Shared::Pooled(arena.alloc_slice_fill_iter(values)),
            None => Shared::Counted(Arc::from(values)),
        }
    }

    /// Allocate a type-erased opaque payload.
    ///
    /// Under pooling the payload's destructor does not run at arena drop;
    /// interior allocations of a pooled opaque payload are leaked. This is
    /// the one payload shape for which the pooling contract is visible, and
    /// embedders choosing pooling should prefer flat payloads.
    pub fn allocate_any<T: Any + Send + Sync>(
        &self,
        value: T,
    ) -> Shared<'a, dyn Any + Send + Sync> {
        match self.arena {
            Some(arena) => Shared::Pooled(arena.alloc(value)),
            None => Shared::Counted(Arc::new(value)),
        }
    }
}

impl fmt::Debug for MemoryManager<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryManager")
            .field("strategy", &self.memory_management())
            .finish()
    }
}

/// Dual-ownership handle to a heap-backed payload.
///
/// Which variant a handle is depends on which [`MemoryManager`] constructed
/// it, never on the payload's kind. Comparison and hashing go through the
/// pointee, so structurally equal payloads compare equal across strategies.
pub enum Shared<'a, T: ?Sized> {
    /// Borrowed from an arena (or from other caller-owned stable storage).
    Pooled(&'a T),
    /// Owned via atomic reference counting.
    Counted(Arc<T>),
}

impl<'a, T: ?Sized> Shared<'a, T> {
    /// The strategy this handle was constructed under.
    pub fn memory_management(&self) -> MemoryManagement {
        match self {
            Self::Pooled(_) => MemoryManagement::Pooling,
            Self::Counted(_) => MemoryManagement::ReferenceCounting,
        }
    }

    /// Pointer identity of the payload.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            &**self as *const T as *const (),
            &**other as *const T as *const (),
        )
    }
}

impl<T: ?Sized> Clone for Shared<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Pooled(p) => Self::Pooled(p),
            Self::Counted(a) => Self::Counted(Arc::clone(a)),
        }
    }
}

impl<T: ?Sized> Deref for Shared<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Self::Pooled(p) => p,
            Self::Counted(a) => a,
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Shared<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: ?Sized + Eq> Eq for Shared<'_, T> {}

impl<T: ?Sized + Hash> Hash for Shared<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_reporting() {
        let arena = Bump::new();
        assert_eq!(
            MemoryManager::pooling(&arena).memory_management(),
            MemoryManagement::Pooling
        );
        assert_eq!(
            MemoryManager::reference_counting().memory_management(),
            MemoryManagement::ReferenceCounting
        );
    }

    #[test]
    fn test_allocate_str_both_strategies() {
        let arena = Bump::new();
        let pooled = MemoryManager::pooling(&arena).allocate_str("hello");
        let counted = MemoryManager::reference_counting().allocate_str("hello");
        assert_eq!(&*pooled, "hello");
        assert_eq!(&*counted, "hello");
        // Contents compare equal across strategies.
        assert_eq!(pooled, counted);
        assert!(!pooled.ptr_eq(&counted));
    }

    #[test]
    fn test_allocate_slice() {
        let memory = MemoryManager::reference_counting();
        let slice = memory.allocate_slice(vec![1i64, 2, 3]);
        assert_eq!(&*slice, &[1, 2, 3]);

        let arena = Bump::new();
        let pooled = MemoryManager::pooling(&arena).allocate_slice(vec![1i64, 2, 3]);
        assert_eq!(slice, pooled);
    }

    #[test]
    fn test_shared_clone_is_same_payload() {
        let memory = MemoryManager::reference_counting();
        let a = memory.allocate(42i64);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_allocate_any_downcast() {
        let memory = MemoryManager::reference_counting();
        let payload = memory.allocate_any(String::from("opaque"));
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("opaque")
        );
        assert!(payload.downcast_ref::<i64>().is_none());
    }
}
