// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Unknown values: partial-evaluation markers naming the attributes whose
//! contents were unavailable. Unknowns propagate through aggregate builders
//! like errors do, and two unknowns combine with [`UnknownValue::merge`].

use crate::memory::{MemoryManager, Shared};

/// Marker for an expression that could not be resolved because the named
/// attributes were missing from the evaluation environment.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownValue<'a> {
    attributes: Shared<'a, [Shared<'a, str>]>,
}

impl<'a> UnknownValue<'a> {
    /// Build an unknown over the given attribute paths.
    pub fn new<I>(memory: &MemoryManager<'a>, attributes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let attrs: Vec<Shared<'a, str>> = attributes
            .into_iter()
            .map(|a| memory.allocate_str(a.as_ref()))
            .collect();
        Self {
            attributes: memory.allocate_slice(attrs),
        }
    }

    /// Number of unresolved attributes.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Iterate over the unresolved attribute paths.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| &**a)
    }

    /// Returns `true` when `attribute` is among the unresolved paths.
    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| &**a == attribute)
    }

    /// Union of two unknowns, preserving `self`'s order and dropping
    /// duplicates from `other`.
    pub fn merge(&self, memory: &MemoryManager<'a>, other: &UnknownValue<'a>) -> Self {
        let mut attrs: Vec<Shared<'a, str>> = self.attributes.iter().cloned().collect();
        for attr in other.attributes.iter() {
            if !attrs.iter().any(|a| **a == **attr) {
                attrs.push(attr.clone());
            }
        }
        Self {
            attributes: memory.allocate_slice(attrs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn test_attributes_roundtrip() {
        let memory = MemoryManager::reference_counting();
        let unknown = UnknownValue::new(&memory, ["request.auth", "request.time"]);
        assert_eq!(unknown.attribute_count(), 2);
        assert!(unknown.contains("request.auth"));
        assert!(!unknown.contains("request.path"));
        let attrs: Vec<&str> = unknown.attributes().collect();
        assert_eq!(attrs, vec!["request.auth", "request.time"]);
    }

    #[test]
    fn test_merge_deduplicates_and_preserves_order() {
        let arena = Bump::new();
        let memory = MemoryManager::pooling(&arena);
        let a = UnknownValue::new(&memory, ["x", "y"]);
        let b = UnknownValue::new(&memory, ["y", "z"]);
        let merged = a.merge(&memory, &b);
        let attrs: Vec<&str> = merged.attributes().collect();
        assert_eq!(attrs, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_equality_is_structural() {
        let memory = MemoryManager::reference_counting();
        let a = UnknownValue::new(&memory, ["x"]);
        let b = UnknownValue::new(&memory, ["x"]);
        assert_eq!(a, b);
    }
}
