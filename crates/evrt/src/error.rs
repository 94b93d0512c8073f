// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for type resolution and value construction.
//!
//! These are caller errors surfaced from constructing calls. Evaluation-level
//! errors are not represented here; they are first-class [`crate::ErrorValue`]
//! instances that flow through aggregates like any other value.

use crate::kind::Kind;
use std::fmt;

/// Result alias for type-construction operations.
pub type TypeResult<T> = Result<T, TypeError>;

/// Result alias for value-construction operations.
pub type ValueResult<T> = Result<T, ValueError>;

/// Failures while resolving or constructing types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The introspector has no registration for the requested name.
    TypeNotFound(String),
    /// The name resolved, but to a different kind than requested.
    KindMismatch {
        /// The requested type name.
        name: String,
        /// Kind the caller asked for.
        expected: Kind,
        /// Kind the introspector resolved the name to.
        actual: Kind,
    },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeNotFound(name) => write!(f, "type '{name}' not found"),
            Self::KindMismatch {
                name,
                expected,
                actual,
            } => write!(f, "type '{name}' is {actual}, expected {expected}"),
        }
    }
}

impl std::error::Error for TypeError {}

/// Failures while building aggregate values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The key kind is not permitted for maps (bool/int/uint/string only).
    InvalidMapKey(Kind),
    /// The key is already present in the map being built.
    DuplicateMapKey(String),
    /// An element or field value does not match the declared kind.
    TypeMismatch {
        /// Declared kind.
        expected: Kind,
        /// Kind of the supplied value.
        actual: Kind,
    },
    /// The struct declaration has no field with this name.
    UnknownField {
        /// Fully-qualified struct type name.
        type_name: String,
        /// The unknown field name.
        field: String,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMapKey(kind) => write!(f, "invalid map key kind '{kind}'"),
            Self::DuplicateMapKey(key) => write!(f, "duplicate map key {key}"),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "expected value of kind '{expected}', got '{actual}'")
            }
            Self::UnknownField { type_name, field } => {
                write!(f, "struct '{type_name}' has no field '{field}'")
            }
        }
    }
}

impl std::error::Error for ValueError {}
