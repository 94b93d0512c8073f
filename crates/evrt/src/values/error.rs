// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error values: first-class evaluation failures that flow through
//! expressions instead of aborting them. Aggregate builders let error
//! values pass any declared-kind check, so a failure deep inside a
//! list or struct surfaces at the top of the result.

use crate::memory::{MemoryManager, Shared};

/// Coarse failure classification carried by an [`ErrorValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Unknown,
    InvalidArgument,
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    OutOfRange,
    Unimplemented,
    Internal,
}

impl StatusCode {
    /// Stable lower-snake name, as rendered in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            StatusCode::Unknown => "unknown",
            StatusCode::InvalidArgument => "invalid_argument",
            StatusCode::NotFound => "not_found",
            StatusCode::AlreadyExists => "already_exists",
            StatusCode::FailedPrecondition => "failed_precondition",
            StatusCode::OutOfRange => "out_of_range",
            StatusCode::Unimplemented => "unimplemented",
            StatusCode::Internal => "internal",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A first-class evaluation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue<'a> {
    code: StatusCode,
    message: Shared<'a, str>,
}

impl<'a> ErrorValue<'a> {
    /// Build an error value with the given code and message.
    pub fn new(memory: &MemoryManager<'a>, code: StatusCode, message: &str) -> Self {
        Self {
            code,
            message: memory.allocate_str(message),
        }
    }

    /// `not_found` error for a missing struct field.
    pub fn no_such_field(memory: &MemoryManager<'a>, field: &str) -> Self {
        Self::new(
            memory,
            StatusCode::NotFound,
            &format!("no_such_field : {field}"),
        )
    }

    /// `not_found` error for a missing map key.
    pub fn no_such_key(memory: &MemoryManager<'a>, key: &str) -> Self {
        Self::new(
            memory,
            StatusCode::NotFound,
            &format!("no_such_key : {key}"),
        )
    }

    /// Failure classification.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ErrorValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn test_error_value_accessors() {
        let memory = MemoryManager::reference_counting();
        let err = ErrorValue::new(&memory, StatusCode::InvalidArgument, "bad index");
        assert_eq!(err.code(), StatusCode::InvalidArgument);
        assert_eq!(err.message(), "bad index");
        assert_eq!(err.to_string(), "invalid_argument: bad index");
    }

    #[test]
    fn test_helpers() {
        let arena = Bump::new();
        let memory = MemoryManager::pooling(&arena);
        let field = ErrorValue::no_such_field(&memory, "reading");
        assert_eq!(field.code(), StatusCode::NotFound);
        assert_eq!(field.message(), "no_such_field : reading");

        let key = ErrorValue::no_such_key(&memory, "serial");
        assert_eq!(key.message(), "no_such_key : serial");
    }

    #[test]
    fn test_equality() {
        let memory = MemoryManager::reference_counting();
        let a = ErrorValue::new(&memory, StatusCode::Internal, "boom");
        let b = ErrorValue::new(&memory, StatusCode::Internal, "boom");
        let c = ErrorValue::new(&memory, StatusCode::Unknown, "boom");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
