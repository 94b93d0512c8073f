// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Assertion helpers for tests that inspect values.
//!
//! Matchers pair a predicate with a self-description, so a failed
//! [`assert_value`] names both the value it saw and what it expected.

use crate::kind::Kind;
use crate::values::{Duration, ErrorValue, StatusCode, Timestamp, Value};

/// A predicate over values with a human-readable description.
pub trait ValueMatcher {
    /// Returns `true` when `value` satisfies the matcher.
    fn matches(&self, value: &Value<'_>) -> bool;

    /// Expectation text, phrased as "kind is X and ...".
    fn describe(&self) -> String;
}

/// Panics with both sides of the mismatch when `matcher` rejects `value`.
#[track_caller]
pub fn assert_value(value: &Value<'_>, matcher: &dyn ValueMatcher) {
    assert!(
        matcher.matches(value),
        "value {value:?} (kind {}) does not match: expected {}",
        value.kind(),
        matcher.describe(),
    );
}

/// Matches any value of the given kind.
#[derive(Debug, Clone, Copy)]
pub struct ValueKindIs(pub Kind);

impl ValueMatcher for ValueKindIs {
    fn matches(&self, value: &Value<'_>) -> bool {
        value.kind() == self.0
    }

    fn describe(&self) -> String {
        format!("kind is {}", self.0)
    }
}

macro_rules! scalar_matcher {
    ($(#[$doc:meta])* $name:ident, $inner:ty, $kind:expr, $as_fn:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name(pub $inner);

        impl ValueMatcher for $name {
            fn matches(&self, value: &Value<'_>) -> bool {
                value.$as_fn().is_some_and(|v| v == self.0)
            }

            fn describe(&self) -> String {
                format!("kind is {} and is equal to {:?}", $kind, self.0)
            }
        }
    };
}

scalar_matcher!(
    /// Matches a bool value equal to the given bool.
    BoolValueIs, bool, Kind::Bool, as_bool
);
scalar_matcher!(
    /// Matches an int value equal to the given `i64`.
    IntValueIs, i64, Kind::Int, as_int
);
scalar_matcher!(
    /// Matches a uint value equal to the given `u64`.
    UintValueIs, u64, Kind::Uint, as_uint
);
scalar_matcher!(
    /// Matches a double value equal to the given `f64`.
    DoubleValueIs, f64, Kind::Double, as_double
);
scalar_matcher!(
    /// Matches a duration value equal to the given duration.
    DurationValueIs, Duration, Kind::Duration, as_duration
);
scalar_matcher!(
    /// Matches a timestamp value equal to the given timestamp.
    TimestampValueIs, Timestamp, Kind::Timestamp, as_timestamp
);

/// Matches a string value with the given contents.
#[derive(Debug, Clone)]
pub struct StringValueIs(pub String);

impl ValueMatcher for StringValueIs {
    fn matches(&self, value: &Value<'_>) -> bool {
        value.as_string().is_some_and(|s| s == self.0)
    }

    fn describe(&self) -> String {
        format!("kind is {} and is equal to {:?}", Kind::String, self.0)
    }
}

/// Matches a bytes value with the given contents.
#[derive(Debug, Clone)]
pub struct BytesValueIs(pub Vec<u8>);

impl ValueMatcher for BytesValueIs {
    fn matches(&self, value: &Value<'_>) -> bool {
        value.as_bytes().is_some_and(|b| b == self.0.as_slice())
    }

    fn describe(&self) -> String {
        format!("kind is {} and is equal to {:?}", Kind::Bytes, self.0)
    }
}

/// Partial match over an [`ErrorValue`]'s code and message.
#[derive(Debug, Clone, Default)]
pub struct StatusMatcher {
    code: Option<StatusCode>,
    message_contains: Option<String>,
}

impl StatusMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the given status code.
    #[must_use]
    pub fn code(mut self, code: StatusCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Require the message to contain `needle`.
    #[must_use]
    pub fn message_contains(mut self, needle: impl Into<String>) -> Self {
        self.message_contains = Some(needle.into());
        self
    }

    fn matches(&self, error: &ErrorValue<'_>) -> bool {
        if let Some(code) = self.code {
            if error.code() != code {
                return false;
            }
        }
        if let Some(needle) = &self.message_contains {
            if !error.message().contains(needle.as_str()) {
                return false;
            }
        }
        true
    }

    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(code) = self.code {
            parts.push(format!("code is {code}"));
        }
        if let Some(needle) = &self.message_contains {
            parts.push(format!("message contains {needle:?}"));
        }
        if parts.is_empty() {
            parts.push("any status".to_string());
        }
        parts.join(" and ")
    }
}

/// Matches an error value whose status satisfies the given [`StatusMatcher`].
#[derive(Debug, Clone)]
pub struct ErrorValueIs(pub StatusMatcher);

impl ValueMatcher for ErrorValueIs {
    fn matches(&self, value: &Value<'_>) -> bool {
        value.as_error().is_some_and(|e| self.0.matches(e))
    }

    fn describe(&self) -> String {
        format!("kind is {} and {}", Kind::Error, self.0.describe())
    }
}
