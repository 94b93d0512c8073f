// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Signed duration and timestamp scalars.
//!
//! Runtime durations are signed (an expression may subtract timestamps in
//! either order), so `std::time::Duration` does not fit; both scalars are
//! nanosecond counts in an `i64`.

use std::fmt;
use std::ops::Neg;

/// Signed span of time with nanosecond precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Self = Self { nanos: 0 };

    /// Duration from a signed nanosecond count.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Duration from a signed second count. Saturates on overflow.
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            nanos: secs.saturating_mul(1_000_000_000),
        }
    }

    /// Total signed nanoseconds.
    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Whole seconds, truncated toward zero.
    pub const fn seconds(self) -> i64 {
        self.nanos / 1_000_000_000
    }

    /// Returns `true` when the span is negative.
    pub const fn is_negative(self) -> bool {
        self.nanos < 0
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            nanos: self.nanos.saturating_neg(),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal_seconds(f, self.nanos)?;
        f.write_str("s")
    }
}

/// Point in time as signed nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    nanos: i64,
}

impl Timestamp {
    /// The Unix epoch.
    pub const UNIX_EPOCH: Self = Self { nanos: 0 };

    /// Timestamp from signed nanoseconds since the epoch.
    pub const fn from_unix_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Timestamp from signed seconds since the epoch. Saturates on overflow.
    pub const fn from_unix_secs(secs: i64) -> Self {
        Self {
            nanos: secs.saturating_mul(1_000_000_000),
        }
    }

    /// Signed nanoseconds since the epoch.
    pub const fn as_unix_nanos(self) -> i64 {
        self.nanos
    }

    /// Elapsed span since `earlier` (negative when `earlier` is later).
    pub const fn since(self, earlier: Self) -> Duration {
        Duration::from_nanos(self.nanos.saturating_sub(earlier.nanos))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal_seconds(f, self.nanos)?;
        f.write_str("s since epoch")
    }
}

/// Render a nanosecond count as decimal seconds, trailing zeros trimmed.
fn write_decimal_seconds(f: &mut fmt::Formatter<'_>, nanos: i64) -> fmt::Result {
    if nanos < 0 {
        f.write_str("-")?;
    }
    let abs = nanos.unsigned_abs();
    let secs = abs / 1_000_000_000;
    let frac = abs % 1_000_000_000;
    if frac == 0 {
        write!(f, "{secs}")
    } else {
        let frac = format!("{frac:09}");
        write!(f, "{secs}.{}", frac.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_display() {
        assert_eq!(Duration::from_secs(3).to_string(), "3s");
        assert_eq!(Duration::from_nanos(1_500_000_000).to_string(), "1.5s");
        assert_eq!(Duration::from_nanos(-500_000_000).to_string(), "-0.5s");
        assert_eq!(Duration::ZERO.to_string(), "0s");
    }

    #[test]
    fn test_duration_ordering() {
        assert!(Duration::from_nanos(-1) < Duration::ZERO);
        assert!(Duration::from_secs(2) > Duration::from_nanos(1_999_999_999));
        assert_eq!(-Duration::from_secs(1), Duration::from_secs(-1));
    }

    #[test]
    fn test_timestamp_since() {
        let a = Timestamp::from_unix_secs(100);
        let b = Timestamp::from_unix_secs(40);
        assert_eq!(a.since(b), Duration::from_secs(60));
        assert_eq!(b.since(a), Duration::from_secs(-60));
        assert!(!a.since(b).is_negative());
    }
}
