// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Kind tags shared by values and types.
//!
//! Every [`crate::Value`] and [`crate::Type`] reports exactly one `Kind` in
//! O(1). The diagnostic names returned by [`Kind::name`] are part of the
//! observable contract: external conformance suites match on them.

use std::fmt;

/// The closed set of value/type kinds.
///
/// `Dyn` is a type-only kind; no value ever reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Uint,
    Double,
    String,
    Bytes,
    Duration,
    Timestamp,
    List,
    Map,
    Struct,
    Opaque,
    Type,
    Error,
    Unknown,
    Dyn,
}

impl Kind {
    /// Stable diagnostic name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null_type",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Duration => "duration",
            Self::Timestamp => "timestamp",
            Self::List => "list",
            Self::Map => "map",
            Self::Struct => "struct",
            Self::Opaque => "opaque",
            Self::Type => "type",
            Self::Error => "*error*",
            Self::Unknown => "*unknown*",
            Self::Dyn => "dyn",
        }
    }

    /// Returns `true` for kinds with no heap-backed payload.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Null
                | Self::Bool
                | Self::Int
                | Self::Uint
                | Self::Double
                | Self::Duration
                | Self::Timestamp
        )
    }

    /// Returns `true` for kinds permitted as map keys.
    pub const fn is_map_key(self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Uint | Self::String)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
