// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime value representation.
//!
//! [`Value`] is a closed, kind-tagged union parallel to [`Type`]. Kind
//! dispatch is O(1) and [`Value::runtime_type`] never allocates: scalars map
//! to unit type variants, aggregates return the parameterized type they were
//! built with, and legacy structs derive theirs from the wrapped descriptor.
//!
//! Every kind exposes the same three-tier access idiom:
//!
//! - `is_x()` — O(1) kind check.
//! - `as_x()` — typed payload view, `None` on kind mismatch. Mismatch is an
//!   expected, common case during dynamic dispatch, never an error.
//! - `get_x()` — unchecked extraction; the caller must have established the
//!   kind already. Misuse is a programming defect: it trips a `debug_assert`
//!   naming the offending kind in debug builds and still panics in release
//!   builds.

mod error;
mod list;
mod map;
mod opaque;
mod structs;
mod time;
mod unknown;

pub use error::{ErrorValue, StatusCode};
pub use list::{ListValue, ListValueBuilder};
pub use map::{MapValue, MapValueBuilder};
pub use opaque::OpaqueValue;
pub use structs::{StructValue, StructValueBuilder};
pub use time::{Duration, Timestamp};
pub use unknown::UnknownValue;

use crate::kind::Kind;
use crate::legacy::LegacyStructValue;
use crate::memory::Shared;
use crate::types::Type;

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Double(f64),
    Duration(Duration),
    Timestamp(Timestamp),
    String(Shared<'a, str>),
    Bytes(Shared<'a, [u8]>),
    List(ListValue<'a>),
    Map(MapValue<'a>),
    Struct(StructValue<'a>),
    LegacyStruct(LegacyStructValue<'a>),
    Opaque(OpaqueValue<'a>),
    Type(Type<'a>),
    Error(ErrorValue<'a>),
    Unknown(UnknownValue<'a>),
}

impl<'a> Value<'a> {
    /// The kind tag of this value. O(1).
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Double(_) => Kind::Double,
            Self::Duration(_) => Kind::Duration,
            Self::Timestamp(_) => Kind::Timestamp,
            Self::String(_) => Kind::String,
            Self::Bytes(_) => Kind::Bytes,
            Self::List(_) => Kind::List,
            Self::Map(_) => Kind::Map,
            Self::Struct(_) | Self::LegacyStruct(_) => Kind::Struct,
            Self::Opaque(_) => Kind::Opaque,
            Self::Type(_) => Kind::Type,
            Self::Error(_) => Kind::Error,
            Self::Unknown(_) => Kind::Unknown,
        }
    }

    /// The precise runtime type of this value. Never allocates.
    pub fn runtime_type(&self) -> Type<'a> {
        match self {
            Self::Null => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Uint(_) => Type::Uint,
            Self::Double(_) => Type::Double,
            Self::Duration(_) => Type::Duration,
            Self::Timestamp(_) => Type::Timestamp,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::List(v) => Type::List(v.list_type().clone()),
            Self::Map(v) => Type::Map(v.map_type().clone()),
            Self::Struct(v) => Type::Struct(v.struct_type().clone()),
            Self::LegacyStruct(v) => v.runtime_type(),
            Self::Opaque(v) => Type::Opaque(v.opaque_type().clone()),
            Self::Type(_) => Type::Type,
            Self::Error(_) => Type::Error,
            Self::Unknown(_) => Type::Unknown,
        }
    }

    // --- Null ------------------------------------------------------------

    /// O(1) kind check for null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `Some(())` if this is null.
    pub fn as_null(&self) -> Option<()> {
        match self {
            Self::Null => Some(()),
            _ => None,
        }
    }

    /// Unchecked null extraction; the kind must already be established.
    pub fn get_null(&self) {
        debug_assert!(self.is_null(), "get_null on value of kind {}", self.kind());
        match self {
            Self::Null => (),
            _ => unreachable!("get_null on non-null value"),
        }
    }

    // --- Bool ------------------------------------------------------------

    /// O(1) kind check for bool.
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// The bool payload, or `None` on kind mismatch.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Unchecked bool extraction; the kind must already be established.
    pub fn get_bool(&self) -> bool {
        debug_assert!(self.is_bool(), "get_bool on value of kind {}", self.kind());
        match self {
            Self::Bool(v) => *v,
            _ => unreachable!("get_bool on non-bool value"),
        }
    }

    // --- Int -------------------------------------------------------------

    /// O(1) kind check for int.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// The int payload, or `None` on kind mismatch.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Unchecked int extraction; the kind must already be established.
    pub fn get_int(&self) -> i64 {
        debug_assert!(self.is_int(), "get_int on value of kind {}", self.kind());
        match self {
            Self::Int(v) => *v,
            _ => unreachable!("get_int on non-int value"),
        }
    }

    // --- Uint ------------------------------------------------------------

    /// O(1) kind check for uint.
    pub fn is_uint(&self) -> bool {
        matches!(self, Self::Uint(_))
    }

    /// The uint payload, or `None` on kind mismatch.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Unchecked uint extraction; the kind must already be established.
    pub fn get_uint(&self) -> u64 {
        debug_assert!(self.is_uint(), "get_uint on value of kind {}", self.kind());
        match self {
            Self::Uint(v) => *v,
            _ => unreachable!("get_uint on non-uint value"),
        }
    }

    // --- Double ----------------------------------------------------------

    /// O(1) kind check for double.
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(_))
    }

    /// The double payload, or `None` on kind mismatch.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Unchecked double extraction; the kind must already be established.
    pub fn get_double(&self) -> f64 {
        debug_assert!(
            self.is_double(),
            "get_double on value of kind {}",
            self.kind()
        );
        match self {
            Self::Double(v) => *v,
            _ => unreachable!("get_double on non-double value"),
        }
    }

    // --- Duration --------------------------------------------------------

    /// O(1) kind check for duration.
    pub fn is_duration(&self) -> bool {
        matches!(self, Self::Duration(_))
    }

    /// The duration payload, or `None` on kind mismatch.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(v) => Some(*v),
            _ => None,
        }
    }

    /// Unchecked duration extraction; the kind must already be established.
    pub fn get_duration(&self) -> Duration {
        debug_assert!(
            self.is_duration(),
            "get_duration on value of kind {}",
            self.kind()
        );
        match self {
            Self::Duration(v) => *v,
            _ => unreachable!("get_duration on non-duration value"),
        }
    }

    // --- Timestamp -------------------------------------------------------

    /// O(1) kind check for timestamp.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp(_))
    }

    /// The timestamp payload, or `None` on kind mismatch.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    /// Unchecked timestamp extraction; the kind must already be established.
    pub fn get_timestamp(&self) -> Timestamp {
        debug_assert!(
            self.is_timestamp(),
            "get_timestamp on value of kind {}",
            self.kind()
        );
        match self {
            Self::Timestamp(v) => *v,
            _ => unreachable!("get_timestamp on non-timestamp value"),
        }
    }

    // --- String ----------------------------------------------------------

    /// O(1) kind check for string.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// The string payload, or `None` on kind mismatch.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked string extraction; the kind must already be established.
    pub fn get_string(&self) -> &str {
        debug_assert!(
            self.is_string(),
            "get_string on value of kind {}",
            self.kind()
        );
        match self {
            Self::String(v) => v,
            _ => unreachable!("get_string on non-string value"),
        }
    }

    // --- Bytes -----------------------------------------------------------

    /// O(1) kind check for bytes.
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// The bytes payload, or `None` on kind mismatch.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked bytes extraction; the kind must already be established.
    pub fn get_bytes(&self) -> &[u8] {
        debug_assert!(
            self.is_bytes(),
            "get_bytes on value of kind {}",
            self.kind()
        );
        match self {
            Self::Bytes(v) => v,
            _ => unreachable!("get_bytes on non-bytes value"),
        }
    }

    // --- List ------------------------------------------------------------

    /// O(1) kind check for list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The list payload, or `None` on kind mismatch.
    pub fn as_list(&self) -> Option<&ListValue<'a>> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked list extraction; the kind must already be established.
    pub fn get_list(&self) -> &ListValue<'a> {
        debug_assert!(self.is_list(), "get_list on value of kind {}", self.kind());
        match self {
            Self::List(v) => v,
            _ => unreachable!("get_list on non-list value"),
        }
    }

    // --- Map -------------------------------------------------------------

    /// O(1) kind check for map.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// The map payload, or `None` on kind mismatch.
    pub fn as_map(&self) -> Option<&MapValue<'a>> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked map extraction; the kind must already be established.
    pub fn get_map(&self) -> &MapValue<'a> {
        debug_assert!(self.is_map(), "get_map on value of kind {}", self.kind());
        match self {
            Self::Map(v) => v,
            _ => unreachable!("get_map on non-map value"),
        }
    }

    // --- Struct (native) -------------------------------------------------

    /// O(1) kind check for native struct values.
    ///
    /// `false` for legacy struct values even though both report
    /// [`Kind::Struct`]; the two representations are dispatched separately.
    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// The native struct payload, or `None` on kind mismatch.
    pub fn as_struct(&self) -> Option<&StructValue<'a>> {
        match self {
            Self::Struct(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked native struct extraction; the kind must already be
    /// established.
    pub fn get_struct(&self) -> &StructValue<'a> {
        debug_assert!(
            self.is_struct(),
            "get_struct on value of kind {}",
            self.kind()
        );
        match self {
            Self::Struct(v) => v,
            _ => unreachable!("get_struct on non-struct value"),
        }
    }

    // --- LegacyStruct ----------------------------------------------------

    /// O(1) kind check for legacy struct values.
    ///
    /// `false` for every non-legacy kind, including native struct values.
    pub fn is_legacy_struct(&self) -> bool {
        matches!(self, Self::LegacyStruct(_))
    }

    /// The legacy struct payload, or `None` on kind mismatch.
    pub fn as_legacy_struct(&self) -> Option<LegacyStructValue<'a>> {
        match self {
            Self::LegacyStruct(v) => Some(*v),
            _ => None,
        }
    }

    /// Unchecked legacy struct extraction; the kind must already be
    /// established.
    pub fn get_legacy_struct(&self) -> LegacyStructValue<'a> {
        debug_assert!(
            self.is_legacy_struct(),
            "get_legacy_struct on value of kind {}",
            self.kind()
        );
        match self {
            Self::LegacyStruct(v) => *v,
            _ => unreachable!("get_legacy_struct on non-legacy-struct value"),
        }
    }

    // --- Opaque ----------------------------------------------------------

    /// O(1) kind check for opaque.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// The opaque payload, or `None` on kind mismatch.
    pub fn as_opaque(&self) -> Option<&OpaqueValue<'a>> {
        match self {
            Self::Opaque(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked opaque extraction; the kind must already be established.
    pub fn get_opaque(&self) -> &OpaqueValue<'a> {
        debug_assert!(
            self.is_opaque(),
            "get_opaque on value of kind {}",
            self.kind()
        );
        match self {
            Self::Opaque(v) => v,
            _ => unreachable!("get_opaque on non-opaque value"),
        }
    }

    // --- Type ------------------------------------------------------------

    /// O(1) kind check for type values.
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }

    /// The type payload, or `None` on kind mismatch.
    pub fn as_type(&self) -> Option<&Type<'a>> {
        match self {
            Self::Type(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked type extraction; the kind must already be established.
    pub fn get_type(&self) -> &Type<'a> {
        debug_assert!(self.is_type(), "get_type on value of kind {}", self.kind());
        match self {
            Self::Type(v) => v,
            _ => unreachable!("get_type on non-type value"),
        }
    }

    // --- Error -----------------------------------------------------------

    /// O(1) kind check for error values.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The error payload, or `None` on kind mismatch.
    pub fn as_error(&self) -> Option<&ErrorValue<'a>> {
        match self {
            Self::Error(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked error extraction; the kind must already be established.
    pub fn get_error(&self) -> &ErrorValue<'a> {
        debug_assert!(
            self.is_error(),
            "get_error on value of kind {}",
            self.kind()
        );
        match self {
            Self::Error(v) => v,
            _ => unreachable!("get_error on non-error value"),
        }
    }

    // --- Unknown ---------------------------------------------------------

    /// O(1) kind check for unknown values.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// The unknown payload, or `None` on kind mismatch.
    pub fn as_unknown(&self) -> Option<&UnknownValue<'a>> {
        match self {
            Self::Unknown(v) => Some(v),
            _ => None,
        }
    }

    /// Unchecked unknown extraction; the kind must already be established.
    pub fn get_unknown(&self) -> &UnknownValue<'a> {
        debug_assert!(
            self.is_unknown(),
            "get_unknown on value of kind {}",
            self.kind()
        );
        match self {
            Self::Unknown(v) => v,
            _ => unreachable!("get_unknown on non-unknown value"),
        }
    }

    /// Returns `true` for the terminal kinds that short-circuit evaluation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_) | Self::Unknown(_))
    }
}

// Conversion traits for the scalar kinds.
impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value<'_> {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<Duration> for Value<'_> {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl<'a> From<ListValue<'a>> for Value<'a> {
    fn from(v: ListValue<'a>) -> Self {
        Self::List(v)
    }
}

impl<'a> From<MapValue<'a>> for Value<'a> {
    fn from(v: MapValue<'a>) -> Self {
        Self::Map(v)
    }
}

impl<'a> From<StructValue<'a>> for Value<'a> {
    fn from(v: StructValue<'a>) -> Self {
        Self::Struct(v)
    }
}

impl<'a> From<LegacyStructValue<'a>> for Value<'a> {
    fn from(v: LegacyStructValue<'a>) -> Self {
        Self::LegacyStruct(v)
    }
}

impl<'a> From<OpaqueValue<'a>> for Value<'a> {
    fn from(v: OpaqueValue<'a>) -> Self {
        Self::Opaque(v)
    }
}

impl<'a> From<ErrorValue<'a>> for Value<'a> {
    fn from(v: ErrorValue<'a>) -> Self {
        Self::Error(v)
    }
}

impl<'a> From<UnknownValue<'a>> for Value<'a> {
    fn from(v: UnknownValue<'a>) -> Self {
        Self::Unknown(v)
    }
}
