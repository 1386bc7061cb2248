//! Primitive native types that cross the boundary by value.

use std::fmt;

use crate::TypeHash;

/// Primitive type kinds.
///
/// Every integer kind is carried as an `i64` on the dynamic side, so the
/// widest unsigned kind is `Uint32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Get the name of this primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Uint8 => "uint8",
            PrimitiveKind::Uint16 => "uint16",
            PrimitiveKind::Uint32 => "uint",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Get the TypeHash for this primitive type.
    pub fn type_hash(self) -> TypeHash {
        TypeHash::from_name(self.name())
    }

    /// Check if this is one of the integer kinds.
    pub const fn is_integer(self) -> bool {
        self.integer_range().is_some()
    }

    /// Check if this is `float` or `double`.
    pub const fn is_floating(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }

    /// Inclusive value range of an integer kind.
    pub const fn integer_range(self) -> Option<(i64, i64)> {
        match self {
            PrimitiveKind::Int8 => Some((i8::MIN as i64, i8::MAX as i64)),
            PrimitiveKind::Int16 => Some((i16::MIN as i64, i16::MAX as i64)),
            PrimitiveKind::Int32 => Some((i32::MIN as i64, i32::MAX as i64)),
            PrimitiveKind::Int64 => Some((i64::MIN, i64::MAX)),
            PrimitiveKind::Uint8 => Some((0, u8::MAX as i64)),
            PrimitiveKind::Uint16 => Some((0, u16::MAX as i64)),
            PrimitiveKind::Uint32 => Some((0, u32::MAX as i64)),
            PrimitiveKind::Bool | PrimitiveKind::Float | PrimitiveKind::Double => None,
        }
    }

    /// Largest integer magnitude a floating kind represents exactly
    /// (2^24 for `float`, 2^53 for `double`).
    pub const fn exact_integer_limit(self) -> Option<i64> {
        match self {
            PrimitiveKind::Float => Some(1 << 24),
            PrimitiveKind::Double => Some(1 << 53),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
