//! Typed conversion between Rust values and [`Dynamic`].
//!
//! - [`NativeValue`]: the declared semantic type of a Rust type
//! - [`FromDynamic`]: extract a Rust value from a [`Dynamic`] (to native)
//! - [`IntoDynamic`]: convert a Rust value into a [`Dynamic`] (to foreign)
//!
//! ## Supported Types
//!
//! - Integers: `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`
//! - Floats: `f32`, `f64`
//! - Boolean: `bool`
//! - Text: `String` (and `&'static str` as a return type)
//! - Unit: `()` (void)
//!
//! Numeric extraction goes through [`marshal`](crate::marshal), so the typed
//! and the descriptor-driven paths accept exactly the same values.
//!
//! ## Example
//!
//! ```ignore
//! let value: i32 = i32::from_dynamic(&Dynamic::Int(42))?;
//! let back: Dynamic = value.into_dynamic();
//! ```

use crate::error::ConversionError;
use crate::marshal;
use crate::runtime::Dynamic;
use crate::{PrimitiveKind, SemanticType};

/// A Rust type with a fixed semantic type on the binding surface.
pub trait NativeValue {
    /// The semantic type this Rust type is declared as.
    fn semantic_type() -> SemanticType;
}

/// Extract a value from a Dynamic.
pub trait FromDynamic: NativeValue + Sized {
    /// Extract a value from the given slot.
    ///
    /// Returns a `ConversionError` if the slot holds an incompatible value
    /// or a number that does not fit exactly.
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError>;
}

/// Convert a value into a Dynamic.
pub trait IntoDynamic: NativeValue {
    /// Convert this value into a Dynamic.
    fn into_dynamic(self) -> Dynamic;
}

// ============================================================================
// Numeric implementations
// ============================================================================

macro_rules! impl_integer {
    ($($ty:ty => $kind:ident),*) => {
        $(
            impl NativeValue for $ty {
                fn semantic_type() -> SemanticType {
                    SemanticType::Primitive(PrimitiveKind::$kind)
                }
            }

            impl FromDynamic for $ty {
                fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
                    marshal::integer(slot, PrimitiveKind::$kind).map(|v| v as Self)
                }
            }

            impl IntoDynamic for $ty {
                fn into_dynamic(self) -> Dynamic {
                    Dynamic::Int(self as i64)
                }
            }
        )*
    };
}

impl_integer!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32
);

macro_rules! impl_float {
    ($($ty:ty => $kind:ident),*) => {
        $(
            impl NativeValue for $ty {
                fn semantic_type() -> SemanticType {
                    SemanticType::Primitive(PrimitiveKind::$kind)
                }
            }

            impl FromDynamic for $ty {
                fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
                    marshal::floating(slot, PrimitiveKind::$kind).map(|v| v as Self)
                }
            }

            impl IntoDynamic for $ty {
                fn into_dynamic(self) -> Dynamic {
                    Dynamic::Float(self as f64)
                }
            }
        )*
    };
}

impl_float!(f32 => Float, f64 => Double);

// ============================================================================
// Bool, text and unit
// ============================================================================

impl NativeValue for bool {
    fn semantic_type() -> SemanticType {
        SemanticType::Primitive(PrimitiveKind::Bool)
    }
}

impl FromDynamic for bool {
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        match slot {
            Dynamic::Bool(v) => Ok(*v),
            _ => Err(ConversionError::TypeMismatch {
                expected: "bool".into(),
                actual: slot.category(),
            }),
        }
    }
}

impl IntoDynamic for bool {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Bool(self)
    }
}

impl NativeValue for String {
    fn semantic_type() -> SemanticType {
        SemanticType::Text
    }
}

impl FromDynamic for String {
    /// Copies the text; the result never aliases the dynamic-side value.
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        match slot {
            Dynamic::String(s) => Ok(s.clone()),
            _ => Err(ConversionError::TypeMismatch {
                expected: "string".into(),
                actual: slot.category(),
            }),
        }
    }
}

impl IntoDynamic for String {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self)
    }
}

impl NativeValue for &'static str {
    fn semantic_type() -> SemanticType {
        SemanticType::Text
    }
}

impl IntoDynamic for &'static str {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self.to_owned())
    }
}

impl NativeValue for () {
    fn semantic_type() -> SemanticType {
        SemanticType::Void
    }
}

impl IntoDynamic for () {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Void
    }
}
