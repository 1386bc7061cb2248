//! Descriptor-driven value checks at the binding boundary.
//!
//! Every argument and attribute value entering native code, and every return
//! value leaving it, is checked against its declared [`SemanticType`]:
//!
//! | Declared type | Accepted values |
//! |---------------|-----------------|
//! | integer kinds | `Int` within the kind's range; floats are never truncated |
//! | `double` | `Float`, `Int` when exactly representable |
//! | `float` | `Float` that narrows exactly (or is non-finite), `Int` likewise |
//! | `bool` | `Bool` only |
//! | `string` | `String` only |
//! | object `T` | `Object` whose proxy is a `T` |
//! | `void` | `Void` only |

use crate::error::ConversionError;
use crate::runtime::Dynamic;
use crate::{PrimitiveKind, SemanticType};

/// Check that `value` is acceptable as an argument of type `ty`.
pub fn check(value: &Dynamic, ty: &SemanticType) -> Result<(), ConversionError> {
    match ty {
        SemanticType::Void => match value {
            Dynamic::Void => Ok(()),
            _ => Err(mismatch(ty, value)),
        },
        SemanticType::Primitive(PrimitiveKind::Bool) => match value {
            Dynamic::Bool(_) => Ok(()),
            _ => Err(mismatch(ty, value)),
        },
        SemanticType::Primitive(kind) if kind.is_integer() => integer(value, *kind).map(|_| ()),
        SemanticType::Primitive(kind) => floating(value, *kind).map(|_| ()),
        SemanticType::Text => match value {
            Dynamic::String(_) => Ok(()),
            _ => Err(mismatch(ty, value)),
        },
        SemanticType::Object(name) => match value {
            Dynamic::Object(proxy) if proxy.type_name() == name.as_str() => Ok(()),
            Dynamic::Object(proxy) => Err(ConversionError::ObjectMismatch {
                expected: name.clone(),
                actual: proxy.type_name().to_owned(),
            }),
            _ => Err(mismatch(ty, value)),
        },
    }
}

/// Check a native return value of declared type `source` before handing it
/// to the dynamic side.
pub fn to_foreign(value: Dynamic, source: &SemanticType) -> Result<Dynamic, ConversionError> {
    check(&value, source)?;
    Ok(value)
}

/// Extract an integer of kind `kind`, range checked.
pub fn integer(value: &Dynamic, kind: PrimitiveKind) -> Result<i64, ConversionError> {
    let Some((min, max)) = kind.integer_range() else {
        return Err(mismatch(&SemanticType::Primitive(kind), value));
    };
    match value {
        Dynamic::Int(v) if (min..=max).contains(v) => Ok(*v),
        Dynamic::Int(v) => Err(ConversionError::RangeError {
            value: v.to_string(),
            target_type: kind.name(),
        }),
        _ => Err(mismatch(&SemanticType::Primitive(kind), value)),
    }
}

/// Extract a floating value of kind `kind`.
///
/// Integers are widened only when the kind represents them exactly, and
/// doubles are narrowed to `float` only when no precision is lost.
pub fn floating(value: &Dynamic, kind: PrimitiveKind) -> Result<f64, ConversionError> {
    let Some(limit) = kind.exact_integer_limit() else {
        return Err(mismatch(&SemanticType::Primitive(kind), value));
    };
    match value {
        Dynamic::Float(v) if kind == PrimitiveKind::Float && !narrows_to_f32(*v) => {
            Err(ConversionError::RangeError {
                value: v.to_string(),
                target_type: kind.name(),
            })
        }
        Dynamic::Float(v) => Ok(*v),
        Dynamic::Int(v) if v.unsigned_abs() <= limit as u64 => Ok(*v as f64),
        Dynamic::Int(v) => Err(ConversionError::RangeError {
            value: v.to_string(),
            target_type: kind.name(),
        }),
        _ => Err(mismatch(&SemanticType::Primitive(kind), value)),
    }
}

/// Non-finite values narrow as themselves; finite ones must survive the
/// round trip through `f32` unchanged.
fn narrows_to_f32(v: f64) -> bool {
    !v.is_finite() || f64::from(v as f32) == v
}

fn mismatch(expected: &SemanticType, actual: &Dynamic) -> ConversionError {
    ConversionError::TypeMismatch {
        expected: expected.name().to_owned(),
        actual: actual.category(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueCategory;
    use crate::runtime::Proxy;

    struct Date;
    struct Person;

    #[test]
    fn integer_checks() {
        let int = SemanticType::Primitive(PrimitiveKind::Int32);
        assert!(check(&Dynamic::Int(1), &int).is_ok());
        assert!(check(&Dynamic::Int(i64::from(i32::MAX) + 1), &int)
            .unwrap_err()
            .is_range_error());
        assert_eq!(
            check(&Dynamic::Float(1.0), &int),
            Err(ConversionError::TypeMismatch {
                expected: "int".into(),
                actual: ValueCategory::Float,
            })
        );
    }

    #[test]
    fn float_checks() {
        let double = SemanticType::Primitive(PrimitiveKind::Double);
        assert!(check(&Dynamic::Float(f64::NAN), &double).is_ok());
        assert!(check(&Dynamic::Int(1 << 53), &double).is_ok());
        assert!(check(&Dynamic::Int((1 << 53) + 1), &double)
            .unwrap_err()
            .is_range_error());
        assert!(check(&Dynamic::Bool(true), &double)
            .unwrap_err()
            .is_type_mismatch());

        let float = SemanticType::Primitive(PrimitiveKind::Float);
        assert!(check(&Dynamic::Float(f64::MAX), &float)
            .unwrap_err()
            .is_range_error());
        assert!(check(&Dynamic::Float(f64::NEG_INFINITY), &float).is_ok());
    }

    #[test]
    fn float_narrowing_is_exact() {
        let float = SemanticType::Primitive(PrimitiveKind::Float);
        assert_eq!(
            check(&Dynamic::Float(0.1), &float),
            Err(ConversionError::RangeError {
                value: "0.1".into(),
                target_type: "float",
            })
        );
        assert!(check(&Dynamic::Float(0.5), &float).is_ok());
        assert!(check(&Dynamic::Float(f64::from(0.1f32)), &float).is_ok());
        assert!(check(&Dynamic::Float(f64::NAN), &float).is_ok());
        assert!(check(&Dynamic::Int(1 << 24), &float).is_ok());
        assert!(check(&Dynamic::Int((1 << 24) + 1), &float)
            .unwrap_err()
            .is_range_error());

        let double = SemanticType::Primitive(PrimitiveKind::Double);
        assert!(check(&Dynamic::Float(0.1), &double).is_ok());
    }

    #[test]
    fn f32_round_trip() {
        use crate::convert::{FromDynamic, IntoDynamic};

        let stored = Dynamic::Float(0.375);
        let level = f32::from_dynamic(&stored).unwrap();
        assert_eq!(level.into_dynamic(), stored);

        let narrowed = f64::from(0.1f32);
        let level = f32::from_dynamic(&Dynamic::Float(narrowed)).unwrap();
        assert_eq!(level.into_dynamic(), Dynamic::Float(narrowed));

        assert!(f32::from_dynamic(&Dynamic::Float(0.1)).unwrap_err().is_range_error());
    }

    #[test]
    fn text_and_bool_checks() {
        assert!(check(&Dynamic::from("x"), &SemanticType::Text).is_ok());
        assert!(check(&Dynamic::Int(1), &SemanticType::Text)
            .unwrap_err()
            .is_type_mismatch());
        let boolean = SemanticType::Primitive(PrimitiveKind::Bool);
        assert!(check(&Dynamic::Bool(false), &boolean).is_ok());
        assert!(check(&Dynamic::Int(0), &boolean).is_err());
    }

    #[test]
    fn object_checks() {
        let date = Dynamic::Object(Proxy::new("Date", Box::new(Date)));
        let person = Dynamic::Object(Proxy::new("Person", Box::new(Person)));

        assert!(check(&date, &SemanticType::object("Date")).is_ok());
        assert_eq!(
            check(&person, &SemanticType::object("Date")),
            Err(ConversionError::ObjectMismatch {
                expected: "Date".into(),
                actual: "Person".into(),
            })
        );
        assert_eq!(
            check(&Dynamic::NullHandle, &SemanticType::object("Date")),
            Err(ConversionError::TypeMismatch {
                expected: "Date".into(),
                actual: ValueCategory::Null,
            })
        );
    }

    #[test]
    fn return_values() {
        assert_eq!(to_foreign(Dynamic::Void, &SemanticType::Void), Ok(Dynamic::Void));
        assert!(to_foreign(Dynamic::Int(1), &SemanticType::Void).is_err());
        assert_eq!(
            to_foreign(Dynamic::from("Hello world"), &SemanticType::Text),
            Ok(Dynamic::from("Hello world"))
        );
    }
}
