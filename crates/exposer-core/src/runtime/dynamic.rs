//! Runtime value type exchanged with the dynamic-language side.

use std::any::Any;
use std::fmt;

use crate::ValueCategory;

use super::Proxy;

/// A value as seen by the dynamic-language runtime.
///
/// Primitives and text are held by value. `Object` owns a [`Proxy`], which
/// in turn exclusively owns its native instance, so moving a `Dynamic`
/// moves ownership of the instance with it.
///
/// Note: Dynamic does not implement Clone because proxies and native values
/// are uniquely owned. Use `Dynamic::clone_if_possible()` for plain values.
pub enum Dynamic {
    /// Void/empty
    Void,
    /// Integer value (every native integer kind is carried as i64)
    Int(i64),
    /// Floating point value (f32 and f64 are carried as f64)
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Text value (owned, independent of any native string)
    String(String),
    /// Proxy for a native instance
    Object(Proxy),
    /// Freshly constructed native instance, before it is wrapped in a proxy
    Native(Box<dyn Any + Send + Sync>),
    /// Null handle (the runtime's "nothing")
    NullHandle,
}

impl Dynamic {
    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Void => "void",
            Dynamic::Int(_) => "int",
            Dynamic::Float(_) => "float",
            Dynamic::Bool(_) => "bool",
            Dynamic::String(_) => "string",
            Dynamic::Object(_) => "object",
            Dynamic::Native(_) => "native",
            Dynamic::NullHandle => "null",
        }
    }

    /// Runtime category, used for mismatch checks.
    pub fn category(&self) -> ValueCategory {
        match self {
            Dynamic::Void => ValueCategory::Void,
            Dynamic::Int(_) => ValueCategory::Integer,
            Dynamic::Float(_) => ValueCategory::Float,
            Dynamic::Bool(_) => ValueCategory::Bool,
            Dynamic::String(_) => ValueCategory::Text,
            Dynamic::Object(_) | Dynamic::Native(_) => ValueCategory::Object,
            Dynamic::NullHandle => ValueCategory::Null,
        }
    }

    /// Check if this value is void.
    pub fn is_void(&self) -> bool {
        matches!(self, Dynamic::Void)
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::NullHandle)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Dynamic::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Dynamic::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the proxy held by an `Object` value.
    pub fn as_object(&self) -> Option<&Proxy> {
        match self {
            Dynamic::Object(proxy) => Some(proxy),
            _ => None,
        }
    }

    /// Mutably borrow the proxy held by an `Object` value.
    pub fn as_object_mut(&mut self) -> Option<&mut Proxy> {
        match self {
            Dynamic::Object(proxy) => Some(proxy),
            _ => None,
        }
    }

    /// Take ownership of the proxy held by an `Object` value.
    pub fn into_object(self) -> Option<Proxy> {
        match self {
            Dynamic::Object(proxy) => Some(proxy),
            _ => None,
        }
    }

    /// Clone the value if it holds no proxy or native instance.
    pub fn clone_if_possible(&self) -> Option<Self> {
        match self {
            Dynamic::Void => Some(Dynamic::Void),
            Dynamic::Int(v) => Some(Dynamic::Int(*v)),
            Dynamic::Float(v) => Some(Dynamic::Float(*v)),
            Dynamic::Bool(v) => Some(Dynamic::Bool(*v)),
            Dynamic::String(s) => Some(Dynamic::String(s.clone())),
            Dynamic::Object(_) | Dynamic::Native(_) => None,
            Dynamic::NullHandle => Some(Dynamic::NullHandle),
        }
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Void => write!(f, "Void"),
            Dynamic::Int(v) => write!(f, "Int({})", v),
            Dynamic::Float(v) => write!(f, "Float({})", v),
            Dynamic::Bool(v) => write!(f, "Bool({})", v),
            Dynamic::String(s) => write!(f, "String({:?})", s),
            Dynamic::Object(p) => write!(f, "Object({})", p.type_name()),
            Dynamic::Native(_) => write!(f, "Native(...)"),
            Dynamic::NullHandle => write!(f, "NullHandle"),
        }
    }
}

impl PartialEq for Dynamic {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Dynamic::Void, Dynamic::Void) => true,
            (Dynamic::Int(a), Dynamic::Int(b)) => a == b,
            (Dynamic::Float(a), Dynamic::Float(b)) => a == b,
            (Dynamic::Bool(a), Dynamic::Bool(b)) => a == b,
            (Dynamic::String(a), Dynamic::String(b)) => a == b,
            (Dynamic::NullHandle, Dynamic::NullHandle) => true,
            // proxies and native values have identity, not equality
            _ => false,
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Dynamic {
                fn from(v: $ty) -> Self {
                    Dynamic::Int(v as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Dynamic {
    fn from(v: f32) -> Self {
        Dynamic::Float(v as f64)
    }
}

impl From<f64> for Dynamic {
    fn from(v: f64) -> Self {
        Dynamic::Float(v)
    }
}

impl From<bool> for Dynamic {
    fn from(v: bool) -> Self {
        Dynamic::Bool(v)
    }
}

impl From<String> for Dynamic {
    fn from(v: String) -> Self {
        Dynamic::String(v)
    }
}

impl From<&str> for Dynamic {
    fn from(v: &str) -> Self {
        Dynamic::String(v.to_owned())
    }
}

impl From<Proxy> for Dynamic {
    fn from(proxy: Proxy) -> Self {
        Dynamic::Object(proxy)
    }
}

impl From<()> for Dynamic {
    fn from(_: ()) -> Self {
        Dynamic::Void
    }
}
