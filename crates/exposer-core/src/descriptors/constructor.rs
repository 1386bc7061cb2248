//! Constructor descriptors.

use std::fmt;

use crate::SemanticType;
use crate::runtime::NativeFn;

use super::method::render_params;

/// How a constructor builds its instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructorKind {
    /// No arguments.
    Default,
    /// One argument: an existing instance of the same type.
    Copy,
    /// Explicit typed arguments.
    Value,
}

impl ConstructorKind {
    pub const fn name(self) -> &'static str {
        match self {
            ConstructorKind::Default => "default",
            ConstructorKind::Copy => "copy",
            ConstructorKind::Value => "value",
        }
    }
}

impl fmt::Display for ConstructorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A way to create a native instance of the owning type.
///
/// The entry point stores the new instance with
/// [`CallContext::set_instance`](crate::runtime::CallContext::set_instance).
#[derive(Debug, Clone)]
pub struct ConstructorDescriptor {
    pub kind: ConstructorKind,
    /// Declared parameter types.
    pub params: Vec<SemanticType>,
    /// Native entry point.
    pub entry: NativeFn,
}

impl ConstructorDescriptor {
    pub fn new(kind: ConstructorKind, params: Vec<SemanticType>, entry: NativeFn) -> Self {
        Self {
            kind,
            params,
            entry,
        }
    }

    /// Zero-argument constructor.
    pub fn default_ctor(entry: NativeFn) -> Self {
        Self::new(ConstructorKind::Default, Vec::new(), entry)
    }

    /// Copy constructor for the type named `owner`.
    pub fn copy_ctor(owner: &str, entry: NativeFn) -> Self {
        Self::new(ConstructorKind::Copy, vec![SemanticType::object(owner)], entry)
    }

    /// Constructor taking explicit values.
    pub fn value_ctor(params: Vec<SemanticType>, entry: NativeFn) -> Self {
        Self::new(ConstructorKind::Value, params, entry)
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Render the parameter list, e.g. `int, int, int`.
    pub fn signature(&self) -> String {
        render_params(&self.params)
    }
}
