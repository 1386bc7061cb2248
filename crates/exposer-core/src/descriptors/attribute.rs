//! Attribute descriptors and type-erased accessors.

use std::fmt;
use std::sync::Arc;

use crate::error::NativeError;
use crate::runtime::{Dynamic, Instance};
use crate::{SemanticType, Visibility};

/// Reads an attribute from a native instance.
pub type AttributeGetter = Arc<dyn Fn(&Instance) -> Result<Dynamic, NativeError> + Send + Sync>;

/// Writes an already checked value into a native instance.
pub type AttributeSetter =
    Arc<dyn Fn(&mut Instance, &Dynamic) -> Result<(), NativeError> + Send + Sync>;

/// Getter and setter pair of an exposed attribute.
#[derive(Clone)]
pub struct AttributeAccessors {
    pub get: AttributeGetter,
    pub set: AttributeSetter,
}

impl fmt::Debug for AttributeAccessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeAccessors").finish_non_exhaustive()
    }
}

/// A named data member of a type.
///
/// Only public attributes carry accessors and are reachable from the dynamic
/// side. Protected and private members are recorded for completeness and
/// omitted from listings.
#[derive(Debug, Clone)]
pub struct AttributeDescriptor {
    /// Binding name.
    pub name: String,
    /// Declared type; every write is checked against it.
    pub semantic_type: SemanticType,
    pub visibility: Visibility,
    /// Present for exposed attributes.
    pub accessors: Option<AttributeAccessors>,
}

impl AttributeDescriptor {
    /// Create a public attribute.
    pub fn new(
        name: impl Into<String>,
        semantic_type: SemanticType,
        get: AttributeGetter,
        set: AttributeSetter,
    ) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            visibility: Visibility::Public,
            accessors: Some(AttributeAccessors { get, set }),
        }
    }

    /// Record a non-public data member.
    pub fn hidden(
        name: impl Into<String>,
        semantic_type: SemanticType,
        visibility: Visibility,
    ) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            visibility,
            accessors: None,
        }
    }

    /// Check if the attribute is reachable from the dynamic side.
    pub fn is_exposed(&self) -> bool {
        self.visibility.is_exposed() && self.accessors.is_some()
    }
}
