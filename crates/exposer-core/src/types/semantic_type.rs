//! Semantic types of parameters, return values and attributes.

use std::fmt;

use crate::TypeHash;

use super::PrimitiveKind;

/// The declared type of a value crossing the binding boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SemanticType {
    /// No value (function returns only).
    Void,
    /// Numeric or boolean primitive.
    Primitive(PrimitiveKind),
    /// Native string; copied by value in both directions.
    Text,
    /// Instance of a registered type, named by its binding name.
    Object(String),
}

/// Coarse runtime category used for mismatch checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Void,
    Integer,
    Float,
    Bool,
    Text,
    Object,
    Null,
}

impl ValueCategory {
    /// Human-readable category name.
    pub const fn name(self) -> &'static str {
        match self {
            ValueCategory::Void => "void",
            ValueCategory::Integer => "integer",
            ValueCategory::Float => "float",
            ValueCategory::Bool => "bool",
            ValueCategory::Text => "text",
            ValueCategory::Object => "object",
            ValueCategory::Null => "null",
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SemanticType {
    /// Shorthand for an object reference to `name`.
    pub fn object(name: impl Into<String>) -> Self {
        SemanticType::Object(name.into())
    }

    /// The runtime category values of this type must have.
    pub fn category(&self) -> ValueCategory {
        match self {
            SemanticType::Void => ValueCategory::Void,
            SemanticType::Primitive(PrimitiveKind::Bool) => ValueCategory::Bool,
            SemanticType::Primitive(kind) if kind.is_floating() => ValueCategory::Float,
            SemanticType::Primitive(_) => ValueCategory::Integer,
            SemanticType::Text => ValueCategory::Text,
            SemanticType::Object(_) => ValueCategory::Object,
        }
    }

    /// Name used in listings and error messages.
    pub fn name(&self) -> &str {
        match self {
            SemanticType::Void => "void",
            SemanticType::Primitive(kind) => kind.name(),
            SemanticType::Text => "string",
            SemanticType::Object(name) => name,
        }
    }

    /// Identity hash of the type.
    pub fn type_hash(&self) -> TypeHash {
        TypeHash::from_name(self.name())
    }

    /// The referenced type name, for object types.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            SemanticType::Object(name) => Some(name),
            _ => None,
        }
    }

    /// Check if this type needs no registry entry to be valid.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, SemanticType::Object(_))
    }
}

impl From<PrimitiveKind> for SemanticType {
    fn from(kind: PrimitiveKind) -> Self {
        SemanticType::Primitive(kind)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(SemanticType::Void.category(), ValueCategory::Void);
        assert_eq!(
            SemanticType::Primitive(PrimitiveKind::Int16).category(),
            ValueCategory::Integer
        );
        assert_eq!(
            SemanticType::Primitive(PrimitiveKind::Float).category(),
            ValueCategory::Float
        );
        assert_eq!(
            SemanticType::Primitive(PrimitiveKind::Bool).category(),
            ValueCategory::Bool
        );
        assert_eq!(SemanticType::Text.category(), ValueCategory::Text);
        assert_eq!(SemanticType::object("Date").category(), ValueCategory::Object);
    }

    #[test]
    fn names_and_hashes() {
        assert_eq!(SemanticType::Text.to_string(), "string");
        assert_eq!(SemanticType::object("Date").name(), "Date");
        assert_eq!(SemanticType::object("Date").type_hash(), TypeHash::from_name("Date"));
        assert_eq!(
            SemanticType::from(PrimitiveKind::Int32).type_hash(),
            PrimitiveKind::Int32.type_hash()
        );
    }

    #[test]
    fn builtin_types_need_no_registration() {
        assert!(SemanticType::Text.is_builtin());
        assert!(!SemanticType::object("Person").is_builtin());
        assert_eq!(SemanticType::object("Person").object_name(), Some("Person"));
        assert_eq!(SemanticType::Text.object_name(), None);
    }
}
