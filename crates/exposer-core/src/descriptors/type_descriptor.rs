//! Type descriptors: everything a module knows about one native type.

use std::any::TypeId;
use std::fmt;

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::TypeHash;
use crate::error::RegistrationError;

use super::{AttributeDescriptor, ConstructorDescriptor, ConstructorKind, MethodDescriptor};

/// Declared flavor of a type. Both behave identically at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
}

impl TypeKind {
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Construction capabilities of a registered type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeTraits: u8 {
        /// Has a zero-argument constructor.
        const DEFAULT_CONSTRUCTIBLE = 1 << 0;
        /// Has a copy constructor.
        const COPY_CONSTRUCTIBLE = 1 << 1;
        /// Has at least one value constructor.
        const VALUE_CONSTRUCTIBLE = 1 << 2;
    }
}

/// Descriptor of a native class or struct.
///
/// Method and attribute names share one namespace per type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Binding name, unique within a module.
    pub name: String,
    /// Identity hash derived from the name.
    pub type_hash: TypeHash,
    pub kind: TypeKind,
    /// Rust type of the instances, when known. Construction verifies it.
    pub instance_type: Option<TypeId>,
    constructors: Vec<ConstructorDescriptor>,
    methods: FxHashMap<String, MethodDescriptor>,
    attributes: FxHashMap<String, AttributeDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        let name = name.into();
        Self {
            type_hash: TypeHash::from_name(&name),
            name,
            kind,
            instance_type: None,
            constructors: Vec::new(),
            methods: FxHashMap::default(),
            attributes: FxHashMap::default(),
        }
    }

    /// Record the Rust type of the instances.
    pub fn with_instance_type<T: 'static>(mut self) -> Self {
        self.instance_type = Some(TypeId::of::<T>());
        self
    }

    /// Add a constructor.
    ///
    /// At most one constructor per kind and arity.
    pub fn add_constructor(
        &mut self,
        ctor: ConstructorDescriptor,
    ) -> Result<(), RegistrationError> {
        let clash = self
            .constructors
            .iter()
            .any(|existing| existing.kind == ctor.kind && existing.arity() == ctor.arity());
        if clash {
            return Err(RegistrationError::DuplicateConstructor {
                type_name: self.name.clone(),
                signature: format!("{}({})", ctor.kind, ctor.signature()),
            });
        }
        self.constructors.push(ctor);
        Ok(())
    }

    /// Add a method. Names must be unique among methods and attributes.
    pub fn add_method(&mut self, method: MethodDescriptor) -> Result<(), RegistrationError> {
        self.check_member_name(&method.name)?;
        self.methods.insert(method.name.clone(), method);
        Ok(())
    }

    /// Add an attribute. Names must be unique among methods and attributes.
    pub fn add_attribute(
        &mut self,
        attribute: AttributeDescriptor,
    ) -> Result<(), RegistrationError> {
        self.check_member_name(&attribute.name)?;
        self.attributes.insert(attribute.name.clone(), attribute);
        Ok(())
    }

    fn check_member_name(&self, name: &str) -> Result<(), RegistrationError> {
        let kind = if self.methods.contains_key(name) {
            "method"
        } else if self.attributes.contains_key(name) {
            "attribute"
        } else {
            return Ok(());
        };
        Err(RegistrationError::DuplicateSymbol {
            name: format!("{}.{}", self.name, name),
            kind,
        })
    }

    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    /// Constructors declaring exactly `arity` parameters.
    pub fn constructors_with_arity(
        &self,
        arity: usize,
    ) -> impl Iterator<Item = &ConstructorDescriptor> {
        self.constructors.iter().filter(move |ctor| ctor.arity() == arity)
    }

    /// The constructor of the given kind, for `Default` and `Copy`.
    pub fn constructor_of_kind(&self, kind: ConstructorKind) -> Option<&ConstructorDescriptor> {
        self.constructors.iter().find(|ctor| ctor.kind == kind)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.values()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.values()
    }

    /// Construction capabilities.
    pub fn traits(&self) -> TypeTraits {
        self.constructors
            .iter()
            .fold(TypeTraits::empty(), |traits, ctor| {
                traits
                    | match ctor.kind {
                        ConstructorKind::Default => TypeTraits::DEFAULT_CONSTRUCTIBLE,
                        ConstructorKind::Copy => TypeTraits::COPY_CONSTRUCTIBLE,
                        ConstructorKind::Value => TypeTraits::VALUE_CONSTRUCTIBLE,
                    }
            })
    }
}
