//! Descriptors: declarative records of what a binding module exposes.
//!
//! A module is built from [`Descriptor`]s, each either a [`TypeDescriptor`]
//! (with its constructors, methods and attributes) or a free
//! [`FunctionDescriptor`]. Descriptors are plain data plus shared native
//! entry points, so they can be cloned and inspected freely.

mod attribute;
mod constructor;
mod method;
mod type_descriptor;

pub use attribute::{AttributeAccessors, AttributeDescriptor, AttributeGetter, AttributeSetter};
pub use constructor::{ConstructorDescriptor, ConstructorKind};
pub use method::{FunctionDescriptor, MethodDescriptor};
pub use type_descriptor::{TypeDescriptor, TypeKind, TypeTraits};

/// One entry handed to the module builder.
#[derive(Debug, Clone)]
pub enum Descriptor {
    Type(TypeDescriptor),
    Function(FunctionDescriptor),
}

impl Descriptor {
    /// Binding name of the described symbol.
    pub fn name(&self) -> &str {
        match self {
            Descriptor::Type(ty) => &ty.name,
            Descriptor::Function(func) => &func.name,
        }
    }
}

impl From<TypeDescriptor> for Descriptor {
    fn from(ty: TypeDescriptor) -> Self {
        Descriptor::Type(ty)
    }
}

impl From<FunctionDescriptor> for Descriptor {
    fn from(func: FunctionDescriptor) -> Self {
        Descriptor::Function(func)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::{NativeError, RegistrationError};
    use crate::runtime::{CallContext, Dynamic, Instance, NativeFn};
    use crate::{PrimitiveKind, SemanticType, TypeHash, Visibility};

    fn noop(name: &str) -> NativeFn {
        NativeFn::new(TypeHash::from_name(name), |_: &mut CallContext| Ok(()))
    }

    fn int() -> SemanticType {
        SemanticType::Primitive(PrimitiveKind::Int32)
    }

    fn text_attribute(name: &str) -> AttributeDescriptor {
        AttributeDescriptor::new(
            name,
            SemanticType::Text,
            Arc::new(|_: &Instance| Ok::<_, NativeError>(Dynamic::from(""))),
            Arc::new(|_: &mut Instance, _: &Dynamic| Ok::<_, NativeError>(())),
        )
    }

    #[test]
    fn method_signature() {
        let add = MethodDescriptor::new("add", vec![int(), int()], int(), noop("add"));
        assert_eq!(add.arity(), 2);
        assert_eq!(add.signature(), "int add(int, int)");

        let hello = MethodDescriptor::new("helloWorld", vec![], SemanticType::Text, noop("hello"));
        assert_eq!(hello.signature(), "string helloWorld()");
    }

    #[test]
    fn duplicate_constructor_rejected() {
        let mut date = TypeDescriptor::new("Date", TypeKind::Struct);
        date.add_constructor(ConstructorDescriptor::default_ctor(noop("a")))
            .unwrap();
        date.add_constructor(ConstructorDescriptor::value_ctor(
            vec![int(), int(), int()],
            noop("b"),
        ))
        .unwrap();

        let err = date
            .add_constructor(ConstructorDescriptor::value_ctor(
                vec![int(), int(), int()],
                noop("c"),
            ))
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateConstructor {
                type_name: "Date".into(),
                signature: "value(int, int, int)".into(),
            }
        );
        assert_eq!(date.constructors().len(), 2);
        assert_eq!(date.constructors_with_arity(3).count(), 1);
    }

    #[test]
    fn constructors_sharing_kind_and_arity_rejected() {
        let double = SemanticType::Primitive(PrimitiveKind::Double);
        let mut number = TypeDescriptor::new("Number", TypeKind::Class);
        number
            .add_constructor(ConstructorDescriptor::value_ctor(vec![int()], noop("a")))
            .unwrap();

        let err = number
            .add_constructor(ConstructorDescriptor::value_ctor(vec![double], noop("b")))
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateConstructor {
                type_name: "Number".into(),
                signature: "value(double)".into(),
            }
        );

        // a copy constructor has arity one too, but a different kind
        number
            .add_constructor(ConstructorDescriptor::copy_ctor("Number", noop("c")))
            .unwrap();
        assert_eq!(number.constructors_with_arity(1).count(), 2);
    }

    #[test]
    fn member_names_are_unique() {
        let mut person = TypeDescriptor::new("Person", TypeKind::Class);
        person.add_attribute(text_attribute("firstName")).unwrap();
        person
            .add_method(MethodDescriptor::new(
                "toString",
                vec![],
                SemanticType::Text,
                noop("toString"),
            ))
            .unwrap();

        let err = person
            .add_method(MethodDescriptor::new(
                "firstName",
                vec![],
                SemanticType::Void,
                noop("x"),
            ))
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateSymbol {
                name: "Person.firstName".into(),
                kind: "attribute",
            }
        );
        assert!(person.add_attribute(text_attribute("toString")).is_err());
    }

    #[test]
    fn traits_follow_constructors() {
        let mut ty = TypeDescriptor::new("DefaultedConstructors", TypeKind::Class);
        assert!(ty.traits().is_empty());

        ty.add_constructor(ConstructorDescriptor::default_ctor(noop("d")))
            .unwrap();
        ty.add_constructor(ConstructorDescriptor::copy_ctor(
            "DefaultedConstructors",
            noop("c"),
        ))
        .unwrap();

        assert_eq!(
            ty.traits(),
            TypeTraits::DEFAULT_CONSTRUCTIBLE | TypeTraits::COPY_CONSTRUCTIBLE
        );
        assert!(ty.constructor_of_kind(ConstructorKind::Copy).is_some());
        assert!(ty.constructor_of_kind(ConstructorKind::Value).is_none());
    }

    #[test]
    fn hidden_attribute_not_exposed() {
        let secret = AttributeDescriptor::hidden("secret", int(), Visibility::Private);
        assert!(!secret.is_exposed());
        assert!(text_attribute("value").is_exposed());
    }

    #[test]
    fn descriptor_names() {
        let ty: Descriptor = TypeDescriptor::new("World", TypeKind::Class).into();
        let func: Descriptor =
            MethodDescriptor::new("doNothing", vec![], SemanticType::Void, noop("n")).into();
        assert_eq!(ty.name(), "World");
        assert_eq!(func.name(), "doNothing");
        assert_eq!(TypeKind::Struct.to_string(), "struct");
    }

    #[test]
    fn getter_reads_instance() {
        let attr = AttributeDescriptor::new(
            "count",
            int(),
            Arc::new(|instance: &Instance| {
                instance
                    .downcast_ref::<i32>()
                    .map(|v| Dynamic::Int(i64::from(*v)))
                    .ok_or(NativeError::NoInstance)
            }),
            Arc::new(|_: &mut Instance, _: &Dynamic| Ok::<_, NativeError>(())),
        );
        let accessors = attr.accessors.as_ref().unwrap();
        assert_eq!((accessors.get)(&5i32).unwrap(), Dynamic::Int(5));
    }
}
