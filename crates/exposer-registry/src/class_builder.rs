//! ClassBuilder for describing native Rust types from typed closures.
//!
//! Every method returns `Result<Self, RegistrationError>` so declarations
//! chain with `?`. Parameter, return and attribute types are taken from the
//! closure signatures, so a descriptor never disagrees with its entry point.
//!
//! # Example
//!
//! ```ignore
//! let person = ClassBuilder::<Person>::class("Person")
//!     .default_constructor()?
//!     .attribute(
//!         "firstName",
//!         |p: &Person| p.first_name.clone(),
//!         |p: &mut Person, v: String| p.first_name = v,
//!     )?
//!     .method("toString", |p: &Person| p.to_string())?
//!     .build();
//! ```

use std::any::{Any, type_name};
use std::marker::PhantomData;
use std::sync::Arc;

use exposer_core::{
    AttributeDescriptor, CallContext, ConstructorDescriptor, Dynamic, FromDynamic, Instance,
    IntoConstructor, IntoDynamic, IntoMethod, MethodDescriptor, NativeError, NativeFn,
    NativeValue, RegistrationError, SemanticType, TypeDescriptor, TypeHash, TypeKind, Visibility,
};

/// Builder for the descriptor of native type `T`.
pub struct ClassBuilder<T> {
    descriptor: TypeDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> ClassBuilder<T> {
    /// Start describing a class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// Start describing a struct.
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Struct)
    }

    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            descriptor: TypeDescriptor::new(name, kind).with_instance_type::<T>(),
            _marker: PhantomData,
        }
    }

    fn hashes(params: &[SemanticType]) -> Vec<TypeHash> {
        params.iter().map(SemanticType::type_hash).collect()
    }

    // ==========================================================================
    // Constructors
    // ==========================================================================

    /// Register a zero-argument constructor using `T::default()`.
    pub fn default_constructor(mut self) -> Result<Self, RegistrationError>
    where
        T: Default,
    {
        let id = TypeHash::from_constructor(self.descriptor.type_hash, &[]);
        let entry = NativeFn::new(id, |ctx: &mut CallContext| {
            ctx.set_instance(T::default());
            Ok(())
        });
        self.descriptor
            .add_constructor(ConstructorDescriptor::default_ctor(entry))?;
        Ok(self)
    }

    /// Register a copy constructor using `T::clone()`.
    ///
    /// The copy is a new instance; it shares no mutable state with the source.
    pub fn copy_constructor(mut self) -> Result<Self, RegistrationError>
    where
        T: Clone,
    {
        let owner = self.descriptor.type_hash;
        let id = TypeHash::from_constructor(owner, &[owner]);
        let entry = NativeFn::new(id, |ctx: &mut CallContext| {
            let copy = ctx.arg_object::<T>(0)?.clone();
            ctx.set_instance(copy);
            Ok(())
        });
        let ctor = ConstructorDescriptor::copy_ctor(&self.descriptor.name, entry);
        self.descriptor.add_constructor(ctor)?;
        Ok(self)
    }

    /// Register a value constructor.
    pub fn constructor<M, F>(mut self, f: F) -> Result<Self, RegistrationError>
    where
        F: IntoConstructor<T, M>,
    {
        let params = F::param_types();
        let id = TypeHash::from_constructor(self.descriptor.type_hash, &Self::hashes(&params));
        let entry = f.into_native_fn(id);
        self.descriptor
            .add_constructor(ConstructorDescriptor::value_ctor(params, entry))?;
        Ok(self)
    }

    // ==========================================================================
    // Members
    // ==========================================================================

    /// Register a method. The receiver is `&T` or `&mut T`.
    pub fn method<M, F>(mut self, name: impl Into<String>, f: F) -> Result<Self, RegistrationError>
    where
        F: IntoMethod<T, M>,
    {
        let name = name.into();
        let params = F::param_types();
        let id = TypeHash::from_method(self.descriptor.type_hash, &name, &Self::hashes(&params));
        let entry = f.into_native_fn(id);
        self.descriptor
            .add_method(MethodDescriptor::new(name, params, F::return_type(), entry))?;
        Ok(self)
    }

    /// Register a public attribute with a getter and a setter.
    pub fn attribute<V, G, S>(
        mut self,
        name: impl Into<String>,
        get: G,
        set: S,
    ) -> Result<Self, RegistrationError>
    where
        V: FromDynamic + IntoDynamic,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let getter = Arc::new(move |instance: &Instance| -> Result<Dynamic, NativeError> {
            let this = instance
                .downcast_ref::<T>()
                .ok_or(NativeError::InstanceMismatch {
                    expected: type_name::<T>(),
                })?;
            Ok(get(this).into_dynamic())
        });
        let setter = Arc::new(
            move |instance: &mut Instance, value: &Dynamic| -> Result<(), NativeError> {
                let value = V::from_dynamic(value)?;
                let this = instance
                    .downcast_mut::<T>()
                    .ok_or(NativeError::InstanceMismatch {
                        expected: type_name::<T>(),
                    })?;
                set(this, value);
                Ok(())
            },
        );
        self.descriptor.add_attribute(AttributeDescriptor::new(
            name,
            <V as NativeValue>::semantic_type(),
            getter,
            setter,
        ))?;
        Ok(self)
    }

    /// Record a protected or private data member. It is never exposed.
    pub fn hidden_attribute(
        mut self,
        name: impl Into<String>,
        semantic_type: SemanticType,
        visibility: Visibility,
    ) -> Result<Self, RegistrationError> {
        if visibility.is_exposed() {
            return Err(RegistrationError::InvalidDeclaration(format!(
                "hidden attribute on '{}' cannot be public",
                self.descriptor.name
            )));
        }
        self.descriptor
            .add_attribute(AttributeDescriptor::hidden(name, semantic_type, visibility))?;
        Ok(self)
    }

    /// Finish and return the descriptor.
    pub fn build(self) -> TypeDescriptor {
        tracing::debug!(
            type_name = %self.descriptor.name,
            kind = %self.descriptor.kind,
            "described native type"
        );
        self.descriptor
    }
}
