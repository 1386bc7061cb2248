//! The host-facing handle to a built module.
//!
//! [`Bindings`] bundles the constructor resolver, the attribute accessor and
//! the dispatcher behind one cheap-to-clone handle. Objects are held as
//! [`Dynamic`] values, the way the dynamic-language runtime holds them.
//!
//! # Example
//!
//! ```ignore
//! let bindings = Bindings::new(module);
//!
//! assert_eq!(bindings.call("add", &[1.into(), 2.into()])?, Dynamic::Int(3));
//!
//! let mut person = bindings.construct("Person", &[])?;
//! bindings.set(&mut person, "firstName", "John")?;
//! bindings.set(&mut person, "lastName", "Smith")?;
//! assert_eq!(bindings.invoke(&mut person, "toString", &[])?, "John Smith".into());
//! ```

use std::slice;
use std::sync::Arc;

use exposer_core::{CallError, ConversionError, Dynamic, Proxy};
use exposer_registry::{Module, listing};

use crate::{accessor, dispatch, resolver};

/// Shared, immutable access to a module's surface.
#[derive(Debug, Clone)]
pub struct Bindings {
    module: Arc<Module>,
}

impl Bindings {
    pub fn new(module: impl Into<Arc<Module>>) -> Self {
        Self {
            module: module.into(),
        }
    }

    /// The underlying module.
    pub fn module(&self) -> &Arc<Module> {
        &self.module
    }

    /// Module name.
    pub fn name(&self) -> &str {
        self.module.name()
    }

    /// Call a free function.
    pub fn call(&self, name: &str, args: &[Dynamic]) -> Result<Dynamic, CallError> {
        dispatch::invoke(&self.module, None, name, args)
    }

    /// Construct an instance of a registered type.
    pub fn construct(&self, type_name: &str, args: &[Dynamic]) -> Result<Dynamic, CallError> {
        resolver::construct(&self.module, type_name, args).map(Dynamic::Object)
    }

    /// Copy-construct a new instance from `source`.
    pub fn copy(&self, source: &Dynamic) -> Result<Dynamic, CallError> {
        let type_name = object(source)?.type_name();
        self.construct(type_name, slice::from_ref(source))
    }

    /// Call a method on an object.
    pub fn invoke(
        &self,
        target: &mut Dynamic,
        name: &str,
        args: &[Dynamic],
    ) -> Result<Dynamic, CallError> {
        dispatch::invoke(&self.module, Some(object_mut(target)?), name, args)
    }

    /// Read an attribute of an object.
    pub fn get(&self, target: &Dynamic, name: &str) -> Result<Dynamic, CallError> {
        accessor::get(&self.module, object(target)?, name)
    }

    /// Write an attribute of an object.
    pub fn set(
        &self,
        target: &mut Dynamic,
        name: &str,
        value: impl Into<Dynamic>,
    ) -> Result<(), CallError> {
        accessor::set(&self.module, object_mut(target)?, name, &value.into())
    }

    /// Deterministic text listing of the exposed surface.
    pub fn listing(&self) -> String {
        listing::to_string(&self.module)
    }
}

fn not_an_object(value: &Dynamic) -> CallError {
    CallError::Conversion(ConversionError::TypeMismatch {
        expected: "object".into(),
        actual: value.category(),
    })
}

fn object(value: &Dynamic) -> Result<&Proxy, CallError> {
    value.as_object().ok_or_else(|| not_an_object(value))
}

fn object_mut(value: &mut Dynamic) -> Result<&mut Proxy, CallError> {
    match value {
        Dynamic::Object(proxy) => Ok(proxy),
        other => Err(not_an_object(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exposer_core::ValueCategory;
    use exposer_registry::{ClassBuilder, ModuleBuilder};

    #[derive(Debug, Default, Clone)]
    struct Note {
        text: String,
    }

    fn bindings() -> Bindings {
        let note = ClassBuilder::<Note>::class("Note")
            .default_constructor()
            .unwrap()
            .copy_constructor()
            .unwrap()
            .attribute(
                "text",
                |n: &Note| n.text.clone(),
                |n: &mut Note, v: String| n.text = v,
            )
            .unwrap()
            .method("length", |n: &Note| n.text.len() as u32)
            .unwrap()
            .build();
        let mut builder = ModuleBuilder::new("notes");
        builder.function("add", |a: i32, b: i32| a + b).add_type(note);
        Bindings::new(builder.build().unwrap())
    }

    #[test]
    fn call_construct_and_access() {
        let bindings = bindings();
        assert_eq!(bindings.name(), "notes");
        assert_eq!(
            bindings.call("add", &[Dynamic::Int(1), Dynamic::Int(2)]).unwrap(),
            Dynamic::Int(3)
        );

        let mut note = bindings.construct("Note", &[]).unwrap();
        bindings.set(&mut note, "text", "hello").unwrap();
        assert_eq!(bindings.get(&note, "text").unwrap(), Dynamic::from("hello"));
        assert_eq!(
            bindings.invoke(&mut note, "length", &[]).unwrap(),
            Dynamic::Int(5)
        );
    }

    #[test]
    fn copies_are_independent() {
        let bindings = bindings();
        let mut original = bindings.construct("Note", &[]).unwrap();
        bindings.set(&mut original, "text", "test").unwrap();

        let mut copy = bindings.copy(&original).unwrap();
        assert_eq!(bindings.get(&copy, "text").unwrap(), Dynamic::from("test"));

        bindings.set(&mut copy, "text", "changed").unwrap();
        assert_eq!(bindings.get(&original, "text").unwrap(), Dynamic::from("test"));
    }

    #[test]
    fn non_objects_are_rejected() {
        let bindings = bindings();
        let mut value = Dynamic::Int(1);
        assert_eq!(
            bindings.invoke(&mut value, "length", &[]).unwrap_err(),
            CallError::Conversion(ConversionError::TypeMismatch {
                expected: "object".into(),
                actual: ValueCategory::Integer,
            })
        );
        assert!(bindings.copy(&Dynamic::NullHandle).is_err());
    }

    #[test]
    fn bindings_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bindings>();

        let bindings = bindings();
        let handle = bindings.clone();
        assert!(Arc::ptr_eq(bindings.module(), handle.module()));
    }
}
