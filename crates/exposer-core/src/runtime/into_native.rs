//! Adapters from typed Rust closures to [`NativeFn`] entry points.
//!
//! Each trait is implemented for closures and functions of arity 0 to 4.
//! The second type parameter is a marker (`fn(A0, A1) -> R`) that keeps the
//! implementations for different arities apart; it is always inferred.
//!
//! Closures must annotate their parameter types:
//!
//! ```ignore
//! builder.function("add", |a: i32, b: i32| a + b)?;
//! class.method("greet", |w: &World| w.greet())?;
//! ```

use std::any::Any;

use crate::SemanticType;
use crate::TypeHash;
use crate::convert::{FromDynamic, IntoDynamic, NativeValue};

use super::{CallContext, NativeFn};

/// Marker for methods taking the receiver by shared reference.
#[derive(Debug, Clone, Copy)]
pub struct ByRef;

/// Marker for methods taking the receiver by mutable reference.
#[derive(Debug, Clone, Copy)]
pub struct ByMut;

/// A free function with typed parameters.
pub trait IntoNativeFn<Marker> {
    /// Declared parameter types, in order.
    fn param_types() -> Vec<SemanticType>;
    /// Declared return type.
    fn return_type() -> SemanticType;
    /// Erase the signature into a [`NativeFn`].
    fn into_native_fn(self, id: TypeHash) -> NativeFn;
}

/// A constructor producing an instance of `T`.
pub trait IntoConstructor<T, Marker> {
    /// Declared parameter types, in order.
    fn param_types() -> Vec<SemanticType>;
    /// Erase the signature into a [`NativeFn`].
    fn into_native_fn(self, id: TypeHash) -> NativeFn;
}

/// A method called on an instance of `T`.
pub trait IntoMethod<T, Marker> {
    /// Declared parameter types, in order, excluding the receiver.
    fn param_types() -> Vec<SemanticType>;
    /// Declared return type.
    fn return_type() -> SemanticType;
    /// Erase the signature into a [`NativeFn`].
    fn into_native_fn(self, id: TypeHash) -> NativeFn;
}

macro_rules! impl_into_native {
    ($($arg:ident $var:ident $idx:tt),*) => {
        impl<F, R, $($arg,)*> IntoNativeFn<fn($($arg),*) -> R> for F
        where
            F: Fn($($arg),*) -> R + Send + Sync + 'static,
            R: IntoDynamic,
            $($arg: FromDynamic,)*
        {
            fn param_types() -> Vec<SemanticType> {
                vec![$(<$arg as NativeValue>::semantic_type()),*]
            }

            fn return_type() -> SemanticType {
                <R as NativeValue>::semantic_type()
            }

            fn into_native_fn(self, id: TypeHash) -> NativeFn {
                NativeFn::new(id, move |ctx: &mut CallContext| {
                    $(let $var: $arg = ctx.arg($idx)?;)*
                    ctx.set_return((self)($($var),*));
                    Ok(())
                })
            }
        }

        impl<F, T, $($arg,)*> IntoConstructor<T, fn($($arg),*)> for F
        where
            F: Fn($($arg),*) -> T + Send + Sync + 'static,
            T: Any + Send + Sync,
            $($arg: FromDynamic,)*
        {
            fn param_types() -> Vec<SemanticType> {
                vec![$(<$arg as NativeValue>::semantic_type()),*]
            }

            fn into_native_fn(self, id: TypeHash) -> NativeFn {
                NativeFn::new(id, move |ctx: &mut CallContext| {
                    $(let $var: $arg = ctx.arg($idx)?;)*
                    ctx.set_instance((self)($($var),*));
                    Ok(())
                })
            }
        }

        impl<F, T, R, $($arg,)*> IntoMethod<T, (ByRef, fn($($arg),*) -> R)> for F
        where
            F: Fn(&T $(, $arg)*) -> R + Send + Sync + 'static,
            T: Any,
            R: IntoDynamic,
            $($arg: FromDynamic,)*
        {
            fn param_types() -> Vec<SemanticType> {
                vec![$(<$arg as NativeValue>::semantic_type()),*]
            }

            fn return_type() -> SemanticType {
                <R as NativeValue>::semantic_type()
            }

            fn into_native_fn(self, id: TypeHash) -> NativeFn {
                NativeFn::new(id, move |ctx: &mut CallContext| {
                    $(let $var: $arg = ctx.arg($idx)?;)*
                    let result = (self)(ctx.this::<T>()? $(, $var)*);
                    ctx.set_return(result);
                    Ok(())
                })
            }
        }

        impl<F, T, R, $($arg,)*> IntoMethod<T, (ByMut, fn($($arg),*) -> R)> for F
        where
            F: Fn(&mut T $(, $arg)*) -> R + Send + Sync + 'static,
            T: Any,
            R: IntoDynamic,
            $($arg: FromDynamic,)*
        {
            fn param_types() -> Vec<SemanticType> {
                vec![$(<$arg as NativeValue>::semantic_type()),*]
            }

            fn return_type() -> SemanticType {
                <R as NativeValue>::semantic_type()
            }

            fn into_native_fn(self, id: TypeHash) -> NativeFn {
                NativeFn::new(id, move |ctx: &mut CallContext| {
                    $(let $var: $arg = ctx.arg($idx)?;)*
                    let result = (self)(ctx.this_mut::<T>()? $(, $var)*);
                    ctx.set_return(result);
                    Ok(())
                })
            }
        }
    };
}

impl_into_native!();
impl_into_native!(A0 a0 0);
impl_into_native!(A0 a0 0, A1 a1 1);
impl_into_native!(A0 a0 0, A1 a1 1, A2 a2 2);
impl_into_native!(A0 a0 0, A1 a1 1, A2 a2 2, A3 a3 3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, NativeError};
    use crate::runtime::Dynamic;
    use crate::{PrimitiveKind, ValueCategory};

    struct World {
        msg: String,
    }

    fn param_types_of<M, F: IntoNativeFn<M>>(_: &F) -> Vec<SemanticType> {
        F::param_types()
    }

    fn return_type_of<M, F: IntoNativeFn<M>>(_: &F) -> SemanticType {
        F::return_type()
    }

    fn native<M, F: IntoNativeFn<M>>(f: F, name: &str) -> NativeFn {
        f.into_native_fn(TypeHash::from_name(name))
    }

    fn method<T, M, F: IntoMethod<T, M>>(f: F) -> (Vec<SemanticType>, SemanticType, NativeFn) {
        (F::param_types(), F::return_type(), f.into_native_fn(TypeHash::from_name("m")))
    }

    #[test]
    fn free_function_signature() {
        let add = |a: i32, b: i32| a + b;
        assert_eq!(
            param_types_of(&add),
            vec![
                SemanticType::Primitive(PrimitiveKind::Int32),
                SemanticType::Primitive(PrimitiveKind::Int32),
            ]
        );
        assert_eq!(return_type_of(&add), SemanticType::Primitive(PrimitiveKind::Int32));

        let nothing = || {};
        assert!(param_types_of(&nothing).is_empty());
        assert_eq!(return_type_of(&nothing), SemanticType::Void);
    }

    #[test]
    fn free_function_call() {
        let native = native(|a: i32, b: i32| a + b, "add");
        let args = [Dynamic::Int(2), Dynamic::Int(3)];
        let mut ctx = CallContext::new(None, &args);
        native.call(&mut ctx).unwrap();
        assert_eq!(ctx.take_return(), Dynamic::Int(5));
    }

    #[test]
    fn free_function_bad_argument() {
        let native = native(|a: i32| a, "id");
        let args = [Dynamic::from("x")];
        let mut ctx = CallContext::new(None, &args);
        let err = native.call(&mut ctx).unwrap_err();
        assert_eq!(
            err,
            NativeError::Conversion(ConversionError::TypeMismatch {
                expected: "int".into(),
                actual: ValueCategory::Text,
            })
        );
    }

    #[test]
    fn mutating_method() {
        let (params, ret, native) = method(|w: &mut World, msg: String| w.msg = msg);
        assert_eq!(params, vec![SemanticType::Text]);
        assert_eq!(ret, SemanticType::Void);

        let mut world = World { msg: String::new() };
        let args = [Dynamic::from("howdy")];
        let mut ctx = CallContext::new(Some(&mut world), &args);
        native.call(&mut ctx).unwrap();
        assert_eq!(world.msg, "howdy");
    }

    #[test]
    fn reading_method() {
        let (params, ret, native) = method(|w: &World| w.msg.clone());
        assert!(params.is_empty());
        assert_eq!(ret, SemanticType::Text);

        let mut world = World { msg: "hi".into() };
        let mut ctx = CallContext::new(Some(&mut world), &[]);
        native.call(&mut ctx).unwrap();
        assert_eq!(ctx.take_return(), Dynamic::from("hi"));
    }

    #[test]
    fn constructor_yields_instance() {
        fn ctor<T, M, F: IntoConstructor<T, M>>(f: F) -> (Vec<SemanticType>, NativeFn) {
            (F::param_types(), f.into_native_fn(TypeHash::from_name("ctor")))
        }

        let (params, native) = ctor(|msg: String| World { msg });
        assert_eq!(params, vec![SemanticType::Text]);

        let args = [Dynamic::from("built")];
        let mut ctx = CallContext::new(None, &args);
        native.call(&mut ctx).unwrap();
        match ctx.take_return() {
            Dynamic::Native(boxed) => {
                assert_eq!(boxed.downcast_ref::<World>().unwrap().msg, "built");
            }
            other => panic!("expected native instance, got {:?}", other),
        }
    }
}
