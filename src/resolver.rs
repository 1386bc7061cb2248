//! Constructor resolution: pick a constructor for an argument list and wrap
//! the resulting native instance in a proxy.
//!
//! Selection rules, in order:
//!
//! 1. No arguments: the `default` constructor.
//! 2. One argument that is an instance of the type itself: the `copy`
//!    constructor. The copy is a new, independently owned instance.
//! 3. Otherwise: the `value` constructor of matching arity, provided its
//!    parameter types accept the arguments.
//!
//! A proxy only comes into existence after the native constructor succeeded
//! and produced an instance of the registered Rust type.

use std::any::Any;

use exposer_core::marshal;
use exposer_core::{
    CallContext, CallError, ConstructorDescriptor, ConstructorKind, Dynamic, NativeError, Proxy,
    TypeDescriptor,
};
use exposer_registry::Module;

/// Choose the constructor of `ty` for `args`.
///
/// # Errors
///
/// - `NoMatchingConstructor` when no constructor has the right arity or kind
/// - `Argument` when the single candidate rejects an argument
/// - `AmbiguousConstructor` when several value constructors share the arity
pub fn resolve<'a>(
    ty: &'a TypeDescriptor,
    args: &[Dynamic],
) -> Result<&'a ConstructorDescriptor, CallError> {
    let arity = args.len();
    let no_match = || CallError::NoMatchingConstructor {
        type_name: ty.name.clone(),
        arity,
    };

    match args {
        [] => return ty.constructor_of_kind(ConstructorKind::Default).ok_or_else(no_match),
        [Dynamic::Object(source)] if source.type_name() == ty.name => {
            return ty.constructor_of_kind(ConstructorKind::Copy).ok_or_else(no_match);
        }
        _ => {}
    }

    let candidates: Vec<&ConstructorDescriptor> = ty
        .constructors_with_arity(arity)
        .filter(|ctor| ctor.kind == ConstructorKind::Value)
        .collect();

    match candidates.as_slice() {
        [] => Err(no_match()),
        [only] => {
            check_arguments(&ty.name, only, args)?;
            Ok(*only)
        }
        // registration keeps one value constructor per arity
        many => Err(CallError::AmbiguousConstructor {
            type_name: ty.name.clone(),
            candidates: many.len(),
        }),
    }
}

fn check_arguments(
    type_name: &str,
    ctor: &ConstructorDescriptor,
    args: &[Dynamic],
) -> Result<(), CallError> {
    for (index, (arg, param)) in args.iter().zip(&ctor.params).enumerate() {
        marshal::check(arg, param).map_err(|source| CallError::Argument {
            callee: type_name.to_string(),
            index,
            source,
        })?;
    }
    Ok(())
}

/// Construct an instance of the registered type `type_name`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn construct(module: &Module, type_name: &str, args: &[Dynamic]) -> Result<Proxy, CallError> {
    let ty = module
        .get_type(type_name)
        .ok_or_else(|| CallError::UnknownSymbol {
            name: type_name.to_string(),
            scope: module.name().to_string(),
        })?;
    let ctor = resolve(ty, args)?;
    tracing::trace!(type_name, kind = %ctor.kind, arity = args.len(), "construct");

    let native_error = |source: NativeError| CallError::Native {
        callee: ty.name.clone(),
        source,
    };

    let mut ctx = CallContext::new(None, args);
    ctor.entry.call(&mut ctx).map_err(native_error)?;

    let Dynamic::Native(instance) = ctx.take_return() else {
        return Err(native_error(NativeError::NoInstance));
    };
    if let Some(expected) = ty.instance_type {
        if (*instance).type_id() != expected {
            return Err(native_error(NativeError::other(format!(
                "constructor produced an instance of another type than '{}'",
                ty.name
            ))));
        }
    }
    Ok(Proxy::new(ty.name.as_str(), instance))
}
