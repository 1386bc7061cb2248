//! Method and free function dispatch.
//!
//! A call is resolved by name against the receiver's type descriptor, or
//! against the module's free functions when there is no receiver. Arguments
//! are checked against the declared parameter types before the native entry
//! point runs; the return value is checked against the declared return type
//! after it completed.

use exposer_core::marshal;
use exposer_core::{CallContext, CallError, Dynamic, Instance, MethodDescriptor, Proxy};
use exposer_registry::Module;

/// Invoke `name` on `receiver`, or the free function `name` when `receiver`
/// is `None`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn invoke(
    module: &Module,
    receiver: Option<&mut Proxy>,
    name: &str,
    args: &[Dynamic],
) -> Result<Dynamic, CallError> {
    match receiver {
        Some(proxy) => {
            let ty = module
                .get_type(proxy.type_name())
                .ok_or_else(|| CallError::UnknownSymbol {
                    name: proxy.type_name().to_string(),
                    scope: module.name().to_string(),
                })?;
            let method = ty.method(name).ok_or_else(|| CallError::UnknownSymbol {
                name: name.to_string(),
                scope: ty.name.clone(),
            })?;
            let callee = format!("{}.{}", ty.name, name);
            call(callee, method, Some(proxy.instance_mut()), args)
        }
        None => {
            let func = module
                .get_function(name)
                .ok_or_else(|| CallError::UnknownSymbol {
                    name: name.to_string(),
                    scope: module.name().to_string(),
                })?;
            call(name.to_string(), func, None, args)
        }
    }
}

fn call(
    callee: String,
    descriptor: &MethodDescriptor,
    receiver: Option<&mut Instance>,
    args: &[Dynamic],
) -> Result<Dynamic, CallError> {
    tracing::trace!(callee = %callee, args = args.len(), "dispatch");

    if args.len() != descriptor.arity() {
        return Err(CallError::ArityMismatch {
            callee,
            expected: descriptor.arity(),
            got: args.len(),
        });
    }
    for (index, (arg, param)) in args.iter().zip(&descriptor.params).enumerate() {
        if let Err(source) = marshal::check(arg, param) {
            return Err(CallError::Argument {
                callee,
                index,
                source,
            });
        }
    }

    let mut ctx = CallContext::new(receiver, args);
    if let Err(source) = descriptor.entry.call(&mut ctx) {
        return Err(CallError::Native { callee, source });
    }
    Ok(marshal::to_foreign(ctx.take_return(), &descriptor.return_type)?)
}
