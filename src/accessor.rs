//! Attribute access on proxies.
//!
//! Reads go straight to the native instance every time; writes are checked
//! against the attribute's declared type, then stored directly into the
//! instance. Only public attributes are reachable.

use exposer_core::marshal;
use exposer_core::{AttributeAccessors, AttributeDescriptor, CallError, Dynamic, Proxy};
use exposer_registry::Module;

/// Find an exposed attribute of the proxied type.
pub fn lookup<'m>(
    module: &'m Module,
    proxy: &Proxy,
    name: &str,
) -> Result<(&'m AttributeDescriptor, &'m AttributeAccessors), CallError> {
    let ty = module
        .get_type(proxy.type_name())
        .ok_or_else(|| CallError::UnknownSymbol {
            name: proxy.type_name().to_string(),
            scope: module.name().to_string(),
        })?;
    ty.attribute(name)
        .filter(|attribute| attribute.is_exposed())
        .and_then(|attribute| Some((attribute, attribute.accessors.as_ref()?)))
        .ok_or_else(|| CallError::UnknownSymbol {
            name: name.to_string(),
            scope: ty.name.clone(),
        })
}

/// Read attribute `name` of `proxy`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn get(module: &Module, proxy: &Proxy, name: &str) -> Result<Dynamic, CallError> {
    let (attribute, accessors) = lookup(module, proxy, name)?;
    tracing::trace!(type_name = proxy.type_name(), attribute = name, "get");

    let value = (accessors.get)(proxy.instance()).map_err(|source| CallError::Native {
        callee: format!("{}.{}", proxy.type_name(), name),
        source,
    })?;
    Ok(marshal::to_foreign(value, &attribute.semantic_type)?)
}

/// Write `value` into attribute `name` of `proxy`.
///
/// # Errors
///
/// `Conversion` when the value does not fit the attribute's type; the
/// instance is left untouched in that case.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn set(
    module: &Module,
    proxy: &mut Proxy,
    name: &str,
    value: &Dynamic,
) -> Result<(), CallError> {
    let (attribute, accessors) = lookup(module, proxy, name)?;
    tracing::trace!(type_name = proxy.type_name(), attribute = name, "set");

    marshal::check(value, &attribute.semantic_type)?;
    let callee = format!("{}.{}", proxy.type_name(), name);
    (accessors.set)(proxy.instance_mut(), value)
        .map_err(|source| CallError::Native { callee, source })
}
