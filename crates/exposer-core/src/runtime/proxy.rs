//! Proxies: dynamic-side handles that own one native instance each.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::TypeHash;

use super::Instance;

/// A dynamic-language-visible object that exclusively owns one native instance.
///
/// The instance lives exactly as long as the proxy: dropping the proxy
/// releases it. Proxies are not `Clone`; duplicating state goes through a
/// registered copy constructor, which always yields a new instance.
pub struct Proxy {
    type_hash: TypeHash,
    type_name: Arc<str>,
    instance: Box<Instance>,
}

impl Proxy {
    /// Wrap a native instance of the registered type `type_name`.
    ///
    /// Hosts obtain proxies from constructor resolution, which only calls
    /// this once a constructor has produced an instance of the right type.
    #[doc(hidden)]
    pub fn new(type_name: impl Into<Arc<str>>, instance: Box<Instance>) -> Self {
        let type_name = type_name.into();
        Self {
            type_hash: TypeHash::from_name(&type_name),
            type_name,
            instance,
        }
    }

    /// Binding name of the proxied type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Identity hash of the proxied type.
    pub fn type_hash(&self) -> TypeHash {
        self.type_hash
    }

    /// Borrow the native instance.
    pub fn instance(&self) -> &Instance {
        &*self.instance
    }

    /// Mutably borrow the native instance.
    pub fn instance_mut(&mut self) -> &mut Instance {
        &mut *self.instance
    }

    /// Borrow the native instance as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }

    /// Mutably borrow the native instance as `T`.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.instance.downcast_mut::<T>()
    }
}

impl Drop for Proxy {
    fn drop(&mut self) {
        tracing::trace!(type_name = %self.type_name, "releasing native instance");
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("type_name", &self.type_name)
            .field("type_hash", &self.type_hash)
            .finish_non_exhaustive()
    }
}
