//! The frozen binding module.

use exposer_core::{FunctionDescriptor, RegistrationError, TypeDescriptor};

use crate::registry::{Symbol, SymbolRegistry};

/// An immutable, validated set of types and free functions.
///
/// Produced by [`ModuleBuilder::build`](crate::ModuleBuilder::build). There is
/// no way to mutate a module after it is built; share it behind an `Arc` for
/// concurrent read-only access.
#[derive(Debug)]
pub struct Module {
    name: String,
    registry: SymbolRegistry,
}

impl Module {
    pub(crate) fn new(name: String, registry: SymbolRegistry) -> Self {
        Self { name, registry }
    }

    /// Module name as seen by the dynamic-language runtime.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a type or free function by name.
    pub fn lookup(&self, name: &str) -> Result<Symbol<'_>, RegistrationError> {
        self.registry.lookup(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.registry.get_type(name)
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.registry.get_function(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.registry.types()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.registry.functions()
    }

    /// Read-only view of the underlying registry.
    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }
}
