//! SymbolRegistry - type and free function storage of one module.
//!
//! Types and free functions share a single namespace: a name registered as a
//! type cannot also be registered as a function, and vice versa.
//!
//! # Storage Model
//!
//! - **Types**: `TypeDescriptor`s keyed by their `TypeHash`
//! - **Functions**: `FunctionDescriptor`s keyed by their function hash
//! - **Names**: one index from binding name to the owning table
//!
//! # Thread Safety
//!
//! The registry is populated single-threaded by the module builder and is
//! never mutated afterward. The frozen [`Module`](crate::Module) only hands
//! out shared references, so concurrent lookups need no locking.
//!
//! # Example
//!
//! ```
//! use exposer_core::{TypeDescriptor, TypeKind};
//! use exposer_registry::{Symbol, SymbolRegistry};
//!
//! let mut registry = SymbolRegistry::new();
//! registry.register_type(TypeDescriptor::new("World", TypeKind::Class)).unwrap();
//!
//! assert!(matches!(registry.lookup("World"), Ok(Symbol::Type(_))));
//! assert!(registry.lookup("Planet").is_err());
//! ```

use rustc_hash::FxHashMap;

use exposer_core::{FunctionDescriptor, RegistrationError, SemanticType, TypeDescriptor, TypeHash};

/// Which table a name lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolRef {
    Type(TypeHash),
    Function(TypeHash),
}

/// A resolved symbol.
#[derive(Debug, Clone, Copy)]
pub enum Symbol<'a> {
    Type(&'a TypeDescriptor),
    Function(&'a FunctionDescriptor),
}

impl Symbol<'_> {
    /// Kind label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Symbol::Type(_) => "type",
            Symbol::Function(_) => "function",
        }
    }
}

/// Type and function registry of one module.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    /// All types by hash.
    types: FxHashMap<TypeHash, TypeDescriptor>,
    /// All free functions by hash.
    functions: FxHashMap<TypeHash, FunctionDescriptor>,
    /// Name index over both tables.
    names: FxHashMap<String, SymbolRef>,
}

impl SymbolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type descriptor.
    ///
    /// Returns an error if any symbol with the same name already exists.
    pub fn register_type(&mut self, ty: TypeDescriptor) -> Result<(), RegistrationError> {
        self.check_name(&ty.name)?;
        let hash = ty.type_hash;
        self.names.insert(ty.name.clone(), SymbolRef::Type(hash));
        self.types.insert(hash, ty);
        Ok(())
    }

    /// Register a free function descriptor.
    ///
    /// Returns an error if any symbol with the same name already exists.
    pub fn register_function(&mut self, func: FunctionDescriptor) -> Result<(), RegistrationError> {
        self.check_name(&func.name)?;
        let params: Vec<TypeHash> = func.params.iter().map(SemanticType::type_hash).collect();
        let hash = TypeHash::from_function(&func.name, &params);
        self.names.insert(func.name.clone(), SymbolRef::Function(hash));
        self.functions.insert(hash, func);
        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<(), RegistrationError> {
        match self.names.get(name) {
            Some(existing) => Err(RegistrationError::DuplicateSymbol {
                name: name.to_string(),
                kind: match existing {
                    SymbolRef::Type(_) => "type",
                    SymbolRef::Function(_) => "function",
                },
            }),
            None => Ok(()),
        }
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Look up a type or free function by name.
    pub fn lookup(&self, name: &str) -> Result<Symbol<'_>, RegistrationError> {
        let symbol = match self.names.get(name) {
            Some(SymbolRef::Type(hash)) => self.types.get(hash).map(Symbol::Type),
            Some(SymbolRef::Function(hash)) => self.functions.get(hash).map(Symbol::Function),
            None => None,
        };
        symbol.ok_or_else(|| RegistrationError::UnknownSymbol(name.to_string()))
    }

    /// Get a type by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDescriptor> {
        match self.names.get(name)? {
            SymbolRef::Type(hash) => self.types.get(hash),
            SymbolRef::Function(_) => None,
        }
    }

    /// Get a type by hash.
    pub fn get(&self, hash: TypeHash) -> Option<&TypeDescriptor> {
        self.types.get(&hash)
    }

    /// Get a free function by name.
    pub fn get_function(&self, name: &str) -> Option<&FunctionDescriptor> {
        match self.names.get(name)? {
            SymbolRef::Function(hash) => self.functions.get(hash),
            SymbolRef::Type(_) => None,
        }
    }

    /// Check if a type with this name is registered.
    pub fn contains_type(&self, name: &str) -> bool {
        self.get_type(name).is_some()
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.functions.values()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exposer_core::{CallContext, MethodDescriptor, NativeFn, PrimitiveKind, TypeKind};

    fn function(name: &str) -> FunctionDescriptor {
        let int = SemanticType::Primitive(PrimitiveKind::Int32);
        MethodDescriptor::new(
            name,
            vec![int.clone(), int.clone()],
            int,
            NativeFn::new(TypeHash::from_name(name), |_: &mut CallContext| Ok(())),
        )
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = SymbolRegistry::new();
        registry
            .register_type(TypeDescriptor::new("Person", TypeKind::Class))
            .unwrap();
        registry.register_function(function("add")).unwrap();

        assert_eq!(registry.type_count(), 1);
        assert_eq!(registry.function_count(), 1);
        assert_eq!(registry.lookup("Person").unwrap().kind(), "type");
        assert_eq!(registry.lookup("add").unwrap().kind(), "function");
        assert!(registry.contains_type("Person"));
        assert!(!registry.contains_type("add"));
        assert!(registry.get_function("Person").is_none());
        assert_eq!(
            registry.get(TypeHash::from_name("Person")).map(|ty| ty.name.as_str()),
            Some("Person")
        );
    }

    #[test]
    fn unknown_symbol() {
        let registry = SymbolRegistry::new();
        assert_eq!(
            registry.lookup("missing").unwrap_err(),
            RegistrationError::UnknownSymbol("missing".into())
        );
    }

    #[test]
    fn names_shared_between_types_and_functions() {
        let mut registry = SymbolRegistry::new();
        registry.register_function(function("World")).unwrap();

        let err = registry
            .register_type(TypeDescriptor::new("World", TypeKind::Class))
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateSymbol {
                name: "World".into(),
                kind: "function",
            }
        );
    }

    #[test]
    fn duplicate_type_rejected() {
        let mut registry = SymbolRegistry::new();
        registry
            .register_type(TypeDescriptor::new("Date", TypeKind::Struct))
            .unwrap();
        assert!(registry
            .register_type(TypeDescriptor::new("Date", TypeKind::Class))
            .is_err());
        assert_eq!(registry.type_count(), 1);
    }
}
