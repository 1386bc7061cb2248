//! Binding module builder: registration plus validation, then freeze.
//!
//! # Example
//!
//! ```ignore
//! let mut builder = ModuleBuilder::new("libE2EBindings");
//! builder.function("add", |a: i32, b: i32| a + b);
//! builder.add_type(
//!     ClassBuilder::<World>::class("World")
//!         .default_constructor()?
//!         .method("greet", |w: &World| w.greet())?
//!         .build(),
//! );
//! let module = builder.build()?;
//! ```

use exposer_core::{
    ConstructorKind, Descriptor, FunctionDescriptor, IntoNativeFn, MethodDescriptor,
    RegistrationError, SemanticType, TypeDescriptor, TypeHash,
};

use crate::module::Module;
use crate::registry::SymbolRegistry;

/// Collects descriptors and builds an immutable [`Module`].
///
/// Errors are collected rather than returned one at a time, so a single
/// `build()` reports every problem with the declarations.
#[derive(Debug)]
pub struct ModuleBuilder {
    name: String,
    descriptors: Vec<Descriptor>,
}

impl ModuleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptors: Vec::new(),
        }
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Queue any descriptor.
    pub fn add(&mut self, descriptor: impl Into<Descriptor>) -> &mut Self {
        self.descriptors.push(descriptor.into());
        self
    }

    /// Queue a type descriptor.
    pub fn add_type(&mut self, ty: TypeDescriptor) -> &mut Self {
        self.add(ty)
    }

    /// Queue a free function descriptor.
    pub fn add_function(&mut self, func: FunctionDescriptor) -> &mut Self {
        self.add(func)
    }

    /// Queue a free function built from a typed closure.
    ///
    /// Parameter and return types are taken from the closure signature.
    pub fn function<M, F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: IntoNativeFn<M>,
    {
        let name = name.into();
        let params = F::param_types();
        let hashes: Vec<TypeHash> = params.iter().map(SemanticType::type_hash).collect();
        let entry = f.into_native_fn(TypeHash::from_function(&name, &hashes));
        self.add(MethodDescriptor::new(name, params, F::return_type(), entry))
    }

    /// Number of queued descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Register and validate every queued descriptor, then freeze.
    ///
    /// # Errors
    ///
    /// Returns every registration and validation error found. No module is
    /// produced if there is at least one.
    pub fn build(self) -> Result<Module, Vec<RegistrationError>> {
        build(self.name, self.descriptors)
    }
}

/// Build a module named `name` from `descriptors`.
pub fn build(
    name: impl Into<String>,
    descriptors: impl IntoIterator<Item = Descriptor>,
) -> Result<Module, Vec<RegistrationError>> {
    let name = name.into();
    let mut errors = Vec::new();
    let mut registry = SymbolRegistry::new();

    if name.is_empty() {
        errors.push(RegistrationError::InvalidDeclaration(
            "module name must not be empty".into(),
        ));
    }

    for descriptor in descriptors {
        let symbol = descriptor.name().to_string();
        let result = match descriptor {
            Descriptor::Type(ty) => registry.register_type(ty),
            Descriptor::Function(func) => registry.register_function(func),
        };
        match result {
            Ok(()) => tracing::debug!(module = %name, symbol = %symbol, "registered"),
            Err(err) => {
                tracing::warn!(module = %name, error = %err, "rejected declaration");
                errors.push(err);
            }
        }
    }

    let mut types: Vec<&TypeDescriptor> = registry.types().collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));
    for ty in types {
        validate_type(&registry, ty, &mut errors);
    }

    let mut functions: Vec<&FunctionDescriptor> = registry.functions().collect();
    functions.sort_by(|a, b| a.name.cmp(&b.name));
    for func in functions {
        let owner = format!("function '{}'", func.name);
        for ty in func.params.iter().chain(std::iter::once(&func.return_type)) {
            check_known(&registry, ty, &owner, &mut errors);
        }
    }

    if errors.is_empty() {
        tracing::debug!(
            module = %name,
            types = registry.type_count(),
            functions = registry.function_count(),
            "module sealed"
        );
        Ok(Module::new(name, registry))
    } else {
        for err in &errors {
            tracing::warn!(module = %name, error = %err, "module build failed");
        }
        Err(errors)
    }
}

fn validate_type(
    registry: &SymbolRegistry,
    ty: &TypeDescriptor,
    errors: &mut Vec<RegistrationError>,
) {
    let owner = SemanticType::object(ty.name.as_str());

    for ctor in ty.constructors() {
        let shape_error = match ctor.kind {
            ConstructorKind::Default if !ctor.params.is_empty() => {
                Some("default constructor must take no parameters")
            }
            ConstructorKind::Copy if ctor.params != [owner.clone()] => {
                Some("copy constructor must take exactly one instance of its own type")
            }
            ConstructorKind::Value if ctor.params.is_empty() => {
                Some("value constructor must take at least one parameter")
            }
            ConstructorKind::Value if ctor.params == [owner.clone()] => {
                Some("value constructor shadows the copy constructor")
            }
            _ => None,
        };
        if let Some(message) = shape_error {
            errors.push(RegistrationError::InvalidDeclaration(format!(
                "type '{}': {}",
                ty.name, message
            )));
        }

        let referenced_by = format!("{} constructor of '{}'", ctor.kind, ty.name);
        for param in &ctor.params {
            check_known(registry, param, &referenced_by, errors);
        }
    }

    for method in ty.methods() {
        let referenced_by = format!("method '{}.{}'", ty.name, method.name);
        for param in method.params.iter().chain(std::iter::once(&method.return_type)) {
            check_known(registry, param, &referenced_by, errors);
        }
    }

    for attribute in ty.attributes() {
        let referenced_by = format!("attribute '{}.{}'", ty.name, attribute.name);
        if attribute.semantic_type == SemanticType::Void {
            errors.push(RegistrationError::InvalidDeclaration(format!(
                "{referenced_by} cannot be void"
            )));
        }
        if attribute.visibility.is_exposed() && attribute.accessors.is_none() {
            errors.push(RegistrationError::InvalidDeclaration(format!(
                "{referenced_by} is public but has no accessors"
            )));
        }
        check_known(registry, &attribute.semantic_type, &referenced_by, errors);
    }
}

fn check_known(
    registry: &SymbolRegistry,
    ty: &SemanticType,
    referenced_by: &str,
    errors: &mut Vec<RegistrationError>,
) {
    if let Some(name) = ty.object_name() {
        if !registry.contains_type(name) {
            errors.push(RegistrationError::UnknownType {
                type_name: name.to_string(),
                referenced_by: referenced_by.to_string(),
            });
        }
    }
}
