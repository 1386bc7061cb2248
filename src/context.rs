//! Binder registration and module sealing.
//!
//! A `Context` collects *binders*, callbacks that each contribute part of
//! a module's surface. Sealing runs them in registration order against one
//! [`ModuleBuilder`], builds the module and freezes it into [`Bindings`].
//!
//! # Example
//!
//! ```ignore
//! let mut ctx = Context::with_options(ContextOptions::default().module_name("libE2EBindings"));
//! ctx.register_binder(|module| {
//!     module.function("add", |a: i32, b: i32| a + b);
//!     Ok(())
//! })?;
//! let bindings = ctx.seal()?.clone();
//! ```

use thiserror::Error;

use exposer_core::RegistrationError;
use exposer_registry::ModuleBuilder;

use crate::bindings::Bindings;

/// A callback contributing declarations to a module.
pub type Binder = Box<dyn Fn(&mut ModuleBuilder) -> Result<(), RegistrationError> + Send + Sync>;

/// Configuration of a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextOptions {
    /// Name of the sealed module.
    pub module_name: String,
    /// Fail sealing when no binder was registered.
    pub require_binders: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            module_name: "bindings".to_string(),
            require_binders: true,
        }
    }
}

impl ContextOptions {
    /// Set the module name.
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Set whether sealing requires at least one binder.
    pub fn require_binders(mut self, require: bool) -> Self {
        self.require_binders = require;
        self
    }
}

/// Collects binders and seals them into one immutable module.
///
/// Context is not Debug because binders are closures.
pub struct Context {
    options: ContextOptions,
    /// Registered binders, run in order on seal
    binders: Vec<Binder>,
    /// Sealed module (available after seal)
    bindings: Option<Bindings>,
}

impl Context {
    /// Create a context with default options.
    pub fn new() -> Self {
        Self::with_options(ContextOptions::default())
    }

    pub fn with_options(options: ContextOptions) -> Self {
        Self {
            options,
            binders: Vec::new(),
            bindings: None,
        }
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Register a binder.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::AlreadySealed` if the context has already been sealed.
    pub fn register_binder<F>(&mut self, binder: F) -> Result<(), ContextError>
    where
        F: Fn(&mut ModuleBuilder) -> Result<(), RegistrationError> + Send + Sync + 'static,
    {
        if self.is_sealed() {
            return Err(ContextError::AlreadySealed);
        }
        self.binders.push(Box::new(binder));
        Ok(())
    }

    /// Number of registered binders.
    pub fn binder_count(&self) -> usize {
        self.binders.len()
    }

    /// Run every binder, build the module and freeze it.
    ///
    /// Calling `seal()` multiple times is safe - subsequent calls return the
    /// already sealed module.
    ///
    /// # Errors
    ///
    /// - `NoBinders` if no binder was registered and the options require one
    /// - `BuildFailed` with every error reported by the binders and the build
    pub fn seal(&mut self) -> Result<&Bindings, ContextError> {
        if self.bindings.is_none() {
            let bindings = self.build()?;
            self.bindings = Some(bindings);
        }
        self.bindings.as_ref().ok_or(ContextError::NotSealed)
    }

    fn build(&self) -> Result<Bindings, ContextError> {
        if self.binders.is_empty() && self.options.require_binders {
            tracing::warn!(module = %self.options.module_name, "no binders registered");
            return Err(ContextError::NoBinders);
        }

        let mut builder = ModuleBuilder::new(self.options.module_name.clone());
        let mut errors = Vec::new();
        for binder in &self.binders {
            if let Err(err) = binder(&mut builder) {
                errors.push(err);
            }
        }
        tracing::debug!(
            module = %self.options.module_name,
            binders = self.binders.len(),
            declarations = builder.len(),
            "sealing context"
        );

        match builder.build() {
            Ok(module) if errors.is_empty() => Ok(Bindings::new(module)),
            Ok(_) => Err(ContextError::BuildFailed(errors)),
            Err(build_errors) => {
                errors.extend(build_errors);
                Err(ContextError::BuildFailed(errors))
            }
        }
    }

    /// Check if the context has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.bindings.is_some()
    }

    /// The sealed module (available after sealing).
    pub fn bindings(&self) -> Option<&Bindings> {
        self.bindings.as_ref()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during context operations.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Context is already sealed - cannot register binders
    #[error("context is already sealed - cannot register binders after seal()")]
    AlreadySealed,

    /// Context is not sealed
    #[error("context is not sealed - call seal() first")]
    NotSealed,

    /// Sealing found nothing to bind
    #[error("no binders were registered")]
    NoBinders,

    /// Binders or the module build reported errors
    #[error("failed to build module: {0:?}")]
    BuildFailed(Vec<RegistrationError>),
}

impl ContextError {
    /// Extract the underlying registration errors.
    ///
    /// For variants that don't contain underlying errors this returns an
    /// empty vector.
    pub fn into_errors(self) -> Vec<RegistrationError> {
        match self {
            ContextError::BuildFailed(errors) => errors,
            _ => Vec::new(),
        }
    }
}
