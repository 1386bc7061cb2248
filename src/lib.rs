//! Descriptor-driven native bindings.
//!
//! Native Rust types and functions are described once, frozen into a
//! [`Module`], and then driven by name from a dynamic-language runtime:
//!
//! - [`resolver`]: picks a constructor and wraps the new instance in a [`Proxy`]
//! - [`accessor`]: reads and writes public attributes of a proxied instance
//! - [`dispatch`]: calls methods and free functions with checked arguments
//! - [`Bindings`]: one shared handle over all three
//! - [`Context`]: runs registered binders and seals the module
//!
//! # Example
//!
//! ```ignore
//! use exposer::prelude::*;
//!
//! let mut ctx = Context::new();
//! ctx.register_binder(|module| {
//!     module.function("helloWorld", || "Hello world");
//!     Ok(())
//! })?;
//! let bindings = ctx.seal()?;
//! assert_eq!(bindings.call("helloWorld", &[])?, Dynamic::from("Hello world"));
//! ```

pub mod accessor;
mod bindings;
mod context;
pub mod dispatch;
pub mod resolver;

pub use bindings::Bindings;
pub use context::{Binder, Context, ContextError, ContextOptions};

pub use exposer_core::{
    CallError, ConversionError, Dynamic, ExposerError, NativeError, Proxy, RegistrationError,
    SemanticType, TypeHash, Visibility,
};
pub use exposer_registry::{ClassBuilder, Module, ModuleBuilder, listing};

/// Core crate, for descriptors and conversion traits.
pub use exposer_core as core;
/// Registry crate.
pub use exposer_registry as registry;

/// Everything needed to declare and drive a module.
pub mod prelude {
    pub use crate::{
        Bindings, CallError, ClassBuilder, Context, ContextError, ContextOptions, Dynamic,
        ExposerError, Module, ModuleBuilder, Proxy, RegistrationError, SemanticType, Visibility,
    };
}
