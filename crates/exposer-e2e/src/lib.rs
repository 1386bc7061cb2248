//! The `libE2EBindings` fixture module.
//!
//! A small native surface covering every binding path end to end:
//!
//! - **nominal** - free functions and the `World` class
//! - **classes** - `Person`, a class with public text attributes
//! - **structs** - `Date`, a struct with integer attributes and a value constructor
//! - **constructors** - `DefaultedConstructors`, default and copy construction
//!
//! # Usage
//!
//! ```ignore
//! let bindings = exposer_e2e::bindings()?;
//! assert_eq!(bindings.call("helloWorld", &[])?, Dynamic::from("Hello world"));
//! ```

pub mod classes;
pub mod constructors;
pub mod nominal;
pub mod structs;

use exposer::{Bindings, Context, ContextError, ContextOptions};

pub use classes::Person;
pub use constructors::DefaultedConstructors;
pub use nominal::World;
pub use structs::Date;

/// Name the module is exposed under.
pub const MODULE_NAME: &str = "libE2EBindings";

/// Register every fixture binder on `ctx`.
pub fn register(ctx: &mut Context) -> Result<(), ContextError> {
    ctx.register_binder(nominal::bind)?;
    ctx.register_binder(classes::bind)?;
    ctx.register_binder(structs::bind)?;
    ctx.register_binder(constructors::bind)?;
    Ok(())
}

/// A context named [`MODULE_NAME`] with every fixture binder registered.
pub fn context() -> Result<Context, ContextError> {
    let mut ctx = Context::with_options(ContextOptions::default().module_name(MODULE_NAME));
    register(&mut ctx)?;
    Ok(ctx)
}

/// Build and seal the fixture module.
pub fn bindings() -> Result<Bindings, ContextError> {
    let mut ctx = context()?;
    Ok(ctx.seal()?.clone())
}
