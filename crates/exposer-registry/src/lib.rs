//! Type descriptor registry and binding module builder.
//!
//! - [`SymbolRegistry`]: name-unique storage for types and free functions
//! - [`ModuleBuilder`] / [`build`]: register, validate and freeze
//! - [`Module`]: the immutable result, safe to share across threads
//! - [`ClassBuilder`]: typed front-door that derives descriptors from closures
//! - [`listing`]: deterministic text rendering of a module's surface

mod builder;
mod class_builder;
pub mod listing;
mod module;
mod registry;

pub use builder::{ModuleBuilder, build};
pub use class_builder::ClassBuilder;
pub use module::Module;
pub use registry::{Symbol, SymbolRegistry};
