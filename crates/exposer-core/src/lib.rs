//! Core types for descriptor-driven native binding modules.
//!
//! This crate holds everything the registry and dispatch layers share:
//!
//! - [`TypeHash`]: stable identity of types, functions and constructors
//! - [`SemanticType`] and [`PrimitiveKind`]: declared types at the boundary
//! - [`Dynamic`] and [`Proxy`]: values as the dynamic-language side sees them
//! - [`marshal`] and [`convert`]: checked conversion in both directions
//! - [`descriptors`]: declarative records of types, constructors, methods
//!   and attributes
//! - [`error`]: the error hierarchy for every phase

pub mod convert;
pub mod descriptors;
pub mod error;
pub mod marshal;
pub mod runtime;
mod type_hash;
mod types;

pub use convert::{FromDynamic, IntoDynamic, NativeValue};
pub use descriptors::{
    AttributeAccessors, AttributeDescriptor, AttributeGetter, AttributeSetter,
    ConstructorDescriptor, ConstructorKind, Descriptor, FunctionDescriptor, MethodDescriptor,
    TypeDescriptor, TypeKind, TypeTraits,
};
pub use error::{CallError, ConversionError, ExposerError, NativeError, RegistrationError};
pub use runtime::{
    ByMut, ByRef, CallContext, Dynamic, Instance, IntoConstructor, IntoMethod, IntoNativeFn,
    NativeCallable, NativeFn, Proxy,
};
pub use type_hash::{TypeHash, hash_constants};
pub use types::{PrimitiveKind, SemanticType, ValueCategory, Visibility};
