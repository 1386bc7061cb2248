//! Runtime types shared by descriptors and dispatch.
//!
//! - [`Dynamic`]: values exchanged with the dynamic-language runtime
//! - [`Proxy`]: a dynamic-side object owning exactly one native instance
//! - [`NativeFn`]: type-erased native entry point
//! - [`CallContext`]: receiver, arguments and return slot of one call

mod call_context;
mod dynamic;
mod into_native;
mod native_fn;
mod proxy;

use std::any::Any;

pub use call_context::CallContext;
pub use dynamic::Dynamic;
pub use into_native::{ByMut, ByRef, IntoConstructor, IntoMethod, IntoNativeFn};
pub use native_fn::{NativeCallable, NativeFn};
pub use proxy::Proxy;

/// A native instance owned by a proxy.
pub type Instance = dyn Any + Send + Sync;
