//! Call context bridging dispatch and native Rust code.

use std::any::{Any, type_name};
use std::fmt;
use std::mem;

use crate::convert::{FromDynamic, IntoDynamic};
use crate::error::NativeError;

use super::{Dynamic, Instance};

/// Context for one native call.
///
/// Holds the receiver (for methods), borrows the arguments and collects the
/// return value.
///
/// ```ignore
/// let lhs: i32 = ctx.arg(0)?;
/// let rhs: i32 = ctx.arg(1)?;
/// ctx.set_return(lhs + rhs);
/// ```
pub struct CallContext<'a> {
    /// Native instance owned by the receiving proxy
    receiver: Option<&'a mut Instance>,
    /// Argument values, in declaration order
    args: &'a [Dynamic],
    /// Return value
    return_slot: Dynamic,
}

impl<'a> CallContext<'a> {
    /// Create a new call context.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving instance for methods, `None` otherwise
    /// * `args` - The argument values
    pub fn new(receiver: Option<&'a mut Instance>, args: &'a [Dynamic]) -> Self {
        Self {
            receiver,
            args,
            return_slot: Dynamic::Void,
        }
    }

    /// Get the number of arguments (excluding the receiver).
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get a raw reference to an argument.
    pub fn arg_slot(&self, index: usize) -> Result<&Dynamic, NativeError> {
        self.args
            .get(index)
            .ok_or(NativeError::ArgumentIndexOutOfBounds {
                index,
                count: self.args.len(),
            })
    }

    /// Get a typed argument value, converted with [`FromDynamic`].
    pub fn arg<T: FromDynamic>(&self, index: usize) -> Result<T, NativeError> {
        let slot = self.arg_slot(index)?;
        T::from_dynamic(slot).map_err(NativeError::Conversion)
    }

    /// Borrow the native instance behind an object argument.
    pub fn arg_object<T: Any>(&self, index: usize) -> Result<&T, NativeError> {
        let slot = self.arg_slot(index)?;
        slot.as_object()
            .and_then(|proxy| proxy.downcast_ref::<T>())
            .ok_or(NativeError::InstanceMismatch {
                expected: type_name::<T>(),
            })
    }

    /// Check if a receiver was supplied.
    pub fn has_receiver(&self) -> bool {
        self.receiver.is_some()
    }

    /// Borrow the receiver as `T`.
    pub fn this<T: Any>(&self) -> Result<&T, NativeError> {
        let receiver = self.receiver.as_deref().ok_or(NativeError::MissingReceiver)?;
        receiver
            .downcast_ref::<T>()
            .ok_or(NativeError::InstanceMismatch {
                expected: type_name::<T>(),
            })
    }

    /// Mutably borrow the receiver as `T`.
    pub fn this_mut<T: Any>(&mut self) -> Result<&mut T, NativeError> {
        let receiver = self
            .receiver
            .as_deref_mut()
            .ok_or(NativeError::MissingReceiver)?;
        receiver
            .downcast_mut::<T>()
            .ok_or(NativeError::InstanceMismatch {
                expected: type_name::<T>(),
            })
    }

    /// Set the return value from a raw slot.
    pub fn set_return_slot(&mut self, slot: Dynamic) {
        self.return_slot = slot;
    }

    /// Set a typed return value.
    pub fn set_return<T: IntoDynamic>(&mut self, value: T) {
        self.return_slot = value.into_dynamic();
    }

    /// Hand a freshly constructed instance back to constructor resolution.
    pub fn set_instance<T: Any + Send + Sync>(&mut self, instance: T) {
        self.return_slot = Dynamic::Native(Box::new(instance));
    }

    /// Take the return value, leaving `Void` behind.
    pub fn take_return(&mut self) -> Dynamic {
        mem::replace(&mut self.return_slot, Dynamic::Void)
    }
}

impl fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("arg_count", &self.arg_count())
            .field("has_receiver", &self.has_receiver())
            .finish()
    }
}
