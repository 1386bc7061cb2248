//! Unified error types for binding modules.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ExposerError (top-level wrapper)
//! ├── RegistrationError - module build failures (fatal, module is never exposed)
//! ├── CallError         - construction, dispatch and attribute access failures
//! │   ├── ConversionError - marshalling failures (type mismatch, range)
//! │   └── NativeError     - failures raised inside a native entry point
//! └── ConversionError   - standalone marshalling failures
//! ```
//!
//! Each phase-specific error can be handled directly, or converted into
//! [`ExposerError`] with `?`.

use thiserror::Error;

use crate::ValueCategory;

// ============================================================================
// Conversion Errors
// ============================================================================

/// Errors raised while marshalling a value across the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The value's runtime category does not match the declared type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Declared type name.
        expected: String,
        /// Runtime category of the supplied value.
        actual: ValueCategory,
    },

    /// An object of the wrong registered type was supplied.
    #[error("type mismatch: expected {expected} instance, got {actual} instance")]
    ObjectMismatch {
        /// Declared type name.
        expected: String,
        /// Type name of the supplied proxy.
        actual: String,
    },

    /// A numeric value does not fit the target type exactly.
    #[error("value {value} out of range for {target_type}")]
    RangeError {
        /// The rejected value, rendered.
        value: String,
        /// Target type name.
        target_type: &'static str,
    },
}

impl ConversionError {
    /// Check if this is a category or object type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            ConversionError::TypeMismatch { .. } | ConversionError::ObjectMismatch { .. }
        )
    }

    /// Check if this is a numeric range failure.
    pub fn is_range_error(&self) -> bool {
        matches!(self, ConversionError::RangeError { .. })
    }
}

// ============================================================================
// Native Errors
// ============================================================================

/// Errors raised from inside a native entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// An argument failed to convert.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// An argument index past the end of the argument list.
    #[error("argument index {index} out of bounds ({count} arguments)")]
    ArgumentIndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of arguments supplied.
        count: usize,
    },

    /// The entry point expects a receiver but none was supplied.
    #[error("missing receiver")]
    MissingReceiver,

    /// The receiver or an object argument has the wrong native type.
    #[error("native instance is not a {expected}")]
    InstanceMismatch {
        /// Rust type name that was expected.
        expected: &'static str,
    },

    /// A constructor finished without producing an instance.
    #[error("constructor produced no instance")]
    NoInstance,

    /// Free-form failure reported by the native code.
    #[error("{0}")]
    Other(String),
}

impl NativeError {
    /// Create a custom native error.
    pub fn other(message: impl Into<String>) -> Self {
        NativeError::Other(message.into())
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while registering descriptors or building a module.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A symbol with this name already exists in its scope.
    #[error("duplicate symbol: {name} already registered as {kind}")]
    DuplicateSymbol {
        /// The duplicated name.
        name: String,
        /// What is already registered under it ("type", "function", "method", "attribute").
        kind: &'static str,
    },

    /// A looked-up symbol does not exist.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// A descriptor references a type that is neither builtin nor registered.
    #[error("unknown type '{type_name}' referenced by {referenced_by}")]
    UnknownType {
        /// The unresolved type name.
        type_name: String,
        /// Which declaration referenced it.
        referenced_by: String,
    },

    /// Two constructors of one type share kind and arity.
    #[error("type '{type_name}': duplicate constructor ({signature})")]
    DuplicateConstructor {
        /// Owning type.
        type_name: String,
        /// Rendered parameter list.
        signature: String,
    },

    /// A declaration is malformed.
    #[error("invalid declaration: {0}")]
    InvalidDeclaration(String),
}

// ============================================================================
// Call Errors
// ============================================================================

/// Errors raised while constructing, invoking or accessing attributes.
///
/// None of these leave a partially constructed proxy behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// No function, method, type or attribute with this name.
    #[error("unknown symbol '{name}' in {scope}")]
    UnknownSymbol {
        /// The requested name.
        name: String,
        /// Where it was looked up (module or type name).
        scope: String,
    },

    /// An argument failed to marshal.
    #[error("{callee}: argument {index}: {source}")]
    Argument {
        /// The function, method or constructor being called.
        callee: String,
        /// Zero-based argument position.
        index: usize,
        /// The marshalling failure.
        #[source]
        source: ConversionError,
    },

    /// An attribute value or a return value failed to marshal.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Wrong number of arguments.
    #[error("{callee}: expected {expected} argument(s), got {got}")]
    ArityMismatch {
        /// The function or method being called.
        callee: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },

    /// No constructor takes this many arguments, or none accepts them.
    #[error("no matching constructor for '{type_name}' with {arity} argument(s)")]
    NoMatchingConstructor {
        /// The type being constructed.
        type_name: String,
        /// Supplied argument count.
        arity: usize,
    },

    /// More than one value constructor has the requested arity.
    #[error("ambiguous construction of '{type_name}': {candidates} constructors match")]
    AmbiguousConstructor {
        /// The type being constructed.
        type_name: String,
        /// How many value constructors matched.
        candidates: usize,
    },

    /// The native entry point failed.
    #[error("{callee}: {source}")]
    Native {
        /// The function, method or constructor being called.
        callee: String,
        /// The native failure.
        #[source]
        source: NativeError,
    },
}

impl CallError {
    /// The marshalling failure behind this error, if any.
    pub fn conversion(&self) -> Option<&ConversionError> {
        match self {
            CallError::Argument { source, .. } => Some(source),
            CallError::Conversion(source) => Some(source),
            CallError::Native {
                source: NativeError::Conversion(source),
                ..
            } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Top-level error covering every phase.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExposerError {
    /// Module build failed; every collected error is kept.
    #[error("module build failed: {}", render_all(.0))]
    Registration(Vec<RegistrationError>),

    /// A call-time failure.
    #[error(transparent)]
    Call(#[from] CallError),

    /// A marshalling failure outside of a call.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl From<RegistrationError> for ExposerError {
    fn from(err: RegistrationError) -> Self {
        ExposerError::Registration(vec![err])
    }
}

impl From<Vec<RegistrationError>> for ExposerError {
    fn from(errs: Vec<RegistrationError>) -> Self {
        ExposerError::Registration(errs)
    }
}

fn render_all(errors: &[RegistrationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
