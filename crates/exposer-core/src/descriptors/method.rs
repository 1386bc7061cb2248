//! Method and free function descriptors.

use crate::SemanticType;
use crate::runtime::NativeFn;

/// A callable exposed on a type (method) or at module level (function).
///
/// Parameter and return types are checked by dispatch before and after the
/// native entry point runs.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// Binding name.
    pub name: String,
    /// Declared parameter types, excluding the receiver.
    pub params: Vec<SemanticType>,
    /// Declared return type.
    pub return_type: SemanticType,
    /// Native entry point.
    pub entry: NativeFn,
}

/// Free functions share the method shape, minus the receiver.
pub type FunctionDescriptor = MethodDescriptor;

impl MethodDescriptor {
    pub fn new(
        name: impl Into<String>,
        params: Vec<SemanticType>,
        return_type: SemanticType,
        entry: NativeFn,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            entry,
        }
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Render as `return_type name(params)`, e.g. `int add(int, int)`.
    pub fn signature(&self) -> String {
        format!(
            "{} {}({})",
            self.return_type,
            self.name,
            render_params(&self.params)
        )
    }
}

pub(crate) fn render_params(params: &[SemanticType]) -> String {
    params
        .iter()
        .map(SemanticType::name)
        .collect::<Vec<_>>()
        .join(", ")
}
