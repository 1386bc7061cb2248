//! Semantic type model shared by descriptors and marshalling.

mod primitive_kind;
mod semantic_type;
mod visibility;

pub use primitive_kind::PrimitiveKind;
pub use semantic_type::{SemanticType, ValueCategory};
pub use visibility::Visibility;
