//! Request processing middleware.

pub mod method_override;
pub mod tracing;

pub use method_override::MethodOverrideLayer;
