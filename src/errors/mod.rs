// Errors layer - Error type definitions
pub mod api;
pub mod internal;
pub mod not_found;

// Re-exports for convenience
pub use api::ApiError;
pub use internal::InternalError;
pub use not_found::{NotFoundError, ResourceKind};
