//! Request handlers.

pub mod emotion;
pub mod health;
pub mod search;

pub use emotion::*;
pub use health::*;
pub use search::*;

use crate::error::ApiError;

/// Fallback for unsupported methods on API routes.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
