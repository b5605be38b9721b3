pub mod health;
pub mod hello;

use crate::error::ApiError;

/// Answers every non-GET method on a known path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Router fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
