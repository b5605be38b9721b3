//! Greeting endpoint.

use axum::Json;
use axum::http::StatusCode;
use common::ApiResponse;

pub const GREETING: &str = "Hello from Beam!";

/// GET /api/hello: returns the greeting.
pub async fn get() -> Json<ApiResponse> {
    Json(ApiResponse::new(GREETING, StatusCode::OK.as_u16()))
}
