//! Health check endpoint.

use axum::Json;
use axum::http::StatusCode;
use common::ApiResponse;

pub const HEALTHY: &str = "Server is healthy";

/// GET /api/health: returns server health status.
pub async fn check() -> Json<ApiResponse> {
    Json(ApiResponse::new(HEALTHY, StatusCode::OK.as_u16()))
}
