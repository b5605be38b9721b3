//! HTTP API serving a static greeting and a health check.
//!
//! The router is built once by [`create_app`] and handed to [`serve`]; no
//! routes are registered or changed after startup.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::{MethodRouter, get};
use tokio::net::TcpListener;

use config::Config;
use error::ServerError;

/// Path of the greeting endpoint.
pub const HELLO_PATH: &str = "/api/hello";
/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Creates the Axum application router with both endpoints.
pub fn create_app() -> Router {
    Router::new()
        .route(HELLO_PATH, get_only(get(routes::hello::get)))
        .route(HEALTH_PATH, get_only(get(routes::health::check)))
        .fallback(routes::not_found)
}

// HEAD would otherwise be answered by the GET handler. Every rejection
// carries `Allow: GET`, see `ApiError::MethodNotAllowed`.
fn get_only(method_router: MethodRouter) -> MethodRouter {
    method_router
        .head(routes::method_not_allowed)
        .fallback(routes::method_not_allowed)
}

/// Binds the TCP listener for the configured address.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on `listener` until the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Binds the configured address and serves the application router on it.
pub async fn run(config: &Config) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, create_app()).await
}
