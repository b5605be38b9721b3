//! Request and startup error types.

use std::io;
use std::net::SocketAddr;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Per-request errors. Rendered as plain text, never JSON.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A known path was requested with a method other than GET.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matches the request path.
    #[error("404 page not found")]
    NotFound,
}

impl ApiError {
    /// HTTP status code written for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // An explicit Allow stops axum from advertising HEAD alongside GET.
            ApiError::MethodNotAllowed => (
                self.status(),
                [(header::ALLOW, "GET")],
                self.to_string(),
            )
                .into_response(),
            ApiError::NotFound => (self.status(), self.to_string()).into_response(),
        }
    }
}

/// Errors that stop the server. Both are fatal to the process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The accept loop returned an error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_not_allowed_maps_to_405_plain_text() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(response.headers()[header::ALLOW], "GET");
    }

    #[test]
    fn not_found_has_no_allow_header() {
        let response = ApiError::NotFound.into_response();
        assert!(!response.headers().contains_key(header::ALLOW));
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.to_string(), "404 page not found");
    }

    #[test]
    fn bind_error_includes_address_and_cause() {
        let err = ServerError::Bind {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to bind 0.0.0.0:8080: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
