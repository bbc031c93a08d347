//! # Server Errors
//!
//! [`Error`] covers everything the static server can fail at. It maps to an HTTP status
//! through axum's `IntoResponse`, with a JSON body `{"error": ..., "code": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error during startup.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request path that may not be served (e.g. `..` segments).
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Reading from the dist directory failed.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidPath(msg) => msg.clone(),
            Error::Config(_) | Error::Io(_) => "An internal error occurred".to_string(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "Config",
            Error::InvalidPath(_) => "InvalidPath",
            Error::Io(_) => "Io",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidPath("..".to_string()).status_code(), StatusCode::BAD_REQUEST);
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "index.html"));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(io.user_message(), "An internal error occurred");
    }
}
