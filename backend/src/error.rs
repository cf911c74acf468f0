//! Error types for the stub server.
//!
//! - [`FixtureError`] - Loading or validating canned responses
//! - [`ServerError`] - Request handling and startup
//!
//! `ServerError` renders as `{"error": "..."}`, the body shape the
//! frontend reads its message from.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Fixture Errors
// =============================================================================

/// Errors while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failed to read file.
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// Not valid JSON.
    #[error("Invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, wrong shape.
    #[error("Invalid fixture: {0}")]
    InvalidShape(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid request.
    #[error("{0}")]
    BadRequest(String),

    /// Body over the upload limit.
    #[error("File exceeds the 16 MB upload limit")]
    PayloadTooLarge,

    /// Simulated processing failure.
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),

    /// Fixture could not be loaded at startup.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Socket error.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::ProcessingFailed(_) | ServerError::Fixture(_) | ServerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(error_response(&self.to_string()))).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
