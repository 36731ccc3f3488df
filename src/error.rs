//! Error types for the request backend
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Request Error Enum ==
/// Unified error type for the request backend.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Client input invalid (empty music field, malformed identifier)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Delete target absent; a normal negative outcome, not a server fault
    #[error("Request not found: {0}")]
    NotFound(String),

    /// Persistence backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RequestError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RequestError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            RequestError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the request backend.
pub type Result<T> = std::result::Result<T, RequestError>;
