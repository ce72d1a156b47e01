//! Error types for the menu service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Menu Error Enum ==
/// Unified error type for the menu service.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Menu item or cache key not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = match &self {
            MenuError::NotFound(_) => StatusCode::NOT_FOUND,
            MenuError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            MenuError::CacheFull(_) => StatusCode::SERVICE_UNAVAILABLE,
            MenuError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Extractor Rejections ==
// Malformed bodies, paths and queries answer like any other invalid request.
impl From<JsonRejection> for MenuError {
    fn from(rejection: JsonRejection) -> Self {
        MenuError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for MenuError {
    fn from(rejection: PathRejection) -> Self {
        MenuError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for MenuError {
    fn from(rejection: QueryRejection) -> Self {
        MenuError::InvalidRequest(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the menu service.
pub type Result<T> = std::result::Result<T, MenuError>;
