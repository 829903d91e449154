//! Server error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_store::StoreError;
use entities::ValidationError;
use serde_json::json;

/// Server error type.
///
/// Store errors pass through unwrapped: a `NotFound` raised anywhere below
/// the boundary maps to 404, everything else to 500.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A submitted entity violates a field constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ServerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = json!({
            "error": {
                "message": self.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handler and service operations.
pub type ServerResult<T> = Result<T, ServerError>;
