//! API error types and JSON error response formatting.
//!
//! ApiError provides a consistent JSON error response format across all
//! endpoints, mapping engine errors to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use podium_core::error::PodiumError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "not_found").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid parameters.
    BadRequest(String),
    /// 404 Not Found - resource does not exist.
    NotFound(String),
    /// 500 Internal Server Error - unexpected server error.
    Internal(String),
    /// 503 Service Unavailable - the embedding provider failed.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PodiumError> for ApiError {
    fn from(err: PodiumError) -> Self {
        match err {
            PodiumError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            PodiumError::Embedding(msg) => ApiError::ServiceUnavailable(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_is_bad_request() {
        let err = ApiError::from(PodiumError::InvalidRequest("top_k".into()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_embedding_failure_is_unavailable() {
        let err = ApiError::from(PodiumError::Embedding("down".into()));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_index_failure_is_internal() {
        let err = ApiError::from(PodiumError::Index("stale".into()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
