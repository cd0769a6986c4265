//! API error type
//!
//! Every error body carries the message under both `error` and `detail`;
//! browser clients read either field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced entity absent (404)
    #[error("{0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl From<optimus_common::Error> for ApiError {
    fn from(err: optimus_common::Error) -> Self {
        match err {
            optimus_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            optimus_common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();

        let body = Json(json!({
            "error": message,
            "detail": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_error_mapping() {
        let not_found: ApiError = optimus_common::Error::NotFound("Norm not found".into()).into();
        assert!(matches!(not_found, ApiError::NotFound(ref m) if m == "Norm not found"));

        let bad: ApiError = optimus_common::Error::InvalidInput("bad".into()).into();
        assert!(matches!(bad, ApiError::BadRequest(_)));

        let internal: ApiError = optimus_common::Error::Internal("boom".into()).into();
        assert!(matches!(internal, ApiError::Internal(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
