//! Error types for cef-dash

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// A view was requested before any file was uploaded (409)
    #[error("No file uploaded yet")]
    NoData,

    /// cef-common error
    #[error(transparent)]
    Common(#[from] cef_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NoData => (
                StatusCode::CONFLICT,
                "NO_DATA",
                "No file uploaded yet.".to_string(),
            ),
            ApiError::Common(ref err) if err.is_decode_error() => {
                (StatusCode::BAD_REQUEST, "DECODE_ERROR", err.to_string())
            }
            ApiError::Common(cef_common::Error::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMMON_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
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
    fn test_status_codes() {
        assert_eq!(ApiError::NoData.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Common(cef_common::Error::EmptyWorkbook).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Common(cef_common::Error::NotFound("block".into()))
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Common(cef_common::Error::Config("x".into()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
