//! Application error type and its HTTP mapping.
//!
//! Every failure path in a request ends up as an [`AppError`], which renders
//! to a JSON body of the form:
//!
//! ```json
//! { "error": "invalid url", "code": "invalid_url" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::url_normalizer::UrlNormalizationError;

/// Errors surfaced by the link service and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted value is not an absolute http(s) URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The URL's host does not resolve.
    #[error("address not found: {0}")]
    HostNotFound(String),

    /// No link exists for the requested short code.
    #[error("link not found: {0}")]
    NotFound(String),

    /// The store rejected or failed an operation.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store did not answer within the configured timeout.
    #[error("store timed out after {0} ms")]
    StoreTimeout(u128),

    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub code: &'static str,
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::HostNotFound(_) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::StoreTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Details stay in the logs.
    pub fn body(&self) -> ErrorBody {
        let (error, code) = match self {
            Self::InvalidUrl(_) => ("invalid url", "invalid_url"),
            Self::HostNotFound(_) => ("address not found", "host_not_found"),
            Self::NotFound(_) => ("not found", "not_found"),
            Self::StoreUnavailable(_) => ("store unavailable", "store_unavailable"),
            Self::StoreTimeout(_) => ("store timeout", "store_timeout"),
            Self::Internal(_) => ("internal error", "internal_error"),
        };

        ErrorBody { error, code }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        Self::StoreUnavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

impl From<UrlNormalizationError> for AppError {
    fn from(e: UrlNormalizationError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidUrl("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::HostNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::StoreUnavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::StoreTimeout(5000).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_hides_details() {
        let body = AppError::StoreUnavailable("password authentication failed".into()).body();
        assert_eq!(body.error, "store unavailable");
        assert_eq!(body.code, "store_unavailable");
    }

    #[test]
    fn test_body_messages() {
        assert_eq!(AppError::InvalidUrl("x".into()).body().error, "invalid url");
        assert_eq!(
            AppError::HostNotFound("x".into()).body().error,
            "address not found"
        );
    }

    #[test]
    fn test_normalization_error_maps_to_invalid_url() {
        let err: AppError = UrlNormalizationError::UnsupportedProtocol.into();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }
}
