//! Error types for the Shelfmark API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shelfmark_common::{ConfigurationError, ShelfmarkError};
use thiserror::Error;

/// Main error type for the Shelfmark API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// Missing authentication (no credential presented)
    #[error("Authentication required: {message}")]
    MissingAuthentication { message: String },

    /// Authentication error (invalid/expired credential)
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal server error: {message}")]
    Internal { message: String },

    /// Other errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

impl ShelfmarkError for ApiError {}

impl ApiError {
    /// Get error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Config(_) => "SHELFMARK_API_CONFIG_ERROR",
            ApiError::MissingAuthentication { .. } => "SHELFMARK_API_AUTH_MISSING",
            ApiError::Authentication { .. } => "SHELFMARK_API_AUTH_ERROR",
            ApiError::HttpClient(_) => "SHELFMARK_API_HTTP_CLIENT_ERROR",
            ApiError::Serialization(_) => "SHELFMARK_API_SERIALIZATION_ERROR",
            ApiError::Internal { .. } => "SHELFMARK_API_INTERNAL_ERROR",
            ApiError::Other(_) => "SHELFMARK_API_OTHER_ERROR",
        }
    }

    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::HttpClient(_))
    }

    /// Check if error is a client error
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::MissingAuthentication { .. } | ApiError::Authentication { .. }
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::MissingAuthentication { .. } => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Authentication { .. } => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            ApiError::Serialization(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Other(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": error_message,
                "timestamp": chrono::Utc::now(),
                "retryable": self.is_retryable(),
            }
        }));

        (status, body).into_response()
    }
}

/// Error response structure for API documentation
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetails,
}

/// Error details structure
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorDetails {
    /// Error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// ISO 8601 timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// Whether the error is retryable
    pub retryable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::Authentication {
                message: "test".to_string()
            }
            .error_code(),
            "SHELFMARK_API_AUTH_ERROR"
        );
        assert_eq!(
            ApiError::Internal {
                message: "test".to_string()
            }
            .error_code(),
            "SHELFMARK_API_INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(ApiError::MissingAuthentication {
            message: "test".to_string()
        }
        .is_client_error());
        assert!(ApiError::Authentication {
            message: "test".to_string()
        }
        .is_client_error());
        assert!(!ApiError::Internal {
            message: "test".to_string()
        }
        .is_client_error());
    }

    #[test]
    fn test_auth_errors_map_to_unauthorized() {
        let response = ApiError::MissingAuthentication {
            message: "missing or malformed credential".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ApiError::Authentication {
            message: "invalid credential".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
