/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which converts to the
/// appropriate status code, with domain failures from the service layer
/// translated via `From<ServiceError>`.
///
/// # Status mapping
///
/// - `InvalidEntity` → 422 with the full violation list
/// - `EntityNotFound` → 404
/// - `InvalidCredentials` → 401
/// - store/password failures → 500, detail logged and withheld

use crate::services::{ErrorCode, ServiceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Unauthorized (401)
    Unauthorized(String),

    /// Not found (404)
    NotFound { code: ErrorCode, message: String },

    /// Unprocessable entity (422) - validation errors
    ValidationError {
        code: ErrorCode,
        message: String,
        violations: Vec<String>,
    },

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "todo_not_found", "todo_not_valid")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional violation details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound { message, .. } => write!(f, "Not found: {}", message),
            ApiError::ValidationError { violations, .. } => {
                write!(f, "Validation failed: {} violations", violations.len())
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string(), msg, None)
            }
            ApiError::NotFound { code, message } => (
                StatusCode::NOT_FOUND,
                code.as_str().to_string(),
                message,
                None,
            ),
            ApiError::ValidationError {
                code,
                message,
                violations,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                code.as_str().to_string(),
                message,
                Some(violations),
            ),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error".to_string(),
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code,
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Convert service failures to API errors
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidEntity {
                code,
                message,
                violations,
            } => ApiError::ValidationError {
                code,
                message,
                violations,
            },
            ServiceError::EntityNotFound { code, message } => {
                ApiError::NotFound { code, message }
            }
            ServiceError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            ServiceError::Store(err) => ApiError::InternalError(format!("Store error: {}", err)),
            ServiceError::Password(err) => {
                ApiError::InternalError(format!("Password operation failed: {}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound {
            code: ErrorCode::TodoNotFound,
            message: "No todo found with id = 7".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: No todo found with id = 7");
    }

    #[test]
    fn test_validation_error_display_counts_violations() {
        let err = ApiError::ValidationError {
            code: ErrorCode::TodoNotValid,
            message: "Todo is not valid".to_string(),
            violations: vec!["title: too short".to_string(), "title: too plain".to_string()],
        };
        assert_eq!(err.to_string(), "Validation failed: 2 violations");
    }

    #[test]
    fn test_not_found_conversion_keeps_code() {
        let api_err: ApiError = ServiceError::EntityNotFound {
            code: ErrorCode::TodoNotFound,
            message: "No todo found with id = 9".to_string(),
        }
        .into();

        match api_err {
            ApiError::NotFound { code, .. } => assert_eq!(code, ErrorCode::TodoNotFound),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
