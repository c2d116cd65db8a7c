// Centralized error handling for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::models::api::ErrorResponse;

/// Single outward message for every failed login. Unknown email and wrong
/// password must be indistinguishable to the caller.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Errors surfaced by the authenticator and token validation.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid request: {0}")]
    Validation(String),

    // Hashing/signing failures; detail stays out of the response body.
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal auth error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: error_message,
            }),
        )
            .into_response()
    }
}

/// Errors surfaced by the resource services.
///
/// Ownership violations are `Forbidden`, never `NotFound`: existence of
/// other clients' rows must not leak.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Forbidden")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ResourceError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            ResourceError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ResourceError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ResourceError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal resource error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: error_message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_single_message() {
        // Both failure causes render through this one variant, so the
        // message can never distinguish unknown email from wrong password.
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            INVALID_CREDENTIALS_MESSAGE
        );
    }

    #[test]
    fn test_internal_error_is_opaque() {
        let err = AuthError::Internal("bcrypt: cost out of range".to_string());
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ResourceError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ResourceError::NotFound("invoice".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AuthError::Validation("email is required".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
