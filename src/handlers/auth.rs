use crate::auth::service::login;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::{LoginRequest, SuccessResponse};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Authenticate and issue a session token
///
/// POST /auth/login {"email": "...", "password": "..."}
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    payload.validate()?;

    let response = login(&state, &payload.email, &payload.password).await?;

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Acknowledge logout
///
/// POST /auth/logout
///
/// Tokens are stateless; the session holder discards its copy and the
/// session is gone. Nothing to invalidate server-side.
pub async fn logout_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
}

/// The login view target that guard denials redirect to
///
/// GET /login
pub async fn login_page_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Please log in".to_string(),
        }),
    )
}
