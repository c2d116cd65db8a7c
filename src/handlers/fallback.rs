use crate::models::api::ErrorResponse;
use axum::{http::StatusCode, response::IntoResponse, Json};

/// 404 for unmatched routes.
pub async fn fallback_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Unknown endpoint".to_string(),
        }),
    )
}
