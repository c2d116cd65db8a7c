use crate::auth::password::hash_password;
use crate::core::error::ResourceError;
use crate::core::state::AppState;
use crate::models::api::{CreateUserRequest, SuccessResponse, UserSummary};
use crate::models::client::Client;
use crate::models::user::{Role, User};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// Account provisioning, admin-only by route (the guard owns the role
// check for the /admin prefix).

/// GET /admin/users
pub async fn list_users_handler(State(state): State<Arc<AppState>>) -> Response {
    let users: Vec<UserSummary> = state
        .users
        .list()
        .iter()
        .map(|user| UserSummary::from(user.as_ref()))
        .collect();

    (StatusCode::OK, Json(users)).into_response()
}

/// POST /admin/users
///
/// Hashes the password server-side; a `client` role account also gets a
/// linked Client row so ownership scoping has something to key on.
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Response, ResourceError> {
    payload.validate()?;

    if state.users.find_by_email(&payload.email).is_some() {
        return Err(ResourceError::Validation(
            "email is already registered".to_string(),
        ));
    }

    let password_hash = hash_password(&payload.password, state.config.auth.bcrypt_cost)
        .await
        .map_err(|e| ResourceError::Internal(e.to_string()))?;

    let client_id = if payload.role == Role::Client {
        let client_name = payload.client_name.as_deref().unwrap_or(&payload.name);
        let client = Client::new(client_name, Some(payload.email.clone()), None);
        let id = client.id;
        state.clients.insert(client);
        Some(id)
    } else {
        None
    };

    let user = User::new(&payload.email, password_hash, payload.role, &payload.name, client_id);
    let summary = UserSummary::from(&user);
    state.users.add_user(user);

    info!(user_id = %summary.id, role = %summary.role, "user provisioned");

    Ok((StatusCode::CREATED, Json(summary)).into_response())
}

/// DELETE /admin/users/{id}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    state
        .users
        .remove_by_id(id)
        .ok_or_else(|| ResourceError::NotFound("user".to_string()))?;

    info!(user_id = %id, "user deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "User deleted".to_string(),
        }),
    )
        .into_response())
}
