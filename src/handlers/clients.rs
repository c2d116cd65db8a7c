use crate::access::scope;
use crate::auth::guard::CurrentUser;
use crate::core::error::ResourceError;
use crate::core::state::AppState;
use crate::models::api::{CreateClientRequest, SuccessResponse, UpdateClientRequest};
use crate::models::client::Client;
use crate::models::user::Role;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// List clients visible to the caller
///
/// GET /clients — admin/mechanic see every row, a client only their own.
pub async fn list_clients_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ResourceError> {
    let clients = match user.role {
        Role::Admin | Role::Mechanic => state.clients.list(),
        Role::Client => {
            let own = scope::linked_client_id(&user)?;
            state.clients.get(own).into_iter().collect()
        }
    };

    Ok((StatusCode::OK, Json(clients)).into_response())
}

/// GET /clients/{id}
pub async fn get_client_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    // A client row's owner is the row itself.
    let client = state
        .clients
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "client"))?;

    scope::ensure_can_view(&user, client.id)?;

    Ok((StatusCode::OK, Json(client)).into_response())
}

/// POST /clients — admin only
pub async fn create_client_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<Response, ResourceError> {
    scope::ensure_admin(&user)?;
    payload.validate()?;

    let client = Client::new(&payload.name, payload.email, payload.phone);
    let id = client.id;
    state.clients.insert(client.clone());

    info!(client_id = %id, "client created");

    Ok((StatusCode::CREATED, Json(client)).into_response())
}

/// PUT /clients/{id} — admin, or the client updating their own record
pub async fn update_client_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<Response, ResourceError> {
    let existing = state
        .clients
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "client"))?;

    scope::ensure_can_modify(&user, existing.id)?;

    let mut updated = (*existing).clone();
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(ResourceError::Validation("name must not be empty".to_string()));
        }
        updated.name = name;
    }
    if let Some(email) = payload.email {
        updated.email = Some(email);
    }
    if let Some(phone) = payload.phone {
        updated.phone = Some(phone);
    }

    state.clients.insert(updated.clone());

    info!(client_id = %id, "client updated");

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// DELETE /clients/{id} — admin only
pub async fn delete_client_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    scope::ensure_admin(&user)?;

    state
        .clients
        .remove(id)
        .ok_or_else(|| ResourceError::NotFound("client".to_string()))?;

    info!(client_id = %id, "client deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Client deleted".to_string(),
        }),
    )
        .into_response())
}
