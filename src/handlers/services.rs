use crate::core::error::ResourceError;
use crate::core::state::AppState;
use crate::models::api::{CreateServiceRequest, SuccessResponse, UpdateServiceRequest};
use crate::models::service_item::ServiceItem;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// The public catalog endpoints carry no identity; the admin management
// endpoints live under /admin/services, where the route guard has already
// required the admin role.

/// GET /services — public catalog, active entries only.
pub async fn list_services_handler(State(state): State<Arc<AppState>>) -> Response {
    (StatusCode::OK, Json(state.services.list_active())).into_response()
}

/// GET /services/{id} — public; inactive entries are not revealed.
pub async fn get_service_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    let service = state
        .services
        .get(id)
        .filter(|service| service.active)
        .ok_or_else(|| ResourceError::NotFound("service".to_string()))?;

    Ok((StatusCode::OK, Json(service)).into_response())
}

/// GET /admin/services — full catalog including inactive entries.
pub async fn admin_list_services_handler(State(state): State<Arc<AppState>>) -> Response {
    (StatusCode::OK, Json(state.services.list())).into_response()
}

/// POST /admin/services
pub async fn create_service_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<Response, ResourceError> {
    payload.validate()?;

    let service = ServiceItem::new(&payload.name, &payload.description, payload.price_cents);
    let id = service.id;
    state.services.insert(service.clone());

    info!(service_id = %id, name = %service.name, "catalog service created");

    Ok((StatusCode::CREATED, Json(service)).into_response())
}

/// PUT /admin/services/{id}
pub async fn update_service_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Response, ResourceError> {
    let existing = state
        .services
        .get(id)
        .ok_or_else(|| ResourceError::NotFound("service".to_string()))?;

    let mut updated = (*existing).clone();
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(ResourceError::Validation("name must not be empty".to_string()));
        }
        updated.name = name;
    }
    if let Some(description) = payload.description {
        updated.description = description;
    }
    if let Some(price_cents) = payload.price_cents {
        if price_cents < 0 {
            return Err(ResourceError::Validation(
                "price_cents must not be negative".to_string(),
            ));
        }
        updated.price_cents = price_cents;
    }
    if let Some(active) = payload.active {
        updated.active = active;
    }

    state.services.insert(updated.clone());

    info!(service_id = %id, "catalog service updated");

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// DELETE /admin/services/{id}
pub async fn delete_service_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    state
        .services
        .remove(id)
        .ok_or_else(|| ResourceError::NotFound("service".to_string()))?;

    info!(service_id = %id, "catalog service deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Service deleted".to_string(),
        }),
    )
        .into_response())
}
