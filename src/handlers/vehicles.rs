use crate::access::scope;
use crate::auth::guard::CurrentUser;
use crate::core::error::ResourceError;
use crate::core::state::AppState;
use crate::models::api::{CreateVehicleRequest, SuccessResponse, UpdateVehicleRequest};
use crate::models::user::Role;
use crate::models::vehicle::Vehicle;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// GET /vehicles — admin/mechanic see every row, a client only their own.
pub async fn list_vehicles_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ResourceError> {
    let vehicles = match user.role {
        Role::Admin | Role::Mechanic => state.vehicles.list(),
        Role::Client => state.vehicles.list_for_client(scope::linked_client_id(&user)?),
    };

    Ok((StatusCode::OK, Json(vehicles)).into_response())
}

/// GET /vehicles/{id}
pub async fn get_vehicle_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    let vehicle = state
        .vehicles
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "vehicle"))?;

    scope::ensure_can_view(&user, vehicle.client_id)?;

    Ok((StatusCode::OK, Json(vehicle)).into_response())
}

/// POST /vehicles — admin (any client), or a client for themselves.
pub async fn create_vehicle_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateVehicleRequest>,
) -> Result<Response, ResourceError> {
    payload.validate()?;

    let owner = match user.role {
        Role::Admin => payload.client_id.ok_or_else(|| {
            ResourceError::Validation("client_id is required".to_string())
        })?,
        // A client registers vehicles only under their own record; any
        // client_id in the payload is ignored.
        Role::Client => scope::linked_client_id(&user)?,
        Role::Mechanic => return Err(ResourceError::Forbidden),
    };

    if state.clients.get(owner).is_none() {
        return Err(scope::missing_row_error(&user, "client"));
    }

    let vehicle = Vehicle::new(owner, &payload.plate, &payload.make, &payload.model, payload.year);
    let id = vehicle.id;
    state.vehicles.insert(vehicle.clone());

    info!(vehicle_id = %id, client_id = %owner, "vehicle created");

    Ok((StatusCode::CREATED, Json(vehicle)).into_response())
}

/// PUT /vehicles/{id} — admin, or the owning client
pub async fn update_vehicle_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVehicleRequest>,
) -> Result<Response, ResourceError> {
    let existing = state
        .vehicles
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "vehicle"))?;

    scope::ensure_can_modify(&user, existing.client_id)?;

    let mut updated = (*existing).clone();
    if let Some(plate) = payload.plate {
        if plate.trim().is_empty() {
            return Err(ResourceError::Validation("plate must not be empty".to_string()));
        }
        updated.plate = plate.trim().to_ascii_uppercase();
    }
    if let Some(make) = payload.make {
        updated.make = make;
    }
    if let Some(model) = payload.model {
        updated.model = model;
    }
    if let Some(year) = payload.year {
        updated.year = year;
    }

    state.vehicles.insert(updated.clone());

    info!(vehicle_id = %id, "vehicle updated");

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// DELETE /vehicles/{id} — admin, or the owning client
pub async fn delete_vehicle_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    let existing = state
        .vehicles
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "vehicle"))?;

    scope::ensure_can_modify(&user, existing.client_id)?;

    state.vehicles.remove(id);

    info!(vehicle_id = %id, "vehicle deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Vehicle deleted".to_string(),
        }),
    )
        .into_response())
}
