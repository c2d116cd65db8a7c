use crate::access::scope;
use crate::auth::guard::CurrentUser;
use crate::core::error::ResourceError;
use crate::core::state::AppState;
use crate::models::api::{CreateAppointmentRequest, SuccessResponse, UpdateAppointmentRequest};
use crate::models::appointment::Appointment;
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

/// GET /appointments — admin/mechanic see every row, a client only their own.
pub async fn list_appointments_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ResourceError> {
    let appointments = match user.role {
        Role::Admin | Role::Mechanic => state.appointments.list(),
        Role::Client => state
            .appointments
            .list_for_client(scope::linked_client_id(&user)?),
    };

    Ok((StatusCode::OK, Json(appointments)).into_response())
}

/// GET /appointments/{id}
pub async fn get_appointment_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    let appointment = state
        .appointments
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "appointment"))?;

    scope::ensure_can_view(&user, appointment.client_id)?;

    Ok((StatusCode::OK, Json(appointment)).into_response())
}

/// POST /appointments — admin for any vehicle, a client for their own.
pub async fn create_appointment_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<Response, ResourceError> {
    payload.validate()?;

    if user.role == Role::Mechanic {
        return Err(ResourceError::Forbidden);
    }

    let vehicle = state
        .vehicles
        .get(payload.vehicle_id)
        .ok_or_else(|| scope::missing_row_error(&user, "vehicle"))?;

    // Booking inherits ownership from the vehicle.
    scope::ensure_can_modify(&user, vehicle.client_id)?;

    for service_id in &payload.service_ids {
        if state.services.get(*service_id).is_none() {
            return Err(ResourceError::Validation(format!(
                "unknown service: {}",
                service_id
            )));
        }
    }

    let appointment = Appointment::new(
        vehicle.client_id,
        vehicle.id,
        payload.scheduled_at,
        payload.service_ids,
        &payload.notes,
    );
    let id = appointment.id;
    state.appointments.insert(appointment.clone());

    info!(appointment_id = %id, client_id = %vehicle.client_id, "appointment created");

    Ok((StatusCode::CREATED, Json(appointment)).into_response())
}

/// PUT /appointments/{id}
///
/// admin: any field. mechanic: status/notes/services of any appointment,
/// but never the schedule. client: their own appointments only.
pub async fn update_appointment_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<Response, ResourceError> {
    let existing = state
        .appointments
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "appointment"))?;

    scope::ensure_can_update_appointment(&user, existing.client_id)?;

    if user.role == Role::Mechanic && payload.scheduled_at.is_some() {
        return Err(ResourceError::Forbidden);
    }

    let mut updated = (*existing).clone();
    if let Some(scheduled_at) = payload.scheduled_at {
        updated.scheduled_at = scheduled_at;
    }
    if let Some(status) = payload.status {
        updated.status = status;
    }
    if let Some(service_ids) = payload.service_ids {
        updated.service_ids = service_ids;
    }
    if let Some(notes) = payload.notes {
        updated.notes = notes;
    }

    state.appointments.insert(updated.clone());

    info!(appointment_id = %id, status = ?updated.status, "appointment updated");

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// DELETE /appointments/{id} — admin only
pub async fn delete_appointment_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    scope::ensure_admin(&user)?;

    state
        .appointments
        .remove(id)
        .ok_or_else(|| ResourceError::NotFound("appointment".to_string()))?;

    info!(appointment_id = %id, "appointment deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Appointment deleted".to_string(),
        }),
    )
        .into_response())
}
