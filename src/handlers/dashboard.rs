use crate::access::scope;
use crate::auth::guard::CurrentUser;
use crate::core::error::ResourceError;
use crate::core::state::AppState;
use crate::models::api::{AdminDashboard, ClientDashboard, MechanicDashboard};
use crate::models::appointment::AppointmentStatus;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};
use std::sync::Arc;

// Role home pages. The guard has already matched caller role to prefix,
// so these only assemble their view.

/// GET /admin/dashboard
pub async fn admin_dashboard_handler(State(state): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        Json(AdminDashboard {
            users: state.users.len(),
            clients: state.clients.len(),
            vehicles: state.vehicles.len(),
            appointments: state.appointments.len(),
            invoices: state.invoices.len(),
        }),
    )
        .into_response()
}

/// GET /mechanic/dashboard
pub async fn mechanic_dashboard_handler(State(state): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        Json(MechanicDashboard {
            pending_appointments: state
                .appointments
                .count_with_status(AppointmentStatus::Pending),
            in_progress_appointments: state
                .appointments
                .count_with_status(AppointmentStatus::InProgress),
            vehicles: state.vehicles.len(),
        }),
    )
        .into_response()
}

/// GET /client/dashboard — counts scoped to the caller's own rows.
pub async fn client_dashboard_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ResourceError> {
    let own = scope::linked_client_id(&user)?;

    Ok((
        StatusCode::OK,
        Json(ClientDashboard {
            vehicles: state.vehicles.list_for_client(own).len(),
            appointments: state.appointments.list_for_client(own).len(),
            invoices: state.invoices.list_for_client(own).len(),
        }),
    )
        .into_response())
}
