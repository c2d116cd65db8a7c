use crate::access::scope;
use crate::auth::guard::CurrentUser;
use crate::core::error::ResourceError;
use crate::core::state::AppState;
use crate::models::api::{CreateInvoiceRequest, SuccessResponse, UpdateInvoiceRequest};
use crate::models::invoice::Invoice;
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

/// GET /invoices — admin/mechanic read every row, a client only their own.
pub async fn list_invoices_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ResourceError> {
    let invoices = match user.role {
        Role::Admin | Role::Mechanic => state.invoices.list(),
        Role::Client => state
            .invoices
            .list_for_client(scope::linked_client_id(&user)?),
    };

    Ok((StatusCode::OK, Json(invoices)).into_response())
}

/// GET /invoices/{id}
pub async fn get_invoice_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    let invoice = state
        .invoices
        .get(id)
        .ok_or_else(|| scope::missing_row_error(&user, "invoice"))?;

    scope::ensure_can_view(&user, invoice.client_id)?;

    Ok((StatusCode::OK, Json(invoice)).into_response())
}

/// POST /invoices — admin only; mechanics have no invoice-edit rights.
pub async fn create_invoice_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> Result<Response, ResourceError> {
    scope::ensure_can_edit_invoices(&user)?;
    payload.validate()?;

    if state.clients.get(payload.client_id).is_none() {
        return Err(ResourceError::NotFound("client".to_string()));
    }

    if let Some(appointment_id) = payload.appointment_id {
        let appointment = state
            .appointments
            .get(appointment_id)
            .ok_or_else(|| ResourceError::NotFound("appointment".to_string()))?;

        if appointment.client_id != payload.client_id {
            return Err(ResourceError::Validation(
                "appointment belongs to a different client".to_string(),
            ));
        }
    }

    let invoice = Invoice::new(payload.client_id, payload.appointment_id, payload.total_cents);
    let id = invoice.id;
    state.invoices.insert(invoice.clone());

    info!(invoice_id = %id, client_id = %payload.client_id, "invoice created");

    Ok((StatusCode::CREATED, Json(invoice)).into_response())
}

/// PUT /invoices/{id} — admin only
pub async fn update_invoice_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInvoiceRequest>,
) -> Result<Response, ResourceError> {
    scope::ensure_can_edit_invoices(&user)?;

    let existing = state
        .invoices
        .get(id)
        .ok_or_else(|| ResourceError::NotFound("invoice".to_string()))?;

    let mut updated = (*existing).clone();
    if let Some(total_cents) = payload.total_cents {
        if total_cents < 0 {
            return Err(ResourceError::Validation(
                "total_cents must not be negative".to_string(),
            ));
        }
        updated.total_cents = total_cents;
    }
    if let Some(status) = payload.status {
        updated.status = status;
    }

    state.invoices.insert(updated.clone());

    info!(invoice_id = %id, status = ?updated.status, "invoice updated");

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// DELETE /invoices/{id} — admin only
pub async fn delete_invoice_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    scope::ensure_can_edit_invoices(&user)?;

    state
        .invoices
        .remove(id)
        .ok_or_else(|| ResourceError::NotFound("invoice".to_string()))?;

    info!(invoice_id = %id, "invoice deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Invoice deleted".to_string(),
        }),
    )
        .into_response())
}
