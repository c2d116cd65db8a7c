use crate::models::appointment::AppointmentStatus;
use crate::models::invoice::InvoiceStatus;
use crate::models::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request/response bodies for the JSON API.

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub user_id: Uuid,
    pub expires_at: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// User view without the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub client_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            name: user.name.clone(),
            client_id: user.client_id,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    /// For `client` role accounts: creates and links a Client row.
    #[serde(default)]
    pub client_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    /// Ignored for client callers; their own client_id is always used.
    #[serde(default)]
    pub client_id: Option<Uuid>,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: u16,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub vehicle_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub service_ids: Vec<Uuid>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub service_ids: Option<Vec<Uuid>>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub client_id: Uuid,
    #[serde(default)]
    pub appointment_id: Option<Uuid>,
    pub total_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    #[serde(default)]
    pub total_cents: Option<i64>,
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateServiceRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub users: usize,
    pub clients: usize,
    pub vehicles: usize,
    pub appointments: usize,
    pub invoices: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MechanicDashboard {
    pub pending_appointments: usize,
    pub in_progress_appointments: usize,
    pub vehicles: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientDashboard {
    pub vehicles: usize,
    pub appointments: usize,
    pub invoices: usize,
}
