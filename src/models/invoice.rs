use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Issued,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    /// Owning client; row-level scoping keys on this field.
    pub client_id: Uuid,
    pub appointment_id: Option<Uuid>,
    pub total_cents: i64,
    pub status: InvoiceStatus,
    pub issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(client_id: Uuid, appointment_id: Option<Uuid>, total_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            appointment_id,
            total_cents,
            status: InvoiceStatus::Draft,
            issued_at: Utc::now(),
        }
    }
}
