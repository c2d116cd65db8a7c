use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// A scheduled workshop visit for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    /// Owning client; row-level scoping keys on this field.
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    /// Catalog services requested for this visit.
    pub service_ids: Vec<Uuid>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(
        client_id: Uuid,
        vehicle_id: Uuid,
        scheduled_at: DateTime<Utc>,
        service_ids: Vec<Uuid>,
        notes: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            vehicle_id,
            scheduled_at,
            status: AppointmentStatus::Pending,
            service_ids,
            notes: notes.to_string(),
            created_at: Utc::now(),
        }
    }
}
