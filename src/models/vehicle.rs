use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    /// Owning client; row-level scoping keys on this field.
    pub client_id: Uuid,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: u16,
}

impl Vehicle {
    pub fn new(client_id: Uuid, plate: &str, make: &str, model: &str, year: u16) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            plate: plate.trim().to_ascii_uppercase(),
            make: make.to_string(),
            model: model.to_string(),
            year,
        }
    }
}
