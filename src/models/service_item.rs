use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog entry for a service the shop offers. The catalog listing is
/// public; mutation is admin-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub active: bool,
}

impl ServiceItem {
    pub fn new(name: &str, description: &str, price_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            price_cents,
            active: true,
        }
    }
}
