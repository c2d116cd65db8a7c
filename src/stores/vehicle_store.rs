use crate::models::vehicle::Vehicle;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory store for vehicle rows.
pub struct VehicleStore {
    vehicles: DashMap<Uuid, Arc<Vehicle>>,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self {
            vehicles: DashMap::new(),
        }
    }

    pub fn insert(&self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.id, Arc::new(vehicle));
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<Vehicle>> {
        self.vehicles.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: Uuid) -> Option<Arc<Vehicle>> {
        self.vehicles.remove(&id).map(|(_, vehicle)| vehicle)
    }

    pub fn list(&self) -> Vec<Arc<Vehicle>> {
        self.vehicles
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Rows owned by one client; the scoped view a client caller gets.
    pub fn list_for_client(&self, client_id: Uuid) -> Vec<Arc<Vehicle>> {
        self.vehicles
            .iter()
            .filter(|entry| entry.value().client_id == client_id)
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl Default for VehicleStore {
    fn default() -> Self {
        Self::new()
    }
}
