use crate::models::service_item::ServiceItem;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory store for the public services catalog.
pub struct ServiceStore {
    services: DashMap<Uuid, Arc<ServiceItem>>,
}

impl ServiceStore {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    pub fn insert(&self, service: ServiceItem) {
        self.services.insert(service.id, Arc::new(service));
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<ServiceItem>> {
        self.services.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: Uuid) -> Option<Arc<ServiceItem>> {
        self.services.remove(&id).map(|(_, service)| service)
    }

    pub fn list(&self) -> Vec<Arc<ServiceItem>> {
        self.services
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Active entries only; this is what the public catalog endpoint serves.
    pub fn list_active(&self) -> Vec<Arc<ServiceItem>> {
        self.services
            .iter()
            .filter(|entry| entry.value().active)
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceStore {
    fn default() -> Self {
        Self::new()
    }
}
