use crate::models::client::Client;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory store for client (customer) rows.
pub struct ClientStore {
    clients: DashMap<Uuid, Arc<Client>>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    /// Insert or replace a client row.
    pub fn insert(&self, client: Client) {
        self.clients.insert(client.id, Arc::new(client));
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<Client>> {
        self.clients.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: Uuid) -> Option<Arc<Client>> {
        self.clients.remove(&id).map(|(_, client)| client)
    }

    pub fn list(&self) -> Vec<Arc<Client>> {
        self.clients
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new()
    }
}
