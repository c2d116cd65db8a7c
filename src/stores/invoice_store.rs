use crate::models::invoice::Invoice;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory store for invoice rows.
pub struct InvoiceStore {
    invoices: DashMap<Uuid, Arc<Invoice>>,
}

impl InvoiceStore {
    pub fn new() -> Self {
        Self {
            invoices: DashMap::new(),
        }
    }

    pub fn insert(&self, invoice: Invoice) {
        self.invoices.insert(invoice.id, Arc::new(invoice));
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<Invoice>> {
        self.invoices.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: Uuid) -> Option<Arc<Invoice>> {
        self.invoices.remove(&id).map(|(_, invoice)| invoice)
    }

    pub fn list(&self) -> Vec<Arc<Invoice>> {
        self.invoices
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn list_for_client(&self, client_id: Uuid) -> Vec<Arc<Invoice>> {
        self.invoices
            .iter()
            .filter(|entry| entry.value().client_id == client_id)
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

impl Default for InvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}
