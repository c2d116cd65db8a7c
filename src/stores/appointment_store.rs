use crate::models::appointment::{Appointment, AppointmentStatus};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory store for appointment rows.
pub struct AppointmentStore {
    appointments: DashMap<Uuid, Arc<Appointment>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self {
            appointments: DashMap::new(),
        }
    }

    pub fn insert(&self, appointment: Appointment) {
        self.appointments
            .insert(appointment.id, Arc::new(appointment));
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<Appointment>> {
        self.appointments
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: Uuid) -> Option<Arc<Appointment>> {
        self.appointments.remove(&id).map(|(_, appt)| appt)
    }

    pub fn list(&self) -> Vec<Arc<Appointment>> {
        self.appointments
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn list_for_client(&self, client_id: Uuid) -> Vec<Arc<Appointment>> {
        self.appointments
            .iter()
            .filter(|entry| entry.value().client_id == client_id)
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn count_with_status(&self, status: AppointmentStatus) -> usize {
        self.appointments
            .iter()
            .filter(|entry| entry.value().status == status)
            .count()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}
