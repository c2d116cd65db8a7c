// Application state (AppState)

use crate::core::config::Config;
use crate::stores::{
    appointment_store::AppointmentStore, client_store::ClientStore,
    invoice_store::InvoiceStore, service_store::ServiceStore, user_store::UserStore,
    vehicle_store::VehicleStore,
};
use std::sync::Arc;

/// Shared application state.
///
/// One explicitly constructed handle per store, injected into handlers via
/// axum state. Nothing here is process-global; tests build their own.
#[derive(Clone)]
pub struct AppState {
    /// Credential store consulted by the authenticator
    pub users: Arc<UserStore>,

    pub clients: Arc<ClientStore>,
    pub vehicles: Arc<VehicleStore>,
    pub appointments: Arc<AppointmentStore>,
    pub services: Arc<ServiceStore>,
    pub invoices: Arc<InvoiceStore>,

    /// Configuration
    pub config: Arc<Config>,

    /// Resolved JWT signing secret (environment-provided)
    pub jwt_secret: Arc<String>,
}

impl AppState {
    pub fn new(config: Config, jwt_secret: String) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            clients: Arc::new(ClientStore::new()),
            vehicles: Arc::new(VehicleStore::new()),
            appointments: Arc::new(AppointmentStore::new()),
            services: Arc::new(ServiceStore::new()),
            invoices: Arc::new(InvoiceStore::new()),
            config: Arc::new(config),
            jwt_secret: Arc::new(jwt_secret),
        }
    }
}
