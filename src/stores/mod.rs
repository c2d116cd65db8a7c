pub mod user_store;
pub mod client_store;
pub mod vehicle_store;
pub mod appointment_store;
pub mod service_store;
pub mod invoice_store;
