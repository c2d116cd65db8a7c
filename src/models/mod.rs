pub mod user;
pub mod client;
pub mod vehicle;
pub mod appointment;
pub mod service_item;
pub mod invoice;
pub mod api;
