pub mod config;
pub mod error;
pub mod state;
pub mod routes;
pub mod startup;
pub mod tracing_init;
