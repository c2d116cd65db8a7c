pub mod auth;
pub mod dashboard;
pub mod clients;
pub mod vehicles;
pub mod appointments;
pub mod services;
pub mod invoices;
pub mod users;
pub mod health;
pub mod fallback;
