pub mod core;
pub mod models;
pub mod stores;
pub mod auth;
pub mod access;
pub mod validation;
pub mod handlers;
