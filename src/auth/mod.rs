pub mod password;
pub mod token;
pub mod service;
pub mod guard;
pub mod session;
