//! User profile business logic

pub mod ports;
pub mod service;

pub use service::ProfileService;
