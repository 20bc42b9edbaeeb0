//! # MyLearn User Service
//!
//! HTTP application layer - routes, handlers and the service entry point.
//!
//! This crate contains:
//! - The route table and request handlers
//! - Application context (dependency injection)
//! - HTTP error mapping and logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Trusts the upstream gateway for authentication

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod context;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use error::ApiError;
pub use routes::router;
pub use server::{serve, shutdown_signal};
