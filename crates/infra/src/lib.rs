//! # MyLearn Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite-backed profile store and its connection pool
//! - Conversions from driver errors into domain errors
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements traits defined in `mylearn-core`
//! - Contains all "impure" code (I/O, database access)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
