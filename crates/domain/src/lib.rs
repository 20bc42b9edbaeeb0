//! # MyLearn Domain
//!
//! Business domain types for the user profile service.
//!
//! This crate contains:
//! - The persisted profile record and its wire representations
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other MyLearn crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
