//! # MyLearn Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for profile persistence
//! - The profile service that enforces creation and update rules
//!
//! ## Architecture Principles
//! - Only depends on `mylearn-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod user;

pub use user::ports::ProfileStore;
pub use user::ProfileService;
