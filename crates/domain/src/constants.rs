//! Service constants
//!
//! Centralized location for the domain-level constants shared by the HTTP
//! surface and the configuration loader.

// Trusted identity header injected by the upstream gateway
pub const USER_ID_HEADER: &str = "X-User-Id";

// Route prefixes
pub const INTERNAL_PROFILES_PATH: &str = "/internal/profiles";
pub const USERS_PATH: &str = "/api/v1/users";
pub const HEALTH_PATH: &str = "/health";

// Platform name used in generated profile text
pub const PLATFORM_NAME: &str = "MyLearn";

// Configuration defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_DB_PATH: &str = "user-service.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;
pub const DEFAULT_LOG_LEVEL: &str = "info";
