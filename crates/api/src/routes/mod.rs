//! Route table
//!
//! Every endpoint the service exposes is registered here, grouped by trust
//! boundary.

pub mod health;
pub mod internal;
pub mod users;

use std::sync::Arc;

use axum::Router;
use mylearn_domain::constants::{HEALTH_PATH, INTERNAL_PROFILES_PATH, USERS_PATH};

use crate::context::AppContext;

/// Build the application router.
///
/// | Method | Path                      | Handler                     |
/// |--------|---------------------------|-----------------------------|
/// | POST   | `/internal/profiles`      | [`internal::create_profile`] |
/// | GET    | `/api/v1/users/me`        | [`users::get_my_profile`]    |
/// | PUT    | `/api/v1/users/me`        | [`users::update_my_profile`] |
/// | GET    | `/api/v1/users/{user_id}` | [`users::get_profile_by_id`] |
/// | GET    | `/health`                 | [`health::health_check`]     |
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .nest(INTERNAL_PROFILES_PATH, internal::routes())
        .nest(USERS_PATH, users::routes())
        .route(HEALTH_PATH, axum::routing::get(health::health_check))
        .with_state(ctx)
}
