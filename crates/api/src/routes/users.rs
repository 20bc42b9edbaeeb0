//! Self-service and public profile endpoints

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mylearn_domain::{UserProfileResponse, UserProfileUpdateRequest, UserServiceError};
use tracing::info;
use uuid::Uuid;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::{parse_user_id, CallerId};
use crate::utils::request_helpers::execute_logged;

/// Routes mounted under `/api/v1/users`
pub fn routes() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/me", get(get_my_profile).put(update_my_profile))
        .route("/{user_id}", get(get_profile_by_id))
}

/// `GET /api/v1/users/me`
pub async fn get_my_profile(
    State(ctx): State<Arc<AppContext>>,
    CallerId(user_id): CallerId,
) -> Result<Json<UserProfileResponse>, ApiError> {
    execute_logged("users::get_my_profile", StatusCode::OK, async move {
        info!(user_id = %user_id, "Fetching /me profile");
        fetch_existing(&ctx, user_id).await.map(Json)
    })
    .await
}

/// `PUT /api/v1/users/me`
///
/// Only fields present in the body are changed.
pub async fn update_my_profile(
    State(ctx): State<Arc<AppContext>>,
    CallerId(user_id): CallerId,
    payload: Result<Json<UserProfileUpdateRequest>, JsonRejection>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    execute_logged("users::update_my_profile", StatusCode::OK, async move {
        let Json(request) = payload?;
        info!(user_id = %user_id, "Updating /me profile");

        let response = ctx.profiles.update_profile(user_id, request).await?;
        Ok(Json(response))
    })
    .await
}

/// `GET /api/v1/users/{user_id}`
///
/// Any caller may look up any profile.
pub async fn get_profile_by_id(
    State(ctx): State<Arc<AppContext>>,
    Path(raw_user_id): Path<String>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    execute_logged("users::get_profile_by_id", StatusCode::OK, async move {
        let user_id = parse_user_id(&raw_user_id)?;
        info!(user_id = %user_id, "Fetching public profile");

        fetch_existing(&ctx, user_id).await.map(Json)
    })
    .await
}

/// The service reports a miss as `None`; over HTTP it is a 404.
async fn fetch_existing(ctx: &AppContext, user_id: Uuid) -> Result<UserProfileResponse, ApiError> {
    ctx.profiles.fetch_profile_by_user_id(user_id).await?.ok_or_else(|| {
        ApiError(UserServiceError::NotFound(format!("User profile not found for ID: {user_id}")))
    })
}
