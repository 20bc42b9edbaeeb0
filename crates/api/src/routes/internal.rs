//! Service-to-service endpoints
//!
//! Called by the auth service after registration. Nothing here checks who the
//! caller is; the deployment must keep this prefix off the public gateway.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use mylearn_domain::{InternalProfileCreationRequest, UserProfileResponse};
use tracing::info;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::request_helpers::execute_logged;

/// Routes mounted under `/internal/profiles`
pub fn routes() -> Router<Arc<AppContext>> {
    Router::new().route("/", post(create_profile))
}

/// `POST /internal/profiles`
///
/// Always answers 201, including when the profile already existed and the
/// stored one is returned unchanged.
pub async fn create_profile(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<InternalProfileCreationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserProfileResponse>), ApiError> {
    execute_logged("internal::create_profile", StatusCode::CREATED, async move {
        let Json(request) = payload?;
        info!(user_id = %request.user_id, "Internal request received to create profile");

        let response = ctx.profiles.create_profile(request).await?;
        Ok((StatusCode::CREATED, Json(response)))
    })
    .await
}
