//! Request execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing handlers with
//! timing and outcome logging.

use std::future::Future;
use std::time::Instant;

use axum::http::StatusCode;

use crate::error::ApiError;
use crate::utils::logging::log_request_outcome;

/// Execute a handler body with automatic timing and outcome logging
///
/// `success` is the status reported when the body returns `Ok`; failures are
/// logged with the status the error maps to.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn get_profile_by_id(
///     State(ctx): State<Arc<AppContext>>,
///     Path(raw): Path<String>,
/// ) -> Result<Json<UserProfileResponse>, ApiError> {
///     execute_logged("users::get_profile_by_id", StatusCode::OK, async move {
///         // handler logic here
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<Fut, T>(
    route: &str,
    success: StatusCode,
    handler: Fut,
) -> Result<T, ApiError>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    let start = Instant::now();

    let result = handler.await;

    let status = match &result {
        Ok(_) => success,
        Err(err) => err.status(),
    };
    log_request_outcome(route, start.elapsed(), status);

    result
}
