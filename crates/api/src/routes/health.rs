//! Liveness and readiness probe

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tokio::task;
use tracing::warn;

use crate::context::AppContext;
use crate::utils::health::{ComponentHealth, HealthStatus};

/// `GET /health`
///
/// 200 when the database answers, 503 otherwise.
pub async fn health_check(State(ctx): State<Arc<AppContext>>) -> (StatusCode, Json<HealthStatus>) {
    let db = Arc::clone(&ctx.db);

    let database = match task::spawn_blocking(move || db.health_check()).await {
        Ok(Ok(())) => ComponentHealth::healthy("database"),
        Ok(Err(err)) => {
            warn!(error = %err, "database health check failed");
            ComponentHealth::unhealthy("database", err.label())
        }
        Err(err) => {
            warn!(error = %err, "database health check task failed");
            ComponentHealth::unhealthy("database", "internal")
        }
    };

    let status = HealthStatus::from_components(vec![database]);
    let code = if status.is_healthy() { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };

    (code, Json(status))
}
