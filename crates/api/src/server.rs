//! HTTP server lifecycle

use std::future::Future;
use std::sync::Arc;

use mylearn_domain::{Result, UserServiceError};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::routes::router;

/// Serve the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(ctx: Arc<AppContext>, listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .map_err(|err| UserServiceError::Internal(format!("failed to determine address: {err}")))?;
    info!(%local_addr, "user service listening");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|err| UserServiceError::Internal(format!("server error: {err}")))?;

    info!("user service stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
