//! MyLearn user profile service
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use anyhow::Context;
use mylearn_infra::config;
use tokio::net::TcpListener;
use user_service_lib::utils::logging::init_logging;
use user_service_lib::{serve, shutdown_signal, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration; the outcome is logged once the
    // subscriber exists
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    init_logging(&config.logging).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let bind_address = config.server.bind_address();
    let ctx = Arc::new(AppContext::new_with_config(config).context("failed to build context")?);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    serve(ctx, listener, shutdown_signal()).await.context("server terminated with an error")?;
    Ok(())
}
