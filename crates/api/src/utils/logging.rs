//! Logging setup and structured request logging

use std::time::Duration;

use axum::http::StatusCode;
use mylearn_domain::{LoggingConfig, Result, UserServiceError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// is an error because the global subscriber can only be set once.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), &config.level)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| UserServiceError::Internal(format!("Failed to install logger: {e}")))
}

/// Pick the filter directive: a parseable `RUST_LOG` value, else the
/// configured level.
fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(|| EnvFilter::try_new(level), Ok)
        .map_err(|e| UserServiceError::Config(format!("Invalid log level: {e}")))
}

/// Log the outcome of a handled request with structured fields.
///
/// # Parameters
/// * `route` - Logical route identifier (e.g. `"users::get_my_profile"`).
/// * `elapsed` - Time spent handling the request.
/// * `status` - Status code sent to the caller.
///
/// Callers must avoid forwarding sensitive values in `route`.
#[inline]
pub fn log_request_outcome(route: &str, elapsed: Duration, status: StatusCode) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let status = status.as_u16();

    if status < 400 {
        info!(route, status, duration_ms, "request_success");
    } else {
        warn!(route, status, duration_ms, "request_failure");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_config_error() {
        let err = build_filter(None, "info,user_service=loudest").unwrap_err();
        assert!(matches!(err, UserServiceError::Config(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn rust_log_takes_precedence_over_configured_level() {
        let filter = build_filter(Some("debug"), "info,user_service=loudest").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn unparseable_rust_log_falls_back_to_configured_level() {
        let filter = build_filter(Some("info,user_service=loudest"), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }
}
