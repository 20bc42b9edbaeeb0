//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use mylearn_domain::constants::USER_ID_HEADER;
use mylearn_domain::{Config, DatabaseConfig};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use user_service_lib::{router, AppContext};

/// Router backed by a throwaway SQLite file
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    router: Router,
    /// Keep temporary directory alive for the lifetime of the app.
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary directory");
        let config = Config {
            database: DatabaseConfig {
                path: temp_dir.path().join("user-service.db").to_string_lossy().to_string(),
                pool_size: 4,
            },
            ..Config::default()
        };

        let ctx = Arc::new(AppContext::new_with_config(config).expect("failed to build context"));
        let router = router(Arc::clone(&ctx));

        Self { ctx, router, _temp_dir: temp_dir }
    }

    /// Send a request and return the status plus the parsed JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response<Body> =
            self.router.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");

        let body =
            if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("json body") };
        (status, body)
    }
}

pub fn json_request(method: &str, uri: &str, user_id: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder =
        Request::builder().method(method).uri(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(id) = user_id {
        builder = builder.header(USER_ID_HEADER, id);
    }
    builder.body(Body::from(body.to_string())).expect("valid request")
}

pub fn get_request(uri: &str, user_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = user_id {
        builder = builder.header(USER_ID_HEADER, id);
    }
    builder.body(Body::empty()).expect("valid request")
}
