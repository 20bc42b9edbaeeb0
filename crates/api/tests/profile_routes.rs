//! End-to-end tests for the profile endpoints against a real SQLite file

mod support;

use axum::http::StatusCode;
use serde_json::{json, Value};
use support::{get_request, json_request, TestApp};
use uuid::Uuid;

const ME: &str = "/api/v1/users/me";

async fn create(app: &TestApp, user_id: Uuid, full_name: &str, role: &str) -> (StatusCode, Value) {
    app.send(json_request(
        "POST",
        "/internal/profiles",
        None,
        &json!({ "userId": user_id, "fullName": full_name, "role": role }),
    ))
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn create_profile_returns_201_with_defaults() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();

    let (status, body) = create(&app, user_id, "Ada", "INSTRUCTOR").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "userId": user_id.to_string(),
            "fullName": "Ada",
            "bio": "A new instructor on MyLearn.",
            "profilePictureUrl": null,
            "role": "INSTRUCTOR",
        })
    );
}

// A duplicate creation still answers 201 and hands back the stored profile;
// callers cannot tell it apart from a fresh creation.
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_create_returns_201_with_original_profile() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();

    let (_, first) = create(&app, user_id, "Ada", "INSTRUCTOR").await;
    let (status, second) = create(&app, user_id, "Grace", "LEARNER").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second, first);
    assert_eq!(second["fullName"], "Ada");
    assert_eq!(second["role"], "INSTRUCTOR");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_unknown_role_is_400() {
    let app = TestApp::new();

    let (status, body) = create(&app, Uuid::new_v4(), "Ada", "GUEST").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "InvalidInput");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_malformed_json_is_400() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/internal/profiles")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"userId\": "))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "InvalidInput");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_me_returns_own_profile() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();
    let (_, created) = create(&app, user_id, "Linus", "LEARNER").await;

    let (status, body) = app.send(get_request(ME, Some(&user_id.to_string()))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_me_without_profile_is_404() {
    let app = TestApp::new();

    let (status, body) = app.send(get_request(ME, Some(&Uuid::new_v4().to_string()))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "NotFound");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_me_with_malformed_header_is_400() {
    let app = TestApp::new();

    let (status, body) = app.send(get_request(ME, Some("not-a-uuid"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user ID format.");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_me_without_header_is_400() {
    let app = TestApp::new();

    let (status, body) = app.send(get_request(ME, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "InvalidInput");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_me_changes_only_supplied_fields() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();
    create(&app, user_id, "Ada", "INSTRUCTOR").await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            ME,
            Some(&user_id.to_string()),
            &json!({ "bio": "Teaches distributed systems", "fullName": null }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fullName"], "Ada");
    assert_eq!(body["bio"], "Teaches distributed systems");
    assert_eq!(body["profilePictureUrl"], Value::Null);
    assert_eq!(body["role"], "INSTRUCTOR");

    let (_, stored) = app.send(get_request(ME, Some(&user_id.to_string()))).await;
    assert_eq!(stored, body);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_me_ignores_role_in_body() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();
    create(&app, user_id, "Ada", "LEARNER").await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            ME,
            Some(&user_id.to_string()),
            &json!({ "role": "ADMIN", "profilePictureUrl": "https://cdn.example.com/ada.png" }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "LEARNER");
    assert_eq!(body["profilePictureUrl"], "https://cdn.example.com/ada.png");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_me_without_profile_is_404() {
    let app = TestApp::new();

    let (status, _) = app
        .send(json_request(
            "PUT",
            ME,
            Some(&Uuid::new_v4().to_string()),
            &json!({ "bio": "hello" }),
        ))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_me_with_malformed_header_is_400_not_404() {
    let app = TestApp::new();

    let (status, _) =
        app.send(json_request("PUT", ME, Some("12345"), &json!({ "bio": "hello" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_by_id_returns_any_profile() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let (_, created) = create(&app, owner, "Grace", "ADMIN").await;

    // No caller header: the public lookup does not need one
    let (status, body) = app.send(get_request(&format!("/api/v1/users/{owner}"), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_by_unknown_id_is_404() {
    let app = TestApp::new();

    let (status, _) =
        app.send(get_request(&format!("/api/v1/users/{}", Uuid::new_v4()), None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_by_malformed_id_is_400() {
    let app = TestApp::new();

    let (status, body) = app.send(get_request("/api/v1/users/not-a-uuid", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user ID format.");
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_database_ok() {
    let app = TestApp::new();

    let (status, body) = app.send(get_request("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"][0]["name"], "database");
    assert_eq!(body["components"][0]["isHealthy"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn registration_then_self_edit_scenario() {
    let app = TestApp::new();
    let ada = Uuid::new_v4();
    let header = ada.to_string();

    let (status, _) = create(&app, ada, "Ada", "INSTRUCTOR").await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, me) = app.send(get_request(ME, Some(&header))).await;
    assert_eq!(me["bio"], "A new instructor on MyLearn.");

    app.send(json_request("PUT", ME, Some(&header), &json!({ "bio": "Teaches distributed systems" })))
        .await;

    let (status, public) = app.send(get_request(&format!("/api/v1/users/{ada}"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        public,
        json!({
            "userId": header,
            "fullName": "Ada",
            "bio": "Teaches distributed systems",
            "profilePictureUrl": null,
            "role": "INSTRUCTOR",
        })
    );
}
