// SPDX-License-Identifier: MIT

//! Shared helpers for integration tests.

use axum::body::Body;
use axum::http::{header, Request};
use classdex::config::Config;
use classdex::db::JsonStore;
use classdex::routes::create_router;
use classdex::AppState;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Create a test app backed by a throwaway data directory.
///
/// The returned `TempDir` guard must stay alive for the duration of the
/// test; dropping it removes the data directory.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonStore::open(dir.path()).await.expect("open store");
    let state = Arc::new(AppState {
        config: Config::default(),
        store,
    });
    (create_router(state), dir)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Build a bodyless request.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Send a request through a clone of the app and decode the JSON body.
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    request: Request<Body>,
) -> (axum::http::StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

/// Create a student and return its id.
#[allow(dead_code)]
pub async fn create_student(app: &axum::Router, name: &str, category: &str) -> u64 {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/students",
            serde_json::json!({"name": name, "category": category}),
        ),
    )
    .await;
    assert_eq!(status, axum::http::StatusCode::CREATED, "body: {}", body);
    body["data"]["id"].as_u64().expect("student id")
}

/// Create an activity template and return its id.
#[allow(dead_code)]
pub async fn create_template(app: &axum::Router, name: &str, default_points: i64) -> u64 {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/created-activities",
            serde_json::json!({"name": name, "defaultPoints": default_points}),
        ),
    )
    .await;
    assert_eq!(status, axum::http::StatusCode::CREATED, "body: {}", body);
    body["data"]["id"].as_u64().expect("template id")
}

/// Set a student's point total through the update endpoint.
#[allow(dead_code)]
pub async fn set_points(app: &axum::Router, id: u64, total_points: i64) {
    let (status, body) = send(
        app,
        json_request(
            "PUT",
            &format!("/api/students/{}", id),
            serde_json::json!({"totalPoints": total_points}),
        ),
    )
    .await;
    assert_eq!(status, axum::http::StatusCode::OK, "body: {}", body);
}
