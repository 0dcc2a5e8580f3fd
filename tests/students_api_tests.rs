// SPDX-License-Identifier: MIT

//! Student registry endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_create_and_list_students() {
    let (app, _dir) = common::create_test_app().await;

    let (status, body) = common::send(
        &app,
        common::json_request(
            "POST",
            "/api/students",
            json!({"name": "Luna", "category": "Fire"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("Luna"));
    assert_eq!(body["data"]["category"], json!("Fire"));
    assert_eq!(body["data"]["totalPoints"], json!(0));

    let (status, body) = common::send(&app, common::empty_request("GET", "/api/students")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_student_missing_fields() {
    let (app, _dir) = common::create_test_app().await;

    let (status, body) = common::send(
        &app,
        common::json_request("POST", "/api/students", json!({"name": "Luna"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    // Whitespace-only fields count as missing
    let (status, _) = common::send(
        &app,
        common::json_request(
            "POST",
            "/api/students",
            json!({"name": "   ", "category": "Fire"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_name_is_case_insensitive() {
    let (app, _dir) = common::create_test_app().await;
    common::create_student(&app, "Luna", "Fire").await;

    // Different casing and whitespace padding still collide after trimming
    let (status, body) = common::send(
        &app,
        common::json_request(
            "POST",
            "/api/students",
            json!({"name": "  LUNA ", "category": "Water"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let (app, _dir) = common::create_test_app().await;

    let a = common::create_student(&app, "Luna", "Fire").await;
    let b = common::create_student(&app, "Milo", "Water").await;
    let c = common::create_student(&app, "Nova", "Grass").await;

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[tokio::test]
async fn test_update_total_points() {
    let (app, _dir) = common::create_test_app().await;
    let id = common::create_student(&app, "Luna", "Fire").await;

    let (status, body) = common::send(
        &app,
        common::json_request(
            "PUT",
            &format!("/api/students/{}", id),
            json!({"totalPoints": 150}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalPoints"], json!(150));
}

#[tokio::test]
async fn test_update_without_points_leaves_student_unchanged() {
    let (app, _dir) = common::create_test_app().await;
    let id = common::create_student(&app, "Luna", "Fire").await;

    let (status, body) = common::send(
        &app,
        common::json_request("PUT", &format!("/api/students/{}", id), json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalPoints"], json!(0));
}

#[tokio::test]
async fn test_update_invalid_and_unknown_id() {
    let (app, _dir) = common::create_test_app().await;

    let (status, _) = common::send(
        &app,
        common::json_request("PUT", "/api/students/abc", json!({"totalPoints": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = common::send(
        &app,
        common::json_request("PUT", "/api/students/999", json!({"totalPoints": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_preserving_order() {
    let (app, _dir) = common::create_test_app().await;
    let a = common::create_student(&app, "Luna", "Fire").await;
    let b = common::create_student(&app, "Milo", "Water").await;
    let c = common::create_student(&app, "Nova", "Grass").await;

    let (status, _) = common::send(
        &app,
        common::empty_request("DELETE", &format!("/api/students/{}", b)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::send(&app, common::empty_request("GET", "/api/students")).await;
    let survivors: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(survivors, vec![a, c]);
}

#[tokio::test]
async fn test_delete_invalid_and_unknown_id() {
    let (app, _dir) = common::create_test_app().await;

    let (status, _) =
        common::send(&app, common::empty_request("DELETE", "/api/students/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        common::send(&app, common::empty_request("DELETE", "/api/students/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_route_returns_envelope() {
    let (app, _dir) = common::create_test_app().await;

    let (status, body) = common::send(&app, common::empty_request("GET", "/api/nothing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Endpoint não encontrado"));
}
