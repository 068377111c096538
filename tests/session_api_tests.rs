// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training session CRUD, name denormalization, and audit timestamps.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_create_session_denormalizes_athlete_name() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;

    let (status, body) = common::request(
        &app,
        "POST",
        "/v1/training-sessions",
        Some(json!({
            "athlete_id": id,
            "date": "2025-10-20",
            "duration": 45.0,
            "distance": 8.5,
            "notes": "Morning run",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["athlete_id"], id.as_str());
    assert_eq!(body["athlete_name"], "John Doe");
    assert_eq!(body["date"], "2025-10-20");
    assert_eq!(body["duration"], 45.0);
    assert_eq!(body["distance"], 8.5);
    assert_eq!(body["notes"], "Morning run");
    // New records start with matching audit timestamps
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_create_session_for_unknown_athlete_is_404() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::request(
        &app,
        "POST",
        "/v1/training-sessions",
        Some(json!({
            "athlete_id": "missing",
            "date": "2025-10-20",
            "duration": 45.0,
            "distance": 8.5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_update_session_preserves_created_at() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;
    let session_id = common::create_session(&app, &id, "2025-10-20", 45.0, 8.5).await;

    let (_, before) = common::request(
        &app,
        "GET",
        &format!("/v1/training-sessions/{}", session_id),
        None,
    )
    .await;
    let created_at = before["createdAt"].as_str().unwrap().to_string();

    let (status, after) = common::request(
        &app,
        "PUT",
        &format!("/v1/training-sessions/{}", session_id),
        Some(json!({
            "athlete_id": id,
            "date": "2025-10-21",
            "duration": 50.0,
            "distance": 9.0,
            "notes": "Adjusted",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["createdAt"], created_at.as_str());
    assert_ne!(after["updatedAt"], created_at.as_str());
    assert_eq!(after["date"], "2025-10-21");
    assert_eq!(after["duration"], 50.0);
    assert_eq!(after["notes"], "Adjusted");
}

#[tokio::test]
async fn test_update_session_can_reassign_athlete() {
    let (app, _state) = common::create_test_app();

    let john = common::create_athlete(&app, "John Doe").await;
    let jane = common::create_athlete(&app, "Jane Smith").await;
    let session_id = common::create_session(&app, &john, "2025-10-20", 45.0, 8.5).await;

    let (status, body) = common::request(
        &app,
        "PUT",
        &format!("/v1/training-sessions/{}", session_id),
        Some(json!({
            "athlete_id": jane,
            "date": "2025-10-20",
            "duration": 45.0,
            "distance": 8.5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["athlete_id"], jane.as_str());
    assert_eq!(body["athlete_name"], "Jane Smith");
}

#[tokio::test]
async fn test_update_unknown_session_is_404() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;

    let (status, _) = common::request(
        &app,
        "PUT",
        "/v1/training-sessions/missing",
        Some(json!({
            "athlete_id": id,
            "date": "2025-10-20",
            "duration": 45.0,
            "distance": 8.5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_session() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;
    let session_id = common::create_session(&app, &id, "2025-10-20", 45.0, 8.5).await;

    let (status, _) = common::request(
        &app,
        "DELETE",
        &format!("/v1/training-sessions/{}", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = common::request(
        &app,
        "GET",
        &format!("/v1/training-sessions/{}", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::request(
        &app,
        "DELETE",
        &format!("/v1/training-sessions/{}", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_without_notes_serializes_null() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;
    let session_id = common::create_session(&app, &id, "2025-10-20", 45.0, 8.5).await;

    let (status, body) = common::request(
        &app,
        "GET",
        &format!("/v1/training-sessions/{}", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["notes"].is_null());
}
