// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use training_tracker::config::Config;
use training_tracker::db::{DynStore, MemoryStore};
use training_tracker::routes::create_router;
use training_tracker::AppState;

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let store: DynStore = Arc::new(MemoryStore::new());

    let state = Arc::new(AppState { config, store });

    (create_router(state.clone()), state)
}

/// Fire one request at the app and return status plus parsed JSON body.
/// A body of `None` sends an empty request; an empty response body parses
/// to `serde_json::Value::Null`.
#[allow(dead_code)]
pub async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Create an athlete via the API and return its generated id.
#[allow(dead_code)]
pub async fn create_athlete(app: &axum::Router, name: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/v1/athletes",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

/// Create a training session via the API and return its generated id.
#[allow(dead_code)]
pub async fn create_session(
    app: &axum::Router,
    athlete_id: &str,
    date: &str,
    duration: f64,
    distance: f64,
) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/v1/training-sessions",
        Some(serde_json::json!({
            "athlete_id": athlete_id,
            "date": date,
            "duration": duration,
            "distance": distance,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}
