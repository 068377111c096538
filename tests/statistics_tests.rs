// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregate statistics endpoints.

use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_global_statistics() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;
    common::create_session(&app, &id, "2025-10-20", 45.0, 8.5).await;
    common::create_session(&app, &id, "2025-10-21", 60.0, 12.0).await;

    let (status, body) =
        common::request(&app, "GET", "/v1/training-sessions/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], 2);
    assert_eq!(body["totalDuration"], 105.0);
    assert_eq!(body["totalDistance"], 20.5);
    assert_eq!(body["averageDuration"], 52.5);
    assert_eq!(body["averageDistance"], 10.25);
    assert_eq!(body["averagePace"], 5.12);
}

#[tokio::test]
async fn test_statistics_with_date_filter() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;
    common::create_session(&app, &id, "2025-10-20", 45.0, 8.5).await;
    common::create_session(&app, &id, "2025-10-21", 60.0, 12.0).await;
    common::create_session(&app, &id, "2025-10-22", 30.0, 5.0).await;

    let (status, body) = common::request(
        &app,
        "GET",
        "/v1/training-sessions/statistics?startDate=2025-10-21&endDate=2025-10-21",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], 1);
    assert_eq!(body["totalDuration"], 60.0);
    assert_eq!(body["averagePace"], 5.0);
}

#[tokio::test]
async fn test_statistics_empty_store_is_all_zeros() {
    let (app, _state) = common::create_test_app();

    let (status, body) =
        common::request(&app, "GET", "/v1/training-sessions/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], 0);
    assert_eq!(body["totalDuration"], 0.0);
    assert_eq!(body["averageDuration"], 0.0);
    assert_eq!(body["averagePace"], 0.0);
}

#[tokio::test]
async fn test_athlete_statistics_only_counts_their_sessions() {
    let (app, _state) = common::create_test_app();

    let john = common::create_athlete(&app, "John Doe").await;
    let jane = common::create_athlete(&app, "Jane Smith").await;
    common::create_session(&app, &john, "2025-10-20", 45.0, 8.5).await;
    common::create_session(&app, &jane, "2025-10-21", 60.0, 12.0).await;

    let (status, body) = common::request(
        &app,
        "GET",
        &format!("/v1/athletes/{}/statistics", john),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], 1);
    assert_eq!(body["totalDuration"], 45.0);
    assert_eq!(body["totalDistance"], 8.5);
}

#[tokio::test]
async fn test_athlete_statistics_for_unknown_athlete_is_404() {
    let (app, _state) = common::create_test_app();

    let (status, _) =
        common::request(&app, "GET", "/v1/athletes/missing/statistics", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_athlete_with_no_sessions_has_zero_statistics() {
    let (app, _state) = common::create_test_app();

    let id = common::create_athlete(&app, "John Doe").await;

    let (status, body) = common::request(
        &app,
        "GET",
        &format!("/v1/athletes/{}/statistics", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], 0);
    assert_eq!(body["averagePace"], 0.0);
}
