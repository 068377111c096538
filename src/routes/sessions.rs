// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for training sessions.

use crate::error::{validate_input, AppError, Result};
use crate::models::{SessionListResponse, Statistics, TrainingSession, TrainingSessionInput};
use crate::services::{compute_statistics, filter_and_sort, paginate, SessionFilter};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/v1/training-sessions",
            get(list_sessions).post(create_session),
        )
        .route("/v1/training-sessions/statistics", get(session_statistics))
        .route(
            "/v1/training-sessions/{id}",
            get(get_session).put(update_session).delete(delete_session),
        )
}

fn session_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Training session with id '{}' not found", id))
}

fn athlete_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Athlete with id '{}' not found", id))
}

fn parse_date(value: &str, param: &str) -> Result<NaiveDate> {
    value.parse().map_err(|_| {
        AppError::validation(format!(
            "Invalid {}: '{}' is not a valid date (expected YYYY-MM-DD)",
            param, value
        ))
    })
}

#[derive(Debug, Default, Deserialize)]
struct ListSessionsQuery {
    #[serde(rename = "startDate")]
    start_date: Option<String>,
    #[serde(rename = "endDate")]
    end_date: Option<String>,
    #[serde(rename = "athleteId")]
    athlete_id: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListSessionsQuery {
    fn filter(&self) -> Result<SessionFilter> {
        let start_date = self
            .start_date
            .as_deref()
            .map(|v| parse_date(v, "startDate"))
            .transpose()?;
        let end_date = self
            .end_date
            .as_deref()
            .map(|v| parse_date(v, "endDate"))
            .transpose()?;

        Ok(SessionFilter {
            start_date,
            end_date,
            athlete_id: self.athlete_id.clone(),
        })
    }

    fn page(&self) -> Result<(usize, usize)> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 1 || limit > MAX_LIMIT {
            return Err(AppError::validation(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }
        let offset = self.offset.unwrap_or(0);
        Ok((limit, offset))
    }
}

/// List training sessions with optional filters, newest first.
async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListSessionsQuery>,
) -> Result<Json<SessionListResponse>> {
    let filter = query.filter()?;
    let (limit, offset) = query.page()?;

    let sessions = state.store.list_all_sessions().await?;
    let filtered = filter_and_sort(sessions, &filter);
    let (data, pagination) = paginate(filtered, limit, offset);

    Ok(Json(SessionListResponse { data, pagination }))
}

/// Create a training session for an existing athlete.
///
/// The athlete's current name is copied onto the session at write time.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TrainingSessionInput>,
) -> Result<(StatusCode, Json<TrainingSession>)> {
    validate_input(&input)?;

    let athlete = state
        .store
        .get_athlete(&input.athlete_id)
        .await?
        .ok_or_else(|| athlete_not_found(&input.athlete_id))?;

    let now = Utc::now();
    let session = TrainingSession {
        id: uuid::Uuid::new_v4().to_string(),
        athlete_id: athlete.id,
        athlete_name: athlete.name,
        date: input.date,
        duration: input.duration,
        distance: input.distance,
        notes: input.notes,
        created_at: now,
        updated_at: now,
    };

    state.store.put_session(&session).await?;

    tracing::debug!(session_id = %session.id, athlete_id = %session.athlete_id, "Created training session");

    Ok((StatusCode::CREATED, Json(session)))
}

#[derive(Debug, Default, Deserialize)]
struct StatisticsQuery {
    #[serde(rename = "startDate")]
    start_date: Option<String>,
    #[serde(rename = "endDate")]
    end_date: Option<String>,
}

/// Aggregate statistics over all sessions, optionally date-bounded.
async fn session_statistics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<Statistics>> {
    let filter = SessionFilter {
        start_date: query
            .start_date
            .as_deref()
            .map(|v| parse_date(v, "startDate"))
            .transpose()?,
        end_date: query
            .end_date
            .as_deref()
            .map(|v| parse_date(v, "endDate"))
            .transpose()?,
        athlete_id: None,
    };

    let sessions = state.store.list_all_sessions().await?;
    let filtered = filter_and_sort(sessions, &filter);

    Ok(Json(compute_statistics(&filtered)))
}

/// Get a single training session by id.
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TrainingSession>> {
    let session = state
        .store
        .get_session(&id)
        .await?
        .ok_or_else(|| session_not_found(&id))?;

    Ok(Json(session))
}

/// Replace an existing training session.
///
/// `createdAt` is preserved from the stored record; `updatedAt` is set to
/// the time of this write. The athlete name is re-denormalized from the
/// (possibly different) athlete in the new payload.
async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<TrainingSessionInput>,
) -> Result<Json<TrainingSession>> {
    validate_input(&input)?;

    let existing = state
        .store
        .get_session(&id)
        .await?
        .ok_or_else(|| session_not_found(&id))?;

    let athlete = state
        .store
        .get_athlete(&input.athlete_id)
        .await?
        .ok_or_else(|| athlete_not_found(&input.athlete_id))?;

    let session = TrainingSession {
        id: existing.id,
        athlete_id: athlete.id,
        athlete_name: athlete.name,
        date: input.date,
        duration: input.duration,
        distance: input.distance,
        notes: input.notes,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    state.store.put_session(&session).await?;

    Ok(Json(session))
}

/// Delete a training session.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.store.get_session(&id).await?.is_none() {
        return Err(session_not_found(&id));
    }

    state.store.delete_session(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
