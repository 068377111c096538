// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for athletes.

use crate::error::{validate_input, AppError, Result};
use crate::models::{Athlete, AthleteInput, Statistics};
use crate::services::compute_statistics;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/athletes", get(list_athletes).post(create_athlete))
        .route(
            "/v1/athletes/{id}",
            get(get_athlete).put(update_athlete).delete(delete_athlete),
        )
        .route("/v1/athletes/{id}/statistics", get(athlete_statistics))
}

fn athlete_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Athlete with id '{}' not found", id))
}

/// List all athletes.
async fn list_athletes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Athlete>>> {
    Ok(Json(state.store.list_athletes().await?))
}

/// Create a new athlete with a generated id.
async fn create_athlete(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AthleteInput>,
) -> Result<(StatusCode, Json<Athlete>)> {
    validate_input(&input)?;

    let athlete = Athlete {
        id: uuid::Uuid::new_v4().to_string(),
        name: input.name,
    };

    state.store.put_athlete(&athlete).await?;

    tracing::debug!(athlete_id = %athlete.id, "Created athlete");

    Ok((StatusCode::CREATED, Json(athlete)))
}

/// Get a single athlete by id.
async fn get_athlete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Athlete>> {
    let athlete = state
        .store
        .get_athlete(&id)
        .await?
        .ok_or_else(|| athlete_not_found(&id))?;

    Ok(Json(athlete))
}

/// Replace an existing athlete.
///
/// Sessions keep the athlete name that was current when they were written;
/// a rename here does not propagate to them.
async fn update_athlete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<AthleteInput>,
) -> Result<Json<Athlete>> {
    validate_input(&input)?;

    if state.store.get_athlete(&id).await?.is_none() {
        return Err(athlete_not_found(&id));
    }

    let athlete = Athlete {
        id,
        name: input.name,
    };

    state.store.put_athlete(&athlete).await?;

    Ok(Json(athlete))
}

#[derive(Deserialize)]
struct DeleteAthleteQuery {
    /// Also delete all of the athlete's training sessions
    #[serde(default)]
    cascade: bool,
}

/// Delete an athlete, optionally cascading to their training sessions.
///
/// The cascade runs session deletion first, then the athlete delete; the
/// two phases are not atomic, so a failure in between can leave the
/// athlete in place with some sessions already gone.
async fn delete_athlete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<DeleteAthleteQuery>,
) -> Result<StatusCode> {
    if state.store.get_athlete(&id).await?.is_none() {
        return Err(athlete_not_found(&id));
    }

    let session_count = state.store.list_sessions_by_athlete(&id).await?.len();
    if session_count > 0 && !params.cascade {
        return Err(AppError::Conflict {
            code: "athlete_has_sessions",
            message: format!(
                "Cannot delete athlete: they have {} training session(s). \
                 Use cascade=true to delete the athlete and all their sessions.",
                session_count
            ),
            details: Some(serde_json::json!({ "sessionCount": session_count })),
        });
    }

    if params.cascade {
        let deleted = state.store.delete_sessions_by_athlete(&id).await?;
        tracing::info!(athlete_id = %id, deleted, "Cascade-deleted sessions");
    }

    state.store.delete_athlete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate statistics over one athlete's sessions.
async fn athlete_statistics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Statistics>> {
    if state.store.get_athlete(&id).await?.is_none() {
        return Err(athlete_not_found(&id));
    }

    let sessions = state.store.list_sessions_by_athlete(&id).await?;

    Ok(Json(compute_statistics(&sessions)))
}
