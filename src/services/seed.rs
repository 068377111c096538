// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Example data seeding for demos and local development.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::db::DynStore;
use crate::error::AppError;
use crate::models::{Athlete, TrainingSession};

/// Seed the store with two example athletes and four training sessions.
///
/// Upsert semantics make this safe to run repeatedly.
pub async fn seed_demo_data(store: &DynStore) -> Result<(), AppError> {
    let athletes = [
        Athlete {
            id: "athlete-1".to_string(),
            name: "John Doe".to_string(),
        },
        Athlete {
            id: "athlete-2".to_string(),
            name: "Jane Smith".to_string(),
        },
    ];

    for athlete in &athletes {
        store.put_athlete(athlete).await?;
    }

    let sessions = [
        demo_session(
            "a1b2c3d4-e5f6-4a5b-8c9d-0e1f2a3b4c5d",
            "athlete-1",
            "John Doe",
            (2025, 10, 20),
            45.0,
            8.5,
            "Morning run with intervals",
        ),
        demo_session(
            "b2c3d4e5-f6a7-4b6c-9d0e-1f2a3b4c5d6e",
            "athlete-1",
            "John Doe",
            (2025, 10, 21),
            60.0,
            12.0,
            "Long steady run",
        ),
        demo_session(
            "c3d4e5f6-a7b8-4c7d-0e1f-2a3b4c5d6e7f",
            "athlete-2",
            "Jane Smith",
            (2025, 10, 22),
            30.0,
            5.0,
            "Easy recovery run",
        ),
        demo_session(
            "d4e5f6a7-b8c9-4d8e-1f2a-3b4c5d6e7f8a",
            "athlete-2",
            "Jane Smith",
            (2025, 10, 23),
            50.0,
            10.0,
            "Tempo run feeling strong",
        ),
    ];

    for session in &sessions {
        store.put_session(session).await?;
    }

    tracing::info!(
        athletes = athletes.len(),
        sessions = sessions.len(),
        "Seeded demo data"
    );

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn demo_session(
    id: &str,
    athlete_id: &str,
    athlete_name: &str,
    date: (i32, u32, u32),
    duration: f64,
    distance: f64,
    notes: &str,
) -> TrainingSession {
    let (year, month, day) = date;
    // Fixed timestamps keep seeded data deterministic across runs.
    let created = Utc
        .with_ymd_and_hms(year, month, day, 8, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    TrainingSession {
        id: id.to_string(),
        athlete_id: athlete_id.to_string(),
        athlete_name: athlete_name.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        duration,
        distance,
        notes: Some(notes.to_string()),
        created_at: created,
        updated_at: created,
    }
}
