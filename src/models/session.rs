// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training session model for storage and API.
//!
//! Wire field names match the original public API: snake_case for the
//! athlete reference fields, camelCase for the audit timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored training session record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Unique identifier (UUIDv4)
    pub id: String,
    /// Owning athlete ID
    pub athlete_id: String,
    /// Athlete display name, denormalized at write time.
    /// Not refreshed if the athlete is later renamed.
    pub athlete_name: String,
    /// Calendar date of the session (no time component)
    pub date: NaiveDate,
    /// Duration in minutes
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// Creation timestamp (UTC), immutable after creation
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last-write timestamp (UTC), refreshed on every update
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input payload for creating or updating a training session.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TrainingSessionInput {
    #[validate(length(min = 1, message = "athlete_id must not be empty"))]
    pub athlete_id: String,
    pub date: NaiveDate,
    #[validate(range(min = 0.0, message = "duration must be non-negative"))]
    pub duration: f64,
    #[validate(range(min = 0.0, message = "distance must be non-negative"))]
    pub distance: f64,
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Response body for listing training sessions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub data: Vec<TrainingSession>,
    pub pagination: Pagination,
}
