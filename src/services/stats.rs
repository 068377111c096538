// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filtering, pagination and statistics over training sessions.
//!
//! The storage layer returns raw collections; everything here is a pure
//! in-memory derivation with no storage access.

use chrono::NaiveDate;

use crate::models::{Pagination, Statistics, TrainingSession};

/// Optional filters applied to a session listing.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    /// Keep sessions on or after this date (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Keep sessions on or before this date (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Keep sessions owned by this athlete
    pub athlete_id: Option<String>,
}

impl SessionFilter {
    pub fn matches(&self, session: &TrainingSession) -> bool {
        if let Some(start) = self.start_date {
            if session.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if session.date > end {
                return false;
            }
        }
        if let Some(athlete_id) = &self.athlete_id {
            if &session.athlete_id != athlete_id {
                return false;
            }
        }
        true
    }
}

/// Apply a filter and sort the survivors most-recent-first.
///
/// The sort is stable, so same-date sessions keep their incoming order.
pub fn filter_and_sort(
    sessions: Vec<TrainingSession>,
    filter: &SessionFilter,
) -> Vec<TrainingSession> {
    let mut filtered: Vec<TrainingSession> =
        sessions.into_iter().filter(|s| filter.matches(s)).collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Slice `[offset, offset + limit)` out of a filtered list.
///
/// `total` counts the post-filter, pre-pagination list.
pub fn paginate(
    sessions: Vec<TrainingSession>,
    limit: usize,
    offset: usize,
) -> (Vec<TrainingSession>, Pagination) {
    let total = sessions.len();
    let page: Vec<TrainingSession> = sessions.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + limit < total;

    (
        page,
        Pagination {
            total,
            limit,
            offset,
            has_more,
        },
    )
}

/// Aggregate count, sums, and averages over a set of sessions.
///
/// Averages fall back to 0.0 rather than dividing by zero, and every
/// value is rounded to 2 decimal places.
pub fn compute_statistics(sessions: &[TrainingSession]) -> Statistics {
    let total_sessions = sessions.len();
    let total_duration: f64 = sessions.iter().map(|s| s.duration).sum();
    let total_distance: f64 = sessions.iter().map(|s| s.distance).sum();

    let average_duration = if total_sessions > 0 {
        total_duration / total_sessions as f64
    } else {
        0.0
    };
    let average_distance = if total_sessions > 0 {
        total_distance / total_sessions as f64
    } else {
        0.0
    };
    let average_pace = if total_distance > 0.0 {
        total_duration / total_distance
    } else {
        0.0
    };

    Statistics {
        total_sessions,
        total_duration: round2(total_duration),
        total_distance: round2(total_distance),
        average_duration: round2(average_duration),
        average_distance: round2(average_distance),
        average_pace: round2(average_pace),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
