//! Aggregated statistics over training sessions.

use serde::{Deserialize, Serialize};

/// Aggregate statistics for a set of training sessions.
///
/// Averages are defined as 0.0 when their denominator is zero; all values
/// are rounded to 2 decimal places for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of sessions in the aggregate
    pub total_sessions: usize,
    /// Sum of durations (minutes)
    pub total_duration: f64,
    /// Sum of distances (kilometers)
    pub total_distance: f64,
    /// Mean duration per session (minutes)
    pub average_duration: f64,
    /// Mean distance per session (kilometers)
    pub average_distance: f64,
    /// Mean pace (minutes per kilometer)
    pub average_pace: f64,
}
