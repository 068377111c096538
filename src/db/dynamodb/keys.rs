//! Key generation for the single-table design.
//!
//! Pure functions with no side effects. The encodings here are load-bearing:
//! existing tables depend on them byte-for-byte.

use chrono::NaiveDate;

pub const ATHLETE_PREFIX: &str = "ATHLETE#";
pub const SESSION_PREFIX: &str = "SESSION#";

/// Constant GSI1 partition key shared by every session item.
pub const SESSION_GSI1_PK: &str = "SESSION";

/// Partition key for an athlete record and all of its sessions.
///
/// Pattern: `ATHLETE#<athlete_id>`
pub fn athlete_pk(athlete_id: &str) -> String {
    format!("{ATHLETE_PREFIX}{athlete_id}")
}

/// Sort key for an athlete record (same as PK for single-item gets).
pub fn athlete_sk(athlete_id: &str) -> String {
    format!("{ATHLETE_PREFIX}{athlete_id}")
}

/// Sort key for a session item within its athlete's partition.
///
/// Pattern: `SESSION#<session_id>`
pub fn session_sk(session_id: &str) -> String {
    format!("{SESSION_PREFIX}{session_id}")
}

/// GSI1 sort key for a session.
///
/// Pattern: `<YYYY-MM-DD>#<session_id>`. The ISO date prefix makes the
/// index lexicographically date-ascending.
pub fn session_gsi1_sk(date: NaiveDate, session_id: &str) -> String {
    format!("{}#{session_id}", date.format("%Y-%m-%d"))
}
