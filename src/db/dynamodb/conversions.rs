//! Attribute conversion between DynamoDB items and domain types.
//!
//! Pure functions, testable without DynamoDB access. Numeric fields are
//! stored as decimal-safe strings; `notes = None` is stored as an empty
//! string, matching items written by earlier deployments of this table.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, NaiveDate, Utc};

use super::keys;
use crate::error::AppError;
use crate::models::{Athlete, TrainingSession};

pub const ENTITY_TYPE_ATHLETE: &str = "ATHLETE";
pub const ENTITY_TYPE_SESSION: &str = "SESSION";

/// Convert an Athlete to a DynamoDB item.
pub fn athlete_to_item(athlete: &Athlete) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::athlete_pk(&athlete.id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::athlete_sk(&athlete.id)),
    );
    item.insert(
        "Type".to_string(),
        AttributeValue::S(ENTITY_TYPE_ATHLETE.to_string()),
    );
    item.insert(
        "AthleteId".to_string(),
        AttributeValue::S(athlete.id.clone()),
    );
    item.insert("Name".to_string(), AttributeValue::S(athlete.name.clone()));

    item
}

/// Convert a DynamoDB item to an Athlete.
pub fn item_to_athlete(item: &HashMap<String, AttributeValue>) -> Result<Athlete, AppError> {
    Ok(Athlete {
        id: get_string(item, "AthleteId")?,
        name: get_string(item, "Name")?,
    })
}

/// Convert a TrainingSession to a DynamoDB item.
///
/// One put covers both the base-table entry and the GSI1 projection, so a
/// session appears exactly once in each.
pub fn session_to_item(session: &TrainingSession) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::athlete_pk(&session.athlete_id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::session_sk(&session.id)),
    );
    item.insert(
        "GSI1PK".to_string(),
        AttributeValue::S(keys::SESSION_GSI1_PK.to_string()),
    );
    item.insert(
        "GSI1SK".to_string(),
        AttributeValue::S(keys::session_gsi1_sk(session.date, &session.id)),
    );
    item.insert(
        "Type".to_string(),
        AttributeValue::S(ENTITY_TYPE_SESSION.to_string()),
    );
    item.insert(
        "SessionId".to_string(),
        AttributeValue::S(session.id.clone()),
    );
    item.insert(
        "AthleteId".to_string(),
        AttributeValue::S(session.athlete_id.clone()),
    );
    item.insert(
        "AthleteName".to_string(),
        AttributeValue::S(session.athlete_name.clone()),
    );
    item.insert(
        "Date".to_string(),
        AttributeValue::S(session.date.format("%Y-%m-%d").to_string()),
    );
    item.insert(
        "Duration".to_string(),
        AttributeValue::S(session.duration.to_string()),
    );
    item.insert(
        "Distance".to_string(),
        AttributeValue::S(session.distance.to_string()),
    );
    item.insert(
        "Notes".to_string(),
        AttributeValue::S(session.notes.clone().unwrap_or_default()),
    );
    item.insert(
        "CreatedAt".to_string(),
        AttributeValue::S(session.created_at.to_rfc3339()),
    );
    item.insert(
        "UpdatedAt".to_string(),
        AttributeValue::S(session.updated_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a TrainingSession.
pub fn item_to_session(
    item: &HashMap<String, AttributeValue>,
) -> Result<TrainingSession, AppError> {
    let notes = get_string(item, "Notes")?;

    Ok(TrainingSession {
        id: get_string(item, "SessionId")?,
        athlete_id: get_string(item, "AthleteId")?,
        athlete_name: get_string(item, "AthleteName")?,
        date: get_date(item, "Date")?,
        duration: get_f64(item, "Duration")?,
        distance: get_f64(item, "Distance")?,
        notes: if notes.is_empty() { None } else { Some(notes) },
        created_at: get_datetime(item, "CreatedAt")?,
        updated_at: get_datetime(item, "UpdatedAt")?,
    })
}

// ─── Attribute helpers ───────────────────────────────────────────

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, AppError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::Database(format!("Missing or invalid attribute: {}", key)))
}

fn get_f64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<f64, AppError> {
    get_string(item, key)?
        .parse()
        .map_err(|e| AppError::Database(format!("Invalid numeric attribute {}: {}", key, e)))
}

fn get_date(item: &HashMap<String, AttributeValue>, key: &str) -> Result<NaiveDate, AppError> {
    let s = get_string(item, key)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|e| AppError::Database(format!("Invalid date attribute {}: {}", key, e)))
}

fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, AppError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::Database(format!("Invalid datetime attribute {}: {}", key, e)))
}
