// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Athlete model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored athlete record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    /// Opaque unique identifier (UUIDv4 when server-generated)
    pub id: String,
    /// Display name
    pub name: String,
}

/// Input payload for creating or updating an athlete.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AthleteInput {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}
