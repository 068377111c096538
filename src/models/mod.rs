// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod athlete;
pub mod session;
pub mod stats;

pub use athlete::{Athlete, AthleteInput};
pub use session::{Pagination, SessionListResponse, TrainingSession, TrainingSessionInput};
pub use stats::Statistics;
