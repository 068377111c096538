// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod seed;
pub mod stats;

pub use stats::{compute_statistics, filter_and_sort, paginate, SessionFilter};
