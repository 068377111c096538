// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training Tracker: a REST API for athletes and their training sessions.
//!
//! Records live either in an in-process map (demo and test use) or in
//! DynamoDB behind a single-table design; see the `db` module.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::DynStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: DynStore,
}
