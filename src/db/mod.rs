// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer.
//!
//! The [`Store`] trait is the backend-agnostic persistence contract for
//! athletes and training sessions. Two implementations exist:
//!
//! - [`MemoryStore`]: an owned in-process map, for demos and tests
//! - [`DynamoStore`]: DynamoDB with a single-table design
//!
//! All puts are idempotent upserts. Absent-item reads return `None`, never
//! an error, so callers can distinguish "not found" from backend failure.

pub mod dynamodb;
pub mod memory;

pub use dynamodb::DynamoStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, StorageBackend};
use crate::error::AppError;
use crate::models::{Athlete, TrainingSession};

/// Shared handle to the active storage backend.
pub type DynStore = Arc<dyn Store>;

/// Backend-agnostic persistence contract.
#[async_trait]
pub trait Store: Send + Sync {
    /// Upsert an athlete by id (overwrite semantics).
    async fn put_athlete(&self, athlete: &Athlete) -> Result<(), AppError>;

    /// Look up an athlete by id.
    async fn get_athlete(&self, id: &str) -> Result<Option<Athlete>, AppError>;

    /// All athletes, in no particular order.
    async fn list_athletes(&self) -> Result<Vec<Athlete>, AppError>;

    /// Delete an athlete. No-op if absent.
    async fn delete_athlete(&self, id: &str) -> Result<(), AppError>;

    /// Upsert a training session by id (overwrite semantics).
    async fn put_session(&self, session: &TrainingSession) -> Result<(), AppError>;

    /// Look up a training session by id.
    async fn get_session(&self, id: &str) -> Result<Option<TrainingSession>, AppError>;

    /// All training sessions across all athletes.
    async fn list_all_sessions(&self) -> Result<Vec<TrainingSession>, AppError>;

    /// All training sessions owned by one athlete.
    async fn list_sessions_by_athlete(
        &self,
        athlete_id: &str,
    ) -> Result<Vec<TrainingSession>, AppError>;

    /// Delete a training session. No-op if absent.
    async fn delete_session(&self, id: &str) -> Result<(), AppError>;

    /// Delete all sessions owned by one athlete, returning the count deleted.
    ///
    /// Used for cascading athlete deletion. The sequence "delete sessions,
    /// then delete the athlete" is not atomic; a crash in between leaves
    /// orphaned sessions.
    async fn delete_sessions_by_athlete(&self, athlete_id: &str) -> Result<usize, AppError>;
}

/// Build the storage backend selected by the configuration.
pub async fn connect(config: &Config) -> Result<DynStore, AppError> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage backend");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::DynamoDb => {
            let store =
                DynamoStore::connect(&config.table_name, config.dynamodb_endpoint.as_deref())
                    .await?;
            Ok(Arc::new(store))
        }
    }
}
