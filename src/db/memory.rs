// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage backend.
//!
//! Each [`MemoryStore`] is an explicitly owned instance, so tests get
//! isolation by constructing a fresh store rather than clearing shared
//! state. Concurrent writers are last-write-wins per entry with no
//! cross-item isolation, which is acceptable for single-process demo use.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::db::Store;
use crate::error::AppError;
use crate::models::{Athlete, TrainingSession};

/// In-process map-backed store.
#[derive(Default)]
pub struct MemoryStore {
    athletes: DashMap<String, Athlete>,
    sessions: DashMap<String, TrainingSession>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn put_athlete(&self, athlete: &Athlete) -> Result<(), AppError> {
        self.athletes.insert(athlete.id.clone(), athlete.clone());
        Ok(())
    }

    async fn get_athlete(&self, id: &str) -> Result<Option<Athlete>, AppError> {
        Ok(self.athletes.get(id).map(|a| a.clone()))
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>, AppError> {
        Ok(self.athletes.iter().map(|a| a.clone()).collect())
    }

    async fn delete_athlete(&self, id: &str) -> Result<(), AppError> {
        self.athletes.remove(id);
        Ok(())
    }

    async fn put_session(&self, session: &TrainingSession) -> Result<(), AppError> {
        self.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn get_session(&self, id: &str) -> Result<Option<TrainingSession>, AppError> {
        Ok(self.sessions.get(id).map(|s| s.clone()))
    }

    async fn list_all_sessions(&self) -> Result<Vec<TrainingSession>, AppError> {
        Ok(self.sessions.iter().map(|s| s.clone()).collect())
    }

    async fn list_sessions_by_athlete(
        &self,
        athlete_id: &str,
    ) -> Result<Vec<TrainingSession>, AppError> {
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.athlete_id == athlete_id)
            .map(|s| s.clone())
            .collect())
    }

    async fn delete_session(&self, id: &str) -> Result<(), AppError> {
        self.sessions.remove(id);
        Ok(())
    }

    async fn delete_sessions_by_athlete(&self, athlete_id: &str) -> Result<usize, AppError> {
        let ids: Vec<String> = self
            .sessions
            .iter()
            .filter(|s| s.athlete_id == athlete_id)
            .map(|s| s.id.clone())
            .collect();

        for id in &ids {
            self.sessions.remove(id);
        }

        Ok(ids.len())
    }
}
