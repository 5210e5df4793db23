// ABOUTME: Persistence collaborators for diary logs and trophy progress
// ABOUTME: Async store traits with DashMap / RwLock backed in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Store Collaborators
//!
//! The engine owns no persistence. Hosts implement [`LogStore`] and
//! [`ProgressStore`] over their storage; the in-memory versions back tests
//! and the CLI.
//!
//! Saves are read-modify-write with no concurrency control. Two writers
//! racing on the same date both succeed and the later merge wins.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::RwLock;
use tracing::debug;

use carnivore_core::errors::AppResult;
use carnivore_core::models::{DailyLog, TrophyProgress};

/// Date-keyed diary store
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Record for `date`, if any
    async fn get_by_date(&self, date: NaiveDate) -> AppResult<Option<DailyLog>>;

    /// Merge the present fields of `log` into the stored record for its date
    async fn save(&self, log: DailyLog) -> AppResult<()>;
}

/// Trophy progress store
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Saved progress, or fresh progress when nothing was saved
    async fn load(&self) -> AppResult<TrophyProgress>;

    /// Replace the saved progress
    async fn save(&self, progress: &TrophyProgress) -> AppResult<()>;
}

/// `DashMap` backed log store
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    logs: DashMap<NaiveDate, DailyLog>,
}

impl InMemoryLogStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored days
    #[must_use]
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Whether no day has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn get_by_date(&self, date: NaiveDate) -> AppResult<Option<DailyLog>> {
        Ok(self.logs.get(&date).map(|entry| entry.value().clone()))
    }

    async fn save(&self, log: DailyLog) -> AppResult<()> {
        let date = log.date;
        match self.logs.entry(date) {
            Entry::Occupied(mut stored) => stored.get_mut().merge(log),
            Entry::Vacant(slot) => {
                slot.insert(log);
            }
        }
        debug!(%date, "Daily log saved");
        Ok(())
    }
}

/// `RwLock` backed progress store
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    progress: RwLock<TrophyProgress>,
}

impl InMemoryProgressStore {
    /// Store seeded with existing progress
    #[must_use]
    pub fn with_progress(progress: TrophyProgress) -> Self {
        Self {
            progress: RwLock::new(progress),
        }
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn load(&self) -> AppResult<TrophyProgress> {
        Ok(self.progress.read().await.clone())
    }

    async fn save(&self, progress: &TrophyProgress) -> AppResult<()> {
        *self.progress.write().await = progress.clone();
        Ok(())
    }
}
