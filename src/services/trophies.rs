// ABOUTME: Trophy progress service loading, mutating and saving through the progress store
// ABOUTME: Feeds daily metrics into the protein and iron threshold trophies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use carnivore_core::errors::AppResult;
use carnivore_core::models::{Nutrient, TrophyId, TrophyProgress};
use carnivore_intelligence::{CalculatedMetrics, TrophyCatalog, TrophyTracker};

use crate::storage::ProgressStore;

/// Persisted trophy operations
pub struct TrophyService<P> {
    store: Arc<P>,
    catalog: TrophyCatalog,
}

impl<P: ProgressStore> TrophyService<P> {
    /// Service over the default catalog
    #[must_use]
    pub fn new(store: Arc<P>) -> Self {
        Self::with_catalog(store, TrophyCatalog::default_catalog())
    }

    /// Service over a custom catalog
    #[must_use]
    pub const fn with_catalog(store: Arc<P>, catalog: TrophyCatalog) -> Self {
        Self { store, catalog }
    }

    /// Catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &TrophyCatalog {
        &self.catalog
    }

    /// Saved progress
    ///
    /// # Errors
    ///
    /// Returns the store error if loading fails
    pub async fn progress(&self) -> AppResult<TrophyProgress> {
        self.store.load().await
    }

    /// Advance a count or streak trophy and persist
    ///
    /// # Errors
    ///
    /// Returns tracker validation errors or the store error
    pub async fn update_progress(
        &self,
        id: TrophyId,
        increment: u32,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<TrophyId>> {
        let mut tracker = self.load_tracker().await?;
        let unlocked = tracker.update_progress(id, increment, now)?;
        self.store.save(tracker.progress()).await?;
        Ok(unlocked)
    }

    /// Record a percentage against a threshold trophy and persist
    ///
    /// # Errors
    ///
    /// Returns tracker validation errors or the store error
    pub async fn record_threshold(
        &self,
        id: TrophyId,
        percent: f64,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<TrophyId>> {
        let mut tracker = self.load_tracker().await?;
        let unlocked = tracker.record_threshold(id, percent, now)?;
        self.store.save(tracker.progress()).await?;
        Ok(unlocked)
    }

    /// Evaluate the protein and iron trophies against one day's metrics
    ///
    /// # Errors
    ///
    /// Returns the store error
    pub async fn record_daily_metrics(
        &self,
        metrics: &CalculatedMetrics,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<TrophyId>> {
        let mut tracker = self.load_tracker().await?;
        let protein = metrics.achievement_for(Nutrient::Protein).unwrap_or(0.0);

        let mut unlocked = tracker.record_threshold(TrophyId::ProteinChampion, protein, now)?;
        unlocked.extend(tracker.record_threshold(
            TrophyId::IronClad,
            metrics.iron_achievement,
            now,
        )?);
        debug!(
            protein_percent = protein,
            iron_percent = metrics.iron_achievement,
            unlocked = unlocked.len(),
            "Daily metrics applied to trophies"
        );

        self.store.save(tracker.progress()).await?;
        Ok(unlocked)
    }

    /// Reset a broken streak and persist; false when already unlocked
    ///
    /// # Errors
    ///
    /// Returns tracker validation errors or the store error
    pub async fn reset_streak(&self, id: TrophyId) -> AppResult<bool> {
        let mut tracker = self.load_tracker().await?;
        let reset = tracker.reset_streak(id)?;
        if reset {
            self.store.save(tracker.progress()).await?;
        }
        Ok(reset)
    }

    async fn load_tracker(&self) -> AppResult<TrophyTracker> {
        let progress = self.store.load().await?;
        Ok(TrophyTracker::new(self.catalog.clone(), progress))
    }
}
