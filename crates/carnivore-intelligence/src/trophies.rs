// ABOUTME: Trophy catalog and tracker applying count, streak, threshold and meta conditions
// ABOUTME: The meta trophy is settled at the end of every mutating call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Trophy Tracking
//!
//! Each trophy is a two-state machine (locked → unlocked). Count and streak
//! trophies accumulate increments, threshold trophies compare an instantaneous
//! percentage, and meta trophies count how many regular trophies are unlocked.
//!
//! Every mutating method re-evaluates meta trophies before returning, so no
//! caller can observe the regular unlock count at a meta target while the meta
//! trophy is still locked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use carnivore_core::errors::{AppError, AppResult};
use carnivore_core::models::{TrophyId, TrophyProgress};

/// Unlock condition of a trophy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrophyCondition {
    /// Cumulative increments reach `target`
    Count {
        /// Increments required
        target: u32,
    },
    /// Consecutive qualifying periods reach `target`; continuity is validated by the caller
    Streak {
        /// Consecutive periods required
        target: u32,
    },
    /// A supplied percentage reaches `target_percent`
    Threshold {
        /// Percentage required
        target_percent: f64,
    },
    /// Number of unlocked regular trophies reaches `target`
    Meta {
        /// Unlocked regular trophies required
        target: u32,
    },
}

impl TrophyCondition {
    /// Whether this is a meta condition
    #[must_use]
    pub const fn is_meta(&self) -> bool {
        matches!(self, Self::Meta { .. })
    }
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrophyDefinition {
    /// Trophy id
    pub id: TrophyId,
    /// Display title
    pub title: String,
    /// What the user has to do
    pub description: String,
    /// Unlock condition
    pub condition: TrophyCondition,
}

impl TrophyDefinition {
    fn new(id: TrophyId, title: &str, description: &str, condition: TrophyCondition) -> Self {
        Self {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            condition,
        }
    }
}

/// Set of trophy definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrophyCatalog {
    definitions: Vec<TrophyDefinition>,
}

impl Default for TrophyCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl TrophyCatalog {
    /// Catalog from explicit definitions
    #[must_use]
    pub const fn new(definitions: Vec<TrophyDefinition>) -> Self {
        Self { definitions }
    }

    /// Eleven regular trophies plus the `carnivore_legend` meta trophy (target 9)
    #[must_use]
    pub fn default_catalog() -> Self {
        use TrophyCondition::{Count, Meta, Streak, Threshold};

        Self::new(vec![
            TrophyDefinition::new(
                TrophyId::FirstEntry,
                "First Bite",
                "Save your first diary entry",
                Count { target: 1 },
            ),
            TrophyDefinition::new(
                TrophyId::DiaryWeek,
                "Week Warrior",
                "Log food seven days in a row",
                Streak { target: 7 },
            ),
            TrophyDefinition::new(
                TrophyId::DiaryMonth,
                "Month of Meat",
                "Log food thirty days in a row",
                Streak { target: 30 },
            ),
            TrophyDefinition::new(
                TrophyId::VoiceLogger,
                "Voice Logger",
                "Log ten meals by voice",
                Count { target: 10 },
            ),
            TrophyDefinition::new(
                TrophyId::TipReader,
                "Student of the Steak",
                "Read twenty-five daily tips",
                Count { target: 25 },
            ),
            TrophyDefinition::new(
                TrophyId::ProteinChampion,
                "Protein Champion",
                "Reach your daily protein target",
                Threshold {
                    target_percent: 100.0,
                },
            ),
            TrophyDefinition::new(
                TrophyId::IronClad,
                "Iron Clad",
                "Reach your daily iron target",
                Threshold {
                    target_percent: 100.0,
                },
            ),
            TrophyDefinition::new(
                TrophyId::CleanStreak,
                "Clean Streak",
                "Go fourteen days without a violation",
                Streak { target: 14 },
            ),
            TrophyDefinition::new(
                TrophyId::FirstRecovery,
                "Back on Track",
                "Complete a recovery protocol",
                Count { target: 1 },
            ),
            TrophyDefinition::new(
                TrophyId::FastingMaster,
                "Fasting Master",
                "Finish five recovery fasts",
                Count { target: 5 },
            ),
            TrophyDefinition::new(
                TrophyId::SunSeeker,
                "Sun Seeker",
                "Log ten sun exposure sessions",
                Count { target: 10 },
            ),
            TrophyDefinition::new(
                TrophyId::CarnivoreLegend,
                "Carnivore Legend",
                "Unlock nine other trophies",
                Meta { target: 9 },
            ),
        ])
    }

    /// Definition of one trophy
    #[must_use]
    pub fn definition(&self, id: TrophyId) -> Option<&TrophyDefinition> {
        self.definitions.iter().find(|def| def.id == id)
    }

    /// Every definition in catalog order
    #[must_use]
    pub fn definitions(&self) -> &[TrophyDefinition] {
        &self.definitions
    }

    fn require(&self, id: TrophyId) -> AppResult<&TrophyDefinition> {
        self.definition(id)
            .ok_or_else(|| AppError::not_found(format!("Trophy '{id}'")))
    }
}

/// Applies user actions to trophy progress
#[derive(Debug, Clone, PartialEq)]
pub struct TrophyTracker {
    catalog: TrophyCatalog,
    progress: TrophyProgress,
}

impl TrophyTracker {
    /// Tracker over a catalog and previously persisted progress
    #[must_use]
    pub const fn new(catalog: TrophyCatalog, progress: TrophyProgress) -> Self {
        Self { catalog, progress }
    }

    /// Tracker over the default catalog
    #[must_use]
    pub fn with_default_catalog(progress: TrophyProgress) -> Self {
        Self::new(TrophyCatalog::default_catalog(), progress)
    }

    /// Current progress
    #[must_use]
    pub const fn progress(&self) -> &TrophyProgress {
        &self.progress
    }

    /// Catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &TrophyCatalog {
        &self.catalog
    }

    /// Consume the tracker and return its progress
    #[must_use]
    pub fn into_progress(self) -> TrophyProgress {
        self.progress
    }

    /// Add `increment` to a count or streak trophy
    ///
    /// A no-op on an unlocked trophy. Returns every trophy unlocked by this
    /// call, including a meta trophy unlocked as a consequence.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an id outside the catalog and
    /// `InvalidInput` for threshold or meta trophies.
    pub fn update_progress(
        &mut self,
        id: TrophyId,
        increment: u32,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<TrophyId>> {
        let target = match self.catalog.require(id)?.condition {
            TrophyCondition::Count { target } | TrophyCondition::Streak { target } => target,
            TrophyCondition::Threshold { .. } => {
                return Err(AppError::invalid_input(format!(
                    "Trophy '{id}' is a threshold trophy; use record_threshold"
                )));
            }
            TrophyCondition::Meta { .. } => {
                return Err(AppError::invalid_input(format!(
                    "Trophy '{id}' is derived and cannot be incremented"
                )));
            }
        };

        let mut unlocked = Vec::new();
        if self.progress.state_mut(id).advance(increment, target, now) {
            unlocked.push(id);
        }
        unlocked.extend(self.settle_meta(now));
        self.log_unlocks(&unlocked);
        Ok(unlocked)
    }

    /// Compare a percentage against a threshold trophy
    ///
    /// Progress keeps the best whole percent observed while locked.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an id outside the catalog and
    /// `InvalidInput` when the trophy is not a threshold trophy.
    pub fn record_threshold(
        &mut self,
        id: TrophyId,
        percent: f64,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<TrophyId>> {
        let TrophyCondition::Threshold { target_percent } = self.catalog.require(id)?.condition
        else {
            return Err(AppError::invalid_input(format!(
                "Trophy '{id}' is not a threshold trophy"
            )));
        };

        let percent = if percent.is_finite() { percent.max(0.0) } else { 0.0 };
        let whole_percent = percent.floor().min(f64::from(u32::MAX)) as u32;

        let mut unlocked = Vec::new();
        if self
            .progress
            .state_mut(id)
            .observe(whole_percent, percent >= target_percent, now)
        {
            unlocked.push(id);
        }
        unlocked.extend(self.settle_meta(now));
        self.log_unlocks(&unlocked);
        Ok(unlocked)
    }

    /// Reset a broken streak; returns false when the trophy is already unlocked
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an id outside the catalog and
    /// `InvalidInput` when the trophy is not a streak trophy.
    pub fn reset_streak(&mut self, id: TrophyId) -> AppResult<bool> {
        if !matches!(
            self.catalog.require(id)?.condition,
            TrophyCondition::Streak { .. }
        ) {
            return Err(AppError::invalid_input(format!(
                "Trophy '{id}' is not a streak trophy"
            )));
        }
        Ok(self.progress.state_mut(id).reset_progress())
    }

    /// Re-evaluate meta trophies against the current progress
    ///
    /// Used after loading progress written by an older catalog.
    pub fn reconcile(&mut self, now: DateTime<Utc>) -> Vec<TrophyId> {
        let unlocked = self.settle_meta(now);
        self.log_unlocks(&unlocked);
        unlocked
    }

    fn settle_meta(&mut self, now: DateTime<Utc>) -> Vec<TrophyId> {
        let regular_unlocked = self
            .catalog
            .definitions
            .iter()
            .filter(|def| !def.condition.is_meta() && self.progress.get(def.id).unlocked())
            .count();
        let regular_unlocked = u32::try_from(regular_unlocked).unwrap_or(u32::MAX);

        let mut unlocked = Vec::new();
        for def in &self.catalog.definitions {
            if let TrophyCondition::Meta { target } = def.condition {
                let reached = regular_unlocked >= target;
                if self
                    .progress
                    .state_mut(def.id)
                    .observe(regular_unlocked, reached, now)
                {
                    unlocked.push(def.id);
                }
            }
        }
        unlocked
    }

    fn log_unlocks(&self, unlocked: &[TrophyId]) {
        for id in unlocked {
            let title = self
                .catalog
                .definition(*id)
                .map_or("", |def| def.title.as_str());
            info!(trophy = %id, title, "Trophy unlocked");
        }
    }
}
