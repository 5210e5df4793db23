// ABOUTME: Trophy identifiers and the monotonic per-trophy unlock state
// ABOUTME: TrophyState is a two-state machine; TrophyProgress maps ids to states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trophy identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrophyId {
    /// Save the first diary entry
    FirstEntry,
    /// Log seven consecutive days
    DiaryWeek,
    /// Log thirty consecutive days
    DiaryMonth,
    /// Log foods by voice
    VoiceLogger,
    /// Read daily tips
    TipReader,
    /// Reach the protein target
    ProteinChampion,
    /// Reach the iron target
    IronClad,
    /// Days in a row without a violation
    CleanStreak,
    /// Complete a recovery protocol
    FirstRecovery,
    /// Finish recovery fasts
    FastingMaster,
    /// Log sun exposure sessions
    SunSeeker,
    /// Unlock nine regular trophies
    CarnivoreLegend,
}

impl TrophyId {
    /// Every trophy id, the meta trophy last
    pub const ALL: [Self; 12] = [
        Self::FirstEntry,
        Self::DiaryWeek,
        Self::DiaryMonth,
        Self::VoiceLogger,
        Self::TipReader,
        Self::ProteinChampion,
        Self::IronClad,
        Self::CleanStreak,
        Self::FirstRecovery,
        Self::FastingMaster,
        Self::SunSeeker,
        Self::CarnivoreLegend,
    ];

    /// Stable `snake_case` wire code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FirstEntry => "first_entry",
            Self::DiaryWeek => "diary_week",
            Self::DiaryMonth => "diary_month",
            Self::VoiceLogger => "voice_logger",
            Self::TipReader => "tip_reader",
            Self::ProteinChampion => "protein_champion",
            Self::IronClad => "iron_clad",
            Self::CleanStreak => "clean_streak",
            Self::FirstRecovery => "first_recovery",
            Self::FastingMaster => "fasting_master",
            Self::SunSeeker => "sun_seeker",
            Self::CarnivoreLegend => "carnivore_legend",
        }
    }

    /// Parse a wire code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|id| id.code() == code)
    }
}

impl fmt::Display for TrophyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unlock state of one trophy
///
/// Locked → unlocked is the only transition. Once unlocked, `progress` and
/// `unlocked_at` never change again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrophyState {
    #[serde(default)]
    unlocked: bool,
    #[serde(default)]
    progress: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unlocked_at: Option<DateTime<Utc>>,
}

impl TrophyState {
    /// Whether the trophy is unlocked
    #[must_use]
    pub const fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Accumulated or best observed progress
    #[must_use]
    pub const fn progress(&self) -> u32 {
        self.progress
    }

    /// Unlock timestamp
    #[must_use]
    pub const fn unlocked_at(&self) -> Option<DateTime<Utc>> {
        self.unlocked_at
    }

    /// Add `increment` and unlock when `target` is reached
    ///
    /// Returns true only for the call that performs the unlock.
    pub fn advance(&mut self, increment: u32, target: u32, now: DateTime<Utc>) -> bool {
        if self.unlocked {
            return false;
        }
        let progress = self.progress.saturating_add(increment);
        self.commit(progress, progress >= target, now)
    }

    /// Record an instantaneous observation; progress keeps the best value seen
    ///
    /// Returns true only for the call that performs the unlock.
    pub fn observe(&mut self, value: u32, reached: bool, now: DateTime<Utc>) -> bool {
        if self.unlocked {
            return false;
        }
        let progress = self.progress.max(value);
        self.commit(progress, reached, now)
    }

    /// Clear progress of a locked trophy; returns false when already unlocked
    pub fn reset_progress(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        self.progress = 0;
        true
    }

    fn commit(&mut self, progress: u32, reached: bool, now: DateTime<Utc>) -> bool {
        // progress and unlock flag are written together
        *self = Self {
            unlocked: reached,
            progress,
            unlocked_at: reached.then_some(now),
        };
        reached
    }
}

/// Unlock state of every trophy, persisted by the progress store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrophyProgress {
    states: BTreeMap<TrophyId, TrophyState>,
}

impl TrophyProgress {
    /// Fresh progress with every trophy locked
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of one trophy; absent trophies read as locked with zero progress
    #[must_use]
    pub fn get(&self, id: TrophyId) -> TrophyState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Mutable state of one trophy, inserted locked if absent
    pub fn state_mut(&mut self, id: TrophyId) -> &mut TrophyState {
        self.states.entry(id).or_default()
    }

    /// Iterate recorded states
    pub fn iter(&self) -> impl Iterator<Item = (TrophyId, TrophyState)> + '_ {
        self.states.iter().map(|(id, state)| (*id, *state))
    }
}
