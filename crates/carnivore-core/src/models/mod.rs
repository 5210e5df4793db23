// ABOUTME: Core data models for the carnivore tracker engine
// ABOUTME: Re-exports nutrient codes, food entries, profiles, daily logs, protocols and trophies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the data structures exchanged between the computation
//! engine and its collaborators (log store, progress store, food normalizer).
//!
//! ## Design Principles
//!
//! - **Closed nutrient set**: `Nutrient` is an enum and per-nutrient tables are
//!   fixed arrays, so a typo can never produce a silently zeroed field
//! - **Serializable**: all models use `snake_case` wire names
//! - **Monotonic state**: trophy state only moves from locked to unlocked
//!
//! ## Core Models
//!
//! - `Nutrient` / `NutrientTotals`: nutrient codes and dense totals
//! - `FoodEntry`: one logged food with absolute nutrient amounts
//! - `UserProfile`: read-only input used to scale targets
//! - `DailyLog`: date-keyed diary record
//! - `RecoveryProtocol`: remediation plan generated after a violation
//! - `TrophyProgress`: per-trophy unlock state

mod daily_log;
mod food;
mod nutrient;
mod profile;
mod recovery;
mod trophy;

// Nutrient codes
pub use nutrient::{sanitize_amount, Nutrient, NutrientTotals, NutrientUnit};

// Food domain
pub use food::{FoodCategory, FoodEntry, FoodUnit, NormalizedFood};

// Profile domain
pub use profile::{ActivityLevel, Gender, UserProfile};

// Diary domain
pub use daily_log::DailyLog;

// Recovery domain
pub use recovery::{RecoveryProtocol, RecoverySeverity, RecoveryTodo, ViolationCategory};

// Trophy domain
pub use trophy::{TrophyId, TrophyProgress, TrophyState};
