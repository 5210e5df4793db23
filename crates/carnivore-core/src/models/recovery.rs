// ABOUTME: Violation categories and the recovery protocol generated after a dietary lapse
// ABOUTME: RecoveryProtocol, RecoveryTodo, RecoverySeverity with todo mutation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Category of a dietary violation
///
/// A text with no match is represented as `None` by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    /// Sugar, sweets and sweetened drinks
    Sugar,
    /// Grains and gluten
    GrainGluten,
    /// Industrial seed oils
    SeedOil,
    /// Dairy beyond butter and ghee
    Dairy,
    /// Alcoholic drinks
    Alcohol,
    /// Ultra-processed foods
    UltraProcessed,
}

impl ViolationCategory {
    /// Every category in classification priority order
    pub const ALL: [Self; 6] = [
        Self::Sugar,
        Self::GrainGluten,
        Self::SeedOil,
        Self::Dairy,
        Self::Alcohol,
        Self::UltraProcessed,
    ];

    /// Stable `snake_case` wire code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sugar => "sugar",
            Self::GrainGluten => "grain_gluten",
            Self::SeedOil => "seed_oil",
            Self::Dairy => "dairy",
            Self::Alcohol => "alcohol",
            Self::UltraProcessed => "ultra_processed",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sugar => "Sugar",
            Self::GrainGluten => "Grain / Gluten",
            Self::SeedOil => "Seed Oil",
            Self::Dairy => "Dairy",
            Self::Alcohol => "Alcohol",
            Self::UltraProcessed => "Ultra-Processed",
        }
    }
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fasting preset of a recovery template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecoverySeverity {
    /// Baseline reset (14 h by default)
    Baseline,
    /// Light recovery (16 h by default)
    Light,
    /// Severe recovery (24 h by default)
    Severe,
    /// Deep recovery (48 h by default)
    Deep,
}

/// Checklist item of a recovery protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryTodo {
    /// Stable id, unique within the protocol
    pub id: String,
    /// Short title
    pub title: String,
    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag
    #[serde(default)]
    pub is_completed: bool,
}

/// Remediation plan generated after a violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryProtocol {
    /// Category that triggered the protocol
    pub violation_category: ViolationCategory,
    /// Fasting preset of the template
    pub severity: RecoverySeverity,
    /// Fasting window length in hours
    pub fasting_target_hours: u32,
    /// When the protocol was generated
    pub created_at: DateTime<Utc>,
    /// Absolute end of the fasting window
    pub target_fast_end: DateTime<Utc>,
    /// Recommended activities, in order
    pub activities: Vec<String>,
    /// Diet guidance, in order
    pub diet_recommendations: Vec<String>,
    /// Suggested supplements, in order
    pub supplements: Vec<String>,
    /// Warnings, in order
    pub warnings: Vec<String>,
    /// Checklist
    pub todos: Vec<RecoveryTodo>,
}

impl RecoveryProtocol {
    fn todo_mut(&mut self, todo_id: &str) -> AppResult<&mut RecoveryTodo> {
        self.todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or_else(|| AppError::not_found(format!("Recovery todo '{todo_id}'")))
    }

    /// Flip one todo's completion flag and return the new value
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no todo has this id.
    pub fn toggle_todo(&mut self, todo_id: &str) -> AppResult<bool> {
        let todo = self.todo_mut(todo_id)?;
        todo.is_completed = !todo.is_completed;
        Ok(todo.is_completed)
    }

    /// Set one todo's completion flag; repeating the call changes nothing
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no todo has this id.
    pub fn set_todo_completed(&mut self, todo_id: &str, completed: bool) -> AppResult<()> {
        self.todo_mut(todo_id)?.is_completed = completed;
        Ok(())
    }

    /// Fraction of completed todos in `[0, 1]`; 0 when there are none
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        if self.todos.is_empty() {
            return 0.0;
        }
        let done = self.todos.iter().filter(|todo| todo.is_completed).count();
        done as f64 / self.todos.len() as f64
    }

    /// Whether the fasting window has ended at `now`
    #[must_use]
    pub fn is_fast_complete(&self, now: DateTime<Utc>) -> bool {
        now >= self.target_fast_end
    }
}
