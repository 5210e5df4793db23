// ABOUTME: Fasting presets used by recovery protocol templates
// ABOUTME: Baseline, light, severe and deep durations plus the user override ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use carnivore_core::models::RecoverySeverity;

use super::error::ConfigError;

/// Fasting durations in hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Baseline reset fast
    pub baseline_fast_hours: u32,
    /// Light recovery fast
    pub light_fast_hours: u32,
    /// Severe recovery fast
    pub severe_fast_hours: u32,
    /// Deep recovery fast
    pub deep_fast_hours: u32,
    /// Longest fast a user may set
    pub max_fast_hours: u32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            baseline_fast_hours: 14,
            light_fast_hours: 16,
            severe_fast_hours: 24,
            deep_fast_hours: 48,
            max_fast_hours: 72,
        }
    }
}

impl RecoveryConfig {
    /// Preset duration for a severity
    #[must_use]
    pub const fn fasting_hours(&self, severity: RecoverySeverity) -> u32 {
        match severity {
            RecoverySeverity::Baseline => self.baseline_fast_hours,
            RecoverySeverity::Light => self.light_fast_hours,
            RecoverySeverity::Severe => self.severe_fast_hours,
            RecoverySeverity::Deep => self.deep_fast_hours,
        }
    }

    /// Presets must be ordered by severity and fit under the maximum
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when the ordering is broken.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baseline_fast_hours > self.light_fast_hours {
            return Err(ConfigError::InvalidRange(
                "baseline_fast_hours must be <= light_fast_hours",
            ));
        }
        if self.light_fast_hours > self.severe_fast_hours {
            return Err(ConfigError::InvalidRange(
                "light_fast_hours must be <= severe_fast_hours",
            ));
        }
        if self.severe_fast_hours > self.deep_fast_hours {
            return Err(ConfigError::InvalidRange(
                "severe_fast_hours must be <= deep_fast_hours",
            ));
        }
        if self.deep_fast_hours > self.max_fast_hours {
            return Err(ConfigError::InvalidRange(
                "deep_fast_hours must be <= max_fast_hours",
            ));
        }
        Ok(())
    }
}
