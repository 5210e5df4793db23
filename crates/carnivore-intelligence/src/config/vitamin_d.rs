// ABOUTME: Cutaneous vitamin D synthesis model parameters
// ABOUTME: Daily ceiling, saturation time constant, UV scaling and cloud attenuation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Vitamin D Synthesis Configuration
//!
//! Synthesis follows a saturating exponential in exposure minutes. The ceiling
//! is `max_daily_synthesis_iu * max_uv_factor` for full-body exposure under a
//! clear sky.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Vitamin D synthesis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitaminDConfig {
    /// IU synthesized at saturation with full exposure at the reference UV index
    pub max_daily_synthesis_iu: f64,
    /// Time constant of the saturation curve in minutes
    pub saturation_minutes: f64,
    /// UV index at which the UV factor equals 1.0
    pub reference_uv_index: f64,
    /// Upper bound of the UV factor
    pub max_uv_factor: f64,
    /// Sky factor applied on cloudy days when no cloud cover is reported (0.0-1.0)
    pub cloudy_sky_factor: f64,
    /// Share of synthesis removed by 100% cloud cover (0.0-1.0)
    pub cloud_cover_attenuation: f64,
}

impl Default for VitaminDConfig {
    fn default() -> Self {
        Self {
            max_daily_synthesis_iu: 10_000.0,
            saturation_minutes: 20.0,
            reference_uv_index: 7.0,
            max_uv_factor: 1.5,
            cloudy_sky_factor: 0.5,
            cloud_cover_attenuation: 0.7,
        }
    }
}

impl VitaminDConfig {
    /// Highest value the estimator can return
    #[must_use]
    pub fn ceiling_iu(&self) -> f64 {
        self.max_daily_synthesis_iu * self.max_uv_factor
    }

    /// Validate synthesis parameters
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` on the first invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_daily_synthesis_iu.is_finite() && self.max_daily_synthesis_iu > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "max_daily_synthesis_iu must be positive",
            ));
        }
        if !(self.saturation_minutes.is_finite() && self.saturation_minutes > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "saturation_minutes must be positive",
            ));
        }
        if !(self.reference_uv_index.is_finite() && self.reference_uv_index > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "reference_uv_index must be positive",
            ));
        }
        if !(self.max_uv_factor.is_finite() && self.max_uv_factor >= 1.0) {
            return Err(ConfigError::ValueOutOfRange("max_uv_factor must be >= 1"));
        }
        if !(0.0..=1.0).contains(&self.cloudy_sky_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "cloudy_sky_factor must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.cloud_cover_attenuation) {
            return Err(ConfigError::ValueOutOfRange(
                "cloud_cover_attenuation must be within [0, 1]",
            ));
        }
        Ok(())
    }
}
