// ABOUTME: Endogenous vitamin D synthesis estimate from sun exposure and weather
// ABOUTME: Saturating exponential in minutes, scaled by skin exposure, UV index and sky cover
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Vitamin D Estimation
//!
//! ```text
//! IU = max_iu * exposure_fraction * uv_factor * sky_factor * (1 - exp(-minutes / tau))
//! ```
//!
//! The result is non-negative, non-decreasing in minutes and never exceeds
//! [`VitaminDConfig::ceiling_iu`]. Negative or NaN inputs clamp to zero.

use serde::{Deserialize, Serialize};

use carnivore_core::models::sanitize_amount;

use crate::config::VitaminDConfig;
use crate::nutrient_aggregator::CalculatedMetrics;

/// Default share of skin exposed (face, arms and hands)
const DEFAULT_EXPOSURE_FRACTION: f64 = 0.25;

/// Weather-derived factors from the environment provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherFactor {
    /// UV index reported for the exposure window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<f64>,
    /// Cloud cover in percent (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_cover_percent: Option<f64>,
}

/// One sun exposure session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunExposure {
    /// Minutes spent in the sun
    pub minutes: f64,
    /// Clear sky when true
    pub sunny: bool,
    /// Share of skin exposed (0.0-1.0)
    #[serde(default = "default_exposure_fraction")]
    pub exposure_fraction: f64,
    /// Optional weather data; overrides the sunny flag when cloud cover is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherFactor>,
}

const fn default_exposure_fraction() -> f64 {
    DEFAULT_EXPOSURE_FRACTION
}

impl SunExposure {
    /// Session with the default exposure fraction and no weather data
    #[must_use]
    pub const fn new(minutes: f64, sunny: bool) -> Self {
        Self {
            minutes,
            sunny,
            exposure_fraction: DEFAULT_EXPOSURE_FRACTION,
            weather: None,
        }
    }
}

fn unit_interval(value: f64) -> f64 {
    sanitize_amount(value).min(1.0)
}

fn uv_factor(weather: Option<&WeatherFactor>, config: &VitaminDConfig) -> f64 {
    weather
        .and_then(|w| w.uv_index)
        .map_or(1.0, |uv| {
            (sanitize_amount(uv) / config.reference_uv_index).min(config.max_uv_factor)
        })
}

fn sky_factor(exposure: &SunExposure, config: &VitaminDConfig) -> f64 {
    match exposure.weather.and_then(|w| w.cloud_cover_percent) {
        Some(cover) => {
            let cover = unit_interval(cover / 100.0);
            unit_interval(config.cloud_cover_attenuation).mul_add(-cover, 1.0)
        }
        None if exposure.sunny => 1.0,
        None => unit_interval(config.cloudy_sky_factor),
    }
}

/// Estimated IU synthesized during one exposure session
#[must_use]
pub fn estimate_vitamin_d_iu(exposure: &SunExposure, config: &VitaminDConfig) -> f64 {
    let minutes = sanitize_amount(exposure.minutes);
    if minutes <= 0.0 || config.saturation_minutes <= 0.0 {
        return 0.0;
    }
    let saturation = 1.0 - (-minutes / config.saturation_minutes).exp();
    let estimate = sanitize_amount(config.max_daily_synthesis_iu)
        * unit_interval(exposure.exposure_fraction)
        * uv_factor(exposure.weather.as_ref(), config)
        * sky_factor(exposure, config)
        * saturation;
    sanitize_amount(estimate)
}

/// Food vitamin D plus sun synthesis in IU
#[must_use]
pub fn total_vitamin_d_iu(
    metrics: &CalculatedMetrics,
    exposure: Option<&SunExposure>,
    config: &VitaminDConfig,
) -> f64 {
    metrics.vitamin_d() + exposure.map_or(0.0, |e| estimate_vitamin_d_iu(e, config))
}
