// ABOUTME: Engine configuration container with env overrides and validation
// ABOUTME: EngineConfig groups bioavailability, vitamin D, recovery, rate limit and retry sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Configuration
//!
//! Every calculator takes its section by reference, so hosts and tests pass
//! configuration explicitly. [`EngineConfig::global`] is a process-wide
//! fallback for callers that have no configuration of their own.
//!
//! ## Environment overrides
//!
//! | Variable | Field |
//! |---|---|
//! | `CARNIVORE_HEME_IRON_FACTOR` | `bioavailability.heme_iron_factor` |
//! | `CARNIVORE_NON_HEME_IRON_FACTOR` | `bioavailability.non_heme_iron_factor` |
//! | `CARNIVORE_ZINC_FACTOR` | `bioavailability.zinc_factor` |
//! | `CARNIVORE_PROTEIN_FACTOR` | `bioavailability.protein_factor` |
//! | `CARNIVORE_VITAMIN_D_MAX_IU` | `vitamin_d.max_daily_synthesis_iu` |
//! | `CARNIVORE_VITAMIN_D_SATURATION_MINUTES` | `vitamin_d.saturation_minutes` |
//! | `CARNIVORE_FAST_BASELINE_HOURS` .. `CARNIVORE_FAST_MAX_HOURS` | `recovery.*` |
//! | `CARNIVORE_RATE_LIMIT_DAILY_WARN` / `_BLOCK` | `rate_limit.daily_*_threshold` |
//! | `CARNIVORE_RETRY_MAX` / `CARNIVORE_RETRY_BASE_DELAY_MS` | `retry.*` |

mod bioavailability;
mod error;
mod guards;
mod recovery;
mod vitamin_d;

pub use bioavailability::BioavailabilityConfig;
pub use error::ConfigError;
pub use guards::{RateLimitConfig, RetryConfig};
pub use recovery::RecoveryConfig;
pub use vitamin_d::VitaminDConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Absorption factors
    #[serde(default)]
    pub bioavailability: BioavailabilityConfig,
    /// Vitamin D synthesis model
    #[serde(default)]
    pub vitamin_d: VitaminDConfig,
    /// Fasting presets
    #[serde(default)]
    pub recovery: RecoveryConfig,
    /// Assistant call rate limits
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Assistant call retry policy
    #[serde(default)]
    pub retry: RetryConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults if the environment holds invalid overrides.
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bioavailability.validate()?;
        self.vitamin_d.validate()?;
        self.recovery.validate()?;
        self.rate_limit.validate()?;
        self.retry.validate()?;
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Bioavailability
        Self::apply_env_var(
            "CARNIVORE_HEME_IRON_FACTOR",
            &mut self.bioavailability.heme_iron_factor,
        )?;
        Self::apply_env_var(
            "CARNIVORE_NON_HEME_IRON_FACTOR",
            &mut self.bioavailability.non_heme_iron_factor,
        )?;
        Self::apply_env_var(
            "CARNIVORE_ZINC_FACTOR",
            &mut self.bioavailability.zinc_factor,
        )?;
        Self::apply_env_var(
            "CARNIVORE_PROTEIN_FACTOR",
            &mut self.bioavailability.protein_factor,
        )?;

        // Vitamin D
        Self::apply_env_var(
            "CARNIVORE_VITAMIN_D_MAX_IU",
            &mut self.vitamin_d.max_daily_synthesis_iu,
        )?;
        Self::apply_env_var(
            "CARNIVORE_VITAMIN_D_SATURATION_MINUTES",
            &mut self.vitamin_d.saturation_minutes,
        )?;

        // Fasting presets
        Self::apply_env_var(
            "CARNIVORE_FAST_BASELINE_HOURS",
            &mut self.recovery.baseline_fast_hours,
        )?;
        Self::apply_env_var(
            "CARNIVORE_FAST_LIGHT_HOURS",
            &mut self.recovery.light_fast_hours,
        )?;
        Self::apply_env_var(
            "CARNIVORE_FAST_SEVERE_HOURS",
            &mut self.recovery.severe_fast_hours,
        )?;
        Self::apply_env_var(
            "CARNIVORE_FAST_DEEP_HOURS",
            &mut self.recovery.deep_fast_hours,
        )?;
        Self::apply_env_var("CARNIVORE_FAST_MAX_HOURS", &mut self.recovery.max_fast_hours)?;

        // Assistant call guards
        Self::apply_env_var(
            "CARNIVORE_RATE_LIMIT_DAILY_WARN",
            &mut self.rate_limit.daily_warn_threshold,
        )?;
        Self::apply_env_var(
            "CARNIVORE_RATE_LIMIT_DAILY_BLOCK",
            &mut self.rate_limit.daily_block_threshold,
        )?;
        Self::apply_env_var("CARNIVORE_RETRY_MAX", &mut self.retry.max_retries)?;
        Self::apply_env_var(
            "CARNIVORE_RETRY_BASE_DELAY_MS",
            &mut self.retry.base_delay_ms,
        )?;

        Ok(self)
    }
}
