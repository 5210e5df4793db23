// ABOUTME: Limits for outbound assistant calls: sliding-window rate limits and retry backoff
// ABOUTME: RateLimitConfig (burst, minute, daily) and RetryConfig (attempts, base delay)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Sliding-window thresholds
///
/// Each limit counts the call being checked, so a burst limit of 3 lets two
/// calls through inside the window and blocks the third.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Calls that trigger a burst block
    pub burst_limit: u32,
    /// Burst window in seconds
    pub burst_window_secs: u32,
    /// Calls that trigger a per-minute block
    pub minute_limit: u32,
    /// Minute window in seconds
    pub minute_window_secs: u32,
    /// Calls per UTC day that trigger a soft warning
    pub daily_warn_threshold: u32,
    /// Calls per UTC day that trigger a hard block
    pub daily_block_threshold: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            burst_limit: 3,
            burst_window_secs: 10,
            minute_limit: 10,
            minute_window_secs: 60,
            daily_warn_threshold: 40,
            daily_block_threshold: 50,
        }
    }
}

impl RateLimitConfig {
    /// Validate limits and windows
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a limit is zero or the windows are misordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.burst_limit == 0 || self.minute_limit == 0 || self.daily_block_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange("rate limits must be > 0"));
        }
        if self.burst_window_secs == 0 || self.burst_window_secs > self.minute_window_secs {
            return Err(ConfigError::InvalidRange(
                "burst_window_secs must be > 0 and <= minute_window_secs",
            ));
        }
        if self.daily_warn_threshold >= self.daily_block_threshold {
            return Err(ConfigError::InvalidRange(
                "daily_warn_threshold must be < daily_block_threshold",
            ));
        }
        Ok(())
    }
}

/// Exponential backoff parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds; doubles each attempt
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
        }
    }
}

impl RetryConfig {
    /// Base delay as a `Duration`
    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Validate retry bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when the retry count would overflow the backoff.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_retries > 16 {
            return Err(ConfigError::ValueOutOfRange("max_retries must be <= 16"));
        }
        Ok(())
    }
}
