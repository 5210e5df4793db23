// ABOUTME: Sliding-window rate limiter guarding calls to the external assistant
// ABOUTME: Burst, per-minute and per-UTC-day windows pruned synchronously on every check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assistant Rate Limiting
//!
//! Usage is a list of call timestamps. Every check prunes the list and counts
//! three horizons: a short burst window, a one-minute window and the current
//! UTC calendar day. No timer runs in the background; the caller passes `now`.
//!
//! Disposition precedence:
//!
//! 1. daily hard block
//! 2. burst block
//! 3. per-minute block
//! 4. daily soft warning (still allowed)
//! 5. allowed
//!
//! Each count includes the call being checked.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use carnivore_core::errors::{AppError, AppResult};
use carnivore_intelligence::config::RateLimitConfig;

/// Why a call was blocked or flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitReason {
    /// Daily hard limit reached
    DailyLimit,
    /// Too many calls in the burst window
    Burst,
    /// Too many calls in the minute window
    Minute,
    /// Daily soft threshold reached; the call is still allowed
    DailyWarning,
}

impl RateLimitReason {
    /// User-facing message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DailyLimit => "Daily assistant limit reached. Try again tomorrow.",
            Self::Burst => "You're sending messages too quickly. Please wait a few seconds.",
            Self::Minute => "Too many messages this minute. Please wait a moment.",
            Self::DailyWarning => "You're approaching today's assistant limit.",
        }
    }
}

impl fmt::Display for RateLimitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitDecision {
    /// Whether the call may proceed
    pub allowed: bool,
    /// Block reason, or the soft warning on an allowed call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RateLimitReason>,
    /// Seconds until the blocking window frees a slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<i64>,
}

impl RateLimitDecision {
    const fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            retry_after_secs: None,
        }
    }

    const fn warn() -> Self {
        Self {
            allowed: true,
            reason: Some(RateLimitReason::DailyWarning),
            retry_after_secs: None,
        }
    }

    const fn block(reason: RateLimitReason, retry_after_secs: i64) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            retry_after_secs: Some(retry_after_secs),
        }
    }
}

/// Persistable usage history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitState {
    /// Timestamps of recorded calls
    #[serde(default)]
    pub usage: Vec<DateTime<Utc>>,
}

/// Sliding-window limiter over an explicit usage history
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    state: RateLimitState,
}

impl RateLimiter {
    /// Limiter with an empty history
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self::from_state(config, RateLimitState::default())
    }

    /// Limiter over a previously saved history
    #[must_use]
    pub const fn from_state(config: RateLimitConfig, state: RateLimitState) -> Self {
        Self { config, state }
    }

    /// Limiter over a `JSON` history; unreadable input starts from an empty history
    #[must_use]
    pub fn restore(config: RateLimitConfig, json: &str) -> Self {
        let state = serde_json::from_str(json).unwrap_or_else(|e| {
            warn!(error = %e, "Corrupted rate limit state, resetting");
            RateLimitState::default()
        });
        Self::from_state(config, state)
    }

    /// Serialize the usage history
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the history cannot be encoded
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Current usage history
    #[must_use]
    pub const fn state(&self) -> &RateLimitState {
        &self.state
    }

    /// Limits in use
    #[must_use]
    pub const fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Classify a prospective call at `now` without recording it
    pub fn check_rate_limit(&mut self, now: DateTime<Utc>) -> RateLimitDecision {
        self.prune(now);

        let daily = self.count_today(now) + 1;
        if daily >= self.config.daily_block_threshold {
            let retry_after = Self::secs_until_next_day(now);
            debug!(daily, retry_after, "Assistant call blocked by daily limit");
            return RateLimitDecision::block(RateLimitReason::DailyLimit, retry_after);
        }

        let burst_window = Duration::seconds(i64::from(self.config.burst_window_secs));
        if self.count_within(now, burst_window) + 1 >= self.config.burst_limit {
            let retry_after = self.secs_until_slot(now, burst_window);
            debug!(retry_after, "Assistant call blocked by burst limit");
            return RateLimitDecision::block(RateLimitReason::Burst, retry_after);
        }

        let minute_window = Duration::seconds(i64::from(self.config.minute_window_secs));
        if self.count_within(now, minute_window) + 1 >= self.config.minute_limit {
            let retry_after = self.secs_until_slot(now, minute_window);
            debug!(retry_after, "Assistant call blocked by minute limit");
            return RateLimitDecision::block(RateLimitReason::Minute, retry_after);
        }

        if daily >= self.config.daily_warn_threshold {
            return RateLimitDecision::warn();
        }
        RateLimitDecision::allow()
    }

    /// Record a call made at `now`
    pub fn record_usage(&mut self, now: DateTime<Utc>) {
        self.prune(now);
        self.state.usage.push(now);
    }

    /// Check and, when allowed, record in one step
    ///
    /// # Errors
    ///
    /// Returns `RateLimitExceeded` carrying the block message when the call is not allowed
    pub fn acquire(&mut self, now: DateTime<Utc>) -> AppResult<RateLimitDecision> {
        let decision = self.check_rate_limit(now);
        if !decision.allowed {
            let reason = decision.reason.unwrap_or(RateLimitReason::Burst);
            return Err(AppError::rate_limited(reason.message()).with_details(
                serde_json::json!({
                    "reason": reason,
                    "retry_after_secs": decision.retry_after_secs,
                }),
            ));
        }
        self.state.usage.push(now);
        Ok(decision)
    }

    fn prune(&mut self, now: DateTime<Utc>) {
        if self.state.usage.iter().any(|ts| *ts > now) {
            warn!(
                recorded = self.state.usage.len(),
                "Rate limit state holds future timestamps, resetting"
            );
            self.state.usage.clear();
            return;
        }

        let minute_window = Duration::seconds(i64::from(self.config.minute_window_secs));
        let today = now.date_naive();
        self.state
            .usage
            .retain(|ts| ts.date_naive() == today || now - *ts < minute_window);
    }

    fn count_within(&self, now: DateTime<Utc>, window: Duration) -> u32 {
        let count = self
            .state
            .usage
            .iter()
            .filter(|ts| now - **ts < window)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn count_today(&self, now: DateTime<Utc>) -> u32 {
        let today = now.date_naive();
        let count = self
            .state
            .usage
            .iter()
            .filter(|ts| ts.date_naive() == today)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn secs_until_slot(&self, now: DateTime<Utc>, window: Duration) -> i64 {
        self.state
            .usage
            .iter()
            .filter(|ts| now - **ts < window)
            .min()
            .map_or(0, |oldest| (*oldest + window - now).num_seconds().max(1))
    }

    fn secs_until_next_day(now: DateTime<Utc>) -> i64 {
        now.date_naive()
            .succ_opt()
            .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
            .map_or(0, |midnight| (midnight.and_utc() - now).num_seconds().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + Duration::seconds(secs)
    }

    #[test]
    fn test_prune_drops_yesterday_outside_minute_window() {
        let mut limiter = RateLimiter::new(RateLimitConfig::default());
        limiter.record_usage(at(-86_400));
        limiter.record_usage(at(0));
        assert_eq!(limiter.state().usage, vec![at(0)]);
    }

    #[test]
    fn test_restore_from_garbage_is_permissive() {
        let mut limiter = RateLimiter::restore(RateLimitConfig::default(), "{not json");
        assert!(limiter.state().usage.is_empty());
        assert!(limiter.check_rate_limit(at(0)).allowed);
    }
}
