// ABOUTME: Exponential backoff wrapper for fallible async calls to the external assistant
// ABOUTME: Up to max_retries + 1 attempts, base * 2^attempt between failures, errors returned as-is
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, warn};

use carnivore_core::errors::{AppError, AppResult};
use carnivore_intelligence::config::RetryConfig;

/// Delay before retry number `attempt` (zero-based)
///
/// Saturates instead of overflowing for large attempt counts.
#[must_use]
pub fn backoff_delay(base_delay: Duration, attempt: u32) -> Duration {
    let factor = 2_u32.checked_pow(attempt).unwrap_or(u32::MAX);
    base_delay.saturating_mul(factor)
}

/// Retry an async operation with exponential backoff
///
/// Invokes `f` at most `max_retries + 1` times. After failed attempt `n`
/// (zero-based) it waits `base_delay * 2^n` before trying again.
///
/// # Backoff with a 1000 ms base
/// - Retry 1: 1000ms
/// - Retry 2: 2000ms
/// - Retry 3: 4000ms
///
/// # Errors
///
/// Returns the error of the final attempt exactly as `f` produced it
pub async fn retry_with_backoff<F, Fut, T, E>(
    f: F,
    max_retries: u32,
    base_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    retry_if(f, max_retries, base_delay, |_| true).await
}

/// [`retry_with_backoff`] that gives up early on errors `should_retry` rejects
///
/// # Errors
///
/// Returns the first rejected error, or the error of the final attempt,
/// exactly as `f` produced it
pub async fn retry_if<F, Fut, T, E, P>(
    mut f: F,
    max_retries: u32,
    base_delay: Duration,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    P: Fn(&E) -> bool,
{
    let mut attempt = 0;
    loop {
        match f().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(attempts = attempt + 1, "Call succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if !should_retry(&e) => {
                debug!(attempts = attempt + 1, error = %e, "Permanent failure, not retrying");
                return Err(e);
            }
            Err(e) if attempt >= max_retries => {
                error!(
                    attempts = attempt + 1,
                    max_retries = max_retries,
                    error = %e,
                    "Call failed after max retries"
                );
                return Err(e);
            }
            Err(e) => {
                let delay = backoff_delay(base_delay, attempt);
                warn!(
                    attempt = attempt + 1,
                    max_retries = max_retries,
                    backoff_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %e,
                    "Call failed, retrying after backoff"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// [`retry_with_backoff`] driven by a [`RetryConfig`]
///
/// # Errors
///
/// Returns the error of the final attempt exactly as `f` produced it
pub async fn retry_with_policy<F, Fut, T, E>(f: F, policy: &RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    retry_with_backoff(f, policy.max_retries, policy.base_delay()).await
}

/// Retry only errors whose code is transient, driven by a [`RetryConfig`]
///
/// # Errors
///
/// Returns a non-transient error immediately, otherwise the error of the
/// final attempt
pub async fn retry_transient<F, Fut, T>(f: F, policy: &RetryConfig) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    retry_if(f, policy.max_retries, policy.base_delay(), |e: &AppError| {
        e.code.is_transient()
    })
    .await
}
