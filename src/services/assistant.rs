// ABOUTME: Guarded access to the external assistant service
// ABOUTME: Each question passes the rate limiter once, then transient failures are retried with backoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use carnivore_core::errors::AppResult;
use carnivore_intelligence::config::RetryConfig;

use crate::rate_limiting::{RateLimitReason, RateLimiter};
use crate::retry::retry_transient;

/// Remote assistant answering free-text questions
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Send one prompt and return the reply text
    async fn ask(&self, prompt: &str) -> AppResult<String>;
}

/// Assistant answer plus any soft rate limit warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Reply text
    pub text: String,
    /// Set when the daily soft threshold has been reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<RateLimitReason>,
}

/// Rate limited, retrying front for an [`AssistantClient`]
pub struct AssistantGateway<C> {
    client: Arc<C>,
    limiter: Mutex<RateLimiter>,
    retry: RetryConfig,
}

impl<C: AssistantClient> AssistantGateway<C> {
    /// Gateway over a client, a limiter and a retry policy
    #[must_use]
    pub fn new(client: Arc<C>, limiter: RateLimiter, retry: RetryConfig) -> Self {
        Self {
            client,
            limiter: Mutex::new(limiter),
            retry,
        }
    }

    /// Ask the assistant
    ///
    /// Usage is recorded once per question regardless of retries.
    ///
    /// # Errors
    ///
    /// Returns `RateLimitExceeded` when the limiter blocks the call, a
    /// non-transient client error on first sight, otherwise the client's final
    /// error after retries are exhausted.
    pub async fn ask(&self, prompt: &str, now: DateTime<Utc>) -> AppResult<AssistantReply> {
        let decision = self.limiter.lock().await.acquire(now)?;
        if let Some(reason) = decision.reason {
            warn!(reason = ?reason, "Assistant usage close to the daily limit");
        }

        let text = retry_transient(|| self.client.ask(prompt), &self.retry).await?;
        info!(prompt_len = prompt.len(), reply_len = text.len(), "Assistant replied");

        Ok(AssistantReply {
            text,
            warning: decision.reason,
        })
    }

    /// Serialized limiter history for persistence between sessions
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the history cannot be encoded
    pub async fn limiter_state_json(&self) -> AppResult<String> {
        self.limiter.lock().await.to_json()
    }
}
