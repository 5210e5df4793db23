// ABOUTME: Reminder scheduling collaborator used after a recovery protocol is created
// ABOUTME: NotificationScheduler trait plus a recording implementation for tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use carnivore_core::errors::AppResult;

/// A local reminder to deliver at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Identity of the reminder; scheduling the same key again replaces it
    pub key: String,
    /// Delivery time
    pub at: DateTime<Utc>,
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
}

/// Schedules reminders on the host platform
///
/// Delivery is best-effort: callers log failures and carry on.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Schedule one reminder, replacing any pending reminder with the same key
    async fn schedule_reminder(&self, reminder: &Reminder) -> AppResult<()>;
}

/// Keeps scheduled reminders in memory
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    scheduled: Mutex<Vec<Reminder>>,
}

impl RecordingScheduler {
    /// Empty scheduler
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending reminders in scheduling order
    pub async fn scheduled(&self) -> Vec<Reminder> {
        self.scheduled.lock().await.clone()
    }
}

#[async_trait]
impl NotificationScheduler for RecordingScheduler {
    async fn schedule_reminder(&self, reminder: &Reminder) -> AppResult<()> {
        debug!(key = %reminder.key, at = %reminder.at, "Reminder scheduled");
        let mut scheduled = self.scheduled.lock().await;
        scheduled.retain(|pending| pending.key != reminder.key);
        scheduled.push(reminder.clone());
        Ok(())
    }
}
