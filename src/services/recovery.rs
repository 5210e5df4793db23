// ABOUTME: Recovery protocol lifecycle over the log store and reminder scheduler
// ABOUTME: Reports violations, commits protocols to the next day's log and applies user edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use carnivore_core::errors::{AppError, AppResult};
use carnivore_core::models::{DailyLog, RecoveryProtocol, ViolationCategory};
use carnivore_intelligence::config::RecoveryConfig;
use carnivore_intelligence::{detect_violation_type, generate_protocol, set_fasting_target_hours};

use crate::notifications::{NotificationScheduler, Reminder};
use crate::storage::LogStore;

/// Outcome of a violation report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationReport {
    /// Day the note and protocol were written to
    pub log_date: NaiveDate,
    /// Detected category, `None` when the text matched nothing
    pub category: Option<ViolationCategory>,
    /// Generated protocol, present when a category was detected
    pub protocol: Option<RecoveryProtocol>,
    /// Whether the end-of-fast reminder was accepted by the scheduler
    pub reminder_scheduled: bool,
}

/// Recovery protocol operations
pub struct RecoveryService<L, N> {
    logs: Arc<L>,
    notifier: Arc<N>,
    config: RecoveryConfig,
}

impl<L: LogStore, N: NotificationScheduler> RecoveryService<L, N> {
    /// Service over a log store and a reminder scheduler
    #[must_use]
    pub const fn new(logs: Arc<L>, notifier: Arc<N>, config: RecoveryConfig) -> Self {
        Self {
            logs,
            notifier,
            config,
        }
    }

    /// Classify `text` and, on a match, commit a recovery protocol for tomorrow
    ///
    /// The note is saved even when nothing is detected. Protocol and note go to
    /// the store in one save.
    ///
    /// # Errors
    ///
    /// Returns the store error if the save fails. Reminder failures are logged only.
    pub async fn report_violation(
        &self,
        text: &str,
        now: DateTime<Utc>,
    ) -> AppResult<ViolationReport> {
        match detect_violation_type(text) {
            Some(category) => self.report_category(category, text, now).await,
            None => {
                let log_date = next_day(now)?;
                let mut log = DailyLog::new(log_date);
                log.violation_note = Some(text.to_owned());
                self.logs.save(log).await?;
                info!(%log_date, "Violation note saved without a detected category");
                Ok(ViolationReport {
                    log_date,
                    category: None,
                    protocol: None,
                    reminder_scheduled: false,
                })
            }
        }
    }

    /// Commit a protocol for an explicitly chosen category
    ///
    /// # Errors
    ///
    /// Returns the store error if the save fails. Reminder failures are logged only.
    pub async fn report_category(
        &self,
        category: ViolationCategory,
        note: &str,
        now: DateTime<Utc>,
    ) -> AppResult<ViolationReport> {
        let log_date = next_day(now)?;
        let protocol = generate_protocol(category, now, &self.config);

        let mut log = DailyLog::new(log_date);
        log.violation_note = Some(note.to_owned());
        log.recovery_protocol = Some(protocol.clone());
        self.logs.save(log).await?;

        info!(
            %log_date,
            category = %category,
            fasting_hours = protocol.fasting_target_hours,
            "Recovery protocol committed"
        );

        let reminder_scheduled = self.schedule_fast_reminder(log_date, &protocol).await;
        Ok(ViolationReport {
            log_date,
            category: Some(category),
            protocol: Some(protocol),
            reminder_scheduled,
        })
    }

    /// Change the fasting window of the protocol stored for `date`
    ///
    /// The end-of-fast reminder for `date` is rescheduled under the same key.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no protocol is stored for `date`,
    /// `InvalidInput` when `hours` exceeds the maximum, or the store error.
    pub async fn update_fasting_hours(
        &self,
        date: NaiveDate,
        hours: u32,
        now: DateTime<Utc>,
    ) -> AppResult<RecoveryProtocol> {
        let mut protocol = self.load_protocol(date).await?;
        set_fasting_target_hours(&mut protocol, hours, now, &self.config)?;
        self.save_protocol(date, protocol.clone()).await?;
        self.schedule_fast_reminder(date, &protocol).await;
        Ok(protocol)
    }

    /// Flip one todo and return its new state
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing protocol or todo, or the store error.
    pub async fn toggle_todo(&self, date: NaiveDate, todo_id: &str) -> AppResult<bool> {
        let mut protocol = self.load_protocol(date).await?;
        let completed = protocol.toggle_todo(todo_id)?;
        self.save_protocol(date, protocol).await?;
        Ok(completed)
    }

    /// Set one todo's completion flag
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing protocol or todo, or the store error.
    pub async fn set_todo_completed(
        &self,
        date: NaiveDate,
        todo_id: &str,
        completed: bool,
    ) -> AppResult<RecoveryProtocol> {
        let mut protocol = self.load_protocol(date).await?;
        protocol.set_todo_completed(todo_id, completed)?;
        self.save_protocol(date, protocol.clone()).await?;
        Ok(protocol)
    }

    async fn load_protocol(&self, date: NaiveDate) -> AppResult<RecoveryProtocol> {
        self.logs
            .get_by_date(date)
            .await?
            .and_then(|log| log.recovery_protocol)
            .ok_or_else(|| AppError::not_found(format!("Recovery protocol for {date}")))
    }

    async fn save_protocol(&self, date: NaiveDate, protocol: RecoveryProtocol) -> AppResult<()> {
        let mut log = DailyLog::new(date);
        log.recovery_protocol = Some(protocol);
        self.logs.save(log).await
    }

    async fn schedule_fast_reminder(&self, date: NaiveDate, protocol: &RecoveryProtocol) -> bool {
        let reminder = Reminder {
            key: format!("recovery-fast-{date}"),
            at: protocol.target_fast_end,
            title: "Recovery fast complete".to_owned(),
            body: format!(
                "Your {}-hour fast after {} is done. Break it with fatty meat.",
                protocol.fasting_target_hours,
                protocol.violation_category.display_name()
            ),
        };
        match self.notifier.schedule_reminder(&reminder).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, at = %reminder.at, "Failed to schedule fast reminder");
                false
            }
        }
    }
}

fn next_day(now: DateTime<Utc>) -> AppResult<NaiveDate> {
    now.date_naive()
        .succ_opt()
        .ok_or_else(|| AppError::value_out_of_range(format!("No day after {now}")))
}
