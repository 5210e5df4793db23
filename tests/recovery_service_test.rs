// ABOUTME: Integration tests for the recovery service over in-memory and failing collaborators
// ABOUTME: Next-day commit, best-effort reminders, store error propagation and todo edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use carnivore_tracker::config::RecoveryConfig;
use carnivore_tracker::errors::{AppError, AppResult, ErrorCode};
use carnivore_tracker::intelligence::recovery_protocol::FAST_TODO_ID;
use carnivore_tracker::models::{DailyLog, ViolationCategory};
use carnivore_tracker::notifications::{NotificationScheduler, RecordingScheduler, Reminder};
use carnivore_tracker::services::RecoveryService;
use carnivore_tracker::storage::{InMemoryLogStore, LogStore};
use common::{base_time, init_test_logging};

/// Scheduler that rejects every reminder
#[derive(Default)]
struct FailingScheduler {
    attempts: AtomicUsize,
}

#[async_trait]
impl NotificationScheduler for FailingScheduler {
    async fn schedule_reminder(&self, _reminder: &Reminder) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::external_service("notifications", "permission denied"))
    }
}

/// Log store whose writes always fail
struct ReadOnlyLogStore;

#[async_trait]
impl LogStore for ReadOnlyLogStore {
    async fn get_by_date(&self, _date: NaiveDate) -> AppResult<Option<DailyLog>> {
        Ok(None)
    }

    async fn save(&self, _log: DailyLog) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }
}

fn tomorrow() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn service() -> (
    RecoveryService<InMemoryLogStore, RecordingScheduler>,
    Arc<InMemoryLogStore>,
    Arc<RecordingScheduler>,
) {
    let logs = Arc::new(InMemoryLogStore::new());
    let scheduler = Arc::new(RecordingScheduler::new());
    let service = RecoveryService::new(
        Arc::clone(&logs),
        Arc::clone(&scheduler),
        RecoveryConfig::default(),
    );
    (service, logs, scheduler)
}

#[tokio::test]
async fn test_violation_commits_protocol_to_next_day() {
    init_test_logging();
    let (service, logs, scheduler) = service();
    let now = base_time();

    let report = service
        .report_violation("two slices of pizza", now)
        .await
        .unwrap();
    assert_eq!(report.log_date, tomorrow());
    assert_eq!(report.category, Some(ViolationCategory::GrainGluten));
    assert!(report.reminder_scheduled);

    let stored = logs.get_by_date(tomorrow()).await.unwrap().unwrap();
    assert_eq!(stored.violation_note.as_deref(), Some("two slices of pizza"));
    assert_eq!(stored.recovery_protocol, report.protocol);

    let reminders = scheduler.scheduled().await;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].at, now + Duration::hours(24));
}

#[tokio::test]
async fn test_unmatched_text_saves_note_without_protocol() {
    let (service, logs, scheduler) = service();
    let report = service
        .report_violation("ate a second ribeye", base_time())
        .await
        .unwrap();

    assert_eq!(report.category, None);
    assert!(report.protocol.is_none());
    let stored = logs.get_by_date(tomorrow()).await.unwrap().unwrap();
    assert!(stored.recovery_protocol.is_none());
    assert!(scheduler.scheduled().await.is_empty());
}

#[tokio::test]
async fn test_existing_log_fields_survive_the_commit() {
    let (service, logs, _) = service();
    let mut existing = DailyLog::new(tomorrow());
    existing.notes = Some("leg day".into());
    logs.save(existing).await.unwrap();

    service
        .report_category(ViolationCategory::Dairy, "latte", base_time())
        .await
        .unwrap();

    let stored = logs.get_by_date(tomorrow()).await.unwrap().unwrap();
    assert_eq!(stored.notes.as_deref(), Some("leg day"));
    assert!(stored.recovery_protocol.is_some());
}

#[tokio::test]
async fn test_reminder_failure_does_not_fail_the_report() {
    let logs = Arc::new(InMemoryLogStore::new());
    let scheduler = Arc::new(FailingScheduler::default());
    let service = RecoveryService::new(
        Arc::clone(&logs),
        Arc::clone(&scheduler),
        RecoveryConfig::default(),
    );

    let report = service
        .report_violation("glass of wine", base_time())
        .await
        .unwrap();
    assert!(!report.reminder_scheduled);
    assert_eq!(scheduler.attempts.load(Ordering::SeqCst), 1);
    assert!(logs.get_by_date(tomorrow()).await.unwrap().is_some());
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let scheduler = Arc::new(RecordingScheduler::new());
    let service = RecoveryService::new(
        Arc::new(ReadOnlyLogStore),
        Arc::clone(&scheduler),
        RecoveryConfig::default(),
    );

    let err = service
        .report_violation("chocolate bar", base_time())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(scheduler.scheduled().await.is_empty());
}

#[tokio::test]
async fn test_fasting_hours_update_is_persisted() {
    let (service, logs, scheduler) = service();
    let now = base_time();
    service
        .report_violation("bag of chips", now)
        .await
        .unwrap();

    let later = now + Duration::hours(1);
    let updated = service
        .update_fasting_hours(tomorrow(), 36, later)
        .await
        .unwrap();
    assert_eq!(updated.fasting_target_hours, 36);
    assert_eq!(updated.target_fast_end, later + Duration::hours(36));

    let stored = logs.get_by_date(tomorrow()).await.unwrap().unwrap();
    assert_eq!(stored.recovery_protocol.unwrap(), updated);
    // the stale end-of-fast reminder is replaced, not duplicated
    let reminders = scheduler.scheduled().await;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].at, updated.target_fast_end);
    assert_eq!(reminders[0].key, "recovery-fast-2025-03-15");

    let err = service
        .update_fasting_hours(tomorrow(), 100, later)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_todo_edits_are_persisted() {
    let (service, logs, _) = service();
    service
        .report_violation("soda", base_time())
        .await
        .unwrap();

    assert!(service.toggle_todo(tomorrow(), FAST_TODO_ID).await.unwrap());
    let protocol = service
        .set_todo_completed(tomorrow(), "activity-1", true)
        .await
        .unwrap();
    assert_eq!(protocol.todos.iter().filter(|t| t.is_completed).count(), 2);

    let stored = logs
        .get_by_date(tomorrow())
        .await
        .unwrap()
        .unwrap()
        .recovery_protocol
        .unwrap();
    assert_eq!(stored, protocol);
    assert_eq!(stored.violation_category, ViolationCategory::Sugar);
}

#[tokio::test]
async fn test_edits_without_protocol_are_not_found() {
    let (service, _, _) = service();
    let err = service
        .toggle_todo(tomorrow(), FAST_TODO_ID)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = service
        .update_fasting_hours(tomorrow(), 16, base_time())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
