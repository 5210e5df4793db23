// ABOUTME: Integration tests for the in-memory log and progress stores
// ABOUTME: Merge-on-save semantics, date isolation and progress replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;

use carnivore_tracker::intelligence::TrophyTracker;
use carnivore_tracker::models::{DailyLog, TrophyId, TrophyProgress};
use carnivore_tracker::storage::{
    InMemoryLogStore, InMemoryProgressStore, LogStore, ProgressStore,
};
use common::{base_time, eggs, init_test_logging, ribeye};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[tokio::test]
async fn test_missing_date_reads_as_none() {
    init_test_logging();
    let store = InMemoryLogStore::new();
    assert!(store.get_by_date(day(1)).await.unwrap().is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_merges_present_fields() {
    let store = InMemoryLogStore::new();

    let mut first = DailyLog::new(day(2));
    first.entries = Some(vec![ribeye()]);
    first.notes = Some("morning".into());
    store.save(first).await.unwrap();

    let mut second = DailyLog::new(day(2));
    second.entries = Some(vec![ribeye(), eggs()]);
    store.save(second).await.unwrap();

    let stored = store.get_by_date(day(2)).await.unwrap().unwrap();
    assert_eq!(stored.entries.unwrap().len(), 2);
    assert_eq!(stored.notes.as_deref(), Some("morning"));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_dates_are_isolated() {
    let store = InMemoryLogStore::new();
    let mut a = DailyLog::new(day(3));
    a.notes = Some("a".into());
    let mut b = DailyLog::new(day(4));
    b.notes = Some("b".into());
    store.save(a).await.unwrap();
    store.save(b).await.unwrap();

    let a = store.get_by_date(day(3)).await.unwrap().unwrap();
    let b = store.get_by_date(day(4)).await.unwrap().unwrap();
    assert_eq!(a.notes.as_deref(), Some("a"));
    assert_eq!(b.notes.as_deref(), Some("b"));
}

#[tokio::test]
async fn test_progress_store_replaces_saved_progress() {
    let store = InMemoryProgressStore::default();
    assert_eq!(store.load().await.unwrap(), TrophyProgress::new());

    let mut tracker = TrophyTracker::with_default_catalog(store.load().await.unwrap());
    tracker
        .update_progress(TrophyId::FirstEntry, 1, base_time())
        .unwrap();
    store.save(tracker.progress()).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert!(loaded.get(TrophyId::FirstEntry).unlocked());

    let seeded = InMemoryProgressStore::with_progress(loaded.clone());
    assert_eq!(seeded.load().await.unwrap(), loaded);
}
