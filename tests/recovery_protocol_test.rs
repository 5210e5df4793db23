// ABOUTME: Integration tests for recovery protocol generation and user edits
// ABOUTME: Fast-end arithmetic, severity presets, todo ids and isolated mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;

use carnivore_tracker::config::RecoveryConfig;
use carnivore_tracker::errors::ErrorCode;
use carnivore_tracker::intelligence::recovery_protocol::FAST_TODO_ID;
use carnivore_tracker::intelligence::{
    compute_fast_end, generate_protocol, set_fasting_target_hours, template_for,
};
use carnivore_tracker::models::{RecoverySeverity, ViolationCategory};
use common::{base_time, init_test_logging};

#[test]
fn test_compute_fast_end_is_exact() {
    init_test_logging();
    let now = base_time();
    assert_eq!(compute_fast_end(16, now), now + Duration::hours(16));
    assert_eq!(compute_fast_end(0, now), now);
    assert_eq!(compute_fast_end(48, now), now + Duration::days(2));
}

#[test]
fn test_severity_presets_per_category() {
    let config = RecoveryConfig::default();
    let now = base_time();
    let expected = [
        (ViolationCategory::Sugar, RecoverySeverity::Light, 16),
        (ViolationCategory::GrainGluten, RecoverySeverity::Severe, 24),
        (ViolationCategory::SeedOil, RecoverySeverity::Severe, 24),
        (ViolationCategory::Dairy, RecoverySeverity::Baseline, 14),
        (ViolationCategory::Alcohol, RecoverySeverity::Severe, 24),
        (ViolationCategory::UltraProcessed, RecoverySeverity::Deep, 48),
    ];
    for (category, severity, hours) in expected {
        let protocol = generate_protocol(category, now, &config);
        assert_eq!(protocol.violation_category, category);
        assert_eq!(protocol.severity, severity, "{category}");
        assert_eq!(protocol.fasting_target_hours, hours, "{category}");
        assert_eq!(protocol.created_at, now);
        assert_eq!(protocol.target_fast_end, compute_fast_end(hours, now));
    }
}

#[test]
fn test_protocol_content_follows_template() {
    let protocol = generate_protocol(ViolationCategory::Alcohol, base_time(), &RecoveryConfig::default());
    let template = template_for(ViolationCategory::Alcohol);

    assert_eq!(protocol.activities, template.activities);
    assert_eq!(protocol.diet_recommendations, template.diet_recommendations);
    assert_eq!(protocol.supplements, template.supplements);
    assert_eq!(protocol.warnings, template.warnings);

    let expected_todos = 1
        + template.activities.len()
        + template.diet_recommendations.len()
        + template.supplements.len();
    assert_eq!(protocol.todos.len(), expected_todos);
    assert_eq!(protocol.todos[0].id, FAST_TODO_ID);
    assert_eq!(protocol.todos[1].id, "activity-1");
    assert!(protocol.todos.iter().all(|todo| !todo.is_completed));
}

#[test]
fn test_generation_is_deterministic() {
    let config = RecoveryConfig::default();
    let a = generate_protocol(ViolationCategory::SeedOil, base_time(), &config);
    let b = generate_protocol(ViolationCategory::SeedOil, base_time(), &config);
    assert_eq!(a, b);
}

#[test]
fn test_hours_override_changes_only_fast_fields() {
    let config = RecoveryConfig::default();
    let created = base_time();
    let original = generate_protocol(ViolationCategory::Sugar, created, &config);

    let mut edited = original.clone();
    let later = created + Duration::minutes(10);
    set_fasting_target_hours(&mut edited, 20, later, &config).unwrap();

    assert_eq!(edited.fasting_target_hours, 20);
    assert_eq!(edited.target_fast_end, later + Duration::hours(20));

    let mut restored = edited.clone();
    restored.fasting_target_hours = original.fasting_target_hours;
    restored.target_fast_end = original.target_fast_end;
    assert_eq!(restored, original);
}

#[test]
fn test_hours_override_rejects_above_maximum() {
    let config = RecoveryConfig::default();
    let mut protocol = generate_protocol(ViolationCategory::Dairy, base_time(), &config);
    let before = protocol.clone();

    let err = set_fasting_target_hours(&mut protocol, 73, base_time(), &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(protocol, before);

    set_fasting_target_hours(&mut protocol, 72, base_time(), &config).unwrap();
    assert_eq!(protocol.fasting_target_hours, 72);
}

#[test]
fn test_todo_toggle_is_isolated_and_reversible() {
    let mut protocol =
        generate_protocol(ViolationCategory::GrainGluten, base_time(), &RecoveryConfig::default());
    let before = protocol.clone();

    assert!(protocol.toggle_todo("diet-1").unwrap());
    let changed: Vec<&str> = protocol
        .todos
        .iter()
        .zip(&before.todos)
        .filter(|(now, then)| now != then)
        .map(|(now, _)| now.id.as_str())
        .collect();
    assert_eq!(changed, vec!["diet-1"]);
    assert_eq!(protocol.target_fast_end, before.target_fast_end);

    assert!(!protocol.toggle_todo("diet-1").unwrap());
    assert_eq!(protocol, before);
}

#[test]
fn test_set_todo_completed_is_idempotent() {
    let mut protocol =
        generate_protocol(ViolationCategory::Sugar, base_time(), &RecoveryConfig::default());
    protocol.set_todo_completed(FAST_TODO_ID, true).unwrap();
    let once = protocol.clone();
    protocol.set_todo_completed(FAST_TODO_ID, true).unwrap();
    assert_eq!(protocol, once);

    let err = protocol.set_todo_completed("activity-99", true).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_completion_ratio_and_fast_window() {
    let now = base_time();
    let mut protocol = generate_protocol(ViolationCategory::Dairy, now, &RecoveryConfig::default());
    assert!(protocol.completion_ratio().abs() < f64::EPSILON);

    let ids: Vec<String> = protocol.todos.iter().map(|todo| todo.id.clone()).collect();
    for id in &ids {
        protocol.set_todo_completed(id, true).unwrap();
    }
    assert!((protocol.completion_ratio() - 1.0).abs() < f64::EPSILON);

    assert!(!protocol.is_fast_complete(now + Duration::hours(13)));
    assert!(protocol.is_fast_complete(now + Duration::hours(14)));
}
