// ABOUTME: Integration tests for environment overrides of the engine configuration
// ABOUTME: Serialized because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::ptr;

use serial_test::serial;

use carnivore_tracker::config::{ConfigError, EngineConfig};
use carnivore_tracker::errors::{AppError, ErrorCode};
use common::init_test_logging;

const OVERRIDES: [&str; 5] = [
    "CARNIVORE_FAST_SEVERE_HOURS",
    "CARNIVORE_HEME_IRON_FACTOR",
    "CARNIVORE_RATE_LIMIT_DAILY_WARN",
    "CARNIVORE_RETRY_MAX",
    "CARNIVORE_VITAMIN_D_MAX_IU",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_no_overrides_loads_defaults() {
    init_test_logging();
    clear_overrides();
    assert_eq!(EngineConfig::load().unwrap(), EngineConfig::default());
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_overrides();
    env::set_var("CARNIVORE_FAST_SEVERE_HOURS", "30");
    env::set_var("CARNIVORE_RETRY_MAX", " 5 ");
    env::set_var("CARNIVORE_VITAMIN_D_MAX_IU", "8000");

    let config = EngineConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.recovery.severe_fast_hours, 30);
    assert_eq!(config.retry.max_retries, 5);
    assert!((config.vitamin_d.max_daily_synthesis_iu - 8000.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("CARNIVORE_RETRY_MAX", "several");

    let result = EngineConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains("CARNIVORE_RETRY_MAX")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("CARNIVORE_HEME_IRON_FACTOR", "1.5");
    let factor = EngineConfig::load();

    env::set_var("CARNIVORE_HEME_IRON_FACTOR", "0.25");
    env::set_var("CARNIVORE_RATE_LIMIT_DAILY_WARN", "60");
    let thresholds = EngineConfig::load();
    clear_overrides();

    assert!(matches!(factor, Err(ConfigError::InvalidFactor(_))));
    assert!(matches!(thresholds, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError =
        ConfigError::InvalidRange("light_fast_hours must be <= severe_fast_hours").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("light_fast_hours"));
    assert!(error.source.is_some());
}

#[test]
#[serial]
fn test_global_config_is_shared_and_valid() {
    clear_overrides();
    let first = EngineConfig::global();
    let second = EngineConfig::global();

    assert!(ptr::eq(first, second));
    first.validate().unwrap();
}
