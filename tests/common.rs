// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup, fixed timestamps, food entries and user profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `carnivore_tracker`

use std::env;
use std::sync::Once;

use carnivore_tracker::models::{
    ActivityLevel, FoodCategory, FoodEntry, FoodUnit, Gender, Nutrient, UserProfile,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests are quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference instant: 2025-03-14 18:30:00 UTC
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 30, 0).unwrap()
}

/// `base_time` shifted by whole seconds
pub fn at_secs(secs: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(secs)
}

/// 300 g ribeye
pub fn ribeye() -> FoodEntry {
    FoodEntry::new("Ribeye steak", 300.0, FoodUnit::Gram, FoodCategory::Ruminant)
        .with_nutrient(Nutrient::Protein, 72.0)
        .with_nutrient(Nutrient::Fat, 66.0)
        .with_nutrient(Nutrient::HemeIron, 4.5)
        .with_nutrient(Nutrient::NonHemeIron, 1.5)
        .with_nutrient(Nutrient::Zinc, 14.0)
        .with_nutrient(Nutrient::VitaminB12, 6.0)
        .with_nutrient(Nutrient::Sodium, 160.0)
}

/// 100 g beef liver
pub fn beef_liver() -> FoodEntry {
    FoodEntry::new("Beef liver", 100.0, FoodUnit::Gram, FoodCategory::Ruminant)
        .with_nutrient(Nutrient::Protein, 20.0)
        .with_nutrient(Nutrient::Fat, 3.6)
        .with_nutrient(Nutrient::Carbs, 3.9)
        .with_nutrient(Nutrient::NetCarbs, 3.9)
        .with_nutrient(Nutrient::HemeIron, 2.6)
        .with_nutrient(Nutrient::NonHemeIron, 2.3)
        .with_nutrient(Nutrient::VitaminA, 4968.0)
        .with_nutrient(Nutrient::VitaminB12, 59.3)
        .with_nutrient(Nutrient::Copper, 9.8)
}

/// Three eggs
pub fn eggs() -> FoodEntry {
    FoodEntry::new("Eggs", 3.0, FoodUnit::Piece, FoodCategory::EggsFats)
        .with_nutrient(Nutrient::Protein, 18.9)
        .with_nutrient(Nutrient::Fat, 14.3)
        .with_nutrient(Nutrient::VitaminD, 246.0)
        .with_nutrient(Nutrient::Selenium, 46.0)
}

/// 45-year-old moderately active man, 90 kg
pub fn male_profile() -> UserProfile {
    UserProfile {
        gender: Gender::Male,
        age: 45,
        weight_kg: 90.0,
        height_cm: 183.0,
        activity_level: ActivityLevel::ModeratelyActive,
    }
}

/// 32-year-old moderately active woman, 80 kg
pub fn female_profile() -> UserProfile {
    UserProfile {
        gender: Gender::Female,
        age: 32,
        weight_kg: 80.0,
        height_cm: 170.0,
        activity_level: ActivityLevel::ModeratelyActive,
    }
}

/// Absolute tolerance comparison for derived floats
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * (1.0 + a.abs().max(b.abs()))
}
