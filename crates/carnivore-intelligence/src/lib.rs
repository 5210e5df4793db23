// ABOUTME: Pure computation engine for the carnivore tracker
// ABOUTME: Aggregation, bioavailability, targets, vitamin D, violations, recovery and trophies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Carnivore Intelligence
//!
//! Synchronous, side-effect free calculators. Nothing in this crate reads the
//! clock, the environment (outside [`config::EngineConfig::load`]) or any store:
//! time and configuration are always passed in.
//!
//! ## Modules
//!
//! - **`nutrient_aggregator`**: entry list → `CalculatedMetrics`
//! - **`bioavailability`**: effective iron, zinc and protein
//! - **`nutrient_targets`**: profile-scaled daily targets
//! - **`vitamin_d`**: sun exposure synthesis estimate
//! - **`violation_classifier`**: free text → violation category
//! - **`recovery_protocol`**: violation category → recovery plan
//! - **`trophies`**: achievement catalog and tracker
//! - **`config`**: engine configuration with env overrides

/// Absorption weighting of raw totals
pub mod bioavailability;
/// Engine configuration
pub mod config;
/// Folding entries into daily metrics
pub mod nutrient_aggregator;
/// Daily reference targets
pub mod nutrient_targets;
/// Reference intake constants
pub mod physiological_constants;
/// Recovery plan generation
pub mod recovery_protocol;
/// Trophy catalog and tracker
pub mod trophies;
/// Free-text violation classification
pub mod violation_classifier;
/// Vitamin D synthesis estimate
pub mod vitamin_d;

pub use bioavailability::{calculate_effective_nutrients, effective_iron, EffectiveNutrients};
pub use config::{ConfigError, EngineConfig};
pub use nutrient_aggregator::{aggregate_totals, calculate_all_metrics, CalculatedMetrics};
pub use nutrient_targets::{calculate_nutrient_targets, iron_target_mg, target_for};
pub use recovery_protocol::{
    compute_fast_end, generate_protocol, set_fasting_target_hours, template_for,
};
pub use trophies::{TrophyCatalog, TrophyCondition, TrophyDefinition, TrophyTracker};
pub use violation_classifier::{classify_entries, detect_violation_type, EntryViolation};
pub use vitamin_d::{estimate_vitamin_d_iu, total_vitamin_d_iu, SunExposure, WeatherFactor};
