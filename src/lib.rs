// ABOUTME: Main library entry point for the carnivore tracker application layer
// ABOUTME: Logging, assistant call guards, collaborator traits and recovery/trophy services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Carnivore Tracker
//!
//! Application layer over the pure computation engine in
//! `carnivore-intelligence`. Calculators stay synchronous; this crate adds the
//! parts that touch time, storage and external services.
//!
//! ## Architecture
//!
//! - **Core** (`carnivore-core`): errors and data models
//! - **Intelligence** (`carnivore-intelligence`): metrics, classification,
//!   recovery protocols and trophies
//! - **Guards**: sliding-window rate limiting and exponential backoff for
//!   calls to an external assistant
//! - **Collaborators**: async store and notification traits with in-memory
//!   implementations
//! - **Services**: read-modify-write flows over the collaborators
//!
//! ## Example
//!
//! ```rust
//! use carnivore_tracker::intelligence::{calculate_all_metrics, EngineConfig};
//! use carnivore_tracker::models::{FoodCategory, FoodEntry, FoodUnit, Nutrient};
//!
//! let steak = FoodEntry::new("ribeye", 300.0, FoodUnit::Gram, FoodCategory::Ruminant)
//!     .with_nutrient(Nutrient::Protein, 72.0);
//! let config = EngineConfig::default();
//! let metrics = calculate_all_metrics(&[steak], None, &config.bioavailability);
//! assert!(metrics.effective_protein() > 68.0);
//! ```

/// Re-exported error types from the core crate
pub use carnivore_core::errors;
/// Re-exported data models from the core crate
pub use carnivore_core::models;
/// Re-exported computation engine
pub use carnivore_intelligence as intelligence;
/// Re-exported engine configuration
pub use carnivore_intelligence::config;

/// Structured logging setup
pub mod logging;

/// Reminder scheduling collaborator
pub mod notifications;

/// Sliding-window rate limiting for assistant calls
pub mod rate_limiting;

/// Exponential backoff for assistant calls
pub mod retry;

/// Recovery and trophy services
pub mod services;

/// Log and progress store collaborators
pub mod storage;
