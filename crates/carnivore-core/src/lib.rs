// ABOUTME: Core types and error model for the carnivore tracker computation engine
// ABOUTME: Foundation crate with error handling and diet-log domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Carnivore Core
//!
//! Foundation crate providing shared types for the carnivore tracker engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **models**: Nutrient codes, food entries, profiles, daily logs, recovery
//!   protocols and trophy progress

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (nutrients, food entries, daily logs, protocols, trophies)
pub mod models;
