// ABOUTME: Domain service layer composing the pure engine with store and notification collaborators
// ABOUTME: Recovery protocol lifecycle, trophy progress persistence and guarded assistant calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Each mutation is a single read-modify-write against a collaborator. The
//! engine assumes one active writer per record and does not detect lost updates.

/// Assistant calls behind the rate limiter and retry policy
pub mod assistant;

/// Violation reports, recovery protocols and todo updates
pub mod recovery;

/// Trophy progress load, mutate and save
pub mod trophies;

pub use assistant::{AssistantClient, AssistantGateway, AssistantReply};
pub use recovery::{RecoveryService, ViolationReport};
pub use trophies::TrophyService;
