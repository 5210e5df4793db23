// ABOUTME: Folds logged food entries into nutrient totals and derived daily metrics
// ABOUTME: CalculatedMetrics is a pure, total function of the entry list and optional profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient Aggregation
//!
//! Missing per-entry nutrient values count as zero and negative or non-finite
//! values are dropped before summation, so the result is never NaN and an
//! empty list yields all zeros. Summation is a plain fold over entries and is
//! order-independent within floating-point tolerance.
//!
//! `CalculatedMetrics` is never persisted; hosts recompute it whenever the
//! entry list changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use carnivore_core::models::{FoodEntry, Nutrient, NutrientTotals, UserProfile};

use crate::bioavailability::{calculate_effective_nutrients, EffectiveNutrients};
use crate::config::BioavailabilityConfig;
use crate::nutrient_targets::{calculate_nutrient_targets, iron_target_mg};

/// Derived daily metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedMetrics {
    /// Raw totals for every nutrient
    pub totals: NutrientTotals,
    /// Heme plus non-heme iron in mg
    pub total_iron: f64,
    /// Bioavailability-adjusted protein, iron and zinc
    pub effective: EffectiveNutrients,
    /// Daily targets for targeted nutrients
    pub targets: BTreeMap<Nutrient, f64>,
    /// Percent of target reached, per targeted nutrient
    pub achievement: BTreeMap<Nutrient, f64>,
    /// Combined iron target in mg
    pub iron_target_mg: f64,
    /// Percent of the combined iron target reached by total iron
    pub iron_achievement: f64,
    /// Number of entries aggregated
    pub entry_count: usize,
}

impl CalculatedMetrics {
    /// Raw total of one nutrient
    #[must_use]
    pub const fn amount(&self, nutrient: Nutrient) -> f64 {
        self.totals.get(nutrient)
    }

    /// Percent of target, `None` when the nutrient has no target
    #[must_use]
    pub fn achievement_for(&self, nutrient: Nutrient) -> Option<f64> {
        self.achievement.get(&nutrient).copied()
    }

    /// Absorbed protein in grams
    #[must_use]
    pub const fn effective_protein(&self) -> f64 {
        self.effective.protein_g
    }

    /// Absorbed iron in mg
    #[must_use]
    pub const fn effective_iron(&self) -> f64 {
        self.effective.iron_mg
    }

    /// Absorbed zinc in mg
    #[must_use]
    pub const fn effective_zinc(&self) -> f64 {
        self.effective.zinc_mg
    }

    /// Raw protein in grams
    #[must_use]
    pub const fn total_protein(&self) -> f64 {
        self.totals.get(Nutrient::Protein)
    }

    /// Total fat in grams
    #[must_use]
    pub const fn total_fat(&self) -> f64 {
        self.totals.get(Nutrient::Fat)
    }

    /// Net carbohydrates in grams
    #[must_use]
    pub const fn net_carbs(&self) -> f64 {
        self.totals.get(Nutrient::NetCarbs)
    }

    /// Vitamin B12 in µg
    #[must_use]
    pub const fn vitamin_b12(&self) -> f64 {
        self.totals.get(Nutrient::VitaminB12)
    }

    /// Food-derived vitamin D in IU
    #[must_use]
    pub const fn vitamin_d(&self) -> f64 {
        self.totals.get(Nutrient::VitaminD)
    }

    /// Sodium in mg
    #[must_use]
    pub const fn sodium(&self) -> f64 {
        self.totals.get(Nutrient::Sodium)
    }
}

/// Sum every entry's sanitized nutrients
#[must_use]
pub fn aggregate_totals(entries: &[FoodEntry]) -> NutrientTotals {
    entries
        .iter()
        .fold(NutrientTotals::zero(), |acc, entry| acc + entry.totals())
}

/// Compute every daily metric from scratch
#[must_use]
pub fn calculate_all_metrics(
    entries: &[FoodEntry],
    profile: Option<&UserProfile>,
    config: &BioavailabilityConfig,
) -> CalculatedMetrics {
    let totals = aggregate_totals(entries);
    let total_iron = totals.get(Nutrient::HemeIron) + totals.get(Nutrient::NonHemeIron);
    let effective = calculate_effective_nutrients(&totals, config);

    let targets = calculate_nutrient_targets(profile);
    let achievement = targets
        .iter()
        .map(|(nutrient, target)| (*nutrient, percent_of(totals.get(*nutrient), *target)))
        .collect();
    let iron_target = iron_target_mg(profile);

    debug!(
        entry_count = entries.len(),
        protein_g = totals.get(Nutrient::Protein),
        effective_iron_mg = effective.iron_mg,
        "Calculated daily metrics"
    );

    CalculatedMetrics {
        totals,
        total_iron,
        effective,
        targets,
        achievement,
        iron_target_mg: iron_target,
        iron_achievement: percent_of(total_iron, iron_target),
        entry_count: entries.len(),
    }
}

fn percent_of(amount: f64, target: f64) -> f64 {
    if target > 0.0 {
        amount / target * 100.0
    } else {
        0.0
    }
}
