// ABOUTME: Absorption weighting of raw nutrient totals into effective iron, zinc and protein
// ABOUTME: Heme and non-heme iron contribute by weighted sum, never by direct addition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use carnivore_core::models::{sanitize_amount, Nutrient, NutrientTotals};

use crate::config::BioavailabilityConfig;

/// Bioavailability-adjusted quantities
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveNutrients {
    /// Absorbed protein in grams
    pub protein_g: f64,
    /// Absorbed iron in mg
    pub iron_mg: f64,
    /// Absorbed zinc in mg
    pub zinc_mg: f64,
}

/// Clamp a configured factor to `[0, 1]`, mapping NaN to 0
fn fraction(factor: f64) -> f64 {
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}

/// Weighted iron absorption
///
/// `heme * heme_factor + non_heme * non_heme_factor`. Bounded above by
/// `(heme + non_heme) * max(heme_factor, non_heme_factor)`.
#[must_use]
pub fn effective_iron(heme_mg: f64, non_heme_mg: f64, config: &BioavailabilityConfig) -> f64 {
    sanitize_amount(heme_mg).mul_add(
        fraction(config.heme_iron_factor),
        sanitize_amount(non_heme_mg) * fraction(config.non_heme_iron_factor),
    )
}

/// Effective protein, iron and zinc from raw totals
#[must_use]
pub fn calculate_effective_nutrients(
    totals: &NutrientTotals,
    config: &BioavailabilityConfig,
) -> EffectiveNutrients {
    EffectiveNutrients {
        protein_g: sanitize_amount(totals.get(Nutrient::Protein)) * fraction(config.protein_factor),
        iron_mg: effective_iron(
            totals.get(Nutrient::HemeIron),
            totals.get(Nutrient::NonHemeIron),
            config,
        ),
        zinc_mg: sanitize_amount(totals.get(Nutrient::Zinc)) * fraction(config.zinc_factor),
    }
}
