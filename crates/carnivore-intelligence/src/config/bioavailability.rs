// ABOUTME: Absorption factors applied to raw nutrient totals
// ABOUTME: Heme and non-heme iron, zinc and protein multipliers with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fixed absorption multipliers for an all-animal diet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioavailabilityConfig {
    /// Fraction of heme iron absorbed (0.0-1.0)
    pub heme_iron_factor: f64,
    /// Fraction of non-heme iron absorbed (0.0-1.0)
    pub non_heme_iron_factor: f64,
    /// Fraction of zinc absorbed from animal sources (0.0-1.0)
    pub zinc_factor: f64,
    /// Digestibility of animal protein (0.0-1.0)
    pub protein_factor: f64,
}

impl Default for BioavailabilityConfig {
    fn default() -> Self {
        Self {
            heme_iron_factor: 0.25,
            non_heme_iron_factor: 0.10,
            zinc_factor: 0.45,
            protein_factor: 0.95,
        }
    }
}

impl BioavailabilityConfig {
    /// Check every factor is a fraction and heme absorbs at least as well as non-heme
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFactor` on the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            (self.heme_iron_factor, "heme_iron_factor must be within [0, 1]"),
            (self.non_heme_iron_factor, "non_heme_iron_factor must be within [0, 1]"),
            (self.zinc_factor, "zinc_factor must be within [0, 1]"),
            (self.protein_factor, "protein_factor must be within [0, 1]"),
        ];
        for (factor, message) in factors {
            if !(0.0..=1.0).contains(&factor) {
                return Err(ConfigError::InvalidFactor(message));
            }
        }
        if self.heme_iron_factor < self.non_heme_iron_factor {
            return Err(ConfigError::InvalidFactor(
                "heme_iron_factor must be >= non_heme_iron_factor",
            ));
        }
        Ok(())
    }
}
