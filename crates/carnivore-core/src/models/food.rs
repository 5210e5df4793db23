// ABOUTME: Logged food entry model with category tag and absolute nutrient amounts
// ABOUTME: FoodEntry, FoodCategory, FoodUnit and the normalizer's NormalizedFood triple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::nutrient::{sanitize_amount, Nutrient, NutrientTotals};

/// Grams per reference portion for mass and volume compositions
const REFERENCE_PORTION: f64 = 100.0;

/// Food category tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Beef, lamb, bison, goat and other ruminant meat
    Ruminant,
    /// Pork, poultry, fish, seafood and organ meat
    Animal,
    /// Eggs and rendered animal fats
    EggsFats,
    /// Dairy products
    Dairy,
    /// Anything outside the conforming set
    NonConforming,
}

impl FoodCategory {
    /// Whether the category belongs to the all-animal diet
    #[must_use]
    pub const fn is_conforming(self) -> bool {
        !matches!(self, Self::NonConforming)
    }
}

/// Unit of a logged amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FoodUnit {
    /// Grams
    #[serde(rename = "g")]
    Gram,
    /// Milliliters
    #[serde(rename = "ml")]
    Milliliter,
    /// Whole pieces (eggs, patties)
    #[serde(rename = "piece")]
    Piece,
}

/// Structured `{name, amount, unit}` triple produced by the food-text normalizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFood {
    /// Food name as recognized
    pub name: String,
    /// Logged amount
    pub amount: f64,
    /// Logged unit
    pub unit: FoodUnit,
}

/// One logged food
///
/// Nutrient values are absolute quantities already scaled to the logged amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Food name
    pub name: String,
    /// Logged amount in `unit`
    pub amount: f64,
    /// Unit of `amount`
    pub unit: FoodUnit,
    /// Category tag
    pub category: FoodCategory,
    /// Absolute nutrient amounts for this entry
    #[serde(default)]
    pub nutrients: BTreeMap<Nutrient, f64>,
}

impl FoodEntry {
    /// Create an entry with no nutrient data
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: FoodUnit, category: FoodCategory) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
            category,
            nutrients: BTreeMap::new(),
        }
    }

    /// Set one nutrient amount
    #[must_use]
    pub fn with_nutrient(mut self, nutrient: Nutrient, amount: f64) -> Self {
        self.nutrients.insert(nutrient, amount);
        self
    }

    /// Sanitized amount of one nutrient; missing, negative or non-finite values read as 0
    #[must_use]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nutrients
            .get(&nutrient)
            .copied()
            .map_or(0.0, sanitize_amount)
    }

    /// Dense sanitized totals for this single entry
    #[must_use]
    pub fn totals(&self) -> NutrientTotals {
        let mut totals = NutrientTotals::zero();
        for (nutrient, amount) in &self.nutrients {
            totals.accumulate(*nutrient, *amount);
        }
        totals
    }

    /// Same food with amount and every nutrient multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            amount: self.amount * factor,
            unit: self.unit,
            category: self.category,
            nutrients: self
                .nutrients
                .iter()
                .map(|(nutrient, amount)| (*nutrient, amount * factor))
                .collect(),
        }
    }

    /// Build an entry from a normalized triple and a reference composition
    ///
    /// `per_reference` holds amounts per 100 g (or 100 ml) for mass and volume
    /// units, and per piece for [`FoodUnit::Piece`]. Amounts scale linearly.
    #[must_use]
    pub fn from_per_100g(
        food: &NormalizedFood,
        category: FoodCategory,
        per_reference: &BTreeMap<Nutrient, f64>,
    ) -> Self {
        let factor = match food.unit {
            FoodUnit::Gram | FoodUnit::Milliliter => sanitize_amount(food.amount) / REFERENCE_PORTION,
            FoodUnit::Piece => sanitize_amount(food.amount),
        };
        Self {
            name: food.name.clone(),
            amount: food.amount,
            unit: food.unit,
            category,
            nutrients: per_reference
                .iter()
                .map(|(nutrient, amount)| (*nutrient, sanitize_amount(*amount) * factor))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_per_100g_scales_linearly() {
        let composition = BTreeMap::from([(Nutrient::Protein, 26.0), (Nutrient::Zinc, 4.8)]);
        let food = NormalizedFood {
            name: "ground beef".into(),
            amount: 250.0,
            unit: FoodUnit::Gram,
        };
        let entry = FoodEntry::from_per_100g(&food, FoodCategory::Ruminant, &composition);
        assert!((entry.nutrient(Nutrient::Protein) - 65.0).abs() < 1e-9);
        assert!((entry.nutrient(Nutrient::Zinc) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_piece_composition_is_per_piece() {
        let composition = BTreeMap::from([(Nutrient::Protein, 6.3)]);
        let food = NormalizedFood {
            name: "egg".into(),
            amount: 3.0,
            unit: FoodUnit::Piece,
        };
        let entry = FoodEntry::from_per_100g(&food, FoodCategory::EggsFats, &composition);
        assert!((entry.nutrient(Nutrient::Protein) - 18.9).abs() < 1e-9);
    }

    #[test]
    fn test_unit_wire_names() {
        assert_eq!(serde_json::to_string(&FoodUnit::Gram).unwrap(), "\"g\"");
        assert_eq!(serde_json::to_string(&FoodUnit::Piece).unwrap(), "\"piece\"");
        assert_eq!(
            serde_json::to_string(&FoodCategory::EggsFats).unwrap(),
            "\"eggs_fats\""
        );
    }
}
