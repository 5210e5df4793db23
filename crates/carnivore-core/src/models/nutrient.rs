// ABOUTME: Closed set of tracked nutrient codes with units and wire names
// ABOUTME: NutrientTotals stores one sanitized value per nutrient in a fixed array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Measurement unit of a nutrient amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientUnit {
    /// Grams
    Gram,
    /// Milligrams
    Milligram,
    /// Micrograms
    Microgram,
    /// International units
    InternationalUnit,
}

impl NutrientUnit {
    /// Short display symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Milligram => "mg",
            Self::Microgram => "µg",
            Self::InternationalUnit => "IU",
        }
    }
}

/// Tracked nutrient code
///
/// Declaration order is the index into [`NutrientTotals`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Protein (g)
    Protein,
    /// Total fat (g)
    Fat,
    /// Total carbohydrates (g)
    Carbs,
    /// Net carbohydrates (g)
    NetCarbs,
    /// Dietary fiber (g)
    Fiber,
    /// Heme iron (mg)
    HemeIron,
    /// Non-heme iron (mg)
    NonHemeIron,
    /// Vitamin A, retinol activity equivalents (µg)
    VitaminA,
    /// Vitamin C (mg)
    VitaminC,
    /// Vitamin D (IU)
    VitaminD,
    /// Vitamin K (µg)
    VitaminK,
    /// Thiamin (mg)
    VitaminB1,
    /// Riboflavin (mg)
    VitaminB2,
    /// Niacin (mg)
    VitaminB3,
    /// Pyridoxine (mg)
    VitaminB6,
    /// Cobalamin (µg)
    VitaminB12,
    /// Vitamin E (mg)
    VitaminE,
    /// Zinc (mg)
    Zinc,
    /// Sodium (mg)
    Sodium,
    /// Potassium (mg)
    Potassium,
    /// Magnesium (mg)
    Magnesium,
    /// Calcium (mg)
    Calcium,
    /// Phosphorus (mg)
    Phosphorus,
    /// Selenium (µg)
    Selenium,
    /// Copper (µg)
    Copper,
    /// Manganese (mg)
    Manganese,
}

impl Nutrient {
    /// Number of tracked nutrients
    pub const COUNT: usize = 26;

    /// Every nutrient in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Protein,
        Self::Fat,
        Self::Carbs,
        Self::NetCarbs,
        Self::Fiber,
        Self::HemeIron,
        Self::NonHemeIron,
        Self::VitaminA,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminK,
        Self::VitaminB1,
        Self::VitaminB2,
        Self::VitaminB3,
        Self::VitaminB6,
        Self::VitaminB12,
        Self::VitaminE,
        Self::Zinc,
        Self::Sodium,
        Self::Potassium,
        Self::Magnesium,
        Self::Calcium,
        Self::Phosphorus,
        Self::Selenium,
        Self::Copper,
        Self::Manganese,
    ];

    /// Position in [`Nutrient::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable `snake_case` wire code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carbs => "carbs",
            Self::NetCarbs => "net_carbs",
            Self::Fiber => "fiber",
            Self::HemeIron => "heme_iron",
            Self::NonHemeIron => "non_heme_iron",
            Self::VitaminA => "vitamin_a",
            Self::VitaminC => "vitamin_c",
            Self::VitaminD => "vitamin_d",
            Self::VitaminK => "vitamin_k",
            Self::VitaminB1 => "vitamin_b1",
            Self::VitaminB2 => "vitamin_b2",
            Self::VitaminB3 => "vitamin_b3",
            Self::VitaminB6 => "vitamin_b6",
            Self::VitaminB12 => "vitamin_b12",
            Self::VitaminE => "vitamin_e",
            Self::Zinc => "zinc",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Magnesium => "magnesium",
            Self::Calcium => "calcium",
            Self::Phosphorus => "phosphorus",
            Self::Selenium => "selenium",
            Self::Copper => "copper",
            Self::Manganese => "manganese",
        }
    }

    /// Unit every amount of this nutrient is expressed in
    #[must_use]
    pub const fn unit(self) -> NutrientUnit {
        match self {
            Self::Protein | Self::Fat | Self::Carbs | Self::NetCarbs | Self::Fiber => {
                NutrientUnit::Gram
            }
            Self::VitaminA
            | Self::VitaminK
            | Self::VitaminB12
            | Self::Selenium
            | Self::Copper => NutrientUnit::Microgram,
            Self::VitaminD => NutrientUnit::InternationalUnit,
            Self::HemeIron
            | Self::NonHemeIron
            | Self::VitaminC
            | Self::VitaminB1
            | Self::VitaminB2
            | Self::VitaminB3
            | Self::VitaminB6
            | Self::VitaminE
            | Self::Zinc
            | Self::Sodium
            | Self::Potassium
            | Self::Magnesium
            | Self::Calcium
            | Self::Phosphorus
            | Self::Manganese => NutrientUnit::Milligram,
        }
    }

    /// Parse a wire code, case-insensitively
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|n| n.code() == code)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Dense per-nutrient amounts
///
/// Every nutrient is always present. Values written through [`NutrientTotals::accumulate`]
/// are sanitized so the array never holds a negative or non-finite number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Nutrient, f64>",
    into = "BTreeMap<Nutrient, f64>"
)]
pub struct NutrientTotals {
    values: [f64; Nutrient::COUNT],
}

impl Default for NutrientTotals {
    fn default() -> Self {
        Self::zero()
    }
}

impl NutrientTotals {
    /// All nutrients at exactly zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            values: [0.0; Nutrient::COUNT],
        }
    }

    /// Amount of one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        self.values[nutrient.index()]
    }

    /// Add an amount, treating negative or non-finite input as zero
    pub fn accumulate(&mut self, nutrient: Nutrient, amount: f64) {
        self.values[nutrient.index()] += sanitize_amount(amount);
    }

    /// Iterate `(nutrient, amount)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.iter().map(|n| (*n, self.values[n.index()]))
    }

    /// Multiply every amount by a non-negative factor
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let factor = sanitize_amount(factor);
        let mut out = *self;
        for value in &mut out.values {
            *value *= factor;
        }
        out
    }

    /// True when every nutrient is exactly zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v <= 0.0)
    }
}

/// Clamp an externally supplied amount into `[0, +inf)`
#[must_use]
pub fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs += rhs;
        }
    }
}

impl From<BTreeMap<Nutrient, f64>> for NutrientTotals {
    fn from(map: BTreeMap<Nutrient, f64>) -> Self {
        let mut totals = Self::zero();
        for (nutrient, amount) in map {
            totals.accumulate(nutrient, amount);
        }
        totals
    }
}

impl From<NutrientTotals> for BTreeMap<Nutrient, f64> {
    fn from(totals: NutrientTotals) -> Self {
        totals.iter().collect()
    }
}
