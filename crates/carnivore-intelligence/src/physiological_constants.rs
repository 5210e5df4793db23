// ABOUTME: Reference daily intakes and protein scaling factors from nutrition guidelines
// ABOUTME: Constants feeding per-nutrient target calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on dietary reference intakes
//!
//! Values are Recommended Dietary Allowances or Adequate Intakes for adults.
//! Units match [`carnivore_core::models::Nutrient::unit`].

/// Protein targets
///
/// References:
/// - Jäger, R. et al. (2017). ISSN Position Stand: protein and exercise
/// - <https://jissn.biomedcentral.com/articles/10.1186/s12970-017-0177-8>
pub mod protein {
    /// Daily protein target in grams when no profile is available
    pub const DEFAULT_TARGET_G: f64 = 100.0;

    /// Sedentary protein intake (g/kg body weight)
    pub const SEDENTARY_G_PER_KG: f64 = 1.2;

    /// Lightly active protein intake (g/kg)
    pub const LIGHTLY_ACTIVE_G_PER_KG: f64 = 1.4;

    /// Moderately active protein intake (g/kg)
    pub const MODERATELY_ACTIVE_G_PER_KG: f64 = 1.6;

    /// Very active protein intake (g/kg)
    pub const VERY_ACTIVE_G_PER_KG: f64 = 1.8;

    /// Extra active protein intake (g/kg)
    pub const EXTRA_ACTIVE_G_PER_KG: f64 = 2.0;
}

/// Vitamin reference intakes
///
/// References:
/// - Institute of Medicine (2000-2011). Dietary Reference Intakes tables
/// - <https://www.ncbi.nlm.nih.gov/books/NBK56068/>
pub mod vitamins {
    /// Vitamin A, male (µg RAE)
    pub const VITAMIN_A_MALE_UG: f64 = 900.0;
    /// Vitamin A, female (µg RAE)
    pub const VITAMIN_A_FEMALE_UG: f64 = 700.0;

    /// Vitamin C, male (mg)
    pub const VITAMIN_C_MALE_MG: f64 = 90.0;
    /// Vitamin C, female (mg)
    pub const VITAMIN_C_FEMALE_MG: f64 = 75.0;

    /// Vitamin D up to age 70 (IU)
    pub const VITAMIN_D_IU: f64 = 600.0;
    /// Vitamin D over age 70 (IU)
    pub const VITAMIN_D_OLDER_IU: f64 = 800.0;
    /// Age above which the older vitamin D target applies
    pub const VITAMIN_D_OLDER_AGE: u32 = 70;

    /// Vitamin K, male (µg)
    pub const VITAMIN_K_MALE_UG: f64 = 120.0;
    /// Vitamin K, female (µg)
    pub const VITAMIN_K_FEMALE_UG: f64 = 90.0;

    /// Thiamin, male (mg)
    pub const B1_MALE_MG: f64 = 1.2;
    /// Thiamin, female (mg)
    pub const B1_FEMALE_MG: f64 = 1.1;

    /// Riboflavin, male (mg)
    pub const B2_MALE_MG: f64 = 1.3;
    /// Riboflavin, female (mg)
    pub const B2_FEMALE_MG: f64 = 1.1;

    /// Niacin, male (mg NE)
    pub const B3_MALE_MG: f64 = 16.0;
    /// Niacin, female (mg NE)
    pub const B3_FEMALE_MG: f64 = 14.0;

    /// Pyridoxine up to age 50 (mg)
    pub const B6_MG: f64 = 1.3;
    /// Pyridoxine over 50, male (mg)
    pub const B6_OLDER_MALE_MG: f64 = 1.7;
    /// Pyridoxine over 50, female (mg)
    pub const B6_OLDER_FEMALE_MG: f64 = 1.5;
    /// Age above which the older pyridoxine targets apply
    pub const B6_OLDER_AGE: u32 = 50;

    /// Cobalamin (µg)
    pub const B12_UG: f64 = 2.4;

    /// Vitamin E (mg alpha-tocopherol)
    pub const VITAMIN_E_MG: f64 = 15.0;
}

/// Mineral reference intakes
///
/// References:
/// - Institute of Medicine (2001). DRI for Vitamin A, K, Iron, Zinc and trace elements
/// - Institute of Medicine (2019). DRI for Sodium and Potassium
pub mod minerals {
    /// Zinc, male (mg)
    pub const ZINC_MALE_MG: f64 = 11.0;
    /// Zinc, female (mg)
    pub const ZINC_FEMALE_MG: f64 = 8.0;

    /// Sodium adequate intake (mg)
    pub const SODIUM_MG: f64 = 1500.0;

    /// Potassium, male (mg)
    pub const POTASSIUM_MALE_MG: f64 = 3400.0;
    /// Potassium, female (mg)
    pub const POTASSIUM_FEMALE_MG: f64 = 2600.0;

    /// Magnesium, male 19-30 (mg)
    pub const MAGNESIUM_MALE_YOUNG_MG: f64 = 400.0;
    /// Magnesium, male over 30 (mg)
    pub const MAGNESIUM_MALE_MG: f64 = 420.0;
    /// Magnesium, female 19-30 (mg)
    pub const MAGNESIUM_FEMALE_YOUNG_MG: f64 = 310.0;
    /// Magnesium, female over 30 (mg)
    pub const MAGNESIUM_FEMALE_MG: f64 = 320.0;
    /// Age above which the adult magnesium targets apply
    pub const MAGNESIUM_YOUNG_MAX_AGE: u32 = 30;

    /// Calcium (mg)
    pub const CALCIUM_MG: f64 = 1000.0;
    /// Calcium for women over 50 and men over 70 (mg)
    pub const CALCIUM_OLDER_MG: f64 = 1200.0;
    /// Age above which older women get the higher calcium target
    pub const CALCIUM_OLDER_FEMALE_AGE: u32 = 50;
    /// Age above which older men get the higher calcium target
    pub const CALCIUM_OLDER_MALE_AGE: u32 = 70;

    /// Phosphorus (mg)
    pub const PHOSPHORUS_MG: f64 = 700.0;

    /// Selenium (µg)
    pub const SELENIUM_UG: f64 = 55.0;

    /// Copper (µg)
    pub const COPPER_UG: f64 = 900.0;

    /// Manganese, male (mg)
    pub const MANGANESE_MALE_MG: f64 = 2.3;
    /// Manganese, female (mg)
    pub const MANGANESE_FEMALE_MG: f64 = 1.8;

    /// Iron default and for men (mg)
    pub const IRON_MG: f64 = 8.0;
    /// Iron for menstruating women (mg)
    pub const IRON_FEMALE_MG: f64 = 18.0;
    /// Age range bounds for the higher female iron target
    pub const IRON_FEMALE_MIN_AGE: u32 = 19;
    /// Upper bound of the higher female iron target age range
    pub const IRON_FEMALE_MAX_AGE: u32 = 50;
}
