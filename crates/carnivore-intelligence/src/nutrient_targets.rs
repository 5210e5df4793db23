// ABOUTME: Per-nutrient daily reference targets scaled by the user profile
// ABOUTME: Exhaustive match over Nutrient; macros and iron forms have no standalone target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use carnivore_core::models::{ActivityLevel, Gender, Nutrient, UserProfile};

use crate::physiological_constants::{minerals, protein, vitamins};

/// Age assumed when no profile is supplied
const DEFAULT_AGE: u32 = 30;

/// Daily target for one nutrient
///
/// Returns `None` for nutrients that are tracked but not targeted (fat,
/// carbohydrates, fiber and the two iron forms, which share the combined
/// [`iron_target_mg`]). Without a profile the adult male reference applies,
/// with a fixed protein target.
#[must_use]
pub fn target_for(nutrient: Nutrient, profile: Option<&UserProfile>) -> Option<f64> {
    let gender = profile.map_or(Gender::Male, |p| p.gender);
    let age = profile.map_or(DEFAULT_AGE, |p| p.age);
    let male = gender == Gender::Male;
    let pick = |m: f64, f: f64| if male { m } else { f };

    let target = match nutrient {
        Nutrient::Protein => profile.map_or(protein::DEFAULT_TARGET_G, protein_target_g),
        Nutrient::Fat
        | Nutrient::Carbs
        | Nutrient::NetCarbs
        | Nutrient::Fiber
        | Nutrient::HemeIron
        | Nutrient::NonHemeIron => return None,
        Nutrient::VitaminA => pick(vitamins::VITAMIN_A_MALE_UG, vitamins::VITAMIN_A_FEMALE_UG),
        Nutrient::VitaminC => pick(vitamins::VITAMIN_C_MALE_MG, vitamins::VITAMIN_C_FEMALE_MG),
        Nutrient::VitaminD => {
            if age > vitamins::VITAMIN_D_OLDER_AGE {
                vitamins::VITAMIN_D_OLDER_IU
            } else {
                vitamins::VITAMIN_D_IU
            }
        }
        Nutrient::VitaminK => pick(vitamins::VITAMIN_K_MALE_UG, vitamins::VITAMIN_K_FEMALE_UG),
        Nutrient::VitaminB1 => pick(vitamins::B1_MALE_MG, vitamins::B1_FEMALE_MG),
        Nutrient::VitaminB2 => pick(vitamins::B2_MALE_MG, vitamins::B2_FEMALE_MG),
        Nutrient::VitaminB3 => pick(vitamins::B3_MALE_MG, vitamins::B3_FEMALE_MG),
        Nutrient::VitaminB6 => {
            if age > vitamins::B6_OLDER_AGE {
                pick(vitamins::B6_OLDER_MALE_MG, vitamins::B6_OLDER_FEMALE_MG)
            } else {
                vitamins::B6_MG
            }
        }
        Nutrient::VitaminB12 => vitamins::B12_UG,
        Nutrient::VitaminE => vitamins::VITAMIN_E_MG,
        Nutrient::Zinc => pick(minerals::ZINC_MALE_MG, minerals::ZINC_FEMALE_MG),
        Nutrient::Sodium => minerals::SODIUM_MG,
        Nutrient::Potassium => pick(minerals::POTASSIUM_MALE_MG, minerals::POTASSIUM_FEMALE_MG),
        Nutrient::Magnesium => {
            if age > minerals::MAGNESIUM_YOUNG_MAX_AGE {
                pick(minerals::MAGNESIUM_MALE_MG, minerals::MAGNESIUM_FEMALE_MG)
            } else {
                pick(
                    minerals::MAGNESIUM_MALE_YOUNG_MG,
                    minerals::MAGNESIUM_FEMALE_YOUNG_MG,
                )
            }
        }
        Nutrient::Calcium => {
            let older_age = if male {
                minerals::CALCIUM_OLDER_MALE_AGE
            } else {
                minerals::CALCIUM_OLDER_FEMALE_AGE
            };
            if age > older_age {
                minerals::CALCIUM_OLDER_MG
            } else {
                minerals::CALCIUM_MG
            }
        }
        Nutrient::Phosphorus => minerals::PHOSPHORUS_MG,
        Nutrient::Selenium => minerals::SELENIUM_UG,
        Nutrient::Copper => minerals::COPPER_UG,
        Nutrient::Manganese => pick(minerals::MANGANESE_MALE_MG, minerals::MANGANESE_FEMALE_MG),
    };
    Some(target)
}

/// Combined heme plus non-heme iron target in mg
#[must_use]
pub fn iron_target_mg(profile: Option<&UserProfile>) -> f64 {
    match profile {
        Some(p)
            if p.gender == Gender::Female
                && (minerals::IRON_FEMALE_MIN_AGE..=minerals::IRON_FEMALE_MAX_AGE)
                    .contains(&p.age) =>
        {
            minerals::IRON_FEMALE_MG
        }
        _ => minerals::IRON_MG,
    }
}

/// Protein target from body weight and activity level
///
/// Falls back to the fixed default when the weight is not a positive number.
#[must_use]
pub fn protein_target_g(profile: &UserProfile) -> f64 {
    if !(profile.weight_kg.is_finite() && profile.weight_kg > 0.0) {
        return protein::DEFAULT_TARGET_G;
    }
    let grams_per_kg = match profile.activity_level {
        ActivityLevel::Sedentary => protein::SEDENTARY_G_PER_KG,
        ActivityLevel::LightlyActive => protein::LIGHTLY_ACTIVE_G_PER_KG,
        ActivityLevel::ModeratelyActive => protein::MODERATELY_ACTIVE_G_PER_KG,
        ActivityLevel::VeryActive => protein::VERY_ACTIVE_G_PER_KG,
        ActivityLevel::ExtraActive => protein::EXTRA_ACTIVE_G_PER_KG,
    };
    profile.weight_kg * grams_per_kg
}

/// Targets for every nutrient that has one
#[must_use]
pub fn calculate_nutrient_targets(profile: Option<&UserProfile>) -> BTreeMap<Nutrient, f64> {
    Nutrient::ALL
        .into_iter()
        .filter_map(|nutrient| target_for(nutrient, profile).map(|target| (nutrient, target)))
        .collect()
}
