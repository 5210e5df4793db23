// ABOUTME: Integration tests for free-text violation classification
// ABOUTME: Case handling, category priority, conforming allow-list and per-entry checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carnivore_tracker::intelligence::violation_classifier::keywords;
use carnivore_tracker::intelligence::{classify_entries, detect_violation_type};
use carnivore_tracker::models::{FoodCategory, FoodEntry, FoodUnit, ViolationCategory};
use common::{init_test_logging, ribeye};

#[test]
fn test_plain_meat_is_not_a_violation() {
    init_test_logging();
    for text in [
        "ribeye steak",
        "Ribeye Steak",
        "RIBEYE STEAK",
        "chicken thighs and bone broth",
        "crumbled bacon",
        "",
        "   ",
    ] {
        assert_eq!(detect_violation_type(text), None, "{text:?}");
    }
}

#[test]
fn test_detection_ignores_case_and_punctuation() {
    assert_eq!(
        detect_violation_type("Had a slice of Birthday CAKE!!"),
        Some(ViolationCategory::Sugar)
    );
    assert_eq!(
        detect_violation_type("WHISKEY, neat"),
        Some(ViolationCategory::Alcohol)
    );
    assert_eq!(
        detect_violation_type("greek-yogurt"),
        Some(ViolationCategory::Dairy)
    );
}

#[test]
fn test_sugar_inside_otherwise_conforming_text() {
    assert_eq!(
        detect_violation_type("sugar-cured bacon with eggs"),
        Some(ViolationCategory::Sugar)
    );
    assert_eq!(
        detect_violation_type("honey glazed ham"),
        Some(ViolationCategory::Sugar)
    );
}

#[test]
fn test_priority_order_breaks_ties() {
    // grain beats dairy
    assert_eq!(
        detect_violation_type("pizza with extra cheese"),
        Some(ViolationCategory::GrainGluten)
    );
    // grain beats alcohol
    assert_eq!(
        detect_violation_type("beer and a burger on a bun"),
        Some(ViolationCategory::GrainGluten)
    );
    // sugar beats everything
    assert_eq!(
        detect_violation_type("wine, bread and chocolate cake"),
        Some(ViolationCategory::Sugar)
    );
    assert_eq!(
        detect_violation_type("wings fried in canola"),
        Some(ViolationCategory::SeedOil)
    );
    assert_eq!(
        detect_violation_type("gas station hot dog"),
        Some(ViolationCategory::UltraProcessed)
    );
}

#[test]
fn test_allow_listed_neighbours_still_match_real_violations() {
    assert_eq!(
        detect_violation_type("capicola and a diet cola"),
        Some(ViolationCategory::Sugar)
    );
    assert_eq!(
        detect_violation_type("head cheese with cheddar"),
        Some(ViolationCategory::Dairy)
    );
    assert_eq!(
        detect_violation_type("applewood bacon, apple slices"),
        Some(ViolationCategory::Sugar)
    );
}

#[test]
fn test_conforming_terms_are_masked() {
    for text in [
        "sweetbreads and drumsticks",
        "honeycomb tripe",
        "corned beef brisket",
        "goat steak",
        "jamón slices",
        "peppercorn crusted steak",
        "rump roast basted in ghee",
        "butter",
        "lamb fries",
        "minimally processed ground beef",
        "capicola",
        "applewood smoked bacon",
        "head cheese",
    ] {
        assert_eq!(detect_violation_type(text), None, "{text:?}");
    }
}

#[test]
fn test_whole_word_keywords() {
    assert_eq!(
        detect_violation_type("a rum and coke"),
        Some(ViolationCategory::Alcohol)
    );
    assert_eq!(detect_violation_type("price of beef"), None);
    assert_eq!(
        detect_violation_type("fried rice"),
        Some(ViolationCategory::GrainGluten)
    );
}

#[test]
fn test_every_category_has_keywords() {
    for category in ViolationCategory::ALL {
        assert!(!keywords(category).is_empty(), "{category}");
    }
}

#[test]
fn test_classify_entries_flags_non_conforming_items() {
    let entries = vec![
        ribeye(),
        FoodEntry::new("Glazed donut", 1.0, FoodUnit::Piece, FoodCategory::NonConforming),
        FoodEntry::new("Mystery snack", 40.0, FoodUnit::Gram, FoodCategory::NonConforming),
        FoodEntry::new("Butter", 20.0, FoodUnit::Gram, FoodCategory::EggsFats),
        FoodEntry::new("Cheddar", 30.0, FoodUnit::Gram, FoodCategory::Dairy),
    ];
    let violations = classify_entries(&entries);

    let found: Vec<(usize, ViolationCategory)> =
        violations.iter().map(|v| (v.index, v.category)).collect();
    assert_eq!(
        found,
        vec![
            (1, ViolationCategory::Sugar),
            (2, ViolationCategory::UltraProcessed),
            (4, ViolationCategory::Dairy),
        ]
    );
    assert_eq!(violations[0].name, "Glazed donut");
}
