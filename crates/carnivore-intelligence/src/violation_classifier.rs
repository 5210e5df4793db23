// ABOUTME: Lexical classifier mapping free-text food descriptions to violation categories
// ABOUTME: Fixed priority order with a masked allow-list of conforming terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Violation Classification
//!
//! Text is lowercased, punctuation becomes whitespace and the result is padded
//! with a space on each side. Conforming terms are then blanked out and the
//! keyword sets are scanned in priority order:
//!
//! sugar → grain/gluten → seed oil → dairy → alcohol → ultra-processed
//!
//! The first category with a matching keyword wins. Keywords written with
//! surrounding spaces only match whole words.

use serde::{Deserialize, Serialize};

use carnivore_core::models::{FoodCategory, FoodEntry, ViolationCategory};

/// Carnivore-conforming terms that contain a category keyword
const CONFORMING_TERMS: &[&str] = &[
    "minimally processed",
    "unprocessed",
    "honeycomb tripe",
    "head cheese",
    "headcheese",
    "corned beef",
    "applewood",
    "capicola",
    "lamb fries",
    "sweetbread",
    "drumstick",
    "peppercorn",
    "milkfish",
    "escolar",
    "jamón",
    "jamon",
    "swine",
    "goat",
    "rump",
    "butter",
    "ghee",
];

const SUGAR: &[&str] = &[
    "sugar",
    "candy",
    "candies",
    "chocolate",
    "cake",
    "cookie",
    "soda",
    "honey",
    "syrup",
    "dessert",
    "orange juice",
    "fruit juice",
    "juice box",
    "lemonade",
    "donut",
    "doughnut",
    "ice cream",
    "milkshake",
    "caramel",
    "ketchup",
    "pastry",
    "pastries",
    "brownie",
    "sweets",
    "fructose",
    "glucose",
    "marshmallow",
    "lollipop",
    "gummy",
    "gummies",
    "energy drink",
    "fruit",
    "banana",
    "apple",
    "mango",
    "strawberr",
    "blueberr",
    " cola ",
    " colas ",
    " jam ",
    " pie ",
    " pies ",
];

const GRAIN_GLUTEN: &[&str] = &[
    "bread",
    "pasta",
    "spaghetti",
    "lasagna",
    "noodle",
    "wheat",
    "flour",
    "gluten",
    "barley",
    "cereal",
    "cracker",
    "pizza",
    "bagel",
    "croissant",
    "muffin",
    "waffle",
    "sandwich",
    "toast",
    "couscous",
    "quinoa",
    "granola",
    "biscuit",
    "pretzel",
    "dumpling",
    "tortilla",
    "popcorn",
    "cornflakes",
    "corn flakes",
    "oatmeal",
    "ramen",
    " oats ",
    " rye ",
    " rice ",
    " corn ",
    " bun ",
    " buns ",
];

const SEED_OIL: &[&str] = &[
    "seed oil",
    "canola",
    "vegetable oil",
    "sunflower oil",
    "soybean oil",
    "soy oil",
    "corn oil",
    "cottonseed",
    "safflower",
    "rapeseed",
    "grapeseed",
    "margarine",
    "shortening",
    "crisco",
    "mayonnaise",
    "peanut",
    "deep fried",
    "french fries",
    " mayo ",
];

const DAIRY: &[&str] = &[
    "milk",
    "cheese",
    "yogurt",
    "yoghurt",
    "cream",
    "whey",
    "kefir",
    "cottage",
    "mozzarella",
    "parmesan",
    "cheddar",
    "ricotta",
    "custard",
    "latte",
    "cappuccino",
    " brie ",
    " feta ",
];

const ALCOHOL: &[&str] = &[
    "alcohol",
    "beer",
    "wine",
    "vodka",
    "whiskey",
    "whisky",
    "tequila",
    "cocktail",
    "champagne",
    "prosecco",
    "liquor",
    "liqueur",
    "brandy",
    "cider",
    "bourbon",
    "margarita",
    "mojito",
    "lager",
    "booze",
    " rum ",
    " gin ",
    " ale ",
];

const ULTRA_PROCESSED: &[&str] = &[
    "processed",
    "chips",
    "crisps",
    "fast food",
    "hot dog",
    "nugget",
    "frozen dinner",
    "tv dinner",
    "microwave meal",
    "instant",
    "protein bar",
    "energy bar",
    "snack bar",
    "bologna",
    "slim jim",
    "pringles",
    "doritos",
    "cheetos",
    "artificial",
    "sweetener",
    "aspartame",
    "sucralose",
    "preservative",
    " spam ",
];

/// Keyword set for a category
#[must_use]
pub const fn keywords(category: ViolationCategory) -> &'static [&'static str] {
    match category {
        ViolationCategory::Sugar => SUGAR,
        ViolationCategory::GrainGluten => GRAIN_GLUTEN,
        ViolationCategory::SeedOil => SEED_OIL,
        ViolationCategory::Dairy => DAIRY,
        ViolationCategory::Alcohol => ALCOHOL,
        ViolationCategory::UltraProcessed => ULTRA_PROCESSED,
    }
}

/// Lowercase, replace punctuation with spaces, collapse whitespace and pad
fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let mut normalized = String::with_capacity(cleaned.len() + 2);
    normalized.push(' ');
    for word in cleaned.split_whitespace() {
        normalized.push_str(word);
        normalized.push(' ');
    }
    normalized
}

/// Replace every conforming term with a single space
fn mask_conforming_terms(mut text: String) -> String {
    for term in CONFORMING_TERMS {
        if text.contains(term) {
            text = text.replace(term, " ");
        }
    }
    text
}

/// Classify free text, `None` when nothing matches
#[must_use]
pub fn detect_violation_type(text: &str) -> Option<ViolationCategory> {
    let masked = mask_conforming_terms(normalize(text));
    ViolationCategory::ALL
        .into_iter()
        .find(|category| keywords(*category).iter().any(|kw| masked.contains(kw)))
}

/// A logged entry flagged as a violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryViolation {
    /// Position in the entry list
    pub index: usize,
    /// Entry name
    pub name: String,
    /// Detected category
    pub category: ViolationCategory,
}

/// Classify each logged entry by name
///
/// An entry tagged [`FoodCategory::NonConforming`] whose name matches no
/// keyword is reported as ultra-processed.
#[must_use]
pub fn classify_entries(entries: &[FoodEntry]) -> Vec<EntryViolation> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            detect_violation_type(&entry.name)
                .or_else(|| {
                    (entry.category == FoodCategory::NonConforming)
                        .then_some(ViolationCategory::UltraProcessed)
                })
                .map(|category| EntryViolation {
                    index,
                    name: entry.name.clone(),
                    category,
                })
        })
        .collect()
}
