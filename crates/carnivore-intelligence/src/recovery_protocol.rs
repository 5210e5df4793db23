// ABOUTME: Maps a violation category to a structured recovery plan with a fasting window
// ABOUTME: Templates, fast-end computation, todo generation and the fasting-hours override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recovery Protocol Generation
//!
//! | Category | Severity | Default fast |
//! |---|---|---|
//! | dairy | baseline | 14 h |
//! | sugar | light | 16 h |
//! | grain/gluten, seed oil, alcohol | severe | 24 h |
//! | ultra-processed | deep | 48 h |
//!
//! Every function takes `now` explicitly.

use chrono::{DateTime, Duration, Utc};

use carnivore_core::errors::{AppError, AppResult};
use carnivore_core::models::{RecoveryProtocol, RecoverySeverity, RecoveryTodo, ViolationCategory};

use crate::config::RecoveryConfig;

/// Id of the todo that tracks the fasting window
pub const FAST_TODO_ID: &str = "fast-complete";

/// Static content of a recovery plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolTemplate {
    /// Fasting preset
    pub severity: RecoverySeverity,
    /// Recommended activities, in order
    pub activities: &'static [&'static str],
    /// Diet guidance, in order
    pub diet_recommendations: &'static [&'static str],
    /// Suggested supplements, in order
    pub supplements: &'static [&'static str],
    /// Warnings, in order
    pub warnings: &'static [&'static str],
}

const SUGAR_TEMPLATE: ProtocolTemplate = ProtocolTemplate {
    severity: RecoverySeverity::Light,
    activities: &[
        "Take a 30-minute brisk walk to burn off glycogen",
        "Do a short bodyweight circuit before your next meal",
    ],
    diet_recommendations: &[
        "Break the fast with fatty ruminant meat",
        "Keep the next two meals at zero carbohydrates",
        "Salt your food generously to curb cravings",
    ],
    supplements: &["Electrolytes (sodium, potassium, magnesium)"],
    warnings: &["Expect sugar cravings for 24 to 48 hours"],
};

const GRAIN_GLUTEN_TEMPLATE: ProtocolTemplate = ProtocolTemplate {
    severity: RecoverySeverity::Severe,
    activities: &[
        "Take a gentle 45-minute walk",
        "Prioritize at least 8 hours of sleep tonight",
    ],
    diet_recommendations: &[
        "Break the fast with bone broth",
        "Follow with easily digested meat such as ground beef",
        "Avoid dairy for the next three days",
    ],
    supplements: &["Electrolytes", "Glycine or collagen"],
    warnings: &[
        "Bloating and joint pain may flare for several days",
        "Seek medical advice if you have celiac disease and symptoms persist",
    ],
};

const SEED_OIL_TEMPLATE: ProtocolTemplate = ProtocolTemplate {
    severity: RecoverySeverity::Severe,
    activities: &[
        "Spend 20 minutes in direct sunlight",
        "Take a 45-minute walk",
    ],
    diet_recommendations: &[
        "Break the fast with ruminant meat cooked in tallow or butter",
        "Add fatty fish or oysters this week",
        "Cook only with animal fats",
    ],
    supplements: &["Electrolytes", "Vitamin E"],
    warnings: &["Digestive upset is common for 24 hours"],
};

const DAIRY_TEMPLATE: ProtocolTemplate = ProtocolTemplate {
    severity: RecoverySeverity::Baseline,
    activities: &["Take a 20-minute walk after your next meal"],
    diet_recommendations: &[
        "Return to meat, eggs and animal fat",
        "Note any bloating or skin reaction in your diary",
    ],
    supplements: &["Electrolytes"],
    warnings: &["Dairy sensitivity varies; watch for congestion or acne"],
};

const ALCOHOL_TEMPLATE: ProtocolTemplate = ProtocolTemplate {
    severity: RecoverySeverity::Severe,
    activities: &[
        "Rest and avoid intense training today",
        "Take a light walk once hydrated",
    ],
    diet_recommendations: &[
        "Drink water with electrolytes throughout the fast",
        "Break the fast with eggs and red meat",
        "Include liver this week to restore B vitamins",
    ],
    supplements: &["Electrolytes", "Magnesium", "B-complex"],
    warnings: &[
        "Do not fast longer than the target if you feel dizzy",
        "Blood sugar may drop after drinking",
    ],
};

const ULTRA_PROCESSED_TEMPLATE: ProtocolTemplate = ProtocolTemplate {
    severity: RecoverySeverity::Deep,
    activities: &[
        "Take a 60-minute walk each day of the fast",
        "Spend 20 minutes in direct sunlight",
        "Prioritize sleep and stress reduction",
    ],
    diet_recommendations: &[
        "Break the fast with bone broth",
        "Eat only ruminant meat, salt and water for three days",
        "Reintroduce eggs and fish afterwards",
    ],
    supplements: &["Electrolytes", "Magnesium"],
    warnings: &[
        "Extended fasting is not suitable during pregnancy or with diabetes",
        "Break the fast early if you feel unwell",
    ],
};

/// Template for a category
#[must_use]
pub const fn template_for(category: ViolationCategory) -> &'static ProtocolTemplate {
    match category {
        ViolationCategory::Sugar => &SUGAR_TEMPLATE,
        ViolationCategory::GrainGluten => &GRAIN_GLUTEN_TEMPLATE,
        ViolationCategory::SeedOil => &SEED_OIL_TEMPLATE,
        ViolationCategory::Dairy => &DAIRY_TEMPLATE,
        ViolationCategory::Alcohol => &ALCOHOL_TEMPLATE,
        ViolationCategory::UltraProcessed => &ULTRA_PROCESSED_TEMPLATE,
    }
}

/// Absolute end of a fast that starts at `now`
#[must_use]
pub fn compute_fast_end(hours: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(i64::from(hours))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn numbered_todos(prefix: &str, items: &[&str]) -> Vec<RecoveryTodo> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| RecoveryTodo {
            id: format!("{prefix}-{}", i + 1),
            title: (*item).to_owned(),
            description: None,
            is_completed: false,
        })
        .collect()
}

/// Build a complete protocol for a category
#[must_use]
pub fn generate_protocol(
    category: ViolationCategory,
    now: DateTime<Utc>,
    config: &RecoveryConfig,
) -> RecoveryProtocol {
    let template = template_for(category);
    let hours = config.fasting_hours(template.severity);

    let mut todos = vec![RecoveryTodo {
        id: FAST_TODO_ID.to_owned(),
        title: "Complete your recovery fast".to_owned(),
        description: Some(format!(
            "Fast after the {} violation until the target end time",
            category.display_name()
        )),
        is_completed: false,
    }];
    todos.extend(numbered_todos("activity", template.activities));
    todos.extend(numbered_todos("diet", template.diet_recommendations));
    todos.extend(numbered_todos("supplement", template.supplements));

    RecoveryProtocol {
        violation_category: category,
        severity: template.severity,
        fasting_target_hours: hours,
        created_at: now,
        target_fast_end: compute_fast_end(hours, now),
        activities: to_strings(template.activities),
        diet_recommendations: to_strings(template.diet_recommendations),
        supplements: to_strings(template.supplements),
        warnings: to_strings(template.warnings),
        todos,
    }
}

/// Override the fasting window of an existing protocol
///
/// Only `fasting_target_hours` and `target_fast_end` change; the new end is
/// measured from `now`.
///
/// # Errors
///
/// Returns `InvalidInput` if `hours` exceeds `config.max_fast_hours`.
pub fn set_fasting_target_hours(
    protocol: &mut RecoveryProtocol,
    hours: u32,
    now: DateTime<Utc>,
    config: &RecoveryConfig,
) -> AppResult<()> {
    if hours > config.max_fast_hours {
        return Err(AppError::invalid_input(format!(
            "fasting hours must be <= {}, got {hours}",
            config.max_fast_hours
        )));
    }
    protocol.fasting_target_hours = hours;
    protocol.target_fast_end = compute_fast_end(hours, now);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_todo_ids_are_unique() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
        for category in ViolationCategory::ALL {
            let protocol = generate_protocol(category, now, &RecoveryConfig::default());
            let ids: HashSet<_> = protocol.todos.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids.len(), protocol.todos.len());
            assert!(ids.contains(FAST_TODO_ID));
        }
    }
}
