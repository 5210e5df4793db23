// ABOUTME: Integration tests for the vitamin D synthesis estimate
// ABOUTME: Monotonicity in minutes, saturation ceiling, weather factors and food totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carnivore_tracker::config::{BioavailabilityConfig, VitaminDConfig};
use carnivore_tracker::intelligence::{
    calculate_all_metrics, estimate_vitamin_d_iu, total_vitamin_d_iu, SunExposure, WeatherFactor,
};
use common::{approx_eq, eggs, init_test_logging};

#[test]
fn test_estimate_is_monotone_in_minutes() {
    init_test_logging();
    let config = VitaminDConfig::default();
    let mut previous = 0.0;
    for minutes in (0..=240).step_by(5) {
        let estimate = estimate_vitamin_d_iu(&SunExposure::new(f64::from(minutes), true), &config);
        assert!(estimate >= previous, "{minutes} min: {estimate} < {previous}");
        previous = estimate;
    }
}

#[test]
fn test_estimate_never_exceeds_ceiling() {
    let config = VitaminDConfig::default();
    let exposure = SunExposure {
        minutes: 10_000.0,
        sunny: true,
        exposure_fraction: 1.0,
        weather: Some(WeatherFactor {
            uv_index: Some(14.0),
            cloud_cover_percent: Some(0.0),
        }),
    };
    let estimate = estimate_vitamin_d_iu(&exposure, &config);
    assert!(estimate <= config.ceiling_iu());
    assert!(estimate > 0.9 * config.ceiling_iu());
}

#[test]
fn test_saturation_curve_at_tau() {
    let config = VitaminDConfig::default();
    let exposure = SunExposure {
        minutes: config.saturation_minutes,
        sunny: true,
        exposure_fraction: 1.0,
        weather: None,
    };
    let expected = config.max_daily_synthesis_iu * (1.0 - (-1.0_f64).exp());
    assert!(approx_eq(estimate_vitamin_d_iu(&exposure, &config), expected));
}

#[test]
fn test_invalid_inputs_clamp_to_zero() {
    let config = VitaminDConfig::default();
    assert!(estimate_vitamin_d_iu(&SunExposure::new(-30.0, true), &config).abs() < f64::EPSILON);

    let no_skin = SunExposure {
        exposure_fraction: f64::NAN,
        ..SunExposure::new(30.0, true)
    };
    assert!(estimate_vitamin_d_iu(&no_skin, &config).abs() < f64::EPSILON);
}

#[test]
fn test_cloud_cover_overrides_sunny_flag() {
    let config = VitaminDConfig::default();
    let overcast = WeatherFactor {
        uv_index: None,
        cloud_cover_percent: Some(100.0),
    };
    let flagged_sunny = SunExposure {
        weather: Some(overcast),
        ..SunExposure::new(20.0, true)
    };
    let flagged_cloudy = SunExposure {
        weather: Some(overcast),
        ..SunExposure::new(20.0, false)
    };
    let clear = SunExposure::new(20.0, true);

    let a = estimate_vitamin_d_iu(&flagged_sunny, &config);
    let b = estimate_vitamin_d_iu(&flagged_cloudy, &config);
    assert!(approx_eq(a, b));
    // full cover attenuates by 70%
    assert!(approx_eq(a, estimate_vitamin_d_iu(&clear, &config) * 0.3));
}

#[test]
fn test_uv_index_scales_and_caps() {
    let config = VitaminDConfig::default();
    let with_uv = |uv: f64| SunExposure {
        weather: Some(WeatherFactor {
            uv_index: Some(uv),
            cloud_cover_percent: None,
        }),
        ..SunExposure::new(15.0, true)
    };
    let reference = estimate_vitamin_d_iu(&SunExposure::new(15.0, true), &config);

    assert!(approx_eq(
        estimate_vitamin_d_iu(&with_uv(config.reference_uv_index), &config),
        reference
    ));
    assert!(approx_eq(
        estimate_vitamin_d_iu(&with_uv(3.5), &config),
        reference * 0.5
    ));
    assert!(approx_eq(
        estimate_vitamin_d_iu(&with_uv(50.0), &config),
        reference * config.max_uv_factor
    ));
}

#[test]
fn test_total_adds_food_and_sun() {
    let config = VitaminDConfig::default();
    let metrics = calculate_all_metrics(&[eggs()], None, &BioavailabilityConfig::default());
    let exposure = SunExposure::new(20.0, true);

    assert!(approx_eq(total_vitamin_d_iu(&metrics, None, &config), 246.0));
    assert!(approx_eq(
        total_vitamin_d_iu(&metrics, Some(&exposure), &config),
        246.0 + estimate_vitamin_d_iu(&exposure, &config)
    ));
}

#[test]
fn test_exposure_fraction_defaults_when_missing_from_json() {
    let exposure: SunExposure = serde_json::from_str(r#"{"minutes": 10, "sunny": true}"#).unwrap();
    assert!(approx_eq(exposure.exposure_fraction, 0.25));
    assert!(exposure.weather.is_none());
}
