// ABOUTME: Algorithm tests for the daily nutrition recommendation engine
// ABOUTME: Worked examples, determinism, band boundaries, and proportionality properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors
//! Recommendation engine tests
//!
//! - Worked examples for both genders
//! - BMR and TDEE step functions
//! - Properties: determinism, input independence of fiber and sodium,
//!   carbs/fat proportional to calories, monotonicity in weight
//! - Fiber band boundary at age 50

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_monitor::{
    config::nutrition::NutritionConfig,
    intelligence::{
        compute, compute_with_config,
        nutrition_calculator::{calculate_bmr, calculate_tdee, fiber_target},
    },
    models::{ActivityLevel, Gender, HealthProfile, NutritionRecommendation},
};

mod common;

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

#[test]
fn test_male_thirty_moderate_full_recommendation() {
    let recommendation = compute(&common::reference_male());

    assert_eq!(
        recommendation,
        NutritionRecommendation {
            calories: 2628,
            protein: 56,
            carbs: 296,
            fat: 88,
            fiber: 38,
            water: 2450,
            sodium: 2300,
        }
    );
}

#[test]
fn test_female_sixty_sedentary_full_recommendation() {
    let recommendation = compute(&common::reference_female());

    assert_eq!(recommendation.calories, 1438);
    assert_eq!(recommendation.protein, 44);
    assert_eq!(recommendation.carbs, 162);
    assert_eq!(recommendation.fat, 48);
    assert_eq!(recommendation.fiber, 21);
    assert_eq!(recommendation.water, 1925);
    assert_eq!(recommendation.sodium, 2300);
}

#[test]
fn test_compute_uses_default_config() {
    let profile = common::reference_male();
    assert_eq!(
        compute(&profile),
        compute_with_config(&profile, &NutritionConfig::default())
    );
}

// ============================================================================
// STEP FUNCTIONS
// ============================================================================

#[test]
fn test_tdee_is_unrounded() {
    let config = NutritionConfig::default();
    let bmr = calculate_bmr(70.0, 30, Gender::Male, &config.bmr);
    let tdee = calculate_tdee(bmr, ActivityLevel::Moderate, &config.activity_factors);

    assert!((tdee - 2628.28385).abs() < 1e-6);
}

#[test]
fn test_calories_follow_activity_order() {
    let calories: Vec<i64> = ActivityLevel::ALL
        .into_iter()
        .map(|level| {
            compute(&HealthProfile::new(40, 80.0, Gender::Female, level)).calories
        })
        .collect();

    assert!(calories.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_custom_config_changes_sodium_only() {
    let mut config = NutritionConfig::default();
    config.sodium.daily_limit_mg = 1500;
    let profile = common::reference_male();

    let custom = compute_with_config(&profile, &config);
    let standard = compute(&profile);

    assert_eq!(custom.sodium, 1500);
    assert_eq!(custom.calories, standard.calories);
    assert_eq!(custom.water, standard.water);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_compute_is_deterministic() {
    let profile = HealthProfile::new(47, 83.3, Gender::Female, ActivityLevel::VeryActive);
    let first = compute(&profile);
    let second = compute(&profile);

    assert_eq!(first, second);
}

#[test]
fn test_fiber_and_sodium_ignore_weight_and_activity() {
    for gender in Gender::ALL {
        for age in [18, 49, 50, 85] {
            let expected_fiber = fiber_target(age, gender, &NutritionConfig::default().fiber);
            for weight in [45.0, 70.0, 120.5] {
                for level in ActivityLevel::ALL {
                    let recommendation = compute(&HealthProfile::new(age, weight, gender, level));
                    assert_eq!(recommendation.fiber, expected_fiber);
                    assert_eq!(recommendation.sodium, 2300);
                }
            }
        }
    }
}

#[test]
fn test_carbs_and_fat_derive_from_rounded_calories() {
    for weight in [50.0, 64.4, 77.7, 99.9] {
        for level in ActivityLevel::ALL {
            let recommendation = compute(&HealthProfile::new(35, weight, Gender::Male, level));
            let calories = recommendation.calories as f64;

            assert_eq!(recommendation.carbs, (calories * 0.45 / 4.0).round() as i64);
            assert_eq!(recommendation.fat, (calories * 0.30 / 9.0).round() as i64);
        }
    }
}

#[test]
fn test_heavier_profile_needs_more_energy_protein_and_water() {
    let lighter = compute(&HealthProfile::new(30, 60.0, Gender::Male, ActivityLevel::Light));
    let heavier = compute(&HealthProfile::new(30, 75.0, Gender::Male, ActivityLevel::Light));

    assert!(heavier.calories > lighter.calories);
    assert!(heavier.protein > lighter.protein);
    assert!(heavier.water > lighter.water);
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[test]
fn test_age_fifty_uses_older_fiber_band() {
    let at_49 = compute(&HealthProfile::new(49, 70.0, Gender::Male, ActivityLevel::Moderate));
    let at_50 = compute(&HealthProfile::new(50, 70.0, Gender::Male, ActivityLevel::Moderate));

    assert_eq!(at_49.fiber, 38);
    assert_eq!(at_50.fiber, 30);

    let female_at_50 =
        compute(&HealthProfile::new(50, 70.0, Gender::Female, ActivityLevel::Moderate));
    assert_eq!(female_at_50.fiber, 21);
}
