// ABOUTME: Daily nutrition recommendation engine
// ABOUTME: BMR, TDEE, macronutrient split, fiber band, water and sodium targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! Nutrition Calculator Module
//!
//! Maps a [`HealthProfile`] to a [`NutritionRecommendation`]. Every function
//! here is pure: no I/O, no logging, no hidden state. Identical inputs give
//! bit-identical outputs.
//!
//! # Algorithm
//!
//! 1. BMR from the Roza-Shizgal coefficients (labelled Mifflin-St Jeor on the
//!    form), with height fixed at 175 cm (male) / 162 cm (female)
//! 2. `calories = round(BMR × activity factor)`
//! 3. `protein = round(weight × 0.8)`
//! 4. `carbs = round(calories × 0.45 / 4)`
//! 5. `fat = round(calories × 0.30 / 9)`
//! 6. fiber from the age/gender band (38/25 g under 50, 30/21 g from 50)
//! 7. `water = round(weight × 35)` mL
//! 8. sodium fixed at the 2300 mg upper limit
//!
//! Rounding happens only at the steps marked `round`; BMR and TDEE keep full
//! precision. Carbs and fat derive from the already rounded calories.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Institute of Medicine (2005). Dietary Reference Intakes for Energy, Carbohydrate,
//!   Fiber, Fat, Fatty Acids, Cholesterol, Protein, and Amino Acids.

use crate::config::nutrition::{ActivityFactorsConfig, BmrConfig, FiberConfig, NutritionConfig};
use health_core::models::{ActivityLevel, Gender, HealthProfile, NutritionRecommendation};

/// Basal Metabolic Rate in kcal/day
///
/// Male: `88.362 + 13.397·weight + 4.799·175 − 5.677·age`
/// Female: `447.593 + 9.247·weight + 3.098·162 − 4.330·age`
///
/// Terms are accumulated left to right in that order so results match the
/// published figures to the last bit.
#[must_use]
#[allow(clippy::suboptimal_flops)] // mul_add fuses rounding and changes the last bit
pub fn calculate_bmr(weight_kg: f64, age: u32, gender: Gender, config: &BmrConfig) -> f64 {
    let coefficients = match gender {
        Gender::Male => &config.male,
        Gender::Female => &config.female,
    };

    coefficients.constant + coefficients.weight_coef * weight_kg
        + coefficients.height_coef * coefficients.height_cm
        - coefficients.age_coef * f64::from(age)
}

/// Multiplier applied to BMR for an activity level
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Total Daily Energy Expenditure in kcal/day, unrounded
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_multiplier(level, config)
}

/// Daily fiber target in grams
///
/// Age exactly at the band threshold uses the older band.
#[must_use]
pub const fn fiber_target(age: u32, gender: Gender, config: &FiberConfig) -> u32 {
    let younger = age < config.older_band_min_age;
    match (gender, younger) {
        (Gender::Male, true) => config.male_younger_g,
        (Gender::Female, true) => config.female_younger_g,
        (Gender::Male, false) => config.male_older_g,
        (Gender::Female, false) => config.female_older_g,
    }
}

/// Compute the recommendation with an explicit configuration
///
/// Total over profiles with `age > 0` and `weight_kg > 0`; other inputs
/// produce a value but it carries no meaning.
#[must_use]
pub fn compute_with_config(
    profile: &HealthProfile,
    config: &NutritionConfig,
) -> NutritionRecommendation {
    let weight_kg = profile.weight_kg;
    let macros = &config.macronutrients;

    let bmr = calculate_bmr(weight_kg, profile.age, profile.gender, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let calories = tdee.round();

    let protein = (weight_kg * macros.protein_g_per_kg).round();
    let carbs = (calories * macros.carbs_energy_share / macros.kcal_per_gram_carbs).round();
    let fat = (calories * macros.fat_energy_share / macros.kcal_per_gram_fat).round();
    let water = (weight_kg * config.hydration.ml_per_kg).round();

    NutritionRecommendation {
        calories: calories as i64,
        protein: protein as i64,
        carbs: carbs as i64,
        fat: fat as i64,
        fiber: fiber_target(profile.age, profile.gender, &config.fiber),
        water: water as i64,
        sodium: config.sodium.daily_limit_mg,
    }
}

/// Compute daily nutrition targets for a submitted profile
#[must_use]
pub fn compute(profile: &HealthProfile) -> NutritionRecommendation {
    compute_with_config(profile, NutritionConfig::global())
}
