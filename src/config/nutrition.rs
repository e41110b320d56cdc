// ABOUTME: Nutrition configuration for the daily recommendation engine
// ABOUTME: BMR coefficients, activity multipliers, macro shares, fiber bands, water and sodium
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! Nutrition Recommendation Configuration
//!
//! Every constant used by the recommendation engine lives here. The defaults
//! reproduce the published form exactly and are the values used by
//! [`crate::intelligence::nutrition_calculator::compute`].
//!
//! # Scientific References
//!
//! - BMR: Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168, presented on the
//!   form under the Mifflin-St Jeor name
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein RDA, fiber and sodium: Institute of Medicine Dietary Reference Intakes

use super::error::ConfigError;
use health_core::constants::{assumed_height, energy};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Nutrition recommendation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal metabolic rate coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Protein and energy-share targets
    pub macronutrients: MacronutrientConfig,
    /// Age and gender banded fiber targets
    pub fiber: FiberConfig,
    /// Water intake targets
    pub hydration: HydrationConfig,
    /// Sodium upper limit
    pub sodium: SodiumConfig,
}

/// BMR coefficients for one gender
///
/// `BMR = constant + weight_coef·weight + height_coef·height_cm − age_coef·age`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrCoefficients {
    /// Intercept (kcal/day)
    pub constant: f64,
    /// Multiplier applied to weight in kg
    pub weight_coef: f64,
    /// Multiplier applied to the assumed height in cm
    pub height_coef: f64,
    /// Multiplier applied to age in years (subtracted)
    pub age_coef: f64,
    /// Assumed height in cm; profiles do not carry a height
    pub height_cm: f64,
}

/// BMR calculation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male coefficients
    pub male: BmrCoefficients,
    /// Female coefficients
    pub female: BmrCoefficients,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (physical job or twice-daily training): 1.9
    pub very_active: f64,
}

/// Macronutrient targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein per kg body weight: 0.8 g
    pub protein_g_per_kg: f64,
    /// Share of calories from carbohydrates: 0.45
    pub carbs_energy_share: f64,
    /// Share of calories from fat: 0.30
    pub fat_energy_share: f64,
    /// Energy density of carbohydrates (kcal/g)
    pub kcal_per_gram_carbs: f64,
    /// Energy density of fat (kcal/g)
    pub kcal_per_gram_fat: f64,
}

/// Fiber targets banded by age and gender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiberConfig {
    /// Ages at or above this use the older band
    pub older_band_min_age: u32,
    /// Male, younger band (g/day)
    pub male_younger_g: u32,
    /// Female, younger band (g/day)
    pub female_younger_g: u32,
    /// Male, older band (g/day)
    pub male_older_g: u32,
    /// Female, older band (g/day)
    pub female_older_g: u32,
}

/// Water intake configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Milliliters of water per kg body weight
    pub ml_per_kg: f64,
}

/// Sodium configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SodiumConfig {
    /// Daily upper limit (mg)
    pub daily_limit_mg: u32,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male: BmrCoefficients {
                constant: 88.362,
                weight_coef: 13.397,
                height_coef: 4.799,
                age_coef: 5.677,
                height_cm: assumed_height::MALE_CM,
            },
            female: BmrCoefficients {
                constant: 447.593,
                weight_coef: 9.247,
                height_coef: 3.098,
                age_coef: 4.330,
                height_cm: assumed_height::FEMALE_CM,
            },
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 0.8,
            carbs_energy_share: 0.45,
            fat_energy_share: 0.30,
            kcal_per_gram_carbs: energy::KCAL_PER_GRAM_CARBS,
            kcal_per_gram_fat: energy::KCAL_PER_GRAM_FAT,
        }
    }
}

impl Default for FiberConfig {
    fn default() -> Self {
        Self {
            older_band_min_age: 50,
            male_younger_g: 38,
            female_younger_g: 25,
            male_older_g: 30,
            female_older_g: 21,
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self { ml_per_kg: 35.0 }
    }
}

impl Default for SodiumConfig {
    fn default() -> Self {
        Self {
            daily_limit_mg: 2300,
        }
    }
}

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance (the published defaults)
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(Self::default)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a coefficient is non-positive, the activity
    /// multipliers are not strictly increasing, or the macro energy shares
    /// exceed the whole day's energy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for coefficients in [&self.bmr.male, &self.bmr.female] {
            if coefficients.weight_coef <= 0.0
                || coefficients.height_coef <= 0.0
                || coefficients.age_coef <= 0.0
                || coefficients.height_cm <= 0.0
            {
                return Err(ConfigError::ValueOutOfRange(
                    "BMR coefficients and assumed heights must be positive",
                ));
            }
        }

        let factors = &self.activity_factors;
        let ordered = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ];
        if ordered[0] < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sedentary activity factor must be at least 1.0",
            ));
        }
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must increase from sedentary to very_active",
            ));
        }

        let macros = &self.macronutrients;
        if macros.protein_g_per_kg <= 0.0
            || macros.kcal_per_gram_carbs <= 0.0
            || macros.kcal_per_gram_fat <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "protein ratio and energy densities must be positive",
            ));
        }
        if macros.carbs_energy_share <= 0.0 || macros.fat_energy_share <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "macro energy shares must be positive",
            ));
        }
        if macros.carbs_energy_share + macros.fat_energy_share > 1.0 {
            return Err(ConfigError::InvalidWeights(
                "carbs and fat energy shares must not exceed 1.0",
            ));
        }

        if self.fiber.older_band_min_age == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fiber band age threshold must be positive",
            ));
        }

        if self.hydration.ml_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "water per kg must be positive",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_activity_factors_rejected() {
        let mut config = NutritionConfig::default();
        config.activity_factors.active = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_energy_shares_over_one_rejected() {
        let mut config = NutritionConfig::default();
        config.macronutrients.carbs_energy_share = 0.75;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_global_matches_defaults() {
        assert_eq!(NutritionConfig::global(), &NutritionConfig::default());
    }
}
