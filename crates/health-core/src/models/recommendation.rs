// ABOUTME: Derived daily nutrition targets returned by the recommendation engine
// ABOUTME: Rounded calories, macros, fiber, water, and sodium limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use serde::{Deserialize, Serialize};

/// Daily nutrition targets for one profile
///
/// A pure function of the submitted `HealthProfile`; never mutated after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NutritionRecommendation {
    /// Total daily energy target (kcal/day)
    pub calories: i64,
    /// Protein (grams/day)
    pub protein: i64,
    /// Carbohydrates (grams/day)
    pub carbs: i64,
    /// Fat (grams/day)
    pub fat: i64,
    /// Fiber (grams/day)
    pub fiber: u32,
    /// Water (milliliters/day)
    pub water: i64,
    /// Sodium upper limit (mg/day)
    pub sodium: u32,
}
