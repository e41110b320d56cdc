// ABOUTME: Health profile input model for nutrition recommendations
// ABOUTME: HealthProfile, Gender, and ActivityLevel with wire-name parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (default selection on the form)
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// All genders in display order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire value, also used to compose `form.gender.*` message keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_format(format!(
                "Unknown gender '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

/// Self-reported activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All activity levels in display order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire value, also used to compose `form.activity.*` message keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very-active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_format(format!(
                    "Unknown activity level '{normalized}', expected one of: sedentary, light, moderate, active, very-active"
                ))
            })
    }
}

/// Profile submitted from the form
///
/// Immutable once submitted. The engine assumes `age > 0` and
/// `weight_kg > 0`; callers check [`HealthProfile::is_submittable`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Age in whole years
    pub age: u32,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Gender
    pub gender: Gender,
    /// Activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl HealthProfile {
    /// Create a profile from its four fields
    #[must_use]
    pub const fn new(
        age: u32,
        weight_kg: f64,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            weight_kg,
            gender,
            activity_level,
        }
    }

    /// Whether the profile passes the submission guard (`age > 0 && weight > 0`)
    ///
    /// NaN weights fail the guard.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.age > 0 && self.weight_kg > 0.0
    }
}

impl Default for HealthProfile {
    /// Blank form draft: zeroed numbers, male, moderate activity
    fn default() -> Self {
        Self::new(0, 0.0, Gender::Male, ActivityLevel::Moderate)
    }
}
