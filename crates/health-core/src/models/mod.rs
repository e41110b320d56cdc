// ABOUTME: Domain models for the health monitor
// ABOUTME: Re-exports profile input types and the derived recommendation record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

/// User-entered profile: age, weight, gender, activity level
pub mod profile;

/// Derived daily nutrition targets
pub mod recommendation;

pub use profile::{ActivityLevel, Gender, HealthProfile};
pub use recommendation::NutritionRecommendation;
