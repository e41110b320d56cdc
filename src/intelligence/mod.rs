// ABOUTME: Intelligence module for nutrition recommendations
// ABOUTME: Pure calculation engine and static lifestyle suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! # Intelligence Module
//!
//! Derives daily nutrition targets from a submitted profile. Nothing here
//! performs I/O or keeps state between calls.

/// BMR, TDEE, macronutrient, fiber, water and sodium calculations
pub mod nutrition_calculator;

/// Static lifestyle suggestions
pub mod suggestions;

pub use nutrition_calculator::{compute, compute_with_config};
pub use suggestions::{suggestion_keys, SUGGESTION_COUNT};
