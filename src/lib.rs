// ABOUTME: Main library entry point for the health monitor
// ABOUTME: Nutrition recommendation engine, localization, session state, and report rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

#![deny(unsafe_code)]

//! # Health Monitor
//!
//! Computes personalized daily nutrition targets (calories, protein,
//! carbohydrates, fat, fiber, water, sodium) from age, weight, gender and
//! activity level, and presents them in seven UI languages.
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure recommendation engine and static suggestions
//! - **I18n**: compiled-in message catalogs with English and raw-key fallback
//! - **Session**: form draft, submission guard, results view, selected language
//! - **Formatters**: localized text and JSON reports
//! - **Config**: environment settings and nutrition constants
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use health_monitor::intelligence::compute;
//! use health_monitor::models::{ActivityLevel, Gender, HealthProfile};
//!
//! let profile = HealthProfile::new(30, 70.0, Gender::Male, ActivityLevel::Moderate);
//! let recommendation = compute(&profile);
//! assert_eq!(recommendation.calories, 2628);
//! ```

/// Environment and nutrition configuration
pub mod config;

/// Text and JSON report rendering
pub mod formatters;

/// Localization resolver and message catalogs
pub mod i18n;

/// Nutrition recommendation engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Interactive session state and submission guard
pub mod session;

pub use health_core::{constants, errors, models};
