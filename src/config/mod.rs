// ABOUTME: Configuration management module for the health monitor
// ABOUTME: Environment-driven runtime settings and nutrition formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors
//! Configuration module
//!
//! - **Environment**: language, output format and log level from env vars
//! - **Nutrition**: every constant used by the recommendation engine
//! - **Error**: configuration error type shared by both

use tracing::debug;

/// Environment and CLI runtime configuration
pub mod environment;
/// Configuration error types
pub mod error;
/// Nutrition recommendation constants and validation
pub mod nutrition;

pub use environment::{AppConfig, LogLevel};
pub use error::ConfigError;
pub use nutrition::NutritionConfig;

/// Initialize and validate the global configurations
///
/// # Errors
///
/// Returns an error if the nutrition defaults fail validation
pub fn init_configs() -> Result<(), ConfigError> {
    let nutrition = NutritionConfig::global();
    nutrition.validate()?;

    debug!(
        sodium_limit_mg = nutrition.sodium.daily_limit_mg,
        fiber_band_age = nutrition.fiber.older_band_min_age,
        "nutrition config initialized"
    );
    Ok(())
}
