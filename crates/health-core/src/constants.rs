// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, environment variable keys, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being kept as loose
//! top-level items.

/// Service identity used in structured logs
pub mod service_names {
    /// Health monitor service
    pub const HEALTH_MONITOR: &str = "health-monitor";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Default UI language code
    pub const LANGUAGE: &str = "HEALTH_MONITOR_LANGUAGE";
    /// Output format for rendered reports (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "HEALTH_MONITOR_OUTPUT";
    /// Default log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub const LOG_LEVEL: &str = "HEALTH_MONITOR_LOG_LEVEL";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line numbers in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Energy density of macronutrients
pub mod energy {
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Fixed heights baked into the BMR constants; the profile has no height field
pub mod assumed_height {
    /// Assumed male height in centimeters
    pub const MALE_CM: f64 = 175.0;
    /// Assumed female height in centimeters
    pub const FEMALE_CM: f64 = 162.0;
}
