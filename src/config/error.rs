// ABOUTME: Configuration error types shared by environment and nutrition configs
// ABOUTME: Converts into AppError with configuration error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use health_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related bounds are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Energy shares or weights do not add up
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single value is outside its accepted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let (code, message) = match error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => {
                (ErrorCode::ConfigError, "failed to load configuration")
            }
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => {
                (ErrorCode::ConfigInvalid, "configuration values are inconsistent")
            }
        };
        // The cause is rendered by the source chain
        Self::new(code, message).with_source(error)
    }
}
