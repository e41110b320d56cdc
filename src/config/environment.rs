// ABOUTME: Environment configuration for the health monitor CLI
// ABOUTME: Parses language, output format, and default log level from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! Environment-based configuration management

use super::error::ConfigError;
use crate::formatters::OutputFormat;
use crate::i18n::Language;
use health_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors (default)
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Warn`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }

    /// Lowercase name, usable as an `EnvFilter` directive
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime settings for the CLI, read from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Initial UI language
    pub language: Language,
    /// Report output format
    pub output_format: OutputFormat,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults. `HEALTH_MONITOR_OUTPUT` and
    /// `HEALTH_MONITOR_LOG_LEVEL` fall back on unrecognized values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when `HEALTH_MONITOR_LANGUAGE` is set to an
    /// unsupported language, or `ConfigError::EnvVar` when a variable is not
    /// valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let language = match optional_env(env_config::LANGUAGE)? {
            Some(code) => code.parse::<Language>().map_err(|_| {
                ConfigError::Parse(format!(
                    "{} has unsupported language code '{code}'",
                    env_config::LANGUAGE
                ))
            })?,
            None => Language::default(),
        };

        let output_format = optional_env(env_config::OUTPUT_FORMAT)?
            .map_or_else(OutputFormat::default, |s| OutputFormat::from_str_param(&s));
        let log_level = optional_env(env_config::LOG_LEVEL)?
            .map_or_else(LogLevel::default, |s| LogLevel::from_str_or_default(&s));

        Ok(Self {
            language,
            output_format,
            log_level,
        })
    }

    /// Short human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "language={} output={} log_level={}",
            self.language, self.output_format, self.log_level
        )
    }
}

/// Read a variable, treating unset and blank values as absent
fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(error) => Err(ConfigError::EnvVar(error)),
    }
}
