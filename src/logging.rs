// ABOUTME: Structured logging setup for the health monitor
// ABOUTME: Configures log level, output format, and stderr destination for tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! Logging configuration with structured output
//!
//! Records always go to stderr; stdout is reserved for command output so that
//! `--format json` stays machine-readable.

use crate::config::LogLevel;
use anyhow::Result;
use health_core::constants::{env_config, service_names};
use serde_json::json;
use std::env;
use std::io;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn.as_str().into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::HEALTH_MONITOR.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// A non-blank `RUST_LOG` directive wins over `default_level`.
    #[must_use]
    pub fn from_env(default_level: LogLevel) -> Self {
        let defaults = Self::default();
        Self {
            level: env::var(env_config::RUST_LOG)
                .ok()
                .filter(|directive| !directive.trim().is_empty())
                .unwrap_or_else(|| default_level.as_str().into()),
            format: env::var(env_config::LOG_FORMAT)
                .map_or(defaults.format, |s| LogFormat::from_str_or_default(&s)),
            include_location: env::var(env_config::LOG_INCLUDE_LOCATION).is_ok(),
            ..defaults
        }
    }

    /// Override the level directive, e.g. for a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level.as_str().into();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new(LogLevel::Warn.as_str()));
        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
            }
        });
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            "logging initialized: {config_summary}"
        );
    }
}
