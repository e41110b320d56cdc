// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates env var parsing, fallbacks, and error handling for AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_monitor::{
    config::{AppConfig, ConfigError, LogLevel, NutritionConfig},
    constants::env_config,
    errors::{AppError, ErrorCode},
    formatters::OutputFormat,
    i18n::Language,
    logging::LoggingConfig,
};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 4] = [
    env_config::LANGUAGE,
    env_config::OUTPUT_FORMAT,
    env_config::LOG_LEVEL,
    env_config::RUST_LOG,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Warn);
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.language, Language::En);
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
#[serial]
fn test_reads_all_variables() {
    clear_env();
    env::set_var(env_config::LANGUAGE, "zh-CN");
    env::set_var(env_config::OUTPUT_FORMAT, "JSON");
    env::set_var(env_config::LOG_LEVEL, "debug");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.language, Language::Zh);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_configured_log_level_drives_logging() {
    clear_env();
    env::set_var(env_config::LOG_LEVEL, "info");

    let config = AppConfig::from_env().unwrap();
    let logging = LoggingConfig::from_env(config.log_level);
    clear_env();

    assert_eq!(logging.level, "info");
}

#[test]
#[serial]
fn test_rust_log_directive_wins_over_configured_level() {
    clear_env();
    env::set_var(env_config::LOG_LEVEL, "error");
    env::set_var(env_config::RUST_LOG, "health_monitor=trace");

    let config = AppConfig::from_env().unwrap();
    let logging = LoggingConfig::from_env(config.log_level);
    clear_env();

    assert_eq!(config.log_level, LogLevel::Error);
    assert_eq!(logging.level, "health_monitor=trace");
}

#[test]
#[serial]
fn test_blank_rust_log_uses_configured_level() {
    clear_env();
    env::set_var(env_config::RUST_LOG, " ");

    let logging = LoggingConfig::from_env(LogLevel::Error);
    clear_env();

    assert_eq!(logging.level, "error");
}

#[test]
#[serial]
fn test_blank_language_uses_default() {
    clear_env();
    env::set_var(env_config::LANGUAGE, "   ");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.language, Language::En);
}

#[test]
#[serial]
fn test_unsupported_language_is_config_error() {
    clear_env();
    env::set_var(env_config::LANGUAGE, "klingon");

    let error = AppConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::Parse(ref message) if message.contains("klingon")));
    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigError);
    assert_eq!(app_error.exit_code(), 78);
}

#[test]
#[serial]
fn test_config_error_chain_names_cause_once() {
    clear_env();
    env::set_var(env_config::LANGUAGE, "klingon");

    let error = AppConfig::from_env().unwrap_err();
    clear_env();

    let rendered = format!("{:#}", anyhow::Error::from(AppError::from(error)));

    assert_eq!(rendered.matches("unsupported language code").count(), 1);
    assert!(rendered.starts_with("Configuration error encountered: failed to load configuration"));
    assert!(rendered.contains("'klingon'"));
}

#[test]
#[serial]
fn test_unknown_output_format_falls_back_to_text() {
    clear_env();
    env::set_var(env_config::OUTPUT_FORMAT, "yaml");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn test_invalid_nutrition_config_maps_to_config_invalid() {
    let mut config = NutritionConfig::default();
    config.hydration.ml_per_kg = 0.0;

    let error = AppError::from(config.validate().unwrap_err());

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
