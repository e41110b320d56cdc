// ABOUTME: Health Monitor CLI - form-driven daily nutrition recommendations
// ABOUTME: Calculates targets, lists languages, translates keys, and prints the localized form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors
//!
//! Usage:
//! ```bash
//! # Daily targets for a 30-year-old, 70 kg, moderately active man
//! health-monitor calculate --age 30 --weight 70 --gender male
//!
//! # Same, in Spanish, as JSON
//! health-monitor --language es --format json calculate --age 30 --weight 70 --gender male
//!
//! # List supported languages
//! health-monitor languages
//!
//! # Resolve a single message key
//! health-monitor --language ja translate results.calories
//!
//! # Show the localized input form
//! health-monitor --language fr form
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use health_monitor::{
    config::{init_configs, AppConfig, LogLevel},
    errors::{AppError, ErrorCode},
    formatters::OutputFormat,
    i18n::Language,
    logging::LoggingConfig,
    models::{ActivityLevel, Gender},
};
use std::process::ExitCode;
use tracing::debug;

use commands::CliContext;

#[derive(Parser)]
#[command(
    name = "health-monitor",
    about = "Personalized daily nutrition recommendations",
    long_about = "Computes daily calorie, macronutrient, fiber, water and sodium targets from age, weight, gender and activity level, in seven languages."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// UI language code (en, es, zh, fr, de, ko, ja); overrides HEALTH_MONITOR_LANGUAGE
    #[arg(long, short = 'l', global = true)]
    language: Option<Language>,

    /// Output format (text or json); overrides HEALTH_MONITOR_OUTPUT
    #[arg(long, short = 'f', global = true)]
    format: Option<String>,

    /// Enable debug logging; overrides RUST_LOG and HEALTH_MONITOR_LOG_LEVEL
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute daily nutrition targets
    Calculate {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Gender (male or female)
        #[arg(long)]
        gender: Gender,

        /// Activity level (sedentary, light, moderate, active, very-active)
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
    },

    /// List supported languages
    Languages,

    /// Resolve one message key in the selected language
    Translate {
        /// Message key, e.g. `results.calories`
        key: String,
    },

    /// Print the localized input form
    Form,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or_else(|| ErrorCode::InternalError.exit_code(), AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env().map_err(AppError::from)?;

    let mut logging = LoggingConfig::from_env(config.log_level);
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    init_configs().map_err(AppError::from)?;
    debug!("environment config: {}", config.summary());

    let context = CliContext {
        language: cli.language.unwrap_or(config.language),
        format: cli
            .format
            .as_deref()
            .map_or(config.output_format, OutputFormat::from_str_param),
    };

    match cli.command {
        Command::Calculate {
            age,
            weight,
            gender,
            activity,
        } => commands::calculate::run(&context, age, weight, gender, activity)?,
        Command::Languages => commands::languages::run(&context)?,
        Command::Translate { key } => commands::translate::run(&context, &key)?,
        Command::Form => commands::form::run(&context)?,
    }

    Ok(())
}
