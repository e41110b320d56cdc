// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors
// ABOUTME: Re-exports command modules for health-monitor
// ABOUTME: Holds the resolved language and output format shared by every command

use health_monitor::{formatters::OutputFormat, i18n::Language};

pub mod calculate;
pub mod form;
pub mod languages;
pub mod translate;

/// Settings resolved from flags and environment before a command runs
pub struct CliContext {
    /// Language for every label
    pub language: Language,
    /// Output format for command results
    pub format: OutputFormat,
}
