// ABOUTME: Translate command for health-monitor
// ABOUTME: Resolves one message key with the English and raw-key fallback chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use health_monitor::{
    errors::AppResult,
    formatters::OutputFormat,
    i18n::{self, Resolution},
};
use serde_json::json;

use super::CliContext;
use crate::helpers::display::{print_json, print_text};

/// Print the text a key resolves to in the selected language
pub fn run(context: &CliContext, key: &str) -> AppResult<()> {
    let (text, source) = i18n::resolve_with_source(context.language, key);

    match context.format {
        OutputFormat::Json => print_json(&json!({
            "language": context.language,
            "key": key,
            "text": text,
            "source": resolution_name(source),
        })),
        OutputFormat::Text => print_text(text),
    }
}

const fn resolution_name(source: Resolution) -> &'static str {
    match source {
        Resolution::Translated => "translated",
        Resolution::EnglishFallback => "english-fallback",
        Resolution::MissingKey => "missing-key",
    }
}
