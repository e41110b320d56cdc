// ABOUTME: Languages command for health-monitor
// ABOUTME: Lists every supported UI language with its flag and native name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use health_monitor::{errors::AppResult, formatters::OutputFormat, i18n::Language};
use serde_json::json;

use super::CliContext;
use crate::helpers::display::{print_json, print_text};

/// Print the language selector entries
pub fn run(context: &CliContext) -> AppResult<()> {
    match context.format {
        OutputFormat::Json => {
            let languages: Vec<_> = Language::ALL
                .iter()
                .map(|language| {
                    json!({
                        "code": language.code(),
                        "name": language.native_name(),
                        "flag": language.flag(),
                        "selected": *language == context.language,
                    })
                })
                .collect();
            print_json(&languages)
        }
        OutputFormat::Text => {
            let lines: Vec<String> = Language::ALL
                .into_iter()
                .map(|language| {
                    let marker = if language == context.language { "*" } else { " " };
                    format!(
                        "{marker} {} {:<3} {}",
                        language.flag(),
                        language.code(),
                        language.native_name()
                    )
                })
                .collect();
            print_text(&lines.join("\n"))
        }
    }
}
