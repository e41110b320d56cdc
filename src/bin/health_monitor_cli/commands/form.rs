// ABOUTME: Form command for health-monitor
// ABOUTME: Prints the localized input form labels and selectable options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use health_monitor::{
    errors::AppResult,
    formatters::{render_form, OutputFormat},
    i18n::{self, Localizer},
};
use serde_json::{Map, Value};

use super::CliContext;
use crate::helpers::display::{print_json, print_text};

/// Print the input form in the selected language
pub fn run(context: &CliContext) -> AppResult<()> {
    let localizer = Localizer::new(context.language);

    match context.format {
        OutputFormat::Json => {
            let labels: Map<String, Value> = i18n::keys()
                .iter()
                .filter(|key| key.starts_with("app.") || key.starts_with("form."))
                .map(|key| ((*key).to_owned(), Value::from(localizer.t(key))))
                .collect();
            print_json(&labels)
        }
        OutputFormat::Text => print_text(&render_form(&localizer)),
    }
}
