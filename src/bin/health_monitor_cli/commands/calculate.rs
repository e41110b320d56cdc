// ABOUTME: Calculate command for health-monitor
// ABOUTME: Fills a session draft from flags, submits it, and prints the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use health_monitor::{
    errors::AppResult,
    formatters::render_report,
    models::{ActivityLevel, Gender, HealthProfile},
    session::Session,
};
use tracing::info;

use super::CliContext;
use crate::helpers::display::print_text;

/// Compute and print daily targets for one profile
pub fn run(
    context: &CliContext,
    age: u32,
    weight_kg: f64,
    gender: Gender,
    activity_level: ActivityLevel,
) -> AppResult<()> {
    let mut session = Session::new(context.language);
    session.draft = HealthProfile::new(age, weight_kg, gender, activity_level);

    let calories = session.submit()?.calories;
    info!(calories, language = %context.language, "recommendation ready");

    print_text(&render_report(&session, context.format)?)
}
