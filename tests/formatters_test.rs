// ABOUTME: Integration tests for report and form rendering
// ABOUTME: Localized text layout, JSON document shape, and missing-result errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_monitor::{
    errors::ErrorCode,
    formatters::{render_form, render_report, write_output, OutputFormat},
    i18n::{Language, Localizer},
    session::Session,
};
use serde_json::Value;
use std::io::{self, Write};

mod common;

/// Writer whose every write fails with `kind`
struct FailingWriter {
    kind: io::ErrorKind,
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, "writer closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param(" JSON "), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_param("xml"), OutputFormat::Text);
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn test_render_without_result_is_invalid_input() {
    let session = Session::new(Language::En);

    for format in [OutputFormat::Text, OutputFormat::Json] {
        let error = render_report(&session, format).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_text_report_layout() {
    let session = common::submitted_session(Language::En, common::reference_male());

    let report = render_report(&session, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Your Personalized Recommendations");
    assert_eq!(lines[1], "Male, 30 years old, 70kg");
    assert_eq!(lines[3], "  2628  Daily Calories (kcal/day)");
    assert_eq!(lines[4], "    56  Protein (grams/day)");
    assert_eq!(lines[5], "   296  Carbohydrates (grams/day)");
    assert_eq!(lines[6], "    88  Healthy Fats (grams/day)");
    assert!(report.contains("Fiber Intake: 38g"));
    assert!(report.contains("Water Intake: 2450ml"));
    assert!(report.contains("Sodium Limit: <2300mg"));
    assert!(report.contains("Personalized Suggestions"));
    assert_eq!(
        lines.last().copied(),
        Some(" 7. Consider meal prep to maintain consistent nutrition")
    );
}

#[test]
fn test_text_report_is_localized() {
    let session = common::submitted_session(Language::Es, common::reference_female());

    let report = render_report(&session, OutputFormat::Text).unwrap();

    assert!(report.starts_with("Tus Recomendaciones Personalizadas"));
    assert!(report.contains("Calorías Diarias"));
    assert!(report.contains("Ingesta de Fibra: 21g"));
    assert!(!report.contains("results."));
}

#[test]
fn test_json_report_shape() {
    let session = common::submitted_session(Language::Ja, common::reference_male());

    let report = render_report(&session, OutputFormat::Json).unwrap();
    let document: Value = serde_json::from_str(&report).unwrap();

    assert_eq!(document["language"], "ja");
    assert_eq!(document["profile"]["age"], 30);
    assert_eq!(document["profile"]["weight"], 70.0);
    assert_eq!(document["profile"]["gender"], "male");
    assert_eq!(document["profile"]["activityLevel"], "moderate");
    assert_eq!(document["recommendation"]["calories"], 2628);
    assert_eq!(document["recommendation"]["sodium"], 2300);
    assert_eq!(document["suggestions"].as_array().unwrap().len(), 7);
}

#[test]
fn test_form_lists_every_option() {
    let form = render_form(&Localizer::new(Language::En));

    assert!(form.starts_with("Health Monitor Assistant"));
    assert!(form.contains("Age (years): Enter your age"));
    assert!(form.contains("very-active"));
    assert!(form.contains("Sedentary (little/no exercise)"));
    assert!(form.contains("Language: English"));
    assert!(form.ends_with("[Calculate Recommendations]"));
}

#[test]
fn test_report_unchanged_by_rejected_resubmit() {
    let mut session = common::submitted_session(Language::En, common::reference_male());
    let text_before = render_report(&session, OutputFormat::Text).unwrap();
    let json_before = render_report(&session, OutputFormat::Json).unwrap();

    session.edit();
    session.draft.age = 0;
    session.draft.weight_kg = 0.0;
    assert!(session.submit().is_err());

    let text_after = render_report(&session, OutputFormat::Text).unwrap();
    let json_after = render_report(&session, OutputFormat::Json).unwrap();
    assert_eq!(text_after, text_before);
    assert_eq!(json_after, json_before);
    assert!(!text_after.contains("0 years old, 0kg"));

    let document: Value = serde_json::from_str(&json_after).unwrap();
    assert_eq!(document["profile"]["age"], 30);
    assert_eq!(document["summary"], "Male, 30 years old, 70kg");
}

#[test]
fn test_write_output_appends_newline() {
    let mut buffer = Vec::new();

    write_output(&mut buffer, "Daily Calories").unwrap();

    assert_eq!(buffer, b"Daily Calories\n");
}

#[test]
fn test_write_output_ends_quietly_on_closed_pipe() {
    let mut writer = FailingWriter {
        kind: io::ErrorKind::BrokenPipe,
    };

    assert!(write_output(&mut writer, "report").is_ok());
}

#[test]
fn test_write_output_reports_other_failures() {
    let mut writer = FailingWriter {
        kind: io::ErrorKind::PermissionDenied,
    };

    let error = write_output(&mut writer, "report").unwrap_err();

    assert_eq!(error.code, ErrorCode::InternalError);
    assert_eq!(error.exit_code(), 70);
    assert!(std::error::Error::source(&error).is_some());
}
