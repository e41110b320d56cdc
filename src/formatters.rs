// ABOUTME: Output format abstraction for rendering recommendation reports
// ABOUTME: Localized plain-text cards (default) and JSON for machine consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! Output Format Abstraction Layer
//!
//! Renders a [`Session`] with a computed result as either a localized text
//! report or a JSON document. Every label goes through the i18n resolver;
//! numbers are printed as computed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use health_monitor::formatters::{render_report, OutputFormat};
//! use health_monitor::i18n::Language;
//! use health_monitor::session::Session;
//! use health_core::models::{ActivityLevel, Gender, HealthProfile};
//!
//! let mut session = Session::new(Language::Es);
//! session.draft = HealthProfile::new(30, 70.0, Gender::Male, ActivityLevel::Moderate);
//! if session.submit().is_ok() {
//!     if let Ok(report) = render_report(&session, OutputFormat::Text) {
//!         println!("{report}");
//!     }
//! }
//! ```

use crate::i18n::{Language, Localizer};
use crate::session::Session;
use health_core::errors::{AppError, AppResult};
use health_core::models::{ActivityLevel, Gender, HealthProfile, NutritionRecommendation};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Localized human-readable report (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serializable view of a finished session
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Language the labels were resolved in
    pub language: Language,
    /// Profile the recommendation was computed from
    pub profile: &'a HealthProfile,
    /// Localized one-line profile summary
    pub summary: String,
    /// Computed targets
    pub recommendation: &'a NutritionRecommendation,
    /// Localized lifestyle suggestions
    pub suggestions: Vec<String>,
}

impl<'a> Report<'a> {
    /// Build a report from a session that has a result
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the session has not computed a result yet.
    pub fn from_session(session: &'a Session) -> AppResult<Self> {
        let (profile, recommendation) = session
            .submitted_profile()
            .zip(session.recommendation())
            .ok_or_else(|| {
                AppError::invalid_input("No recommendation computed; submit the form first")
            })?;
        Ok(Self {
            language: session.language(),
            profile,
            summary: session.profile_summary(),
            recommendation,
            suggestions: session.suggestions(),
        })
    }
}

/// Render the session's result in the requested format
///
/// # Errors
///
/// Returns `InvalidInput` if no result exists, or `SerializationError` if JSON
/// encoding fails.
pub fn render_report(session: &Session, format: OutputFormat) -> AppResult<String> {
    let report = Report::from_session(session)?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => Ok(render_text(&report, &session.localizer())),
    }
}

fn render_text(report: &Report<'_>, localizer: &Localizer) -> String {
    let rec = report.recommendation;
    let mut lines = vec![
        localizer.t("results.title").to_owned(),
        report.summary.clone(),
        String::new(),
    ];

    let macro_cards = [
        (rec.calories, "results.calories"),
        (rec.protein, "results.protein"),
        (rec.carbs, "results.carbs"),
        (rec.fat, "results.fat"),
    ];
    for (value, key) in macro_cards {
        let unit_key = format!("{key}.unit");
        lines.push(format!(
            "{value:>6}  {} ({})",
            localizer.t(key),
            localizer.t(&unit_key)
        ));
    }
    lines.push(String::new());

    let detail_cards = [
        ("results.fiber", format!("{}g", rec.fiber)),
        ("results.water", format!("{}ml", rec.water)),
        ("results.sodium", format!("<{}mg", rec.sodium)),
    ];
    for (key, amount) in detail_cards {
        let desc_key = format!("{key}.desc");
        lines.push(format!("{}: {amount}", localizer.t(key)));
        lines.push(format!("  {}", localizer.t(&desc_key)));
    }
    lines.push(String::new());

    lines.push(localizer.t("suggestions.title").to_owned());
    lines.push(localizer.t("suggestions.subtitle").to_owned());
    for (index, suggestion) in report.suggestions.iter().enumerate() {
        lines.push(format!("{:>2}. {suggestion}", index + 1));
    }

    lines.join("\n")
}

/// Render the localized input form: labels, placeholders and options
#[must_use]
pub fn render_form(localizer: &Localizer) -> String {
    let mut lines = vec![
        localizer.t("app.title").to_owned(),
        localizer.t("app.subtitle").to_owned(),
        String::new(),
        localizer.t("form.title").to_owned(),
        localizer.t("form.subtitle").to_owned(),
        String::new(),
        format!(
            "{}: {}",
            localizer.t("form.age"),
            localizer.t("form.age.placeholder")
        ),
        format!(
            "{}: {}",
            localizer.t("form.weight"),
            localizer.t("form.weight.placeholder")
        ),
        format!("{}:", localizer.t("form.gender")),
    ];
    for gender in Gender::ALL {
        lines.push(format!("  {:<12} {}", gender.as_str(), localizer.gender_label(gender)));
    }
    lines.push(format!("{}:", localizer.t("form.activity")));
    for level in ActivityLevel::ALL {
        lines.push(format!("  {:<12} {}", level.as_str(), localizer.activity_label(level)));
    }
    lines.push(String::new());
    lines.push(format!(
        "{}: {}",
        localizer.t("form.language"),
        localizer.language().native_name()
    ));
    lines.push(format!("[{}]", localizer.t("form.calculate")));

    lines.join("\n")
}

/// Write `text` and a trailing newline to `writer`
///
/// A closed pipe on the reading side ends output quietly.
///
/// # Errors
///
/// Returns an `InternalError` for any other write failure.
pub fn write_output<W: Write>(writer: &mut W, text: &str) -> AppResult<()> {
    match writeln!(writer, "{text}").and_then(|()| writer.flush()) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(error) => Err(AppError::internal("failed to write output").with_source(error)),
    }
}
