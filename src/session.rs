// ABOUTME: Interactive session state owned by the presentation layer
// ABOUTME: Draft profile, computed result, results-view flag, and selected language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! # Session
//!
//! One [`Session`] per interactive user. It is plain owned state: the
//! presentation layer holds it and passes it by reference, nothing is shared
//! across sessions.
//!
//! The submission guard lives here, not in the engine: a draft with
//! `age == 0` or `weight <= 0` is rejected and the session is left as it was.

use crate::i18n::{Language, Localizer};
use crate::intelligence::{compute, suggestion_keys};
use health_core::errors::{AppError, AppResult};
use health_core::models::{HealthProfile, NutritionRecommendation};
use tracing::{debug, warn};

/// State of one interactive form session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Profile currently entered in the form
    pub draft: HealthProfile,
    result: Option<(HealthProfile, NutritionRecommendation)>,
    showing_results: bool,
    language: Language,
}

impl Session {
    /// Start a session with a blank draft
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Last computed recommendation, if any
    #[must_use]
    pub fn recommendation(&self) -> Option<&NutritionRecommendation> {
        self.result.as_ref().map(|(_, recommendation)| recommendation)
    }

    /// Profile the last recommendation was computed from
    ///
    /// Later edits to [`Session::draft`] do not change it.
    #[must_use]
    pub fn submitted_profile(&self) -> Option<&HealthProfile> {
        self.result.as_ref().map(|(profile, _)| profile)
    }

    /// Whether the results view is active
    #[must_use]
    pub const fn is_showing_results(&self) -> bool {
        self.showing_results
    }

    /// Selected UI language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Translator for the selected language
    #[must_use]
    pub const fn localizer(&self) -> Localizer {
        Localizer::new(self.language)
    }

    /// Switch the UI language; draft and result are untouched
    pub fn set_language(&mut self, language: Language) {
        debug!(from = %self.language, to = %language, "language changed");
        self.language = language;
    }

    /// Submit the draft: compute targets and switch to the results view
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the draft's age is zero or its weight is
    /// not positive. The session is not modified in that case.
    pub fn submit(&mut self) -> AppResult<&NutritionRecommendation> {
        if !self.draft.is_submittable() {
            warn!(
                age = self.draft.age,
                weight_kg = self.draft.weight_kg,
                "rejected submission with non-positive age or weight"
            );
            return Err(AppError::invalid_input("Age and weight must be positive")
                .with_details(serde_json::json!({
                    "age": self.draft.age,
                    "weight": self.draft.weight_kg,
                })));
        }

        let recommendation = compute(&self.draft);
        debug!(
            age = self.draft.age,
            weight_kg = self.draft.weight_kg,
            gender = %self.draft.gender,
            activity_level = %self.draft.activity_level,
            calories = recommendation.calories,
            "computed nutrition recommendation"
        );
        self.showing_results = true;
        let (_, stored) = self.result.insert((self.draft, recommendation));
        Ok(&*stored)
    }

    /// Return to the form; the draft and last result are kept
    pub fn edit(&mut self) {
        debug!("returning to form");
        self.showing_results = false;
    }

    /// Localized lifestyle suggestions, empty until a result exists
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        if self.result.is_none() {
            return Vec::new();
        }
        let localizer = self.localizer();
        suggestion_keys()
            .map(|key| localizer.t(&key).to_owned())
            .collect()
    }

    /// One-line profile description, e.g. `Male, 30 years old, 70kg`
    ///
    /// Describes the submitted profile once a result exists, the draft before.
    #[must_use]
    pub fn profile_summary(&self) -> String {
        let profile = self.submitted_profile().unwrap_or(&self.draft);
        let localizer = self.localizer();
        format!(
            "{}, {} {}, {}kg",
            localizer.gender_label(profile.gender),
            profile.age,
            localizer.t("results.profile"),
            profile.weight_kg
        )
    }
}
