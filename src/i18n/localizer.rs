// ABOUTME: Language-bound translation helper used by the presentation layer
// ABOUTME: Composes value-dependent keys and traces fallback resolutions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

use super::{resolve_with_source, Language, Resolution};
use health_core::models::{ActivityLevel, Gender};
use tracing::trace;

/// Translator bound to one language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    /// Create a localizer for `language`
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Language this localizer resolves against
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Resolve a message key
    #[must_use]
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        let (text, source) = resolve_with_source(self.language, key);
        match source {
            Resolution::Translated => {}
            Resolution::EnglishFallback => {
                trace!(language = %self.language, key, "translation missing, using English");
            }
            Resolution::MissingKey => {
                trace!(language = %self.language, key, "unknown message key");
            }
        }
        text
    }

    /// Resolve a key composed at runtime (`prefix.value`)
    #[must_use]
    pub fn t_composed(&self, prefix: &str, value: impl std::fmt::Display) -> String {
        let key = format!("{prefix}.{value}");
        self.t(&key).to_owned()
    }

    /// Localized gender label (`form.gender.{gender}`)
    #[must_use]
    pub fn gender_label(&self, gender: Gender) -> String {
        self.t_composed("form.gender", gender.as_str())
    }

    /// Localized activity level description (`form.activity.{level}`)
    #[must_use]
    pub fn activity_label(&self, level: ActivityLevel) -> String {
        self.t_composed("form.activity", level.as_str())
    }
}
