// ABOUTME: Integration tests for the localization resolver and message catalogs
// ABOUTME: Fallback chain, catalog completeness, language parsing, and Localizer helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_monitor::{
    i18n::{self, Catalogs, Language, Localizer, Resolution},
    models::{ActivityLevel, Gender},
};

mod common;

#[test]
fn test_spanish_calories_label() {
    assert_eq!(i18n::resolve(Language::Es, "results.calories"), "Calorías Diarias");
}

#[test]
fn test_unknown_key_is_returned_verbatim() {
    for language in Language::ALL {
        assert_eq!(i18n::resolve(language, "nonexistent.key"), "nonexistent.key");
        assert_eq!(
            i18n::resolve_with_source(language, "nonexistent.key").1,
            Resolution::MissingKey
        );
    }
}

#[test]
fn test_english_only_key_falls_back_to_english() {
    const EN: &[(&str, &str)] = &[("results.calories", "Daily Calories"), ("only.en", "Only English")];
    const KO: &[(&str, &str)] = &[("results.calories", "일일 칼로리")];
    let catalogs = Catalogs::from_entries([(Language::En, EN), (Language::Ko, KO)]);

    assert_eq!(catalogs.resolve(Language::Ko, "only.en"), "Only English");
    assert_eq!(
        catalogs.resolve_with_source(Language::Ko, "only.en").1,
        Resolution::EnglishFallback
    );
    // a language with no table at all still reaches English
    assert_eq!(catalogs.resolve(Language::Fr, "results.calories"), "Daily Calories");
    assert_eq!(catalogs.missing_keys(Language::Ko), vec!["only.en"]);
}

#[test]
fn test_every_shipped_language_is_complete() {
    assert!(!i18n::keys().is_empty());
    for language in Language::ALL {
        assert!(
            i18n::missing_keys(language).is_empty(),
            "{language} is missing {:?}",
            i18n::missing_keys(language)
        );
    }
}

#[test]
fn test_translated_labels_differ_from_english() {
    for language in Language::ALL.into_iter().filter(|l| *l != Language::En) {
        assert_ne!(
            i18n::resolve(language, "app.title"),
            i18n::resolve(Language::En, "app.title"),
            "{language} app.title is untranslated"
        );
    }
}

#[test]
fn test_language_selector_metadata() {
    let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["en", "es", "zh", "fr", "de", "ko", "ja"]);
    assert_eq!(Language::Es.native_name(), "Español");
    assert_eq!(Language::Ko.native_name(), "한국어");
    assert_eq!(Language::default(), Language::En);
    assert_eq!(Language::De.to_string(), "de");
}

#[test]
fn test_language_parse_rejects_unknown_codes() {
    let error = "xx".parse::<Language>().unwrap_err();
    assert!(error.message.contains("xx"));
    assert_eq!("FR-ca".parse::<Language>().unwrap(), Language::Fr);
}

#[test]
fn test_localizer_composed_labels() {
    common::init_test_logging();
    let localizer = Localizer::new(Language::Es);

    assert_eq!(localizer.gender_label(Gender::Male), "Masculino");
    assert_eq!(
        localizer.activity_label(ActivityLevel::VeryActive),
        "Muy Activo (ejercicio muy intenso, trabajo físico)"
    );
    assert_eq!(localizer.t_composed("suggestions", 1), i18n::resolve(Language::Es, "suggestions.1"));
    assert_eq!(localizer.t("no.such.key"), "no.such.key");
}

#[test]
fn test_exact_lookup_skips_fallback() {
    assert_eq!(
        i18n::lookup(Language::De, "form.title"),
        Some("Persönliche Informationen")
    );
    assert_eq!(
        Catalogs::builtin().lookup(Language::De, "form.title"),
        i18n::lookup(Language::De, "form.title")
    );
    assert_eq!(i18n::lookup(Language::De, "nonexistent.key"), None);
}
