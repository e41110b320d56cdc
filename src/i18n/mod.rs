// ABOUTME: Localization resolver mapping (language, key) pairs to display text
// ABOUTME: Static per-language catalogs with English and raw-key fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

//! # Localization
//!
//! Every user-visible label is looked up through [`resolve`]. Catalogs are
//! compiled in, indexed once on first use, and never mutated.
//!
//! Lookup order:
//! 1. the key in the requested language's catalog
//! 2. the key in the English catalog
//! 3. the key itself, verbatim, as a visible missing-translation marker
//!
//! The resolver does no formatting. Callers that need a value-dependent
//! label compose the key themselves (`form.gender.{gender}`,
//! `suggestions.{n}`).

mod catalog;
mod localizer;

pub use localizer::Localizer;

use health_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Supported UI languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (base catalog and fallback)
    #[default]
    En,
    /// Spanish
    Es,
    /// Simplified Chinese
    Zh,
    /// French
    Fr,
    /// German
    De,
    /// Korean
    Ko,
    /// Japanese
    Ja,
}

impl Language {
    /// All languages in language-selector order
    pub const ALL: [Self; 7] = [
        Self::En,
        Self::Es,
        Self::Zh,
        Self::Fr,
        Self::De,
        Self::Ko,
        Self::Ja,
    ];

    /// Two-letter language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Zh => "zh",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Ko => "ko",
            Self::Ja => "ja",
        }
    }

    /// Language name written in that language
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Zh => "中文",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Ko => "한국어",
            Self::Ja => "日本語",
        }
    }

    /// Flag emoji shown next to the name in the selector
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Es => "🇪🇸",
            Self::Zh => "🇨🇳",
            Self::Fr => "🇫🇷",
            Self::De => "🇩🇪",
            Self::Ko => "🇰🇷",
            Self::Ja => "🇯🇵",
        }
    }

    const fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => catalog::en::ENTRIES,
            Self::Es => catalog::es::ENTRIES,
            Self::Zh => catalog::zh::ENTRIES,
            Self::Fr => catalog::fr::ENTRIES,
            Self::De => catalog::de::ENTRIES,
            Self::Ko => catalog::ko::ENTRIES,
            Self::Ja => catalog::ja::ENTRIES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    /// Case-insensitive; region tags such as `es-MX` or `zh_CN` are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|language| language.code() == primary)
            .ok_or_else(|| {
                AppError::invalid_format(format!(
                    "Unsupported language '{}', expected one of: en, es, zh, fr, de, ko, ja",
                    s.trim()
                ))
            })
    }
}

/// Where a resolved string came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Found in the requested language
    Translated,
    /// Missing in the requested language, taken from English
    EnglishFallback,
    /// Missing everywhere; the key is returned as-is
    MissingKey,
}

type Catalog = HashMap<&'static str, &'static str>;

/// Indexed message tables for every language
///
/// The built-in set is available through [`Catalogs::builtin`]; other sets
/// can be assembled from entry slices with [`Catalogs::from_entries`].
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    tables: HashMap<Language, Catalog>,
    base_keys: Vec<&'static str>,
}

static BUILTIN_CATALOGS: OnceLock<Catalogs> = OnceLock::new();

impl Catalogs {
    /// Catalogs compiled into the binary, indexed on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOGS.get_or_init(|| {
            Self::from_entries(
                Language::ALL
                    .into_iter()
                    .map(|language| (language, language.entries())),
            )
        })
    }

    /// Build catalogs from per-language entry slices
    ///
    /// Later duplicates of a key within one slice win. The base key set is
    /// the English slice in its original order.
    #[must_use]
    pub fn from_entries<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Language, &'static [(&'static str, &'static str)])>,
    {
        let mut catalogs = Self::default();
        for (language, entries) in tables {
            if language == Language::En {
                catalogs.base_keys = entries.iter().map(|(key, _)| *key).collect();
            }
            catalogs
                .tables
                .insert(language, entries.iter().copied().collect());
        }
        catalogs
    }

    /// Exact lookup in one language's catalog, without fallback
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables
            .get(&language)
            .and_then(|catalog| catalog.get(key).copied())
    }

    /// Resolve a key and report which step of the fallback chain answered
    #[must_use]
    pub fn resolve_with_source<'k>(
        &self,
        language: Language,
        key: &'k str,
    ) -> (&'k str, Resolution) {
        if let Some(text) = self.lookup(language, key) {
            return (text, Resolution::Translated);
        }
        if let Some(text) = self.lookup(Language::En, key) {
            return (text, Resolution::EnglishFallback);
        }
        (key, Resolution::MissingKey)
    }

    /// Resolve `key` for `language`, falling back to English and then to the key
    #[must_use]
    pub fn resolve<'k>(&self, language: Language, key: &'k str) -> &'k str {
        self.resolve_with_source(language, key).0
    }

    /// Base key set, in English catalog order
    #[must_use]
    pub fn keys(&self) -> &[&'static str] {
        &self.base_keys
    }

    /// Base keys that `language` does not translate
    #[must_use]
    pub fn missing_keys(&self, language: Language) -> Vec<&'static str> {
        self.base_keys
            .iter()
            .copied()
            .filter(|key| self.lookup(language, key).is_none())
            .collect()
    }
}

/// Exact lookup in the built-in catalog for `language`, without fallback
#[must_use]
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    Catalogs::builtin().lookup(language, key)
}

/// Resolve a key against the built-in catalogs, reporting the fallback step used
#[must_use]
pub fn resolve_with_source(language: Language, key: &str) -> (&str, Resolution) {
    Catalogs::builtin().resolve_with_source(language, key)
}

/// Resolve `key` for `language`, falling back to English and then to the key
#[must_use]
pub fn resolve(language: Language, key: &str) -> &str {
    Catalogs::builtin().resolve(language, key)
}

/// Base key set of the built-in catalogs, in English catalog order
#[must_use]
pub fn keys() -> &'static [&'static str] {
    Catalogs::builtin().keys()
}

/// Built-in base keys that `language` does not translate
#[must_use]
pub fn missing_keys(language: Language) -> Vec<&'static str> {
    Catalogs::builtin().missing_keys(language)
}
