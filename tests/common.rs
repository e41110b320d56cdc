// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and reference health profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `health_monitor`

use health_monitor::i18n::Language;
use health_monitor::models::{ActivityLevel, Gender, HealthProfile};
use health_monitor::session::Session;
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old, 70 kg, moderately active man
pub const fn reference_male() -> HealthProfile {
    HealthProfile::new(30, 70.0, Gender::Male, ActivityLevel::Moderate)
}

/// 60-year-old, 55 kg, sedentary woman
pub const fn reference_female() -> HealthProfile {
    HealthProfile::new(60, 55.0, Gender::Female, ActivityLevel::Sedentary)
}

/// Session in `language` whose draft has already been submitted
pub fn submitted_session(language: Language, profile: HealthProfile) -> Session {
    init_test_logging();
    let mut session = Session::new(language);
    session.draft = profile;
    session.submit().unwrap();
    session
}
