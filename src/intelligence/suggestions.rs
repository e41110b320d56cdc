// ABOUTME: Static lifestyle suggestions shown alongside nutrition targets
// ABOUTME: Produces the 1-based `suggestions.{n}` message keys in display order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

/// Number of lifestyle suggestions in every catalog
pub const SUGGESTION_COUNT: usize = 7;

/// Message-key prefix for suggestion texts
pub const SUGGESTION_KEY_PREFIX: &str = "suggestions";

/// Message keys for all suggestions, `suggestions.1` through `suggestions.7`
pub fn suggestion_keys() -> impl Iterator<Item = String> {
    (1..=SUGGESTION_COUNT).map(|index| format!("{SUGGESTION_KEY_PREFIX}.{index}"))
}
