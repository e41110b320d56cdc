// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors
// ABOUTME: Output helpers for health-monitor
// ABOUTME: Writes command output and pretty JSON documents to stdout

use health_monitor::{errors::AppResult, formatters::write_output};
use serde::Serialize;
use std::io;

/// Print a line of command output on stdout
pub fn print_text(text: &str) -> AppResult<()> {
    write_output(&mut io::stdout().lock(), text)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    print_text(&serde_json::to_string_pretty(value)?)
}
