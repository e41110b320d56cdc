// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors
// ABOUTME: Re-exports helper modules for health-monitor
// ABOUTME: Provides access to display formatting utilities

pub mod display;
