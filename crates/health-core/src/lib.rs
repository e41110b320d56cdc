// ABOUTME: Core types and constants for the health monitor
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

#![deny(unsafe_code)]

//! # Health Core
//!
//! Foundation crate providing shared types and constants for the health
//! monitor. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants (service name, environment keys)
//! - **models**: `HealthProfile` input and `NutritionRecommendation` output

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, gender, activity level, recommendation)
pub mod models;
