// ABOUTME: Compiled-in message catalogs, one module per supported language
// ABOUTME: Every catalog carries the same key set as the English base catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(super) mod de;
pub(super) mod en;
pub(super) mod es;
pub(super) mod fr;
pub(super) mod ja;
pub(super) mod ko;
pub(super) mod zh;
