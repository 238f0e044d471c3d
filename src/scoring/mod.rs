// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! Field weight scales everything: a label hit counts four times a handle hit
//! with the same raw points. Within a field, specific phrase hits beat short
//! generic ones, and whole words beat fragments.

mod core;
pub mod ranking;

pub use self::core::*;
