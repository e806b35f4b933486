// ABOUTME: Lossy parsing of user-typed numeric fields with documented fallback values
// ABOUTME: Malformed input is replaced by a default instead of being rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Free-text numeric input never fails: an empty or non-numeric field resolves
//! to the documented default for that field. Use the `*_or_keep` variants for
//! edit forms, where the previous value is the default.

use crate::constants::input_defaults;
use std::str::FromStr;
use tracing::debug;

/// Parse `raw`, falling back to `default` when it is empty or malformed
#[must_use]
pub fn parse_or<T>(raw: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    let trimmed = raw.trim();
    // Accept decimal commas as typed on localized keyboards
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<T>().unwrap_or_else(|_| {
        if !trimmed.is_empty() {
            debug!(input = %trimmed, "Malformed numeric input, using default");
        }
        default
    })
}

/// Body weight in kilograms (default 70 kg)
#[must_use]
pub fn weight_kg(raw: &str) -> f64 {
    parse_or(raw, input_defaults::WEIGHT_KG)
}

/// Heart rate in bpm (default 70 bpm)
#[must_use]
pub fn heart_rate_bpm(raw: &str) -> u32 {
    parse_or(raw, input_defaults::HEART_RATE_BPM)
}

/// Portion in grams (default 100 g)
#[must_use]
pub fn portion_grams(raw: &str) -> f64 {
    parse_or(raw, input_defaults::PORTION_GRAMS)
}

/// Calories per 100 g of a custom food (default 100 kcal)
#[must_use]
pub fn food_calories(raw: &str) -> i32 {
    parse_or(raw, input_defaults::FOOD_CALORIES_PER_100G)
}

/// Macro grams per 100 g of a custom food (default 0 g)
#[must_use]
pub fn food_macro_grams(raw: &str) -> f64 {
    parse_or(raw, input_defaults::FOOD_MACRO_GRAMS)
}

/// Parse an edited value, keeping `previous` when the edit is malformed
#[must_use]
pub fn parse_or_keep<T>(raw: &str, previous: T) -> T
where
    T: FromStr + Copy,
{
    parse_or(raw, previous)
}
