// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for health-monitor
// ABOUTME: Provides display formatting and calendar utilities

pub mod display;

use chrono::{Local, NaiveDate};

/// Current calendar day in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Clamp a step count into the stored record range
pub fn steps_u32(steps: u64) -> u32 {
    u32::try_from(steps).unwrap_or(u32::MAX)
}
