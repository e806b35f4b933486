// ABOUTME: Configuration module for the health metrics engine
// ABOUTME: Re-exports formula constants, presets, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Formula constants for BMR, calorie targets, macro presets and hydration
pub mod metrics;

pub use error::ConfigError;
pub use metrics::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, HydrationConfig, MacroPreset,
    MacroSplit, MetricsConfig,
};
