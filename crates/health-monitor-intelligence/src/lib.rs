// ABOUTME: Health metrics engine for the Health Monitor personal health tracker
// ABOUTME: Body and nutrition formulas, per-day aggregation, and sensor step day bucketing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Monitor Intelligence
//!
//! Pure, synchronous derivations over a profile and the user's dated records.
//! Nothing in this crate touches storage except through the `StepStateStore`
//! trait, which the root crate implements on top of `SQLite`.
//!
//! ## Modules
//!
//! - **config**: Formula constants (`MetricsConfig`) and macro presets
//! - **metrics**: `HealthMetricsEngine` (BMI, BMR, calorie, macro and water targets)
//! - **aggregation**: Nutrition day totals, display selection, merge-on-write, trends
//! - **steps**: Cumulative sensor readings bucketed into calendar days

/// Engine configuration and validation errors
pub mod config;

/// Health metrics engine
pub mod metrics;

/// Day-level aggregation and record selection helpers
pub mod aggregation;

/// Step counter day bucketing
pub mod steps;

pub use aggregation::{
    aggregate_nutrition_for_day, calorie_progress, merge_health_record_on_write,
    most_recent_weight, resolve_daily_records, select_display_metrics, step_goal_progress,
    weight_trend, DailyNutritionTotals, DisplayMetrics, GoalProgress, MergeOutcome, WeightTrend,
    WriteOrigin,
};
pub use config::{MacroPreset, MetricsConfig};
pub use metrics::{BmiCategory, HealthMetricsEngine, MacroTargets, WaterTarget};
pub use steps::{ArchivedDay, StepDayTracker, StepStateStore, StepTrackerState, StepUpdate};
