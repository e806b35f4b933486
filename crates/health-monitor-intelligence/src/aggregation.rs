// ABOUTME: Day-level aggregation over dated health and nutrition records
// ABOUTME: Nutrition totals, display selection, merge-on-write decisions, weight trend, goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Aggregation helpers
//!
//! Records are matched to a day by exact `NaiveDate` equality. All functions
//! accept unordered input.

use chrono::NaiveDate;
use health_monitor_core::constants::weight_history::TREND_LOOKBACK_ENTRIES;
use health_monitor_core::models::{DailyHealthRecord, HealthRecordPatch, NutritionEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Nutrition consumed on one day
///
/// Macro totals are sums of each entry's grams truncated to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyNutritionTotals {
    /// Energy (kcal)
    pub calories: i32,
    /// Protein (g)
    pub protein_g: i32,
    /// Fat (g)
    pub fat_g: i32,
    /// Carbohydrates (g)
    pub carbs_g: i32,
}

/// Sum the nutrition entries logged on `date`
#[must_use]
pub fn aggregate_nutrition_for_day(
    entries: &[NutritionEntry],
    date: NaiveDate,
) -> DailyNutritionTotals {
    entries
        .iter()
        .filter(|entry| entry.date == date)
        .fold(DailyNutritionTotals::default(), |mut totals, entry| {
            totals.calories += entry.calories;
            totals.protein_g += entry.protein_g as i32;
            totals.fat_g += entry.fat_g as i32;
            totals.carbs_g += entry.carbs_g as i32;
            totals
        })
}

/// Weight of the latest-dated record that has one
#[must_use]
pub fn most_recent_weight(records: &[DailyHealthRecord]) -> Option<f64> {
    records
        .iter()
        .filter(|record| record.has_weight())
        .max_by(|a, b| a.date.cmp(&b.date).then(a.updated_at.cmp(&b.updated_at)))
        .map(|record| record.weight_kg)
}

/// Weight and steps shown for a selected day
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Stored weight for the day, 0 when none
    pub weight_kg: f64,
    /// Steps for the day
    pub steps: u32,
    /// Whether the steps come from the live sensor
    pub live_steps: bool,
}

/// Pick the values to display for `target`
///
/// Today's steps always come from the live sensor reading, whatever is stored.
/// Any other day shows the stored step count verbatim.
#[must_use]
pub fn select_display_metrics(
    records: &[DailyHealthRecord],
    target: NaiveDate,
    today: NaiveDate,
    live_sensor_steps: u32,
) -> DisplayMetrics {
    let stored = records.iter().find(|record| record.date == target);
    let weight_kg = stored.map_or(0.0, |record| record.weight_kg);

    if target == today {
        DisplayMetrics {
            weight_kg,
            steps: live_sensor_steps,
            live_steps: true,
        }
    } else {
        DisplayMetrics {
            weight_kg,
            steps: stored.map_or(0, |record| record.steps),
            live_steps: false,
        }
    }
}

/// Storage action decided by [`merge_health_record_on_write`]
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// Nothing to write
    Skip,
    /// Insert a new day record
    Create(DailyHealthRecord),
    /// Overwrite the existing day record with the merged value
    Update(DailyHealthRecord),
}

impl MergeOutcome {
    /// Record to persist, if any
    #[must_use]
    pub const fn record(&self) -> Option<&DailyHealthRecord> {
        match self {
            Self::Skip => None,
            Self::Create(record) | Self::Update(record) => Some(record),
        }
    }
}

/// Where a day record write comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOrigin {
    /// The user logged metrics
    Manual,
    /// The step sensor pushed its count for the day
    SensorSync,
}

/// Decide how a partial write lands on the stored record for its day
///
/// A sensor sync never creates a record: a day row seeded with zeroes
/// would be indistinguishable from real "not recorded" data. A manual log
/// of any metric, steps included, creates the day.
#[must_use]
pub fn merge_health_record_on_write(
    existing: Option<&DailyHealthRecord>,
    user_id: &str,
    date: NaiveDate,
    patch: &HealthRecordPatch,
    origin: WriteOrigin,
) -> MergeOutcome {
    if patch.is_empty() {
        return MergeOutcome::Skip;
    }

    match existing {
        Some(record) => {
            let mut merged = record.clone();
            merged.apply(patch);
            MergeOutcome::Update(merged)
        }
        None if origin == WriteOrigin::SensorSync => {
            debug!(%user_id, %date, "Skipping step sync for a day without a record");
            MergeOutcome::Skip
        }
        None => {
            let mut created = DailyHealthRecord::new(user_id, date);
            created.apply(patch);
            MergeOutcome::Create(created)
        }
    }
}

/// Weight change over the recent history
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Latest recorded weight, or the fallback when none is recorded
    pub current_kg: f64,
    /// Comparison point
    pub previous_kg: f64,
    /// `current_kg - previous_kg`
    pub delta_kg: f64,
    /// Number of records with a weight
    pub samples: usize,
}

/// Compare the latest weight with the one recorded a week of entries earlier
///
/// With fewer than seven weighed days the comparison point is the earliest
/// weight. `fallback_kg` (usually the profile's target weight) stands in for
/// the current weight when nothing is recorded.
#[must_use]
pub fn weight_trend(records: &[DailyHealthRecord], fallback_kg: f64) -> WeightTrend {
    let mut weighed: Vec<&DailyHealthRecord> =
        records.iter().filter(|record| record.has_weight()).collect();
    weighed.sort_by_key(|record| record.date);

    let Some(latest) = weighed.last() else {
        return WeightTrend {
            current_kg: fallback_kg,
            previous_kg: fallback_kg,
            delta_kg: 0.0,
            samples: 0,
        };
    };

    let current_kg = latest.weight_kg;
    let previous_kg = weighed
        .len()
        .checked_sub(TREND_LOOKBACK_ENTRIES)
        .and_then(|index| weighed.get(index))
        .or_else(|| weighed.first())
        .map_or(current_kg, |record| record.weight_kg);

    WeightTrend {
        current_kg,
        previous_kg,
        delta_kg: current_kg - previous_kg,
        samples: weighed.len(),
    }
}

/// Progress toward a daily goal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Fraction of the goal, capped at 1.0 (progress bar fill)
    pub ratio: f64,
    /// Whole percent of the goal, not capped
    pub percent: i64,
}

fn progress(value: f64, goal: f64) -> GoalProgress {
    if goal <= 0.0 {
        return GoalProgress::default();
    }
    let fraction = value / goal;
    GoalProgress {
        ratio: fraction.clamp(0.0, 1.0),
        percent: (fraction * 100.0) as i64,
    }
}

/// Step count relative to the daily step goal
#[must_use]
pub fn step_goal_progress(steps: u32, goal: u32) -> GoalProgress {
    progress(f64::from(steps), f64::from(goal))
}

/// Calories consumed relative to the daily calorie target
#[must_use]
pub fn calorie_progress(consumed: i32, target: i32) -> GoalProgress {
    progress(f64::from(consumed), f64::from(target))
}

/// Collapse rows sharing a `(user_id, date)` key to the most recent write
///
/// The row with the latest `updated_at` wins; on a tie the row appearing
/// later in `records` wins. Output is ordered by date.
#[must_use]
pub fn resolve_daily_records(records: Vec<DailyHealthRecord>) -> Vec<DailyHealthRecord> {
    let mut by_day: BTreeMap<(NaiveDate, String), DailyHealthRecord> = BTreeMap::new();
    for record in records {
        let key = (record.date, record.user_id.clone());
        match by_day.get(&key) {
            Some(kept) if kept.updated_at > record.updated_at => {}
            _ => {
                by_day.insert(key, record);
            }
        }
    }
    by_day.into_values().collect()
}
