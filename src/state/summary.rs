// ABOUTME: Per-day dashboard summary derived from the current state snapshots
// ABOUTME: Combines nutrition totals, calorie and macro targets, water, steps, BMI and weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{DailyHealthRecord, NutritionEntry, UserProfile};
use chrono::NaiveDate;
use health_monitor_intelligence::{
    aggregate_nutrition_for_day, calorie_progress, most_recent_weight, select_display_metrics,
    step_goal_progress, weight_trend, BmiCategory, DailyNutritionTotals, DisplayMetrics,
    GoalProgress, HealthMetricsEngine, MacroTargets, WaterTarget, WeightTrend,
};
use serde::Serialize;

/// Dashboard values for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Summarized day
    pub date: NaiveDate,
    /// Nutrition logged on the day
    pub nutrition: DailyNutritionTotals,
    /// Daily calorie target (kcal)
    pub calorie_target: i32,
    /// Logged calories relative to the target
    pub calorie_progress: GoalProgress,
    /// Macro targets for the calorie target
    pub macro_targets: MacroTargets,
    /// Recommended water intake for the profile's target weight
    pub water_target: WaterTarget,
    /// Weight and steps shown for the day
    pub display: DisplayMetrics,
    /// Displayed steps relative to the profile's step goal
    pub step_progress: GoalProgress,
    /// BMI from the most recent weight (or target weight)
    pub bmi: f64,
    /// BMI classification, `None` when the BMI could not be computed
    pub bmi_category: Option<BmiCategory>,
    /// Weight change over the recent history
    pub weight_trend: WeightTrend,
}

impl DailySummary {
    /// Derive the summary from profile, records and diary
    #[must_use]
    pub fn build(
        engine: &HealthMetricsEngine,
        profile: &UserProfile,
        records: &[DailyHealthRecord],
        nutrition: &[NutritionEntry],
        date: NaiveDate,
        today: NaiveDate,
        live_steps: u32,
    ) -> Self {
        let latest_weight = most_recent_weight(records);
        let weight_kg = latest_weight.unwrap_or(profile.target_weight_kg);

        let totals = aggregate_nutrition_for_day(nutrition, date);
        let calorie_target = engine.calculate_daily_calorie_target(profile, latest_weight);
        let display = select_display_metrics(records, date, today, live_steps);
        let bmi = HealthMetricsEngine::calculate_bmi(weight_kg, profile.height_cm);

        Self {
            date,
            nutrition: totals,
            calorie_target,
            calorie_progress: calorie_progress(totals.calories, calorie_target),
            macro_targets: engine.calculate_macro_targets(calorie_target),
            water_target: engine.calculate_water_target(
                profile.target_weight_kg,
                profile.sex,
                profile.activity_level,
            ),
            display,
            step_progress: step_goal_progress(display.steps, profile.daily_step_goal),
            bmi,
            bmi_category: (bmi > 0.0).then(|| BmiCategory::from_bmi(bmi)),
            weight_trend: weight_trend(records, profile.target_weight_kg),
        }
    }
}
