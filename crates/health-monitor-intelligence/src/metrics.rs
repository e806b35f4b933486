// ABOUTME: Body composition and daily intake formulas for the health metrics engine
// ABOUTME: Computes BMI, Harris-Benedict BMR, calorie target, macro targets, and water target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Health metrics calculation
#![allow(clippy::cast_possible_truncation)] // Calorie targets are truncated toward zero

use crate::config::{MacroPreset, MetricsConfig};
use health_monitor_core::constants::nutrition::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use health_monitor_core::models::{ActivityLevel, Sex, UserProfile, WeightGoal};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// BMI category thresholds (lower bound inclusive)
const BMI_NORMAL_LOWER: f64 = 18.5;
const BMI_OVERWEIGHT_LOWER: f64 = 25.0;
const BMI_OBESE_LOWER: f64 = 30.0;

/// Coarse BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_LOWER {
            Self::Underweight
        } else if bmi < BMI_OVERWEIGHT_LOWER {
            Self::Normal
        } else if bmi < BMI_OBESE_LOWER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
}

impl MacroTargets {
    /// Energy represented by the targets (kcal)
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        self.protein_g.mul_add(
            KCAL_PER_GRAM_PROTEIN,
            self.fat_g
                .mul_add(KCAL_PER_GRAM_FAT, self.carbs_g * KCAL_PER_GRAM_CARBS),
        )
    }
}

/// Recommended daily water intake
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterTarget {
    /// Volume (liters)
    pub liters: f64,
    /// Volume expressed as a rounded number of glasses
    pub glasses: u32,
}

/// Health metrics engine
///
/// Every operation is a pure function of its inputs and the engine
/// configuration. Degenerate inputs (zero height, zero weight) produce 0
/// instead of an error.
#[derive(Debug, Clone, Default)]
pub struct HealthMetricsEngine {
    config: MetricsConfig,
}

impl HealthMetricsEngine {
    /// Create an engine with custom configuration
    #[must_use]
    pub const fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Body Mass Index: `weight / (height_m)^2`
    ///
    /// Returns 0 when the height is not positive.
    #[must_use]
    pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
        if height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = height_cm / 100.0;
        weight_kg / (height_m * height_m)
    }

    /// Basal Metabolic Rate (kcal/day) using the Harris-Benedict equation
    ///
    /// The result is not clamped: nonsensical inputs may yield a negative value.
    #[must_use]
    pub fn calculate_bmr(&self, age_years: u32, weight_kg: f64, height_cm: f64, sex: Sex) -> f64 {
        let bmr = &self.config.bmr;
        let age = f64::from(age_years);
        if sex.is_male() {
            bmr.male_age_coef.mul_add(
                -age,
                bmr.male_height_coef
                    .mul_add(height_cm, bmr.male_weight_coef.mul_add(weight_kg, bmr.male_constant)),
            )
        } else {
            bmr.female_age_coef.mul_add(
                -age,
                bmr.female_height_coef.mul_add(
                    height_cm,
                    bmr.female_weight_coef.mul_add(weight_kg, bmr.female_constant),
                ),
            )
        }
    }

    /// Calorie activity multiplier for a level (1.5 for unrecognized levels)
    #[must_use]
    pub const fn activity_multiplier(&self, level: ActivityLevel) -> f64 {
        self.config.activity_factors.multiplier(level)
    }

    /// Daily calorie target (kcal), truncated toward zero
    ///
    /// Uses `most_recent_weight` when it is a positive value, otherwise the
    /// profile's target weight.
    #[must_use]
    pub fn calculate_daily_calorie_target(
        &self,
        profile: &UserProfile,
        most_recent_weight: Option<f64>,
    ) -> i32 {
        let weight = most_recent_weight
            .filter(|w| *w > 0.0)
            .unwrap_or(profile.target_weight_kg);

        let bmr = self.calculate_bmr(profile.age_years, weight, profile.height_cm, profile.sex);
        let maintenance = bmr * self.activity_multiplier(profile.activity_level);
        let target = maintenance * self.goal_factor(profile.weight_goal);

        debug!(
            user_id = %profile.id,
            weight_kg = weight,
            bmr,
            target,
            "Calculated daily calorie target"
        );

        target as i32
    }

    /// Factor applied to maintenance calories for a weight goal
    #[must_use]
    pub const fn goal_factor(&self, goal: WeightGoal) -> f64 {
        self.config.goal_adjustments.factor(goal)
    }

    /// Macro targets for the configured preset
    #[must_use]
    pub fn calculate_macro_targets(&self, daily_calories: i32) -> MacroTargets {
        Self::calculate_macro_targets_for(daily_calories, self.config.macro_preset)
    }

    /// Macro targets for an explicit preset
    ///
    /// `protein_g * 4 + fat_g * 9 + carbs_g * 4` equals `daily_calories`
    /// up to floating point error.
    #[must_use]
    pub fn calculate_macro_targets_for(daily_calories: i32, preset: MacroPreset) -> MacroTargets {
        let calories = f64::from(daily_calories);
        let split = preset.split();
        MacroTargets {
            protein_g: calories * f64::from(split.protein_pct) / 100.0 / KCAL_PER_GRAM_PROTEIN,
            fat_g: calories * f64::from(split.fat_pct) / 100.0 / KCAL_PER_GRAM_FAT,
            carbs_g: calories * f64::from(split.carbs_pct) / 100.0 / KCAL_PER_GRAM_CARBS,
        }
    }

    /// Recommended daily water intake
    ///
    /// `liters = ml_per_kg(sex) * weight * hydration_multiplier(level) / 1000`
    #[must_use]
    pub fn calculate_water_target(
        &self,
        weight_kg: f64,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> WaterTarget {
        let hydration = &self.config.hydration;
        if weight_kg <= 0.0 {
            return WaterTarget::default();
        }

        let base_ml = hydration.ml_per_kg(sex) * weight_kg;
        let liters = base_ml * hydration.multiplier(activity_level) / 1000.0;
        let glasses = (liters * 1000.0 / hydration.glass_volume_ml).round();

        WaterTarget {
            liters,
            glasses: glasses.max(0.0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetricsConfig;

    fn engine() -> HealthMetricsEngine {
        HealthMetricsEngine::default()
    }

    fn profile(goal: WeightGoal) -> UserProfile {
        UserProfile {
            weight_goal: goal,
            ..UserProfile::default_profile()
        }
    }

    #[test]
    fn test_bmi_reference_value() {
        let bmi = HealthMetricsEngine::calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.857).abs() < 0.01, "bmi was {bmi}");
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_degenerate_height_is_zero() {
        assert!(HealthMetricsEngine::calculate_bmi(70.0, 0.0).abs() < f64::EPSILON);
        assert!(HealthMetricsEngine::calculate_bmi(70.0, -10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_monotonicity() {
        let base = HealthMetricsEngine::calculate_bmi(70.0, 175.0);
        assert!(HealthMetricsEngine::calculate_bmi(71.0, 175.0) > base);
        assert!(HealthMetricsEngine::calculate_bmi(70.0, 176.0) < base);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmr_male_reference_value() {
        let bmr = engine().calculate_bmr(30, 75.0, 180.0, Sex::Male);
        // 88.362 + 13.397 * 75 + 4.799 * 180 - 5.677 * 30
        assert!((bmr - 1786.647).abs() < 0.01, "bmr was {bmr}");
    }

    #[test]
    fn test_bmr_female() {
        let bmr = engine().calculate_bmr(30, 60.0, 165.0, Sex::Female);
        // 447.593 + 554.82 + 511.17 - 129.9
        assert!((bmr - 1383.683).abs() < 0.01, "bmr was {bmr}");
    }

    #[test]
    fn test_bmr_is_not_clamped() {
        let bmr = engine().calculate_bmr(200, 1.0, 1.0, Sex::Male);
        assert!(bmr < 0.0);
    }

    #[test]
    fn test_activity_multipliers() {
        let engine = engine();
        let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
        for (level, factor) in ActivityLevel::ALL.into_iter().zip(expected) {
            assert!((engine.activity_multiplier(level) - factor).abs() < f64::EPSILON);
        }
        assert!((engine.activity_multiplier(ActivityLevel::Unknown) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_adjustments() {
        let engine = engine();
        let maintain = engine.calculate_daily_calorie_target(&profile(WeightGoal::Maintain), None);
        let lose = engine.calculate_daily_calorie_target(&profile(WeightGoal::Lose), None);
        let gain = engine.calculate_daily_calorie_target(&profile(WeightGoal::Gain), None);

        // 1786.647 * 1.55 = 2769.3
        assert_eq!(maintain, 2769);
        assert!((f64::from(lose) - f64::from(maintain) * 0.85).abs() <= 1.0);
        assert!((f64::from(gain) - f64::from(maintain) * 1.15).abs() <= 1.0);
    }

    #[test]
    fn test_calorie_target_prefers_recent_weight() {
        let engine = engine();
        let base = engine.calculate_daily_calorie_target(&profile(WeightGoal::Maintain), None);
        let heavier =
            engine.calculate_daily_calorie_target(&profile(WeightGoal::Maintain), Some(85.0));
        let zero = engine.calculate_daily_calorie_target(&profile(WeightGoal::Maintain), Some(0.0));

        assert!(heavier > base);
        assert_eq!(zero, base);
    }

    #[test]
    fn test_macro_targets_sum_to_calories() {
        for preset in MacroPreset::ALL {
            let targets = HealthMetricsEngine::calculate_macro_targets_for(2000, preset);
            assert!(
                (targets.total_kcal() - 2000.0).abs() < 1e-6,
                "{preset} summed to {}",
                targets.total_kcal()
            );
        }
    }

    #[test]
    fn test_balanced_macro_split() {
        let targets = engine().calculate_macro_targets(2000);
        assert!((targets.protein_g - 150.0).abs() < 1e-9);
        assert!((targets.carbs_g - 250.0).abs() < 1e-9);
        assert!((targets.fat_g - 2000.0 * 0.2 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_classic_preset_is_selectable() {
        let config = MetricsConfig {
            macro_preset: MacroPreset::Classic,
            ..MetricsConfig::default()
        };
        let targets = HealthMetricsEngine::new(config).calculate_macro_targets(2000);
        assert!((targets.carbs_g - 200.0).abs() < 1e-9);
        assert!((targets.fat_g - 2000.0 * 0.3 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_water_target() {
        let target = engine().calculate_water_target(75.0, Sex::Male, ActivityLevel::Moderate);
        // 35 * 75 * 1.4 = 3675 mL
        assert!((target.liters - 3.675).abs() < 1e-9);
        assert_eq!(target.glasses, 15);

        let female = engine().calculate_water_target(60.0, Sex::Female, ActivityLevel::Sedentary);
        assert!((female.liters - 1.86).abs() < 1e-9);
        assert_eq!(female.glasses, 7);
    }

    #[test]
    fn test_water_target_unspecified_sex_and_unknown_level() {
        let target =
            engine().calculate_water_target(100.0, Sex::Unspecified, ActivityLevel::Unknown);
        assert!((target.liters - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_water_target_zero_weight() {
        let target = engine().calculate_water_target(0.0, Sex::Male, ActivityLevel::Active);
        assert_eq!(target, WaterTarget::default());
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(engine().config()).unwrap();
        assert!(json.contains("\"macro_preset\":\"balanced\""));
    }
}
