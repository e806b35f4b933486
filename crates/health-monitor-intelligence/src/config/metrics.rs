// ABOUTME: Formula constants for the health metrics engine
// ABOUTME: Harris-Benedict coefficients, activity and hydration scales, goal factors, macro presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Metrics Configuration
//!
//! The calorie activity factors and the hydration activity factors are two
//! independent scales. They share a key (`ActivityLevel`) but not their values.

use super::error::ConfigError;
use health_monitor_core::constants::nutrition::GLASS_VOLUME_ML;
use health_monitor_core::models::{ActivityLevel, Sex, WeightGoal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health metrics engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Basal Metabolic Rate coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers applied to BMR
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie factor per weight goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Water intake recommendation settings
    pub hydration: HydrationConfig,
    /// Macro split used for daily macro targets
    pub macro_preset: MacroPreset,
}

impl MetricsConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a multiplier is not positive or a macro split
    /// does not sum to 100%.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.goal_adjustments.validate()?;
        self.hydration.validate()?;
        for preset in MacroPreset::ALL {
            preset.split().validate(preset.as_str())?;
        }
        Ok(())
    }
}

/// Harris-Benedict equation coefficients
///
/// male:   `88.362 + 13.397 x weight + 4.799 x height - 5.677 x age`
/// female: `447.593 + 9.247 x weight + 3.098 x height - 4.330 x age`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male constant term
    pub male_constant: f64,
    /// Male weight coefficient (per kg)
    pub male_weight_coef: f64,
    /// Male height coefficient (per cm)
    pub male_height_coef: f64,
    /// Male age coefficient (per year, subtracted)
    pub male_age_coef: f64,
    /// Female constant term
    pub female_constant: f64,
    /// Female weight coefficient (per kg)
    pub female_weight_coef: f64,
    /// Female height coefficient (per cm)
    pub female_height_coef: f64,
    /// Female age coefficient (per year, subtracted)
    pub female_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

/// Activity factor multipliers for the daily calorie target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
    /// Unrecognized level: 1.5
    pub fallback: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
            fallback: 1.5,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::Unknown => self.fallback,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
            self.fallback,
        ];
        if factors.iter().any(|f| *f <= 0.0) {
            return Err(ConfigError::InvalidRange(
                "activity factors must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Calorie target factor per weight goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weight loss: 0.85 (15% deficit)
    pub lose: f64,
    /// Maintenance: 1.0
    pub maintain: f64,
    /// Weight gain: 1.15 (15% surplus)
    pub gain: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose: 0.85,
            maintain: 1.0,
            gain: 1.15,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Factor applied to the activity-adjusted BMR
    #[must_use]
    pub const fn factor(&self, goal: WeightGoal) -> f64 {
        match goal {
            WeightGoal::Lose => self.lose,
            WeightGoal::Maintain => self.maintain,
            WeightGoal::Gain => self.gain,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lose <= 0.0 || self.maintain <= 0.0 || self.gain <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "goal adjustment factors must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Water intake recommendation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Base intake for men (mL per kg)
    pub male_ml_per_kg: f64,
    /// Base intake for women (mL per kg)
    pub female_ml_per_kg: f64,
    /// Base intake when sex is not recorded (mL per kg)
    pub unspecified_ml_per_kg: f64,
    /// Sedentary multiplier: 1.0
    pub sedentary: f64,
    /// Light multiplier: 1.2
    pub light: f64,
    /// Moderate multiplier: 1.4
    pub moderate: f64,
    /// Active multiplier: 1.6
    pub active: f64,
    /// Very active multiplier: 1.8
    pub very_active: f64,
    /// Unrecognized level multiplier: 1.0
    pub fallback: f64,
    /// Volume of one glass (mL)
    pub glass_volume_ml: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            male_ml_per_kg: 35.0,
            female_ml_per_kg: 31.0,
            unspecified_ml_per_kg: 33.0,
            sedentary: 1.0,
            light: 1.2,
            moderate: 1.4,
            active: 1.6,
            very_active: 1.8,
            fallback: 1.0,
            glass_volume_ml: GLASS_VOLUME_ML,
        }
    }
}

impl HydrationConfig {
    /// Base intake per kilogram of body weight
    #[must_use]
    pub const fn ml_per_kg(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male_ml_per_kg,
            Sex::Female => self.female_ml_per_kg,
            Sex::Unspecified => self.unspecified_ml_per_kg,
        }
    }

    /// Hydration multiplier for an activity level
    #[must_use]
    pub const fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::Unknown => self.fallback,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.glass_volume_ml <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "glass volume must be positive".to_owned(),
            ));
        }
        let multipliers = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
            self.fallback,
        ];
        if multipliers.iter().any(|m| *m <= 0.0) {
            return Err(ConfigError::InvalidRange(
                "hydration multipliers must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Share of daily calories per macronutrient, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroSplit {
    /// Create a new macro split
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let sum = u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct);
        if sum != 100 {
            return Err(ConfigError::InvalidWeights(format!(
                "{name} macro percentages must sum to 100, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Named macro split presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroPreset {
    /// 30% protein, 50% carbs, 20% fat
    #[default]
    Balanced,
    /// 30% protein, 40% carbs, 30% fat
    Classic,
}

impl MacroPreset {
    /// Every preset
    pub const ALL: [Self; 2] = [Self::Balanced, Self::Classic];

    /// Percentages of this preset
    #[must_use]
    pub const fn split(&self) -> MacroSplit {
        match self {
            Self::Balanced => MacroSplit::new(30, 50, 20),
            Self::Classic => MacroSplit::new(30, 40, 30),
        }
    }

    /// Configuration string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Classic => "classic",
        }
    }

    /// Parse a preset name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for unknown names
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "balanced" | "30-50-20" => Ok(Self::Balanced),
            "classic" | "40-30-30" => Ok(Self::Classic),
            other => Err(ConfigError::Parse(format!("unknown macro preset '{other}'"))),
        }
    }
}

impl fmt::Display for MacroPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MetricsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_scales_are_independent() {
        let config = MetricsConfig::default();
        assert!(
            (config.activity_factors.multiplier(ActivityLevel::Moderate) - 1.55).abs()
                < f64::EPSILON
        );
        assert!((config.hydration.multiplier(ActivityLevel::Moderate) - 1.4).abs() < f64::EPSILON);
        assert!(
            (config.activity_factors.multiplier(ActivityLevel::Unknown) - 1.5).abs()
                < f64::EPSILON
        );
        assert!((config.hydration.multiplier(ActivityLevel::Unknown) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!(MacroPreset::parse("Classic").unwrap(), MacroPreset::Classic);
        assert_eq!(MacroPreset::parse("30-50-20").unwrap(), MacroPreset::Balanced);
        assert!(MacroPreset::parse("keto").is_err());
    }

    #[test]
    fn test_invalid_multiplier_rejected() {
        let mut config = MetricsConfig::default();
        config.activity_factors.light = 0.0;
        assert!(config.validate().is_err());
    }
}
