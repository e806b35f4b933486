// ABOUTME: User profile model with body attributes, activity level, and goals
// ABOUTME: Sex, ActivityLevel, WeightGoal enums with database string representations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::default_profile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex category used by the BMR and hydration formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male formulas
    #[default]
    Male,
    /// Female formulas
    Female,
    /// Not recorded; hydration falls back to the neutral base intake
    Unspecified,
}

impl Sex {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Unspecified,
        }
    }

    /// Whether the male variant of sex-specific formulas applies
    #[must_use]
    pub const fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light workouts 1-2 times a week
    Light,
    /// Moderate workouts 3-4 times a week
    #[default]
    Moderate,
    /// Active workouts 5+ times a week
    Active,
    /// Daily intense training
    VeryActive,
    /// Unrecognized stored value; lookups use their fallback constant
    Unknown,
}

impl ActivityLevel {
    /// All recognized levels, in increasing order of activity
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" | "very-active" => Self::VeryActive,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description of the level
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary lifestyle",
            Self::Light => "Light workouts 1-2 times a week",
            Self::Moderate => "Moderate workouts 3-4 times a week",
            Self::Active => "Active workouts 5+ times a week",
            Self::VeryActive => "Daily intense training",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body weight goal driving the calorie target adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

impl WeightGoal {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            // Unknown goals leave the calorie target unchanged
            _ => Self::Maintain,
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile of the tracked user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Biological sex category
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Target/reference weight in kilograms
    pub target_weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub weight_goal: WeightGoal,
    /// Daily step goal
    pub daily_step_goal: u32,
}

impl UserProfile {
    /// Profile synthesized at first launch when the store holds none
    #[must_use]
    pub fn default_profile() -> Self {
        Self {
            id: default_profile::USER_ID.to_owned(),
            name: default_profile::NAME.to_owned(),
            sex: Sex::parse(default_profile::SEX),
            age_years: default_profile::AGE_YEARS,
            height_cm: default_profile::HEIGHT_CM,
            target_weight_kg: default_profile::TARGET_WEIGHT_KG,
            activity_level: ActivityLevel::parse(default_profile::ACTIVITY_LEVEL),
            weight_goal: WeightGoal::parse(default_profile::WEIGHT_GOAL),
            daily_step_goal: default_profile::DAILY_STEP_GOAL,
        }
    }

    /// Default profile bound to a specific user id
    #[must_use]
    pub fn default_for(user_id: &str) -> Self {
        Self {
            id: user_id.to_owned(),
            ..Self::default_profile()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_round_trips_through_storage_strings() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::parse(level.as_str()), level);
        }
        assert_eq!(ActivityLevel::parse("couch"), ActivityLevel::Unknown);
    }

    #[test]
    fn test_unknown_goal_maps_to_maintain() {
        assert_eq!(WeightGoal::parse("bulk"), WeightGoal::Maintain);
        assert_eq!(WeightGoal::parse("LOSE"), WeightGoal::Lose);
    }

    #[test]
    fn test_default_profile_values() {
        let profile = UserProfile::default_profile();
        assert_eq!(profile.id, "user_1");
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.daily_step_goal, 10_000);
    }
}
