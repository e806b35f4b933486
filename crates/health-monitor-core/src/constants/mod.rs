// ABOUTME: Application constants organized by domain for the Health Monitor workspace
// ABOUTME: Default profile values, input fallbacks, nutrition units, and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by the storage, engine and CLI layers.

/// Service identification for structured logging
pub mod service_names {
    /// Service name used in log records and the CLI banner
    pub const HEALTH_MONITOR: &str = "health-monitor";
}

/// Values of the profile synthesized on first launch
pub mod default_profile {
    /// Identifier of the single local user
    pub const USER_ID: &str = "user_1";
    /// Display name
    pub const NAME: &str = "Ivan";
    /// Biological sex (database representation)
    pub const SEX: &str = "male";
    /// Age in years
    pub const AGE_YEARS: u32 = 30;
    /// Height in centimeters
    pub const HEIGHT_CM: f64 = 180.0;
    /// Reference weight in kilograms
    pub const TARGET_WEIGHT_KG: f64 = 75.0;
    /// Activity level (database representation)
    pub const ACTIVITY_LEVEL: &str = "moderate";
    /// Weight goal (database representation)
    pub const WEIGHT_GOAL: &str = "maintain";
    /// Daily step goal
    pub const DAILY_STEP_GOAL: u32 = 10_000;
}

/// Fallbacks applied when a typed numeric field cannot be parsed
pub mod input_defaults {
    /// Weight used when the weight field is empty or malformed
    pub const WEIGHT_KG: f64 = 70.0;
    /// Heart rate used when the heart rate field is empty or malformed
    pub const HEART_RATE_BPM: u32 = 70;
    /// Portion used when the portion field is empty or malformed
    pub const PORTION_GRAMS: f64 = 100.0;
    /// Calories per 100 g used when a custom food's calorie field is malformed
    pub const FOOD_CALORIES_PER_100G: i32 = 100;
    /// Macro grams used when a custom food's macro field is malformed
    pub const FOOD_MACRO_GRAMS: f64 = 0.0;
}

/// Nutrition unit conversions
pub mod nutrition {
    /// Energy per gram of protein (kcal)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy per gram of carbohydrate (kcal)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Energy per gram of fat (kcal)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Nutrient values in the food catalog are expressed per this many grams
    pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;
    /// Volume of one drinking glass (mL)
    pub const GLASS_VOLUME_ML: f64 = 250.0;
    /// Catalog is reseeded when it holds fewer entries than this
    pub const MIN_FOOD_CATALOG_SIZE: i64 = 15;
}

/// Weight history presentation
pub mod weight_history {
    /// Number of entries back used as the comparison point of the weight trend
    pub const TREND_LOOKBACK_ENTRIES: usize = 7;
}

/// Durable step-counter state keys
pub mod step_state_keys {
    /// Cumulative sensor value captured at the first reading of the current day
    pub const BASELINE: &str = "baseline";
    /// Calendar day for which the baseline is valid
    pub const LAST_KNOWN_DATE: &str = "last_known_date";
    /// Last cumulative value received from the sensor
    pub const LAST_TOTAL: &str = "last_total";
    /// Prefix of archived per-day totals (`day_total:YYYY-MM-DD`)
    pub const DAY_TOTAL_PREFIX: &str = "day_total:";
}

/// Calendar-day key format used for storage and durable state
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
