// ABOUTME: Core data models for the Health Monitor tracker
// ABOUTME: Re-exports profile, daily health record, nutrition entry and food reference types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All entities belong to a single local user-scoped store. Daily records are
//! keyed by a calendar day ([`chrono::NaiveDate`]), the day bucket used as the
//! equality key for grouping.
//!
//! ## Core Models
//!
//! - `UserProfile`: body attributes and goals of the tracked user
//! - `DailyHealthRecord`: one day of body metrics (0 = not recorded)
//! - `NutritionEntry`: one logged portion of food in the diary
//! - `FoodReference`: catalog entry with nutrients per 100 g

mod health;
mod nutrition;
mod profile;

// Profile domain
pub use profile::{ActivityLevel, Sex, UserProfile, WeightGoal};

// Health domain
pub use health::{DailyHealthRecord, HealthRecordPatch};

// Nutrition domain
pub use nutrition::{FoodCategory, FoodReference, MealType, NutrientsPer100g, NutritionEntry};
