// ABOUTME: Nutrition diary and food catalog models
// ABOUTME: NutritionEntry, MealType, FoodReference, FoodCategory and per-100g nutrient scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::REFERENCE_PORTION_GRAMS;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    #[default]
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal types in diary order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse meal type from string, unknown values become snacks
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Food catalog category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Meat, fish and eggs
    Meat,
    /// Milk products
    Dairy,
    /// Vegetables
    Vegetables,
    /// Fruits and berries
    Fruits,
    /// Grains, bread and pasta
    Grains,
    /// Anything else, including most custom foods
    #[default]
    Other,
}

impl FoodCategory {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Dairy => "dairy",
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Grains => "grains",
            Self::Other => "other",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "meat" => Self::Meat,
            "dairy" => Self::Dairy,
            "vegetables" => Self::Vegetables,
            "fruits" => Self::Fruits,
            "grains" => Self::Grains,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrient values of a food per 100 g
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientsPer100g {
    /// Energy (kcal)
    pub calories: i32,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
}

impl NutrientsPer100g {
    /// Scale the reference values to a portion
    ///
    /// Calories are truncated to a whole number, macros keep their fraction.
    #[must_use]
    pub fn scaled_to(&self, portion_grams: f64) -> Self {
        let factor = portion_grams / REFERENCE_PORTION_GRAMS;
        Self {
            calories: (f64::from(self.calories) * factor) as i32,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }
}

/// Catalog entry describing a food per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodReference {
    /// Unique identifier
    pub id: String,
    /// Food name
    pub name: String,
    /// Catalog category
    pub category: FoodCategory,
    /// Nutrients per 100 g
    pub per_100g: NutrientsPer100g,
}

impl FoodReference {
    /// New catalog entry with a fresh identifier
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: FoodCategory,
        per_100g: NutrientsPer100g,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category,
            per_100g,
        }
    }
}

/// One logged portion of food in the diary
///
/// Entries are never edited in place; an edit is a delete followed by a new entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    /// Unique identifier
    pub id: String,
    /// Owner of the entry
    pub user_id: String,
    /// Day bucket
    pub date: NaiveDate,
    /// Meal the portion belongs to
    pub meal_type: MealType,
    /// Name of the food at logging time
    pub food_name: String,
    /// Portion size (g)
    pub portion_grams: f64,
    /// Energy of the portion (kcal, truncated)
    pub calories: i32,
    /// Protein of the portion (g)
    pub protein_g: f64,
    /// Carbohydrates of the portion (g)
    pub carbs_g: f64,
    /// Fat of the portion (g)
    pub fat_g: f64,
    /// Fiber of the portion (g)
    pub fiber_g: f64,
    /// Insertion time
    pub created_at: DateTime<Utc>,
}

impl NutritionEntry {
    /// Diary entry for a portion of a catalog food
    #[must_use]
    pub fn from_food(
        user_id: impl Into<String>,
        food: &FoodReference,
        portion_grams: f64,
        meal_type: MealType,
        date: NaiveDate,
    ) -> Self {
        let scaled = food.per_100g.scaled_to(portion_grams);
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            date,
            meal_type,
            food_name: food.name.clone(),
            portion_grams,
            calories: scaled.calories,
            protein_g: scaled.protein_g,
            carbs_g: scaled.carbs_g,
            fat_g: scaled.fat_g,
            fiber_g: scaled.fiber_g,
            created_at: Utc::now(),
        }
    }
}
