// ABOUTME: Built-in food catalog seeded into empty or sparse stores
// ABOUTME: Common foods with nutrient values per 100 g across every catalog category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default Food Catalog
//!
//! The catalog is seeded at startup when it holds fewer than
//! `MIN_FOOD_CATALOG_SIZE` foods. Seeding only inserts names that are not
//! already present, so custom foods and earlier seeds survive a reseed.
//!
//! # Foods
//!
//! - **Meat**: chicken breast, lean beef, salmon, egg
//! - **Dairy**: milk, yogurt, hard cheese, cottage cheese
//! - **Vegetables**: broccoli, carrot, tomato, cucumber, lettuce, potato
//! - **Fruits**: banana, apple, orange, mixed berries
//! - **Grains**: rice, buckwheat, oatmeal, wheat bread, pasta

use crate::models::{FoodCategory, FoodReference, NutrientsPer100g};

/// Seed row: name, category and nutrients per 100 g
#[derive(Debug, Clone, Copy)]
pub struct SeedFood {
    /// Food name
    pub name: &'static str,
    /// Catalog category
    pub category: FoodCategory,
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

const fn food(
    name: &'static str,
    category: FoodCategory,
    calories: i32,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
) -> SeedFood {
    SeedFood {
        name,
        category,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
    }
}

/// Built-in catalog
pub const DEFAULT_FOODS: [SeedFood; 23] = [
    food("Chicken breast", FoodCategory::Meat, 165, 31.0, 0.0, 3.6, 0.0),
    food("Beef (lean)", FoodCategory::Meat, 250, 26.0, 0.0, 17.0, 0.0),
    food("Salmon", FoodCategory::Meat, 208, 20.0, 0.0, 13.0, 0.0),
    food("Egg", FoodCategory::Meat, 155, 13.0, 1.1, 11.0, 0.0),
    food("Milk (2.5%)", FoodCategory::Dairy, 54, 3.3, 4.8, 2.5, 0.0),
    food("Yogurt (plain)", FoodCategory::Dairy, 59, 3.5, 3.3, 0.4, 0.0),
    food("Hard cheese", FoodCategory::Dairy, 402, 25.0, 1.3, 33.0, 0.0),
    food("Cottage cheese (5%)", FoodCategory::Dairy, 121, 17.0, 3.3, 5.0, 0.0),
    food("Broccoli", FoodCategory::Vegetables, 34, 2.8, 7.0, 0.4, 2.4),
    food("Carrot", FoodCategory::Vegetables, 41, 0.9, 10.0, 0.2, 2.8),
    food("Tomato", FoodCategory::Vegetables, 18, 0.9, 3.9, 0.2, 1.2),
    food("Cucumber", FoodCategory::Vegetables, 16, 0.7, 3.6, 0.1, 0.5),
    food("Lettuce", FoodCategory::Vegetables, 15, 1.5, 2.9, 0.2, 1.3),
    food("Potato (boiled)", FoodCategory::Vegetables, 77, 2.0, 17.0, 0.1, 2.1),
    food("Banana", FoodCategory::Fruits, 89, 1.1, 23.0, 0.3, 2.6),
    food("Apple", FoodCategory::Fruits, 52, 0.3, 14.0, 0.2, 2.4),
    food("Orange", FoodCategory::Fruits, 47, 0.9, 12.0, 0.1, 2.4),
    food("Mixed berries", FoodCategory::Fruits, 52, 1.0, 12.0, 0.3, 1.7),
    food("Rice (boiled)", FoodCategory::Grains, 130, 2.7, 28.0, 0.3, 0.4),
    food("Buckwheat (boiled)", FoodCategory::Grains, 123, 4.3, 25.0, 1.1, 2.7),
    food("Oatmeal", FoodCategory::Grains, 68, 2.4, 12.0, 1.4, 1.6),
    food("Wheat bread", FoodCategory::Grains, 265, 8.4, 49.0, 3.3, 2.7),
    food("Pasta (boiled)", FoodCategory::Grains, 131, 4.4, 25.0, 1.1, 1.8),
];

impl SeedFood {
    /// Catalog entry with a fresh identifier
    #[must_use]
    pub fn to_reference(&self) -> FoodReference {
        FoodReference::new(
            self.name,
            self.category,
            NutrientsPer100g {
                calories: self.calories,
                protein_g: self.protein_g,
                carbs_g: self.carbs_g,
                fat_g: self.fat_g,
                fiber_g: self.fiber_g,
            },
        )
    }
}

/// The built-in catalog as food references
#[must_use]
pub fn default_food_catalog() -> Vec<FoodReference> {
    DEFAULT_FOODS.iter().map(SeedFood::to_reference).collect()
}
