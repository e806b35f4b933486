// ABOUTME: Food catalog commands for health-monitor
// ABOUTME: List by category, search by name, and add custom foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_monitor::{
    errors::{AppError, AppResult},
    models::{FoodCategory, FoodReference, NutrientsPer100g},
    state::HealthState,
};
use health_monitor_core::input;
use std::slice;

use crate::helpers::display::display_foods;

/// Raw custom food fields as typed on the command line
pub struct FoodInput {
    pub name: String,
    pub category: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

/// List the catalog, optionally one category only
pub async fn list(state: &HealthState, category: Option<&str>) {
    let foods = match category {
        Some(raw) => state.foods_by_category(FoodCategory::parse(raw)).await,
        None => state.foods(),
    };
    display_foods(&foods);
}

/// Search foods by name
pub async fn search(state: &HealthState, query: &str) {
    let foods = state.search_foods(query).await;
    if foods.is_empty() {
        println!("No food matches '{query}'.");
    } else {
        display_foods(&foods);
    }
}

/// Add a custom food
pub async fn add(state: &HealthState, food: &FoodInput) -> AppResult<()> {
    let name = food.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Food name cannot be empty"));
    }

    let reference = FoodReference::new(
        name,
        FoodCategory::parse(&food.category),
        NutrientsPer100g {
            calories: input::food_calories(&food.calories),
            protein_g: input::food_macro_grams(&food.protein),
            carbs_g: input::food_macro_grams(&food.carbs),
            fat_g: input::food_macro_grams(&food.fat),
            fiber_g: input::food_macro_grams(&food.fiber),
        },
    );

    if !state.add_food(&reference).await {
        return Err(AppError::storage(format!("Failed to add food '{name}'")));
    }

    println!("Added food {} ({}).", reference.name, reference.id);
    display_foods(slice::from_ref(&reference));
    Ok(())
}
