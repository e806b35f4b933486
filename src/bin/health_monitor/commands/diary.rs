// ABOUTME: Food diary commands for health-monitor
// ABOUTME: Log a portion of a catalog food, list a day's entries, delete an entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use health_monitor::{
    errors::{AppError, AppResult},
    models::{FoodReference, MealType},
    state::HealthState,
};
use health_monitor_core::input;

use crate::helpers::{display::display_diary, today};

/// Log a portion of a catalog food
pub async fn add(
    state: &HealthState,
    food: &str,
    portion: &str,
    meal: &str,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let date = date.unwrap_or_else(today);
    let food = resolve_food(state, food)
        .await
        .ok_or_else(|| AppError::not_found(format!("Food '{food}'")))?;

    let portion_grams = input::portion_grams(portion);
    let meal_type = MealType::from_str_lossy(meal);

    if !state
        .add_food_portion(&food, portion_grams, meal_type, date)
        .await
    {
        return Err(AppError::storage(format!("Failed to log {}", food.name)));
    }

    println!("Logged {portion_grams} g of {} for {meal_type}.", food.name);
    display_diary(date, &state.nutrition_for_date(date));
    Ok(())
}

/// List a day's diary
pub fn list(state: &HealthState, date: Option<NaiveDate>) {
    let date = date.unwrap_or_else(today);
    display_diary(date, &state.nutrition_for_date(date));
}

/// Delete a diary entry
pub async fn delete(state: &HealthState, entry_id: &str) -> AppResult<()> {
    if !state.delete_nutrition(entry_id).await {
        return Err(AppError::not_found(format!("Diary entry {entry_id}")));
    }
    println!("Deleted diary entry {entry_id}.");
    Ok(())
}

/// Find a food by id, then by exact name, then by name substring
async fn resolve_food(state: &HealthState, key: &str) -> Option<FoodReference> {
    let key = key.trim();
    let foods = state.foods();

    if let Some(food) = foods
        .iter()
        .find(|f| f.id == key || f.name.eq_ignore_ascii_case(key))
    {
        return Some(food.clone());
    }

    state.search_foods(key).await.into_iter().next()
}
