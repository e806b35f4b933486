// ABOUTME: Food diary storage for logged portions
// ABOUTME: Insert, list by user or day, delete, and per-day calorie totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{day_key, parse_day, parse_timestamp};
use crate::errors::{AppError, AppResult};
use crate::models::{MealType, NutritionEntry};
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Food diary database operations
pub struct NutritionManager {
    pool: SqlitePool,
}

impl NutritionManager {
    /// Create a new diary manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the diary table
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                meal_type TEXT NOT NULL,
                food_name TEXT NOT NULL,
                portion_grams REAL NOT NULL,
                calories INTEGER NOT NULL,
                protein_g REAL NOT NULL,
                carbs_g REAL NOT NULL,
                fat_g REAL NOT NULL,
                fiber_g REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create nutrition_entries table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_entries_user_date ON nutrition_entries(user_id, date)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create diary index: {e}")))?;

        Ok(())
    }

    /// Add an entry to the diary
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert(&self, entry: &NutritionEntry) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO nutrition_entries (
                id, user_id, date, meal_type, food_name, portion_grams,
                calories, protein_g, carbs_g, fat_g, fiber_g, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(&entry.id)
        .bind(&entry.user_id)
        .bind(day_key(entry.date))
        .bind(entry.meal_type.as_str())
        .bind(&entry.food_name)
        .bind(entry.portion_grams)
        .bind(entry.calories)
        .bind(entry.protein_g)
        .bind(entry.carbs_g)
        .bind(entry.fat_g)
        .bind(entry.fiber_g)
        .bind(entry.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert diary entry: {e}")))?;

        Ok(())
    }

    /// List every diary entry of a user, newest day first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<NutritionEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, date, meal_type, food_name, portion_grams,
                   calories, protein_g, carbs_g, fat_g, fiber_g, created_at
            FROM nutrition_entries
            WHERE user_id = $1
            ORDER BY date DESC, created_at ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list diary entries: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }

    /// List the diary entries of one day in logging order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<NutritionEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, date, meal_type, food_name, portion_grams,
                   calories, protein_g, carbs_g, fat_g, fiber_g, created_at
            FROM nutrition_entries
            WHERE user_id = $1 AND date = $2
            ORDER BY created_at ASC
            ",
        )
        .bind(user_id)
        .bind(day_key(date))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list diary entries: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }

    /// Delete an entry, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, user_id: &str, entry_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM nutrition_entries WHERE id = $1 AND user_id = $2")
            .bind(entry_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete diary entry: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Sum of the calories logged on a day, 0 for an empty day
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn total_calories_for_date(&self, user_id: &str, date: NaiveDate) -> AppResult<i64> {
        let total: Option<i64> = sqlx::query_scalar(
            "SELECT SUM(calories) FROM nutrition_entries WHERE user_id = $1 AND date = $2",
        )
        .bind(user_id)
        .bind(day_key(date))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to total diary calories: {e}")))?;

        Ok(total.unwrap_or(0))
    }
}

/// Convert a database row to a `NutritionEntry`
fn row_to_entry(row: &SqliteRow) -> AppResult<NutritionEntry> {
    let date: String = row.get("date");
    let meal_type: String = row.get("meal_type");
    let created_at: String = row.get("created_at");

    Ok(NutritionEntry {
        id: row.get("id"),
        user_id: row.get("user_id"),
        date: parse_day(&date)?,
        meal_type: MealType::from_str_lossy(&meal_type),
        food_name: row.get("food_name"),
        portion_grams: row.get("portion_grams"),
        calories: row.get("calories"),
        protein_g: row.get("protein_g"),
        carbs_g: row.get("carbs_g"),
        fat_g: row.get("fat_g"),
        fiber_g: row.get("fiber_g"),
        created_at: parse_timestamp(&created_at)?,
    })
}
