// ABOUTME: Food catalog storage with per-100 g nutrient values
// ABOUTME: List, search, category filter, CRUD, and seeding of the built-in catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::seed_foods::DEFAULT_FOODS;
use crate::constants::nutrition::MIN_FOOD_CATALOG_SIZE;
use crate::errors::{AppError, AppResult};
use crate::models::{FoodCategory, FoodReference, NutrientsPer100g};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashSet;
use tracing::{debug, info};

/// Food catalog database operations
pub struct FoodManager {
    pool: SqlitePool,
}

impl FoodManager {
    /// Create a new catalog manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the catalog table
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS foods (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
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
        .map_err(|e| AppError::database(format!("Failed to create foods table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_foods_category ON foods(category)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create foods index: {e}")))?;

        Ok(())
    }

    /// Get a food by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, food_id: &str) -> AppResult<Option<FoodReference>> {
        let row = sqlx::query(
            r"
            SELECT id, name, category, calories, protein_g, carbs_g, fat_g, fiber_g
            FROM foods
            WHERE id = $1
            ",
        )
        .bind(food_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get food: {e}")))?;

        Ok(row.map(|r| row_to_food(&r)))
    }

    /// List the whole catalog ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self) -> AppResult<Vec<FoodReference>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, category, calories, protein_g, carbs_g, fat_g, fiber_g
            FROM foods
            ORDER BY name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list foods: {e}")))?;

        Ok(rows.iter().map(row_to_food).collect())
    }

    /// Foods whose name contains `query`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn search(&self, query: &str) -> AppResult<Vec<FoodReference>> {
        let pattern = format!("%{}%", query.trim().to_lowercase());

        let rows = sqlx::query(
            r"
            SELECT id, name, category, calories, protein_g, carbs_g, fat_g, fiber_g
            FROM foods
            WHERE LOWER(name) LIKE $1
            ORDER BY name ASC
            ",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search foods: {e}")))?;

        Ok(rows.iter().map(row_to_food).collect())
    }

    /// Foods of one category ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn by_category(&self, category: FoodCategory) -> AppResult<Vec<FoodReference>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, category, calories, protein_g, carbs_g, fat_g, fiber_g
            FROM foods
            WHERE category = $1
            ORDER BY name ASC
            ",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list foods by category: {e}")))?;

        Ok(rows.iter().map(row_to_food).collect())
    }

    /// Add a food to the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert(&self, food: &FoodReference) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO foods (
                id, name, category, calories, protein_g, carbs_g, fat_g, fiber_g, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(&food.id)
        .bind(&food.name)
        .bind(food.category.as_str())
        .bind(food.per_100g.calories)
        .bind(food.per_100g.protein_g)
        .bind(food.per_100g.carbs_g)
        .bind(food.per_100g.fat_g)
        .bind(food.per_100g.fiber_g)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert food: {e}")))?;

        Ok(())
    }

    /// Replace a food's name, category and nutrients
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no food has this id, or an error if the update fails
    pub async fn update(&self, food: &FoodReference) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE foods
            SET name = $2, category = $3, calories = $4,
                protein_g = $5, carbs_g = $6, fat_g = $7, fiber_g = $8
            WHERE id = $1
            ",
        )
        .bind(&food.id)
        .bind(&food.name)
        .bind(food.category.as_str())
        .bind(food.per_100g.calories)
        .bind(food.per_100g.protein_g)
        .bind(food.per_100g.carbs_g)
        .bind(food.per_100g.fat_g)
        .bind(food.per_100g.fiber_g)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update food: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Food {}", food.id)));
        }
        Ok(())
    }

    /// Delete a food, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, food_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(food_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete food: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of foods in the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM foods")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count foods: {e}")))
    }

    /// Seed the built-in catalog when the store holds too few foods
    ///
    /// Returns the number of foods inserted. Names already present are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or insert fails
    pub async fn seed_defaults(&self) -> AppResult<usize> {
        let count = self.count().await?;
        if count >= MIN_FOOD_CATALOG_SIZE {
            debug!(count, "Food catalog already populated");
            return Ok(0);
        }

        let existing: HashSet<String> = sqlx::query_scalar::<_, String>("SELECT name FROM foods")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to read food names: {e}")))?
            .into_iter()
            .collect();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let now = Utc::now().to_rfc3339();
        let mut inserted = 0_usize;
        for seed in DEFAULT_FOODS.iter().filter(|f| !existing.contains(f.name)) {
            let food = seed.to_reference();
            sqlx::query(
                r"
                INSERT INTO foods (
                    id, name, category, calories, protein_g, carbs_g, fat_g, fiber_g, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ",
            )
            .bind(&food.id)
            .bind(&food.name)
            .bind(food.category.as_str())
            .bind(food.per_100g.calories)
            .bind(food.per_100g.protein_g)
            .bind(food.per_100g.carbs_g)
            .bind(food.per_100g.fat_g)
            .bind(food.per_100g.fiber_g)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to seed food: {e}")))?;
            inserted += 1;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit food seed: {e}")))?;

        info!(inserted, previous = count, "Seeded default food catalog");
        Ok(inserted)
    }
}

/// Convert a database row to a `FoodReference`
fn row_to_food(row: &SqliteRow) -> FoodReference {
    let category: String = row.get("category");

    FoodReference {
        id: row.get("id"),
        name: row.get("name"),
        category: FoodCategory::parse(&category),
        per_100g: NutrientsPer100g {
            calories: row.get("calories"),
            protein_g: row.get("protein_g"),
            carbs_g: row.get("carbs_g"),
            fat_g: row.get("fat_g"),
            fiber_g: row.get("fiber_g"),
        },
    }
}
