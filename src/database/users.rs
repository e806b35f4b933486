// ABOUTME: Profile storage for the tracked user
// ABOUTME: Reads, lists and upserts UserProfile rows keyed by user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, Sex, UserProfile, WeightGoal};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Profile database operations
pub struct UserManager {
    pool: SqlitePool,
}

impl UserManager {
    /// Create a new profile manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the profile table
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_profiles (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                sex TEXT NOT NULL,
                age_years INTEGER NOT NULL,
                height_cm REAL NOT NULL,
                target_weight_kg REAL NOT NULL,
                activity_level TEXT NOT NULL,
                weight_goal TEXT NOT NULL,
                daily_step_goal INTEGER NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user_profiles table: {e}")))?;

        Ok(())
    }

    /// Get a profile by user id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query(
            r"
            SELECT id, name, sex, age_years, height_cm, target_weight_kg,
                   activity_level, weight_goal, daily_step_goal
            FROM user_profiles
            WHERE id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get profile: {e}")))?;

        row.map(|r| row_to_profile(&r)).transpose()
    }

    /// List every stored profile ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_profiles(&self) -> AppResult<Vec<UserProfile>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, sex, age_years, height_cm, target_weight_kg,
                   activity_level, weight_goal, daily_step_goal
            FROM user_profiles
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list profiles: {e}")))?;

        rows.iter().map(row_to_profile).collect()
    }

    /// Insert or replace a profile
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_profiles (
                id, name, sex, age_years, height_cm, target_weight_kg,
                activity_level, weight_goal, daily_step_goal, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                sex = excluded.sex,
                age_years = excluded.age_years,
                height_cm = excluded.height_cm,
                target_weight_kg = excluded.target_weight_kg,
                activity_level = excluded.activity_level,
                weight_goal = excluded.weight_goal,
                daily_step_goal = excluded.daily_step_goal,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(profile.sex.as_str())
        .bind(i64::from(profile.age_years))
        .bind(profile.height_cm)
        .bind(profile.target_weight_kg)
        .bind(profile.activity_level.as_str())
        .bind(profile.weight_goal.as_str())
        .bind(i64::from(profile.daily_step_goal))
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save profile: {e}")))?;

        Ok(())
    }
}

/// Convert a database row to a `UserProfile`
fn row_to_profile(row: &SqliteRow) -> AppResult<UserProfile> {
    let sex: String = row.get("sex");
    let activity_level: String = row.get("activity_level");
    let weight_goal: String = row.get("weight_goal");
    let age_years: i64 = row.get("age_years");
    let daily_step_goal: i64 = row.get("daily_step_goal");

    Ok(UserProfile {
        id: row.get("id"),
        name: row.get("name"),
        sex: Sex::parse(&sex),
        age_years: u32::try_from(age_years)
            .map_err(|e| AppError::internal(format!("Invalid stored age {age_years}: {e}")))?,
        height_cm: row.get("height_cm"),
        target_weight_kg: row.get("target_weight_kg"),
        activity_level: ActivityLevel::parse(&activity_level),
        weight_goal: WeightGoal::parse(&weight_goal),
        daily_step_goal: u32::try_from(daily_step_goal).map_err(|e| {
            AppError::internal(format!("Invalid stored step goal {daily_step_goal}: {e}"))
        })?,
    })
}
