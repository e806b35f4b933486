// ABOUTME: Durable key-value storage for the step counter across restarts
// ABOUTME: Persists baseline, last reading and day, plus archived per-day totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{day_key, parse_day};
use crate::constants::step_state_keys;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use health_monitor_intelligence::{ArchivedDay, StepStateStore, StepTrackerState};
use sqlx::SqlitePool;

/// Step counter state database operations
pub struct StepStateManager {
    pool: SqlitePool,
}

impl StepStateManager {
    /// Create a new step state manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the key-value table
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS step_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create step_state table: {e}")))?;

        Ok(())
    }

    async fn get_value(&self, key: &str) -> AppResult<Option<String>> {
        sqlx::query_scalar("SELECT value FROM step_state WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to read step state '{key}': {e}")))
    }

    async fn get_u64(&self, key: &str) -> AppResult<Option<u64>> {
        self.get_value(key)
            .await?
            .map(|value| {
                value.parse::<u64>().map_err(|e| {
                    AppError::internal(format!("Invalid step state '{key}' = '{value}': {e}"))
                })
            })
            .transpose()
    }

    /// Every archived day total, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored value is malformed
    pub async fn list_archived(&self) -> AppResult<Vec<ArchivedDay>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT key, value FROM step_state WHERE key LIKE $1 ORDER BY key ASC",
        )
        .bind(format!("{}%", step_state_keys::DAY_TOTAL_PREFIX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list archived steps: {e}")))?;

        rows.into_iter()
            .map(|(key, value)| {
                let day = key
                    .strip_prefix(step_state_keys::DAY_TOTAL_PREFIX)
                    .unwrap_or(&key);
                let steps = value.parse::<u64>().map_err(|e| {
                    AppError::internal(format!("Invalid archived steps '{value}': {e}"))
                })?;
                Ok(ArchivedDay {
                    date: parse_day(day)?,
                    steps,
                })
            })
            .collect()
    }
}

#[async_trait]
impl StepStateStore for StepStateManager {
    async fn load_state(&self) -> AppResult<StepTrackerState> {
        let baseline = self.get_u64(step_state_keys::BASELINE).await?.unwrap_or(0);
        let last_total = self.get_u64(step_state_keys::LAST_TOTAL).await?.unwrap_or(0);
        let last_known_date = self
            .get_value(step_state_keys::LAST_KNOWN_DATE)
            .await?
            .filter(|value| !value.is_empty())
            .map(|value| parse_day(&value))
            .transpose()?;

        Ok(StepTrackerState {
            baseline,
            last_known_date,
            last_total,
        })
    }

    async fn save_state(&self, state: &StepTrackerState) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        let entries = [
            (step_state_keys::BASELINE, state.baseline.to_string()),
            (step_state_keys::LAST_TOTAL, state.last_total.to_string()),
            (
                step_state_keys::LAST_KNOWN_DATE,
                state.last_known_date.map(day_key).unwrap_or_default(),
            ),
        ];

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        for (key, value) in entries {
            sqlx::query(
                r"
                INSERT INTO step_state (key, value, updated_at) VALUES ($1, $2, $3)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
                ",
            )
            .bind(key)
            .bind(value)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to save step state '{key}': {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit step state: {e}")))?;
        Ok(())
    }

    async fn archive_day(&self, day: &ArchivedDay) -> AppResult<()> {
        let key = format!("{}{}", step_state_keys::DAY_TOTAL_PREFIX, day_key(day.date));

        sqlx::query(
            r"
            INSERT INTO step_state (key, value, updated_at) VALUES ($1, $2, $3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
        )
        .bind(&key)
        .bind(day.steps.to_string())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to archive steps for {key}: {e}")))?;

        Ok(())
    }

    async fn archived_steps(&self, date: NaiveDate) -> AppResult<Option<u64>> {
        let key = format!("{}{}", step_state_keys::DAY_TOTAL_PREFIX, day_key(date));
        self.get_u64(&key).await
    }
}
