// ABOUTME: Daily health record storage with one row per user and calendar day
// ABOUTME: Collapses legacy duplicate day rows before enforcing the unique day key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{day_key, parse_day, parse_timestamp};
use crate::errors::{AppError, AppResult};
use crate::models::{DailyHealthRecord, HealthRecordPatch};
use chrono::NaiveDate;
use health_monitor_intelligence::{
    merge_health_record_on_write, resolve_daily_records, MergeOutcome, WriteOrigin,
};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};
use std::collections::HashSet;
use tracing::{debug, info, warn};

const SELECT_DAY: &str = r"
    SELECT id, user_id, date, weight_kg, heart_rate_bpm, systolic, diastolic,
           steps, sleep_hours, water_liters, updated_at
    FROM daily_health_records
    WHERE user_id = $1 AND date = $2
";

const UPSERT_DAY: &str = r"
    INSERT INTO daily_health_records (
        id, user_id, date, weight_kg, heart_rate_bpm, systolic, diastolic,
        steps, sleep_hours, water_liters, updated_at
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
    ON CONFLICT(user_id, date) DO UPDATE SET
        weight_kg = excluded.weight_kg,
        heart_rate_bpm = excluded.heart_rate_bpm,
        systolic = excluded.systolic,
        diastolic = excluded.diastolic,
        steps = excluded.steps,
        sleep_hours = excluded.sleep_hours,
        water_liters = excluded.water_liters,
        updated_at = excluded.updated_at
";

/// Daily health record database operations
pub struct HealthRecordManager {
    pool: SqlitePool,
}

impl HealthRecordManager {
    /// Create a new health record manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the table and its unique `(user_id, date)` index
    ///
    /// Stores written before the index existed may hold several rows for one
    /// day; those are collapsed to the most recently updated row first.
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement or the cleanup fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS daily_health_records (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                weight_kg REAL NOT NULL DEFAULT 0,
                heart_rate_bpm INTEGER NOT NULL DEFAULT 0,
                systolic INTEGER NOT NULL DEFAULT 0,
                diastolic INTEGER NOT NULL DEFAULT 0,
                steps INTEGER NOT NULL DEFAULT 0,
                sleep_hours REAL NOT NULL DEFAULT 0,
                water_liters REAL NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create daily_health_records table: {e}"))
        })?;

        self.collapse_duplicate_days().await?;

        sqlx::query(
            r"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_daily_health_records_user_date
            ON daily_health_records(user_id, date)
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create day index: {e}")))?;

        Ok(())
    }

    /// Delete every row that lost the most-recent-write resolution for its day
    async fn collapse_duplicate_days(&self) -> AppResult<()> {
        let duplicated: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM (
                SELECT user_id, date FROM daily_health_records
                GROUP BY user_id, date
                HAVING COUNT(*) > 1
            )
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count duplicate days: {e}")))?;

        if duplicated == 0 {
            return Ok(());
        }

        warn!(days = duplicated, "Collapsing duplicate daily health records");

        let rows = sqlx::query(
            r"
            SELECT id, user_id, date, weight_kg, heart_rate_bpm, systolic, diastolic,
                   steps, sleep_hours, water_liters, updated_at
            FROM daily_health_records
            ORDER BY rowid ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load health records: {e}")))?;

        let records = rows
            .iter()
            .map(row_to_record)
            .collect::<AppResult<Vec<_>>>()?;
        let all_ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        let kept: HashSet<String> = resolve_daily_records(records)
            .into_iter()
            .map(|r| r.id)
            .collect();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let mut removed = 0_usize;
        for id in all_ids.iter().filter(|id| !kept.contains(*id)) {
            sqlx::query("DELETE FROM daily_health_records WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to delete duplicate: {e}")))?;
            removed += 1;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit cleanup: {e}")))?;

        info!(removed, "Removed superseded daily health records");
        Ok(())
    }

    /// List a user's records ordered by date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<DailyHealthRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, date, weight_kg, heart_rate_bpm, systolic, diastolic,
                   steps, sleep_hours, water_liters, updated_at
            FROM daily_health_records
            WHERE user_id = $1
            ORDER BY date ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list health records: {e}")))?;

        rows.iter().map(row_to_record).collect()
    }

    /// Get the record of one day
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<DailyHealthRecord>> {
        let row = sqlx::query(SELECT_DAY)
            .bind(user_id)
            .bind(day_key(date))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get health record: {e}")))?;

        row.map(|r| row_to_record(&r)).transpose()
    }

    /// Write a record, replacing the stored record of the same day
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn upsert(&self, record: &DailyHealthRecord) -> AppResult<()> {
        bind_record(sqlx::query(UPSERT_DAY), record)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to save health record: {e}")))?;

        Ok(())
    }

    /// Merge a partial write onto the stored record of its day
    ///
    /// Reading the day and writing the merged row happen inside one
    /// `BEGIN IMMEDIATE` transaction. Concurrent writers queue on the database
    /// write lock and each merges onto the row the previous one committed.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction, the read or the write fails
    pub async fn merge_patch(
        &self,
        user_id: &str,
        date: NaiveDate,
        patch: &HealthRecordPatch,
        origin: WriteOrigin,
    ) -> AppResult<MergeOutcome> {
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| AppError::database(format!("Failed to begin day write: {e}")))?;

        let existing = sqlx::query(SELECT_DAY)
            .bind(user_id)
            .bind(day_key(date))
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to get health record: {e}")))?
            .map(|row| row_to_record(&row))
            .transpose()?;

        let outcome =
            merge_health_record_on_write(existing.as_ref(), user_id, date, patch, origin);
        match outcome.record() {
            Some(record) => {
                bind_record(sqlx::query(UPSERT_DAY), record)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::database(format!("Failed to save health record: {e}"))
                    })?;
            }
            None => debug!(%user_id, %date, "Health record write skipped"),
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit day write: {e}")))?;

        Ok(outcome)
    }

    /// Delete a record by id, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, user_id: &str, record_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM daily_health_records WHERE id = $1 AND user_id = $2")
            .bind(record_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete health record: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

fn bind_record<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    record: &'q DailyHealthRecord,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    query
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(day_key(record.date))
        .bind(record.weight_kg)
        .bind(i64::from(record.heart_rate_bpm))
        .bind(i64::from(record.systolic))
        .bind(i64::from(record.diastolic))
        .bind(i64::from(record.steps))
        .bind(record.sleep_hours)
        .bind(record.water_liters)
        .bind(record.updated_at.to_rfc3339())
}

/// Convert a database row to a `DailyHealthRecord`
fn row_to_record(row: &SqliteRow) -> AppResult<DailyHealthRecord> {
    let date: String = row.get("date");
    let updated_at: String = row.get("updated_at");

    Ok(DailyHealthRecord {
        id: row.get("id"),
        user_id: row.get("user_id"),
        date: parse_day(&date)?,
        weight_kg: row.get("weight_kg"),
        heart_rate_bpm: stored_u32(row, "heart_rate_bpm")?,
        systolic: stored_u32(row, "systolic")?,
        diastolic: stored_u32(row, "diastolic")?,
        steps: stored_u32(row, "steps")?,
        sleep_hours: row.get("sleep_hours"),
        water_liters: row.get("water_liters"),
        updated_at: parse_timestamp(&updated_at)?,
    })
}

fn stored_u32(row: &SqliteRow, column: &str) -> AppResult<u32> {
    let value: i64 = row.get(column);
    u32::try_from(value)
        .map_err(|e| AppError::internal(format!("Invalid stored {column} {value}: {e}")))
}
