// ABOUTME: SQLite storage for profiles, daily health records, the food diary, and step state
// ABOUTME: Owns the connection pool and runs idempotent schema migrations at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! One local `SQLite` file holds everything. Each table has a manager type
//! operating on a clone of the shared pool; [`Database`] creates the pool and
//! runs every manager's migration.

mod foods;
mod health_records;
mod nutrition;
mod seed_foods;
mod step_state;
mod users;

pub use foods::FoodManager;
pub use health_records::HealthRecordManager;
pub use nutrition::NutritionManager;
pub use seed_foods::{default_food_catalog, SeedFood, DEFAULT_FOODS};
pub use step_state::StepStateManager;
pub use users::UserManager;

use crate::constants::{defaults, DAY_KEY_FORMAT};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Database manager owning the connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// The database file and its parent directory are created if missing.
    /// In-memory databases are pinned to a single connection since each
    /// `SQLite` memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration fails
    pub async fn new(database_url: &str, max_connections: u32) -> AppResult<Self> {
        let is_memory = database_url.contains(":memory:");
        if !is_memory {
            ensure_parent_dir(database_url).await?;
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(defaults::MEMORY_DATABASE_MAX_CONNECTIONS)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {database_url}: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(url = %database_url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Profile storage
    #[must_use]
    pub fn users(&self) -> UserManager {
        UserManager::new(self.pool.clone())
    }

    /// Daily health record storage
    #[must_use]
    pub fn health_records(&self) -> HealthRecordManager {
        HealthRecordManager::new(self.pool.clone())
    }

    /// Food diary storage
    #[must_use]
    pub fn nutrition(&self) -> NutritionManager {
        NutritionManager::new(self.pool.clone())
    }

    /// Food catalog storage
    #[must_use]
    pub fn foods(&self) -> FoodManager {
        FoodManager::new(self.pool.clone())
    }

    /// Durable step counter state
    #[must_use]
    pub fn step_state(&self) -> StepStateManager {
        StepStateManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.users().migrate().await?;
        self.health_records().migrate().await?;
        self.nutrition().migrate().await?;
        self.foods().migrate().await?;
        self.step_state().migrate().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    /// Close the pool, waiting for connections to be returned
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create the directory holding a file-backed database
async fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path_str = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path_str = path_str.split('?').next().unwrap_or(path_str);

    if let Some(parent) = Path::new(path_str).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}

/// Format a calendar day as its storage key
pub(crate) fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parse a stored calendar day
pub(crate) fn parse_day(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DAY_KEY_FORMAT)
        .map_err(|e| AppError::internal(format!("Invalid stored date '{value}': {e}")))
}

/// Parse a stored RFC 3339 timestamp
pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_key_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(day_key(date), "2025-02-28");
        assert_eq!(parse_day("2025-02-28").unwrap(), date);
        assert!(parse_day("28.02.2025").is_err());
    }

    #[tokio::test]
    async fn test_memory_database_migrates() {
        let db = Database::new("sqlite::memory:", 5).await.unwrap();
        // Running migrations twice is a no-op
        db.migrate().await.unwrap();
        assert_eq!(db.foods().count().await.unwrap(), 0);
    }
}
