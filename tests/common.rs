// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, repository, state and fixture helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `health_monitor`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use health_monitor::{
    database::Database,
    models::{DailyHealthRecord, FoodCategory, FoodReference, NutrientsPer100g},
    repository::{HealthRepository, HealthRepositoryImpl},
    state::HealthState,
};
use health_monitor_intelligence::HealthMetricsEngine;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// User id used by every fixture
pub const TEST_USER: &str = "user_1";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:", 1).await?)
}

/// Repository over a fresh in-memory database
pub async fn create_test_repository() -> Result<(Database, Arc<HealthRepositoryImpl>)> {
    let database = create_test_database().await?;
    let repository = Arc::new(HealthRepositoryImpl::new(database.clone()));
    Ok((database, repository))
}

/// Loaded state holder over a fresh in-memory database
pub async fn create_test_state() -> Result<(Database, HealthState)> {
    let (database, repository) = create_test_repository().await?;
    let repository: Arc<dyn HealthRepository> = repository;
    let state = HealthState::new(repository, HealthMetricsEngine::default(), TEST_USER);
    state.load_initial().await?;
    Ok((database, state))
}

/// Calendar day in June 2025
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

/// Fixed timestamp `seconds` after midnight of June 1 2025
pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_748_736_000 + seconds, 0).unwrap()
}

/// Day record with only a weight
pub fn weighed_record(date: NaiveDate, weight_kg: f64) -> DailyHealthRecord {
    let mut record = DailyHealthRecord::new(TEST_USER, date);
    record.weight_kg = weight_kg;
    record
}

/// Catalog food with the given calories and macros per 100 g
pub fn test_food(name: &str, calories: i32, protein: f64, carbs: f64, fat: f64) -> FoodReference {
    FoodReference::new(
        name,
        FoodCategory::Other,
        NutrientsPer100g {
            calories,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
            fiber_g: 0.0,
        },
    )
}
