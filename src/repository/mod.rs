// ABOUTME: Repository facade over the health database used by the state holder and CLI
// ABOUTME: Async trait covering profiles, daily records, the food diary, and the food catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Repository Pattern
//!
//! [`HealthRepository`] is the single data-access seam. Consumers hold an
//! `Arc<dyn HealthRepository>` so tests and alternative stores can stand in for
//! the `SQLite` implementation.

mod health_repository;

pub use health_repository::HealthRepositoryImpl;

use crate::errors::AppResult;
use crate::models::{
    DailyHealthRecord, FoodCategory, FoodReference, HealthRecordPatch, NutritionEntry, UserProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use health_monitor_intelligence::MergeOutcome;

/// Data access for everything the tracker stores
#[async_trait]
pub trait HealthRepository: Send + Sync {
    // ================================
    // Profiles
    // ================================

    /// Get a user's profile
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    /// Insert or replace a profile
    async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()>;

    /// List every stored profile
    async fn list_profiles(&self) -> AppResult<Vec<UserProfile>>;

    // ================================
    // Daily health records
    // ================================

    /// All of a user's day records ordered by date
    async fn list_health_records(&self, user_id: &str) -> AppResult<Vec<DailyHealthRecord>>;

    /// The record of one day
    async fn get_health_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<DailyHealthRecord>>;

    /// Merge a partial write into the day's record
    ///
    /// Recorded fields absent from the patch are preserved.
    async fn upsert_health_record(
        &self,
        user_id: &str,
        date: NaiveDate,
        patch: &HealthRecordPatch,
    ) -> AppResult<MergeOutcome>;

    /// Write a sensor step count onto an existing day record
    ///
    /// Days without a record are left alone.
    async fn sync_steps(&self, user_id: &str, date: NaiveDate, steps: u32)
        -> AppResult<MergeOutcome>;

    /// Delete a day record by id
    async fn delete_health_record(&self, user_id: &str, record_id: &str) -> AppResult<bool>;

    // ================================
    // Food diary
    // ================================

    /// All of a user's diary entries
    async fn list_nutrition(&self, user_id: &str) -> AppResult<Vec<NutritionEntry>>;

    /// Diary entries of one day
    async fn list_nutrition_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<NutritionEntry>>;

    /// Add an entry to the diary
    async fn insert_nutrition(&self, entry: &NutritionEntry) -> AppResult<()>;

    /// Delete a diary entry by id
    async fn delete_nutrition(&self, user_id: &str, entry_id: &str) -> AppResult<bool>;

    /// Calories logged on a day
    async fn total_calories_for_date(&self, user_id: &str, date: NaiveDate) -> AppResult<i64>;

    // ================================
    // Food catalog
    // ================================

    /// Whole catalog ordered by name
    async fn list_foods(&self) -> AppResult<Vec<FoodReference>>;

    /// Case-insensitive name search
    async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodReference>>;

    /// Foods of one category
    async fn foods_by_category(&self, category: FoodCategory) -> AppResult<Vec<FoodReference>>;

    /// Add a food to the catalog
    async fn insert_food(&self, food: &FoodReference) -> AppResult<()>;

    /// Replace a catalog food
    async fn update_food(&self, food: &FoodReference) -> AppResult<()>;

    /// Delete a catalog food by id
    async fn delete_food(&self, food_id: &str) -> AppResult<bool>;

    /// Number of foods in the catalog
    async fn count_foods(&self) -> AppResult<i64>;

    /// Seed the built-in catalog if it is too small, returning the insert count
    async fn seed_foods(&self) -> AppResult<usize>;
}
