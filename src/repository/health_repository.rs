// ABOUTME: SQLite implementation of the HealthRepository facade
// ABOUTME: Delegates to the table managers; day record writes merge inside the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::HealthRepository;
use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{
    DailyHealthRecord, FoodCategory, FoodReference, HealthRecordPatch, NutritionEntry, UserProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use health_monitor_intelligence::{MergeOutcome, WriteOrigin};

/// `SQLite` implementation of `HealthRepository`
#[derive(Clone)]
pub struct HealthRepositoryImpl {
    db: Database,
}

impl HealthRepositoryImpl {
    /// Create a new `HealthRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Underlying database
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl HealthRepository for HealthRepositoryImpl {
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        self.db.users().get_profile(user_id).await
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.db.users().upsert_profile(profile).await
    }

    async fn list_profiles(&self) -> AppResult<Vec<UserProfile>> {
        self.db.users().list_profiles().await
    }

    async fn list_health_records(&self, user_id: &str) -> AppResult<Vec<DailyHealthRecord>> {
        self.db.health_records().list_for_user(user_id).await
    }

    async fn get_health_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<DailyHealthRecord>> {
        self.db.health_records().get_for_date(user_id, date).await
    }

    async fn upsert_health_record(
        &self,
        user_id: &str,
        date: NaiveDate,
        patch: &HealthRecordPatch,
    ) -> AppResult<MergeOutcome> {
        self.db
            .health_records()
            .merge_patch(user_id, date, patch, WriteOrigin::Manual)
            .await
    }

    async fn sync_steps(
        &self,
        user_id: &str,
        date: NaiveDate,
        steps: u32,
    ) -> AppResult<MergeOutcome> {
        self.db
            .health_records()
            .merge_patch(
                user_id,
                date,
                &HealthRecordPatch::steps_only(steps),
                WriteOrigin::SensorSync,
            )
            .await
    }

    async fn delete_health_record(&self, user_id: &str, record_id: &str) -> AppResult<bool> {
        self.db.health_records().delete(user_id, record_id).await
    }

    async fn list_nutrition(&self, user_id: &str) -> AppResult<Vec<NutritionEntry>> {
        self.db.nutrition().list_for_user(user_id).await
    }

    async fn list_nutrition_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<NutritionEntry>> {
        self.db.nutrition().list_for_date(user_id, date).await
    }

    async fn insert_nutrition(&self, entry: &NutritionEntry) -> AppResult<()> {
        self.db.nutrition().insert(entry).await
    }

    async fn delete_nutrition(&self, user_id: &str, entry_id: &str) -> AppResult<bool> {
        self.db.nutrition().delete(user_id, entry_id).await
    }

    async fn total_calories_for_date(&self, user_id: &str, date: NaiveDate) -> AppResult<i64> {
        self.db
            .nutrition()
            .total_calories_for_date(user_id, date)
            .await
    }

    async fn list_foods(&self) -> AppResult<Vec<FoodReference>> {
        self.db.foods().list().await
    }

    async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodReference>> {
        self.db.foods().search(query).await
    }

    async fn foods_by_category(&self, category: FoodCategory) -> AppResult<Vec<FoodReference>> {
        self.db.foods().by_category(category).await
    }

    async fn insert_food(&self, food: &FoodReference) -> AppResult<()> {
        self.db.foods().insert(food).await
    }

    async fn update_food(&self, food: &FoodReference) -> AppResult<()> {
        self.db.foods().update(food).await
    }

    async fn delete_food(&self, food_id: &str) -> AppResult<bool> {
        self.db.foods().delete(food_id).await
    }

    async fn count_foods(&self) -> AppResult<i64> {
        self.db.foods().count().await
    }

    async fn seed_foods(&self) -> AppResult<usize> {
        self.db.foods().seed_defaults().await
    }
}
