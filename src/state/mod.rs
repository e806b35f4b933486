// ABOUTME: Observable application state for the tracked user backed by the repository
// ABOUTME: Publishes profile, day records, diary and catalog snapshots through watch channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health State
//!
//! [`HealthState`] owns the latest snapshot of everything the front end shows.
//! Each snapshot lives in a `watch` channel: one writer, any number of
//! readers, and a new subscriber sees the current value immediately.
//!
//! Writes go to the repository first. On success the affected snapshot is
//! re-queried and republished; on failure the error is logged and every
//! snapshot keeps its previous value.

mod summary;

pub use summary::DailySummary;

use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{
    DailyHealthRecord, FoodCategory, FoodReference, HealthRecordPatch, MealType, NutritionEntry,
    UserProfile,
};
use crate::repository::HealthRepository;
use chrono::NaiveDate;
use health_monitor_intelligence::{HealthMetricsEngine, MergeOutcome};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};

/// Observable state holder for one user
pub struct HealthState {
    repository: Arc<dyn HealthRepository>,
    engine: HealthMetricsEngine,
    user_id: String,
    profile_tx: watch::Sender<UserProfile>,
    records_tx: watch::Sender<Vec<DailyHealthRecord>>,
    nutrition_tx: watch::Sender<Vec<NutritionEntry>>,
    foods_tx: watch::Sender<Vec<FoodReference>>,
}

impl HealthState {
    /// Create a state holder with empty snapshots
    ///
    /// Call [`Self::load_initial`] before reading any snapshot.
    #[must_use]
    pub fn new(
        repository: Arc<dyn HealthRepository>,
        engine: HealthMetricsEngine,
        user_id: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into();
        let (profile_tx, _) = watch::channel(UserProfile::default_for(&user_id));
        let (records_tx, _) = watch::channel(Vec::new());
        let (nutrition_tx, _) = watch::channel(Vec::new());
        let (foods_tx, _) = watch::channel(Vec::new());

        Self {
            repository,
            engine,
            user_id,
            profile_tx,
            records_tx,
            nutrition_tx,
            foods_tx,
        }
    }

    /// Load every snapshot from storage
    ///
    /// Synthesizes and stores the default profile when the user has none, and
    /// seeds the food catalog when it is too small.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or initialized
    pub async fn load_initial(&self) -> AppResult<()> {
        let profile = if let Some(profile) = self.repository.get_profile(&self.user_id).await? {
            profile
        } else {
            let profile = UserProfile::default_for(&self.user_id);
            self.repository.upsert_profile(&profile).await?;
            info!(user_id = %self.user_id, "Created default profile");
            profile
        };
        self.profile_tx.send_replace(profile);

        let seeded = self.repository.seed_foods().await?;
        if seeded > 0 {
            debug!(seeded, "Food catalog seeded during startup");
        }

        self.records_tx
            .send_replace(self.repository.list_health_records(&self.user_id).await?);
        self.nutrition_tx
            .send_replace(self.repository.list_nutrition(&self.user_id).await?);
        self.foods_tx.send_replace(self.repository.list_foods().await?);

        Ok(())
    }

    /// Tracked user id
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Metrics engine used for derived values
    #[must_use]
    pub const fn engine(&self) -> &HealthMetricsEngine {
        &self.engine
    }

    // ================================
    // Snapshots and subscriptions
    // ================================

    /// Current profile
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        self.profile_tx.borrow().clone()
    }

    /// Current day records ordered by date
    #[must_use]
    pub fn health_records(&self) -> Vec<DailyHealthRecord> {
        self.records_tx.borrow().clone()
    }

    /// Current diary entries
    #[must_use]
    pub fn nutrition(&self) -> Vec<NutritionEntry> {
        self.nutrition_tx.borrow().clone()
    }

    /// Current food catalog ordered by name
    #[must_use]
    pub fn foods(&self) -> Vec<FoodReference> {
        self.foods_tx.borrow().clone()
    }

    /// Subscribe to profile changes
    #[must_use]
    pub fn subscribe_profile(&self) -> watch::Receiver<UserProfile> {
        self.profile_tx.subscribe()
    }

    /// Subscribe to day record changes
    #[must_use]
    pub fn subscribe_health_records(&self) -> watch::Receiver<Vec<DailyHealthRecord>> {
        self.records_tx.subscribe()
    }

    /// Subscribe to diary changes
    #[must_use]
    pub fn subscribe_nutrition(&self) -> watch::Receiver<Vec<NutritionEntry>> {
        self.nutrition_tx.subscribe()
    }

    /// Subscribe to catalog changes
    #[must_use]
    pub fn subscribe_foods(&self) -> watch::Receiver<Vec<FoodReference>> {
        self.foods_tx.subscribe()
    }

    /// Day records as a stream that yields the current value first
    #[must_use]
    pub fn health_records_stream(&self) -> WatchStream<Vec<DailyHealthRecord>> {
        WatchStream::new(self.records_tx.subscribe())
    }

    /// Profile as a stream that yields the current value first
    #[must_use]
    pub fn profile_stream(&self) -> WatchStream<UserProfile> {
        WatchStream::new(self.profile_tx.subscribe())
    }

    // ================================
    // Profile
    // ================================

    /// Store a new profile for the tracked user
    ///
    /// The id is forced to the tracked user's id.
    pub async fn update_profile(&self, mut profile: UserProfile) -> bool {
        profile.id.clone_from(&self.user_id);
        match self.repository.upsert_profile(&profile).await {
            Ok(()) => {
                AppLogger::log_data_change("update_profile", &self.user_id, "profile");
                self.profile_tx.send_replace(profile);
                true
            }
            Err(e) => {
                AppLogger::log_storage_failure("update_profile", &self.user_id, &e);
                false
            }
        }
    }

    // ================================
    // Daily health records
    // ================================

    /// Merge manually entered metrics into the record of `date`
    pub async fn add_health_data(&self, date: NaiveDate, patch: &HealthRecordPatch) -> bool {
        self.write_health_record("add_health_data", date, patch).await
    }

    /// Record a weight for `date`, keeping the day's other metrics
    pub async fn log_weight(&self, date: NaiveDate, weight_kg: f64) -> bool {
        self.write_health_record("log_weight", date, &HealthRecordPatch::weight_only(weight_kg))
            .await
    }

    /// Write a sensor step count onto the record of `date`
    ///
    /// Returns `true` when storage accepted the sync, including the case where
    /// the day has no record and nothing was written.
    pub async fn sync_steps(&self, date: NaiveDate, steps: u32) -> bool {
        match self.repository.sync_steps(&self.user_id, date, steps).await {
            Ok(MergeOutcome::Skip) => true,
            Ok(_) => self.refresh_health_records("sync_steps").await,
            Err(e) => {
                AppLogger::log_storage_failure("sync_steps", &self.user_id, &e);
                false
            }
        }
    }

    /// Delete a day record by id
    pub async fn delete_health_record(&self, record_id: &str) -> bool {
        match self
            .repository
            .delete_health_record(&self.user_id, record_id)
            .await
        {
            Ok(removed) => {
                if removed {
                    AppLogger::log_data_change("delete_health_record", &self.user_id, record_id);
                }
                self.refresh_health_records("delete_health_record").await && removed
            }
            Err(e) => {
                AppLogger::log_storage_failure("delete_health_record", &self.user_id, &e);
                false
            }
        }
    }

    async fn write_health_record(
        &self,
        operation: &str,
        date: NaiveDate,
        patch: &HealthRecordPatch,
    ) -> bool {
        match self
            .repository
            .upsert_health_record(&self.user_id, date, patch)
            .await
        {
            Ok(MergeOutcome::Skip) => {
                debug!(operation, %date, "Nothing to write");
                true
            }
            Ok(_) => {
                AppLogger::log_data_change(operation, &self.user_id, &date.to_string());
                self.refresh_health_records(operation).await
            }
            Err(e) => {
                AppLogger::log_storage_failure(operation, &self.user_id, &e);
                false
            }
        }
    }

    async fn refresh_health_records(&self, operation: &str) -> bool {
        match self.repository.list_health_records(&self.user_id).await {
            Ok(records) => {
                self.records_tx.send_replace(records);
                true
            }
            Err(e) => {
                AppLogger::log_storage_failure(operation, &self.user_id, &e);
                false
            }
        }
    }

    // ================================
    // Food diary
    // ================================

    /// Add an entry to the diary
    pub async fn add_nutrition(&self, mut entry: NutritionEntry) -> bool {
        entry.user_id.clone_from(&self.user_id);
        match self.repository.insert_nutrition(&entry).await {
            Ok(()) => {
                AppLogger::log_data_change("add_nutrition", &self.user_id, &entry.food_name);
                self.refresh_nutrition("add_nutrition").await
            }
            Err(e) => {
                AppLogger::log_storage_failure("add_nutrition", &self.user_id, &e);
                false
            }
        }
    }

    /// Log a portion of a catalog food
    pub async fn add_food_portion(
        &self,
        food: &FoodReference,
        portion_grams: f64,
        meal_type: MealType,
        date: NaiveDate,
    ) -> bool {
        let entry = NutritionEntry::from_food(&self.user_id, food, portion_grams, meal_type, date);
        self.add_nutrition(entry).await
    }

    /// Delete a diary entry by id
    pub async fn delete_nutrition(&self, entry_id: &str) -> bool {
        match self.repository.delete_nutrition(&self.user_id, entry_id).await {
            Ok(removed) => {
                if removed {
                    AppLogger::log_data_change("delete_nutrition", &self.user_id, entry_id);
                }
                self.refresh_nutrition("delete_nutrition").await && removed
            }
            Err(e) => {
                AppLogger::log_storage_failure("delete_nutrition", &self.user_id, &e);
                false
            }
        }
    }

    /// Diary entries logged on `date`
    #[must_use]
    pub fn nutrition_for_date(&self, date: NaiveDate) -> Vec<NutritionEntry> {
        self.nutrition_tx
            .borrow()
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect()
    }

    async fn refresh_nutrition(&self, operation: &str) -> bool {
        match self.repository.list_nutrition(&self.user_id).await {
            Ok(entries) => {
                self.nutrition_tx.send_replace(entries);
                true
            }
            Err(e) => {
                AppLogger::log_storage_failure(operation, &self.user_id, &e);
                false
            }
        }
    }

    // ================================
    // Food catalog
    // ================================

    /// Add a custom food to the catalog
    pub async fn add_food(&self, food: &FoodReference) -> bool {
        match self.repository.insert_food(food).await {
            Ok(()) => {
                AppLogger::log_data_change("add_food", &self.user_id, &food.name);
                self.refresh_foods("add_food").await
            }
            Err(e) => {
                AppLogger::log_storage_failure("add_food", &self.user_id, &e);
                false
            }
        }
    }

    /// Replace a catalog food
    pub async fn update_food(&self, food: &FoodReference) -> bool {
        match self.repository.update_food(food).await {
            Ok(()) => {
                AppLogger::log_data_change("update_food", &self.user_id, &food.name);
                self.refresh_foods("update_food").await
            }
            Err(e) => {
                AppLogger::log_storage_failure("update_food", &self.user_id, &e);
                false
            }
        }
    }

    /// Delete a catalog food by id
    pub async fn delete_food(&self, food_id: &str) -> bool {
        match self.repository.delete_food(food_id).await {
            Ok(removed) => self.refresh_foods("delete_food").await && removed,
            Err(e) => {
                AppLogger::log_storage_failure("delete_food", &self.user_id, &e);
                false
            }
        }
    }

    /// Catalog foods whose name contains `query`, empty on storage failure
    pub async fn search_foods(&self, query: &str) -> Vec<FoodReference> {
        self.repository
            .search_foods(query)
            .await
            .unwrap_or_else(|e| {
                AppLogger::log_storage_failure("search_foods", &self.user_id, &e);
                Vec::new()
            })
    }

    /// Catalog foods of one category, empty on storage failure
    pub async fn foods_by_category(&self, category: FoodCategory) -> Vec<FoodReference> {
        self.repository
            .foods_by_category(category)
            .await
            .unwrap_or_else(|e| {
                AppLogger::log_storage_failure("foods_by_category", &self.user_id, &e);
                Vec::new()
            })
    }

    async fn refresh_foods(&self, operation: &str) -> bool {
        match self.repository.list_foods().await {
            Ok(foods) => {
                self.foods_tx.send_replace(foods);
                true
            }
            Err(e) => {
                AppLogger::log_storage_failure(operation, &self.user_id, &e);
                false
            }
        }
    }

    // ================================
    // Derived values
    // ================================

    /// Everything the dashboard shows for `date`
    ///
    /// `live_steps` is the step sensor's count for `today`; it replaces the
    /// stored count when `date` is today.
    #[must_use]
    pub fn daily_summary(
        &self,
        date: NaiveDate,
        today: NaiveDate,
        live_steps: u32,
    ) -> DailySummary {
        let profile = self.profile();
        let records = self.health_records();
        let nutrition = self.nutrition();
        DailySummary::build(&self.engine, &profile, &records, &nutrition, date, today, live_steps)
    }
}
