// ABOUTME: Daily health record model keyed by user and calendar day
// ABOUTME: DailyHealthRecord plus HealthRecordPatch for partial, non-destructive writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One calendar day of body metrics for a user
///
/// Every metric uses 0 as "not recorded this field".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHealthRecord {
    /// Unique identifier
    pub id: String,
    /// Owner of the record
    pub user_id: String,
    /// Day bucket
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Heart rate (bpm)
    pub heart_rate_bpm: u32,
    /// Systolic blood pressure (mmHg)
    pub systolic: u32,
    /// Diastolic blood pressure (mmHg)
    pub diastolic: u32,
    /// Step count for the day
    pub steps: u32,
    /// Sleep duration (hours)
    pub sleep_hours: f64,
    /// Water intake (liters)
    pub water_liters: f64,
    /// Last write time, used to pick a winner among legacy duplicates
    pub updated_at: DateTime<Utc>,
}

impl DailyHealthRecord {
    /// Empty record for a user and day
    #[must_use]
    pub fn new(user_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            date,
            weight_kg: 0.0,
            heart_rate_bpm: 0,
            systolic: 0,
            diastolic: 0,
            steps: 0,
            sleep_hours: 0.0,
            water_liters: 0.0,
            updated_at: Utc::now(),
        }
    }

    /// Whether a weight was recorded for this day
    #[must_use]
    pub fn has_weight(&self) -> bool {
        self.weight_kg > 0.0
    }

    /// Whether any metric other than steps was recorded
    #[must_use]
    pub fn has_health_metrics(&self) -> bool {
        self.weight_kg > 0.0
            || self.heart_rate_bpm > 0
            || self.systolic > 0
            || self.diastolic > 0
            || self.sleep_hours > 0.0
            || self.water_liters > 0.0
    }

    /// Write every recorded field of `patch` onto this record
    ///
    /// Absent and zero-valued patch fields leave the stored value untouched.
    pub fn apply(&mut self, patch: &HealthRecordPatch) {
        if let Some(weight) = patch.weight_kg.filter(|w| *w > 0.0) {
            self.weight_kg = weight;
        }
        if let Some(hr) = patch.heart_rate_bpm.filter(|v| *v > 0) {
            self.heart_rate_bpm = hr;
        }
        if let Some(sys) = patch.systolic.filter(|v| *v > 0) {
            self.systolic = sys;
        }
        if let Some(dia) = patch.diastolic.filter(|v| *v > 0) {
            self.diastolic = dia;
        }
        if let Some(steps) = patch.steps {
            self.steps = steps;
        }
        if let Some(sleep) = patch.sleep_hours.filter(|v| *v > 0.0) {
            self.sleep_hours = sleep;
        }
        if let Some(water) = patch.water_liters.filter(|v| *v > 0.0) {
            self.water_liters = water;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial set of metrics to write onto a day record
///
/// Steps are the one field where an explicit value always wins: sensor sync
/// may legitimately lower a stale count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordPatch {
    /// Body weight (kg)
    pub weight_kg: Option<f64>,
    /// Heart rate (bpm)
    pub heart_rate_bpm: Option<u32>,
    /// Systolic blood pressure (mmHg)
    pub systolic: Option<u32>,
    /// Diastolic blood pressure (mmHg)
    pub diastolic: Option<u32>,
    /// Step count
    pub steps: Option<u32>,
    /// Sleep duration (hours)
    pub sleep_hours: Option<f64>,
    /// Water intake (liters)
    pub water_liters: Option<f64>,
}

impl HealthRecordPatch {
    /// Patch produced by a periodic step-sensor sync
    #[must_use]
    pub fn steps_only(steps: u32) -> Self {
        Self {
            steps: Some(steps),
            ..Self::default()
        }
    }

    /// Patch produced by the weight log dialog
    #[must_use]
    pub fn weight_only(weight_kg: f64) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            ..Self::default()
        }
    }

    /// Whether the patch carries any recorded non-step metric
    #[must_use]
    pub fn has_health_metrics(&self) -> bool {
        self.weight_kg.is_some_and(|v| v > 0.0)
            || self.heart_rate_bpm.is_some_and(|v| v > 0)
            || self.systolic.is_some_and(|v| v > 0)
            || self.diastolic.is_some_and(|v| v > 0)
            || self.sleep_hours.is_some_and(|v| v > 0.0)
            || self.water_liters.is_some_and(|v| v > 0.0)
    }

    /// Whether applying the patch would change nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_none() && !self.has_health_metrics()
    }
}
