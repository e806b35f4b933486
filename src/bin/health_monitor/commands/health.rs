// ABOUTME: Daily body metrics commands for health-monitor
// ABOUTME: Log metrics or a weight for a day, list recorded days, delete a day record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use health_monitor::{
    errors::{AppError, AppResult},
    models::HealthRecordPatch,
    state::HealthState,
};
use health_monitor_core::input;

use crate::helpers::{
    display::{display_health_record, display_health_records},
    today,
};

/// Raw metric fields as typed on the command line
pub struct MetricsInput {
    pub weight: Option<String>,
    pub heart_rate: Option<String>,
    pub systolic: Option<String>,
    pub diastolic: Option<String>,
    pub steps: Option<String>,
    pub sleep: Option<String>,
    pub water: Option<String>,
}

impl MetricsInput {
    /// Parse the given fields; malformed weight and heart rate use their defaults,
    /// other malformed fields count as not recorded
    fn to_patch(&self) -> HealthRecordPatch {
        HealthRecordPatch {
            weight_kg: self.weight.as_deref().map(input::weight_kg),
            heart_rate_bpm: self.heart_rate.as_deref().map(input::heart_rate_bpm),
            systolic: self.systolic.as_deref().map(|raw| input::parse_or(raw, 0)),
            diastolic: self.diastolic.as_deref().map(|raw| input::parse_or(raw, 0)),
            steps: self.steps.as_deref().map(|raw| input::parse_or(raw, 0)),
            sleep_hours: self.sleep.as_deref().map(|raw| input::parse_or(raw, 0.0)),
            water_liters: self.water.as_deref().map(|raw| input::parse_or(raw, 0.0)),
        }
    }
}

/// Record metrics for a day
pub async fn log(
    state: &HealthState,
    date: Option<NaiveDate>,
    metrics: &MetricsInput,
) -> AppResult<()> {
    let date = date.unwrap_or_else(today);
    let patch = metrics.to_patch();

    if patch.is_empty() {
        println!("Nothing to record for {date}.");
        return Ok(());
    }

    if !state.add_health_data(date, &patch).await {
        return Err(AppError::storage(format!("Failed to save metrics for {date}")));
    }

    show_day(state, date);
    Ok(())
}

/// Record a weight for a day
pub async fn weight(state: &HealthState, raw: &str, date: Option<NaiveDate>) -> AppResult<()> {
    let date = date.unwrap_or_else(today);

    if !state.log_weight(date, input::weight_kg(raw)).await {
        return Err(AppError::storage(format!("Failed to save weight for {date}")));
    }

    show_day(state, date);
    Ok(())
}

/// List recorded days
pub fn list(state: &HealthState) {
    display_health_records(&state.health_records());
}

/// Delete a day record
pub async fn delete(state: &HealthState, record_id: &str) -> AppResult<()> {
    if !state.delete_health_record(record_id).await {
        return Err(AppError::not_found(format!("Health record {record_id}")));
    }
    println!("Deleted health record {record_id}.");
    Ok(())
}

fn show_day(state: &HealthState, date: NaiveDate) {
    if let Some(record) = state.health_records().iter().find(|r| r.date == date) {
        display_health_record(record);
    }
}
