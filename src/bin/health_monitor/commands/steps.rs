// ABOUTME: Step counter commands for health-monitor
// ABOUTME: Feeds cumulative sensor readings and shows today's count with archived days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_monitor::{
    database::Database, errors::AppResult, state::HealthState, steps::StepCounter,
};
use health_monitor_intelligence::{StepDayTracker, StepStateStore};
use std::sync::Arc;
use tracing::warn;

use crate::helpers::{display::display_steps, steps_u32, today};

/// Feed one cumulative reading and sync the counts into the day records
pub async fn reading(state: &HealthState, database: &Database, total: u64) -> AppResult<()> {
    let today = today();
    let counter = StepCounter::load(Arc::new(database.step_state()), today).await?;
    let update = counter.record_reading(total, today).await?;

    if let Some(archived) = update.archived {
        println!("Closed {}: {} steps.", archived.date, archived.steps);
        if !state.sync_steps(archived.date, steps_u32(archived.steps)).await {
            warn!(date = %archived.date, "Could not sync archived steps into the day record");
        }
    }
    if !state.sync_steps(today, steps_u32(update.today_steps)).await {
        warn!(date = %today, "Could not sync today's steps into the day record");
    }

    println!("Steps today: {}", update.today_steps);
    Ok(())
}

/// Show today's count and archived days
pub async fn show(database: &Database) -> AppResult<()> {
    let store = database.step_state();
    let today = today();
    let tracker = StepDayTracker::from_state(store.load_state().await?);
    let archived = store.list_archived().await?;

    display_steps(today, tracker.steps_for(today), &archived);
    Ok(())
}
