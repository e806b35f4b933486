// ABOUTME: Daily summary command for health-monitor
// ABOUTME: Prints the dashboard for a day as text or JSON, with live steps for today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use health_monitor::{
    database::Database,
    errors::{AppError, AppResult},
    state::HealthState,
    steps::StepCounter,
};
use std::sync::Arc;

use crate::helpers::{display::display_summary, steps_u32, today};

/// Show the dashboard for a day
pub async fn show(
    state: &HealthState,
    database: &Database,
    date: Option<NaiveDate>,
    json: bool,
) -> AppResult<()> {
    let today = today();
    let date = date.unwrap_or(today);

    let counter = StepCounter::load(Arc::new(database.step_state()), today).await?;
    let summary = state.daily_summary(date, today, steps_u32(counter.current_steps()));

    if json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::serialization(format!("Failed to render summary: {e}")))?;
        println!("{rendered}");
    } else {
        display_summary(&state.profile(), &summary);
    }
    Ok(())
}
