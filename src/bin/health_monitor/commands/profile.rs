// ABOUTME: Profile commands for health-monitor
// ABOUTME: Shows the profile with derived targets and applies field edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_monitor::{
    errors::{AppError, AppResult},
    models::{ActivityLevel, Sex, WeightGoal},
    state::HealthState,
};
use health_monitor_core::input;
use tracing::warn;

use crate::helpers::{display::display_profile, today};

/// Raw profile edits as typed on the command line
pub struct ProfileEdit {
    pub name: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub height: Option<String>,
    pub target_weight: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub step_goal: Option<String>,
}

/// Show the profile
pub fn show(state: &HealthState) {
    let day = today();
    display_profile(&state.profile(), &state.daily_summary(day, day, 0));
}

/// Apply edits to the profile and store it
pub async fn update(state: &HealthState, edit: ProfileEdit) -> AppResult<()> {
    let mut profile = state.profile();

    if let Some(name) = edit.name.filter(|n| !n.trim().is_empty()) {
        name.trim().clone_into(&mut profile.name);
    }
    if let Some(sex) = edit.sex {
        profile.sex = Sex::parse(&sex);
    }
    if let Some(raw) = edit.age {
        profile.age_years = input::parse_or_keep(&raw, profile.age_years);
    }
    if let Some(raw) = edit.height {
        profile.height_cm = input::parse_or_keep(&raw, profile.height_cm);
    }
    if let Some(raw) = edit.target_weight {
        profile.target_weight_kg = input::parse_or_keep(&raw, profile.target_weight_kg);
    }
    if let Some(raw) = edit.activity_level {
        match ActivityLevel::parse(&raw) {
            ActivityLevel::Unknown => {
                warn!(value = %raw, "Unknown activity level, keeping {}", profile.activity_level);
            }
            level => profile.activity_level = level,
        }
    }
    if let Some(raw) = edit.goal {
        profile.weight_goal = WeightGoal::parse(&raw);
    }
    if let Some(raw) = edit.step_goal {
        profile.daily_step_goal = input::parse_or_keep(&raw, profile.daily_step_goal);
    }

    if !state.update_profile(profile).await {
        return Err(AppError::storage("Failed to save profile"));
    }

    println!("Profile updated.");
    show(state);
    Ok(())
}
