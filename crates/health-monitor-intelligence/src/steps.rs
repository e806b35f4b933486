// ABOUTME: Buckets cumulative step-sensor readings into per-calendar-day counts
// ABOUTME: Baseline tracking, day rollover archiving, and the durable state store trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Step counter day bucketing
//!
//! Step sensors report a cumulative count since boot. The tracker captures the
//! first positive reading of a day as its baseline and reports
//! `reading - baseline` as today's steps. When a reading arrives on a new
//! calendar day the previous day's final count is archived and the baseline is
//! cleared so the next positive reading starts the new day at zero.

use async_trait::async_trait;
use chrono::NaiveDate;
use health_monitor_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Durable tracker state
///
/// A `baseline` of 0 means no baseline has been captured for `last_known_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepTrackerState {
    /// Cumulative reading captured at the first reading of the current day
    pub baseline: u64,
    /// Day the baseline belongs to
    pub last_known_date: Option<NaiveDate>,
    /// Last cumulative reading received
    pub last_total: u64,
}

impl StepTrackerState {
    /// Steps counted so far on `last_known_date`
    #[must_use]
    pub const fn current_day_steps(&self) -> u64 {
        self.last_total.saturating_sub(self.baseline)
    }
}

/// Final step count of a finished day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedDay {
    /// Finished calendar day
    pub date: NaiveDate,
    /// Steps counted on that day
    pub steps: u64,
}

/// Result of feeding one reading to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepUpdate {
    /// Steps to display for today
    pub today_steps: u64,
    /// Day closed by this reading, if it crossed midnight
    pub archived: Option<ArchivedDay>,
}

/// Day bucketing state machine
#[derive(Debug, Clone, Default)]
pub struct StepDayTracker {
    state: StepTrackerState,
}

impl StepDayTracker {
    /// Resume from persisted state
    #[must_use]
    pub const fn from_state(state: StepTrackerState) -> Self {
        Self { state }
    }

    /// Current state, to be persisted after each reading
    #[must_use]
    pub const fn state(&self) -> StepTrackerState {
        self.state
    }

    /// Steps counted today given the last reading, 0 if the state is for another day
    #[must_use]
    pub fn steps_for(&self, today: NaiveDate) -> u64 {
        if self.state.last_known_date == Some(today) {
            self.state.current_day_steps()
        } else {
            0
        }
    }

    /// Feed one cumulative reading taken on `today`
    pub fn on_reading(&mut self, total: u64, today: NaiveDate) -> StepUpdate {
        let mut archived = None;

        if let Some(previous_day) = self.state.last_known_date.filter(|day| *day != today) {
            let steps = self.state.current_day_steps();
            info!(date = %previous_day, steps, "Archiving step count for finished day");
            archived = Some(ArchivedDay {
                date: previous_day,
                steps,
            });
            self.state.baseline = 0;
        }
        self.state.last_known_date = Some(today);

        if self.state.baseline == 0 && total > 0 {
            debug!(baseline = total, date = %today, "Captured step baseline");
            self.state.baseline = total;
        }
        self.state.last_total = total;

        StepUpdate {
            today_steps: total.saturating_sub(self.state.baseline),
            archived,
        }
    }
}

/// Durable key-value storage for the tracker
///
/// Implementations must survive process restarts. Archived totals are keyed by
/// calendar day.
#[async_trait]
pub trait StepStateStore: Send + Sync {
    /// Load the tracker state, default state when nothing is stored
    async fn load_state(&self) -> AppResult<StepTrackerState>;

    /// Persist the tracker state
    async fn save_state(&self, state: &StepTrackerState) -> AppResult<()>;

    /// Persist the final count of a finished day
    async fn archive_day(&self, day: &ArchivedDay) -> AppResult<()>;

    /// Archived count for a day, if one was stored
    async fn archived_steps(&self, date: NaiveDate) -> AppResult<Option<u64>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_readings_within_one_day() {
        let mut tracker = StepDayTracker::default();
        let shown: Vec<u64> = [1000, 1050, 1120]
            .into_iter()
            .map(|total| tracker.on_reading(total, day(1)).today_steps)
            .collect();
        assert_eq!(shown, vec![0, 50, 120]);
    }

    #[test]
    fn test_day_boundary_archives_previous_day() {
        let mut tracker = StepDayTracker::default();
        tracker.on_reading(1000, day(1));
        let same_day = tracker.on_reading(1300, day(1));
        assert_eq!(same_day.today_steps, 300);
        assert!(same_day.archived.is_none());

        let next_day = tracker.on_reading(1310, day(2));
        assert_eq!(next_day.today_steps, 0);
        assert_eq!(
            next_day.archived,
            Some(ArchivedDay {
                date: day(1),
                steps: 300,
            })
        );
        assert_eq!(tracker.state().baseline, 1310);
        assert_eq!(tracker.state().last_known_date, Some(day(2)));
    }

    #[test]
    fn test_zero_reading_does_not_capture_baseline() {
        let mut tracker = StepDayTracker::default();
        assert_eq!(tracker.on_reading(0, day(1)).today_steps, 0);
        assert_eq!(tracker.state().baseline, 0);
        assert_eq!(tracker.on_reading(40, day(1)).today_steps, 0);
        assert_eq!(tracker.on_reading(65, day(1)).today_steps, 25);
    }

    #[test]
    fn test_sensor_reset_never_goes_negative() {
        let mut tracker = StepDayTracker::default();
        tracker.on_reading(5000, day(1));
        assert_eq!(tracker.on_reading(12, day(1)).today_steps, 0);
    }

    #[test]
    fn test_resume_from_persisted_state() {
        let mut first = StepDayTracker::default();
        first.on_reading(2000, day(3));
        first.on_reading(2600, day(3));

        let mut resumed = StepDayTracker::from_state(first.state());
        assert_eq!(resumed.steps_for(day(3)), 600);
        assert_eq!(resumed.steps_for(day(4)), 0);
        assert_eq!(resumed.on_reading(2700, day(3)).today_steps, 700);
    }
}
