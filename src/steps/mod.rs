// ABOUTME: Step counter service turning cumulative sensor readings into today's step count
// ABOUTME: Persists tracker state on every reading and publishes the count via a watch channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Step Counter
//!
//! The sensor reports cumulative steps since boot through an `mpsc` channel.
//! [`StepCounter`] buckets each reading into the current calendar day,
//! archives the previous day when a reading crosses midnight, and persists its
//! state so that a restart resumes the same day without losing the baseline.
//!
//! Without a sensor the counter is disabled: it never reads or writes storage
//! and the published count stays 0.

use crate::errors::AppResult;
use chrono::{Local, NaiveDate};
use health_monitor_intelligence::{StepDayTracker, StepStateStore, StepUpdate};
use std::sync::Arc;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, error, info};

/// Sensor-driven daily step counter
pub struct StepCounter {
    store: Arc<dyn StepStateStore>,
    tracker: Mutex<StepDayTracker>,
    steps_tx: watch::Sender<u64>,
    enabled: bool,
}

impl StepCounter {
    /// Resume from the persisted state, publishing the count for `today`
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be read
    pub async fn load(store: Arc<dyn StepStateStore>, today: NaiveDate) -> AppResult<Self> {
        let state = store.load_state().await?;
        let tracker = StepDayTracker::from_state(state);
        let (steps_tx, _) = watch::channel(tracker.steps_for(today));

        debug!(
            baseline = state.baseline,
            last_total = state.last_total,
            last_known_date = ?state.last_known_date,
            "Loaded step counter state"
        );

        Ok(Self {
            store,
            tracker: Mutex::new(tracker),
            steps_tx,
            enabled: true,
        })
    }

    /// Counter for a device without a step sensor
    #[must_use]
    pub fn disabled(store: Arc<dyn StepStateStore>) -> Self {
        let (steps_tx, _) = watch::channel(0);
        Self {
            store,
            tracker: Mutex::new(StepDayTracker::default()),
            steps_tx,
            enabled: false,
        }
    }

    /// Start the counter, consuming `sensor` readings in a background task
    ///
    /// A missing sensor yields a disabled counter and no task.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be read
    pub async fn start(
        store: Arc<dyn StepStateStore>,
        sensor: Option<mpsc::Receiver<u64>>,
    ) -> AppResult<(Arc<Self>, Option<JoinHandle<()>>)> {
        let Some(readings) = sensor else {
            info!("No step sensor available, step counting disabled");
            return Ok((Arc::new(Self::disabled(store)), None));
        };

        let counter = Arc::new(Self::load(store, Local::now().date_naive()).await?);
        let task = tokio::spawn(Arc::clone(&counter).run(readings));
        Ok((counter, Some(task)))
    }

    /// Whether a sensor feeds this counter
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last published step count for today
    #[must_use]
    pub fn current_steps(&self) -> u64 {
        *self.steps_tx.borrow()
    }

    /// Subscribe to the displayed step count
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.steps_tx.subscribe()
    }

    /// Displayed step count as a stream that yields the current value first
    #[must_use]
    pub fn stream(&self) -> WatchStream<u64> {
        WatchStream::new(self.steps_tx.subscribe())
    }

    /// Feed one cumulative reading taken on `today`
    ///
    /// State is persisted before it is published; if persisting fails the
    /// in-memory state and the published count are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the state or the archived day cannot be stored
    pub async fn record_reading(&self, total: u64, today: NaiveDate) -> AppResult<StepUpdate> {
        if !self.enabled {
            return Ok(StepUpdate {
                today_steps: 0,
                archived: None,
            });
        }

        let mut tracker = self.tracker.lock().await;
        let mut next = tracker.clone();
        let update = next.on_reading(total, today);

        if let Some(archived) = &update.archived {
            self.store.archive_day(archived).await?;
        }
        self.store.save_state(&next.state()).await?;

        *tracker = next;
        drop(tracker);

        self.steps_tx.send_replace(update.today_steps);
        Ok(update)
    }

    /// Archived final count of a finished day
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be read
    pub async fn archived_steps(&self, date: NaiveDate) -> AppResult<Option<u64>> {
        self.store.archived_steps(date).await
    }

    /// Consume readings until the sensor channel closes
    pub async fn run(self: Arc<Self>, mut readings: mpsc::Receiver<u64>) {
        while let Some(total) = readings.recv().await {
            let today = Local::now().date_naive();
            if let Err(e) = self.record_reading(total, today).await {
                error!(error = %e, total, "Failed to record step reading, keeping previous count");
            }
        }
        info!("Step sensor channel closed");
    }
}
