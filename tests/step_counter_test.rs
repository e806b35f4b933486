// ABOUTME: Integration tests for the persistent step counter
// ABOUTME: Day boundary archiving, restart durability, disabled sensors and the reading task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_database, day, init_test_logging};
use health_monitor::database::Database;
use health_monitor::steps::StepCounter;
use health_monitor_intelligence::{ArchivedDay, StepStateStore, StepTrackerState};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;

fn store_for(db: &Database) -> Arc<dyn StepStateStore> {
    Arc::new(db.step_state())
}

#[tokio::test]
async fn test_readings_count_from_first_baseline() {
    let db = create_test_database().await.unwrap();
    let counter = StepCounter::load(store_for(&db), day(1)).await.unwrap();
    assert_eq!(counter.current_steps(), 0);

    counter.record_reading(12_000, day(1)).await.unwrap();
    let update = counter.record_reading(12_850, day(1)).await.unwrap();
    assert_eq!(update.today_steps, 850);
    assert_eq!(update.archived, None);
    assert_eq!(counter.current_steps(), 850);
}

#[tokio::test]
async fn test_midnight_archives_previous_day() {
    let db = create_test_database().await.unwrap();
    let counter = StepCounter::load(store_for(&db), day(1)).await.unwrap();
    let mut steps = counter.subscribe();

    counter.record_reading(1_000, day(1)).await.unwrap();
    counter.record_reading(6_000, day(1)).await.unwrap();
    let update = counter.record_reading(6_200, day(2)).await.unwrap();

    assert_eq!(
        update.archived,
        Some(ArchivedDay {
            date: day(1),
            steps: 5_000,
        })
    );
    // The first reading of the new day becomes its baseline
    assert_eq!(update.today_steps, 0);
    assert_eq!(*steps.borrow_and_update(), 0);
    assert_eq!(counter.archived_steps(day(1)).await.unwrap(), Some(5_000));
    assert_eq!(counter.archived_steps(day(2)).await.unwrap(), None);

    let archived = db.step_state().list_archived().await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].steps, 5_000);
}

#[tokio::test]
async fn test_state_survives_restart() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("steps.db").display());

    {
        let db = Database::new(&url, 1).await.unwrap();
        let counter = StepCounter::load(store_for(&db), day(3)).await.unwrap();
        counter.record_reading(40_000, day(3)).await.unwrap();
        counter.record_reading(43_100, day(3)).await.unwrap();
        db.close().await;
    }

    let db = Database::new(&url, 1).await.unwrap();
    let stored = db.step_state().load_state().await.unwrap();
    assert_eq!(
        stored,
        StepTrackerState {
            baseline: 40_000,
            last_known_date: Some(day(3)),
            last_total: 43_100,
        }
    );

    let counter = StepCounter::load(store_for(&db), day(3)).await.unwrap();
    assert_eq!(counter.current_steps(), 3_100);
    let update = counter.record_reading(43_500, day(3)).await.unwrap();
    assert_eq!(update.today_steps, 3_500);

    // Reopened on a later day, nothing is shown until a reading arrives
    let next_day = StepCounter::load(store_for(&db), day(4)).await.unwrap();
    assert_eq!(next_day.current_steps(), 0);
}

#[tokio::test]
async fn test_failed_persist_keeps_previous_count() {
    let db = create_test_database().await.unwrap();
    let counter = StepCounter::load(store_for(&db), day(5)).await.unwrap();
    counter.record_reading(500, day(5)).await.unwrap();
    counter.record_reading(900, day(5)).await.unwrap();

    db.close().await;
    assert!(counter.record_reading(1_500, day(5)).await.is_err());
    assert_eq!(counter.current_steps(), 400);
}

#[tokio::test]
async fn test_without_sensor_counter_is_disabled() {
    let db = create_test_database().await.unwrap();
    let (counter, task) = StepCounter::start(store_for(&db), None).await.unwrap();

    assert!(!counter.is_enabled());
    assert!(task.is_none());
    let update = counter.record_reading(10_000, day(6)).await.unwrap();
    assert_eq!(update.today_steps, 0);
    assert_eq!(db.step_state().load_state().await.unwrap(), StepTrackerState::default());
}

#[tokio::test]
async fn test_sensor_task_consumes_readings() {
    let db = create_test_database().await.unwrap();
    let (sensor, readings) = mpsc::channel(8);
    let (counter, task) = StepCounter::start(store_for(&db), Some(readings))
        .await
        .unwrap();
    assert!(counter.is_enabled());

    for total in [2_000, 2_300, 2_750] {
        sensor.send(total).await.unwrap();
    }
    drop(sensor);
    task.unwrap().await.unwrap();

    assert_eq!(counter.current_steps(), 750);
    assert_eq!(db.step_state().load_state().await.unwrap().last_total, 2_750);
}
