// ABOUTME: Integration tests for the observable health state holder
// ABOUTME: Covers first launch defaults, republishing after writes, failures and the daily summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_state, day, test_food, TEST_USER};
use health_monitor::constants::nutrition::MIN_FOOD_CATALOG_SIZE;
use health_monitor::models::{
    ActivityLevel, FoodCategory, HealthRecordPatch, MealType, Sex, UserProfile, WeightGoal,
};
use health_monitor_intelligence::{BmiCategory, HealthMetricsEngine};
use tokio_stream::StreamExt;

#[tokio::test]
async fn test_first_launch_creates_profile_and_catalog() {
    let (db, state) = create_test_state().await.unwrap();

    let profile = state.profile();
    assert_eq!(profile, UserProfile::default_for(TEST_USER));
    assert_eq!(profile.daily_step_goal, 10_000);

    // The default profile was persisted, not only published
    let stored = db.users().get_profile(TEST_USER).await.unwrap();
    assert_eq!(stored, Some(profile));

    assert!(i64::try_from(state.foods().len()).unwrap() >= MIN_FOOD_CATALOG_SIZE);
    assert!(state.health_records().is_empty());
    assert!(state.nutrition().is_empty());
}

#[tokio::test]
async fn test_new_subscriber_sees_current_value() {
    let (_db, state) = create_test_state().await.unwrap();
    assert!(state.log_weight(day(1), 81.2).await);

    let receiver = state.subscribe_health_records();
    assert_eq!(receiver.borrow().len(), 1);

    let mut stream = state.health_records_stream();
    let first = stream.next().await.unwrap();
    assert!((first[0].weight_kg - 81.2).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_writes_republish_snapshots() {
    let (_db, state) = create_test_state().await.unwrap();
    let mut records = state.subscribe_health_records();
    let mut diary = state.subscribe_nutrition();
    assert!(!records.has_changed().unwrap());

    let patch = HealthRecordPatch {
        heart_rate_bpm: Some(64),
        water_liters: Some(1.8),
        ..HealthRecordPatch::default()
    };
    assert!(state.add_health_data(day(2), &patch).await);
    assert!(records.has_changed().unwrap());
    assert_eq!(records.borrow_and_update()[0].heart_rate_bpm, 64);

    let yogurt = test_food("Yogurt", 60, 3.5, 3.3, 0.4);
    assert!(state.add_food_portion(&yogurt, 150.0, MealType::Breakfast, day(2)).await);
    assert!(diary.has_changed().unwrap());
    let entry = diary.borrow_and_update()[0].clone();
    assert_eq!(entry.calories, 90);
    assert_eq!(entry.user_id, TEST_USER);

    assert_eq!(state.nutrition_for_date(day(2)).len(), 1);
    assert!(state.nutrition_for_date(day(3)).is_empty());

    assert!(state.delete_nutrition(&entry.id).await);
    assert!(state.nutrition().is_empty());
    assert!(!state.delete_nutrition(&entry.id).await);
}

#[tokio::test]
async fn test_profile_update_keeps_tracked_id() {
    let (_db, state) = create_test_state().await.unwrap();
    let mut stream = state.profile_stream();
    assert_eq!(stream.next().await.unwrap().name, "Ivan");

    let profile = UserProfile {
        id: "other".to_owned(),
        name: "Anna".to_owned(),
        sex: Sex::Female,
        age_years: 28,
        height_cm: 168.0,
        target_weight_kg: 60.0,
        activity_level: ActivityLevel::Light,
        weight_goal: WeightGoal::Lose,
        daily_step_goal: 8_000,
    };
    assert!(state.update_profile(profile).await);

    let published = stream.next().await.unwrap();
    assert_eq!(published.id, TEST_USER);
    assert_eq!(published.name, "Anna");
    assert_eq!(state.profile().daily_step_goal, 8_000);
}

#[tokio::test]
async fn test_step_sync_only_touches_existing_days() {
    let (_db, state) = create_test_state().await.unwrap();

    assert!(state.sync_steps(day(4), 4_200).await);
    assert!(state.health_records().is_empty());

    assert!(state.log_weight(day(4), 77.0).await);
    assert!(state.sync_steps(day(4), 4_200).await);
    let record = state.health_records().remove(0);
    assert_eq!(record.steps, 4_200);
    assert!((record.weight_kg - 77.0).abs() < f64::EPSILON);

    assert!(state.delete_health_record(&record.id).await);
    assert!(state.health_records().is_empty());
    assert!(!state.delete_health_record(&record.id).await);
}

#[tokio::test]
async fn test_manual_steps_log_creates_day() {
    let (_db, state) = create_test_state().await.unwrap();
    let patch = HealthRecordPatch {
        steps: Some(5_000),
        ..HealthRecordPatch::default()
    };

    assert!(state.add_health_data(day(5), &patch).await);
    let records = state.health_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, day(5));
    assert_eq!(records[0].steps, 5_000);
}

#[tokio::test]
async fn test_storage_failure_keeps_previous_snapshot() {
    let (db, state) = create_test_state().await.unwrap();
    assert!(state.log_weight(day(5), 79.0).await);
    let before = state.health_records();

    db.close().await;

    assert!(!state.log_weight(day(6), 78.0).await);
    assert!(!state.add_food(&test_food("Kefir", 50, 3.0, 4.0, 2.5)).await);
    assert_eq!(state.health_records(), before);
    assert!(state.search_foods("apple").await.is_empty());
    assert!(state.foods_by_category(FoodCategory::Fruits).await.is_empty());
}

#[tokio::test]
async fn test_catalog_edits_are_published() {
    let (_db, state) = create_test_state().await.unwrap();
    let initial = state.foods().len();

    let mut kefir = test_food("Kefir", 50, 3.0, 4.0, 2.5);
    kefir.category = FoodCategory::Dairy;
    assert!(state.add_food(&kefir).await);
    assert_eq!(state.foods().len(), initial + 1);
    assert_eq!(state.search_foods("KEF").await, vec![kefir.clone()]);

    kefir.per_100g.calories = 41;
    assert!(state.update_food(&kefir).await);
    let stored = state.foods().into_iter().find(|f| f.id == kefir.id).unwrap();
    assert_eq!(stored.per_100g.calories, 41);

    assert!(state.delete_food(&kefir.id).await);
    assert_eq!(state.foods().len(), initial);
}

#[tokio::test]
async fn test_daily_summary_today_uses_live_steps() {
    let (_db, state) = create_test_state().await.unwrap();
    let engine = HealthMetricsEngine::default();

    assert!(
        state
            .add_health_data(
                day(10),
                &HealthRecordPatch {
                    weight_kg: Some(78.0),
                    steps: Some(3_000),
                    ..HealthRecordPatch::default()
                },
            )
            .await
    );
    let rice = test_food("Rice", 130, 2.7, 28.0, 0.3);
    assert!(state.add_food_portion(&rice, 200.0, MealType::Lunch, day(10)).await);

    let today = state.daily_summary(day(10), day(10), 7_500);
    assert!(today.display.live_steps);
    assert_eq!(today.display.steps, 7_500);
    assert_eq!(today.step_progress.percent, 75);
    assert_eq!(today.nutrition.calories, 260);

    let profile = state.profile();
    let expected_target = engine.calculate_daily_calorie_target(&profile, Some(78.0));
    assert_eq!(today.calorie_target, expected_target);
    let expected_bmi = HealthMetricsEngine::calculate_bmi(78.0, profile.height_cm);
    assert!((today.bmi - expected_bmi).abs() < 1e-9);
    assert_eq!(today.bmi_category, Some(BmiCategory::Normal));

    // Water is planned for the target weight, not the logged one
    let expected_water = engine.calculate_water_target(
        profile.target_weight_kg,
        profile.sex,
        profile.activity_level,
    );
    assert_eq!(today.water_target, expected_water);
    assert_ne!(
        today.water_target,
        engine.calculate_water_target(78.0, profile.sex, profile.activity_level)
    );

    // A past day shows what was stored, whatever the sensor says
    let past = state.daily_summary(day(10), day(11), 7_500);
    assert!(!past.display.live_steps);
    assert_eq!(past.display.steps, 3_000);
    assert!((past.display.weight_kg - 78.0).abs() < f64::EPSILON);
    assert_eq!(past.nutrition.calories, 260);
}

#[tokio::test]
async fn test_daily_summary_without_weight_uses_target_weight() {
    let (_db, state) = create_test_state().await.unwrap();
    let summary = state.daily_summary(day(12), day(12), 0);

    let profile = state.profile();
    let expected_bmi =
        HealthMetricsEngine::calculate_bmi(profile.target_weight_kg, profile.height_cm);
    assert!((summary.bmi - expected_bmi).abs() < 1e-9);
    assert_eq!(summary.nutrition.calories, 0);
    assert_eq!(summary.calorie_progress.percent, 0);
    assert!(summary.display.weight_kg.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_daily_summary_without_height_has_no_bmi_category() {
    let (_db, state) = create_test_state().await.unwrap();
    let mut profile = state.profile();
    profile.height_cm = 0.0;
    assert!(state.update_profile(profile).await);

    let summary = state.daily_summary(day(13), day(13), 0);
    assert!(summary.bmi.abs() < f64::EPSILON);
    assert_eq!(summary.bmi_category, None);
}
