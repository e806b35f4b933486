// ABOUTME: Integration tests for the SQLite storage layer
// ABOUTME: Covers migrations, day record uniqueness, legacy duplicate cleanup, diary and catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    at, create_test_database, day, init_test_logging, test_food, weighed_record, TEST_USER,
};
use health_monitor::constants::nutrition::MIN_FOOD_CATALOG_SIZE;
use health_monitor::database::{Database, DEFAULT_FOODS};
use health_monitor::models::{FoodCategory, MealType, NutritionEntry, Sex, UserProfile};
use tempfile::TempDir;

#[tokio::test]
async fn test_profile_round_trip() {
    let db = create_test_database().await.unwrap();
    let users = db.users();
    assert!(users.get_profile(TEST_USER).await.unwrap().is_none());

    let mut profile = UserProfile::default_for(TEST_USER);
    profile.sex = Sex::Female;
    profile.age_years = 41;
    users.upsert_profile(&profile).await.unwrap();

    profile.height_cm = 165.5;
    users.upsert_profile(&profile).await.unwrap();

    let stored = users.get_profile(TEST_USER).await.unwrap().unwrap();
    assert_eq!(stored, profile);
    assert_eq!(users.list_profiles().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_one_record_per_day() {
    let db = create_test_database().await.unwrap();
    let records = db.health_records();

    records.upsert(&weighed_record(day(1), 80.0)).await.unwrap();
    // A second record with a new id for the same day replaces the first
    records.upsert(&weighed_record(day(1), 79.4)).await.unwrap();
    records.upsert(&weighed_record(day(2), 79.0)).await.unwrap();

    let all = records.list_for_user(TEST_USER).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].date, day(1));
    assert!((all[0].weight_kg - 79.4).abs() < f64::EPSILON);

    let fetched = records.get_for_date(TEST_USER, day(2)).await.unwrap().unwrap();
    assert!(records.delete(TEST_USER, &fetched.id).await.unwrap());
    assert!(!records.delete(TEST_USER, &fetched.id).await.unwrap());
    assert!(records.get_for_date(TEST_USER, day(2)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_legacy_duplicate_days_collapse_on_migration() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("legacy.db").display());

    let db = Database::new(&url, 1).await.unwrap();
    sqlx::query("DROP INDEX idx_daily_health_records_user_date")
        .execute(db.pool())
        .await
        .unwrap();

    for (id, weight, written) in [("old", 81.0, 10), ("new", 80.2, 20), ("older", 82.0, 5)] {
        sqlx::query(
            "INSERT INTO daily_health_records (id, user_id, date, weight_kg, updated_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(TEST_USER)
        .bind("2025-06-01")
        .bind(weight)
        .bind(at(written).to_rfc3339())
        .execute(db.pool())
        .await
        .unwrap();
    }
    db.close().await;

    let reopened = Database::new(&url, 1).await.unwrap();
    let records = reopened
        .health_records()
        .list_for_user(TEST_USER)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "new");
    assert!((records[0].weight_kg - 80.2).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_diary_by_day_and_totals() {
    let db = create_test_database().await.unwrap();
    let diary = db.nutrition();
    let bread = test_food("Bread", 265, 8.4, 49.0, 3.3);

    let breakfast = NutritionEntry::from_food(TEST_USER, &bread, 50.0, MealType::Breakfast, day(3));
    let lunch = NutritionEntry::from_food(TEST_USER, &bread, 200.0, MealType::Lunch, day(3));
    let other_day = NutritionEntry::from_food(TEST_USER, &bread, 100.0, MealType::Dinner, day(4));
    for entry in [&breakfast, &lunch, &other_day] {
        diary.insert(entry).await.unwrap();
    }

    let on_day = diary.list_for_date(TEST_USER, day(3)).await.unwrap();
    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0].meal_type, MealType::Breakfast);

    // 132 (truncated from 132.5) + 530
    assert_eq!(diary.total_calories_for_date(TEST_USER, day(3)).await.unwrap(), 662);
    assert_eq!(diary.total_calories_for_date(TEST_USER, day(9)).await.unwrap(), 0);

    assert!(diary.delete(TEST_USER, &lunch.id).await.unwrap());
    assert_eq!(diary.total_calories_for_date(TEST_USER, day(3)).await.unwrap(), 132);
    assert_eq!(diary.list_for_user(TEST_USER).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_seed_only_when_catalog_is_sparse() {
    let db = create_test_database().await.unwrap();
    let foods = db.foods();

    foods.insert(&test_food("Banana", 90, 1.0, 23.0, 0.3)).await.unwrap();
    let inserted = foods.seed_defaults().await.unwrap();

    // "Banana" already exists and is not seeded twice
    assert_eq!(inserted, DEFAULT_FOODS.len() - 1);
    assert_eq!(
        foods.count().await.unwrap(),
        i64::try_from(DEFAULT_FOODS.len()).unwrap()
    );
    assert!(foods.count().await.unwrap() >= MIN_FOOD_CATALOG_SIZE);
    assert_eq!(foods.seed_defaults().await.unwrap(), 0);
}

#[tokio::test]
async fn test_catalog_search_category_and_update() {
    let db = create_test_database().await.unwrap();
    let foods = db.foods();
    foods.seed_defaults().await.unwrap();

    let hits = foods.search("CHEESE").await.unwrap();
    let names: Vec<&str> = hits.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Cottage cheese (5%)", "Hard cheese"]);

    let fruits = foods.by_category(FoodCategory::Fruits).await.unwrap();
    assert_eq!(fruits.len(), 4);
    assert!(fruits.windows(2).all(|w| w[0].name <= w[1].name));

    let mut apple = foods.search("apple").await.unwrap().remove(0);
    apple.per_100g.calories = 50;
    foods.update(&apple).await.unwrap();
    assert_eq!(foods.get(&apple.id).await.unwrap().unwrap().per_100g.calories, 50);

    assert!(foods.delete(&apple.id).await.unwrap());
    let mut missing = apple.clone();
    missing.id = "nope".to_owned();
    assert!(foods.update(&missing).await.is_err());
}
