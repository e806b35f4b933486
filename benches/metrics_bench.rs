// ABOUTME: Criterion benchmarks for health metric calculations and day aggregation
// ABOUTME: Measures calorie targets, nutrition totals, weight trends and diary queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the health metrics engine.
//!
//! Measures the per-render cost of the dashboard derivations over growing
//! histories, plus the `SQLite` diary total query.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use health_monitor::database::Database;
use health_monitor::models::{
    DailyHealthRecord, FoodCategory, FoodReference, MealType, NutrientsPer100g, NutritionEntry,
    UserProfile,
};
use health_monitor_intelligence::{
    aggregate_nutrition_for_day, weight_trend, HealthMetricsEngine, StepDayTracker,
};
use tokio::runtime::Runtime;

const USER: &str = "bench_user";
const HISTORY_SIZES: [usize; 3] = [30, 365, 3_650];

fn start_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_records(days: usize) -> Vec<DailyHealthRecord> {
    (0..days)
        .map(|index| {
            let mut record =
                DailyHealthRecord::new(USER, start_day() + Duration::days(index as i64));
            // Weigh-ins every other day
            if index % 2 == 0 {
                record.weight_kg = 80.0 - (index % 50) as f64 * 0.1;
            }
            record.steps = 4_000 + ((index * 137) % 9_000) as u32;
            record
        })
        .collect()
}

fn bench_food() -> FoodReference {
    FoodReference::new(
        "Buckwheat (boiled)",
        FoodCategory::Grains,
        NutrientsPer100g {
            calories: 123,
            protein_g: 4.3,
            carbs_g: 25.0,
            fat_g: 1.1,
            fiber_g: 2.7,
        },
    )
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_diary(days: usize, per_day: usize) -> Vec<NutritionEntry> {
    let food = bench_food();
    (0..days)
        .flat_map(|day| {
            let food = food.clone();
            (0..per_day).map(move |slot| {
                NutritionEntry::from_food(
                    USER,
                    &food,
                    50.0 + (slot * 25) as f64,
                    MealType::ALL[slot % MealType::ALL.len()],
                    start_day() + Duration::days(day as i64),
                )
            })
        })
        .collect()
}

fn bench_calorie_target(c: &mut Criterion) {
    let engine = HealthMetricsEngine::default();
    let profile = UserProfile::default_for(USER);

    c.bench_function("calorie_target", |b| {
        b.iter(|| {
            engine.calculate_daily_calorie_target(black_box(&profile), black_box(Some(78.4)))
        });
    });

    c.bench_function("macro_and_water_targets", |b| {
        b.iter(|| {
            let target = engine.calculate_daily_calorie_target(&profile, None);
            let macros = engine.calculate_macro_targets(black_box(target));
            let water = engine.calculate_water_target(
                black_box(78.4),
                profile.sex,
                profile.activity_level,
            );
            (macros, water)
        });
    });
}

fn bench_nutrition_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_nutrition_for_day");

    for days in HISTORY_SIZES {
        let diary = generate_diary(days, 6);
        let target = start_day() + Duration::days(7);
        group.throughput(Throughput::Elements(diary.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &diary, |b, diary| {
            b.iter(|| aggregate_nutrition_for_day(black_box(diary), target));
        });
    }

    group.finish();
}

fn bench_weight_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_trend");

    for days in HISTORY_SIZES {
        let records = generate_records(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &records, |b, records| {
            b.iter(|| weight_trend(black_box(records), 75.0));
        });
    }

    group.finish();
}

fn bench_step_tracker(c: &mut Criterion) {
    c.bench_function("step_tracker_week_of_readings", |b| {
        b.iter(|| {
            let mut tracker = StepDayTracker::default();
            let mut total = 100_000_u64;
            for day in 0..7 {
                let today = start_day() + Duration::days(day);
                for _ in 0..96 {
                    total += 37;
                    black_box(tracker.on_reading(total, today));
                }
            }
            tracker.state()
        });
    });
}

fn bench_diary_total_query(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let database = rt.block_on(async {
        let database = Database::new("sqlite::memory:", 1).await.unwrap();
        let diary = database.nutrition();
        for entry in generate_diary(90, 6) {
            diary.insert(&entry).await.unwrap();
        }
        database
    });
    let manager = database.nutrition();
    let diary = &manager;
    let target = start_day() + Duration::days(45);

    c.bench_function("sqlite_total_calories_for_date", |b| {
        b.to_async(&rt).iter(|| async move {
            diary
                .total_calories_for_date(USER, black_box(target))
                .await
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_calorie_target,
    bench_nutrition_aggregation,
    bench_weight_trend,
    bench_step_tracker,
    bench_diary_total_query,
);

criterion_main!(benches);
