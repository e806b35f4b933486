// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for health-monitor
// ABOUTME: Provides consistent display functions for profiles, records, foods, diary and summaries

use chrono::NaiveDate;
use health_monitor::{
    models::{DailyHealthRecord, FoodReference, MealType, NutritionEntry, UserProfile},
    state::DailySummary,
};
use health_monitor_intelligence::{aggregate_nutrition_for_day, ArchivedDay, GoalProgress};

const PROGRESS_BAR_WIDTH: usize = 20;

/// Display the profile with its derived targets
pub fn display_profile(profile: &UserProfile, summary: &DailySummary) {
    println!("\nProfile");
    println!("{}", "=".repeat(50));
    println!("   Name: {}", profile.name);
    println!("   Sex: {}", profile.sex);
    println!("   Age: {} years", profile.age_years);
    println!("   Height: {:.1} cm", profile.height_cm);
    println!("   Target weight: {:.1} kg", profile.target_weight_kg);
    println!(
        "   Activity: {} ({})",
        profile.activity_level,
        profile.activity_level.description()
    );
    println!("   Goal: {}", profile.weight_goal);
    println!("   Step goal: {}", profile.daily_step_goal);

    println!("\nTargets");
    println!("{}", "-".repeat(50));
    println!("   BMI: {}", format_bmi(summary));
    println!("   Calories: {} kcal/day", summary.calorie_target);
    println!(
        "   Macros: protein {:.0} g, fat {:.0} g, carbs {:.0} g",
        summary.macro_targets.protein_g, summary.macro_targets.fat_g, summary.macro_targets.carbs_g
    );
    println!(
        "   Water: {:.2} L ({} glasses)",
        summary.water_target.liters, summary.water_target.glasses
    );
}

/// Display one day record, hiding fields that were not recorded
pub fn display_health_record(record: &DailyHealthRecord) {
    println!("\n{} ({})", record.date, record.id);
    println!("{}", "-".repeat(50));
    if record.weight_kg > 0.0 {
        println!("   Weight: {:.1} kg", record.weight_kg);
    }
    if record.heart_rate_bpm > 0 {
        println!("   Heart rate: {} bpm", record.heart_rate_bpm);
    }
    if record.systolic > 0 || record.diastolic > 0 {
        println!("   Blood pressure: {}/{} mmHg", record.systolic, record.diastolic);
    }
    if record.steps > 0 {
        println!("   Steps: {}", record.steps);
    }
    if record.sleep_hours > 0.0 {
        println!("   Sleep: {:.1} h", record.sleep_hours);
    }
    if record.water_liters > 0.0 {
        println!("   Water: {:.2} L", record.water_liters);
    }
}

/// Display recorded days, newest first
pub fn display_health_records(records: &[DailyHealthRecord]) {
    if records.is_empty() {
        println!("No health records yet.");
        return;
    }
    println!(
        "{:<12} {:>8} {:>6} {:>9} {:>8} {:>6} {:>6}  ID",
        "Date", "Weight", "HR", "BP", "Steps", "Sleep", "Water"
    );
    println!("{}", "=".repeat(80));
    for record in records.iter().rev() {
        println!(
            "{:<12} {:>8} {:>6} {:>9} {:>8} {:>6} {:>6}  {}",
            record.date.to_string(),
            or_dash(record.weight_kg, 1),
            or_dash(f64::from(record.heart_rate_bpm), 0),
            if record.systolic > 0 || record.diastolic > 0 {
                format!("{}/{}", record.systolic, record.diastolic)
            } else {
                "-".to_owned()
            },
            record.steps,
            or_dash(record.sleep_hours, 1),
            or_dash(record.water_liters, 2),
            record.id
        );
    }
}

/// Display catalog foods with their per-100 g values
pub fn display_foods(foods: &[FoodReference]) {
    if foods.is_empty() {
        println!("No foods found.");
        return;
    }
    println!(
        "{:<24} {:<11} {:>5} {:>7} {:>7} {:>7} {:>7}",
        "Name", "Category", "kcal", "Protein", "Carbs", "Fat", "Fiber"
    );
    println!("{}", "=".repeat(75));
    for food in foods {
        let n = &food.per_100g;
        println!(
            "{:<24} {:<11} {:>5} {:>7.1} {:>7.1} {:>7.1} {:>7.1}",
            food.name,
            food.category.as_str(),
            n.calories,
            n.protein_g,
            n.carbs_g,
            n.fat_g,
            n.fiber_g
        );
    }
}

/// Display a day's diary grouped by meal, with day totals
pub fn display_diary(date: NaiveDate, entries: &[NutritionEntry]) {
    println!("\nFood diary for {date}");
    println!("{}", "=".repeat(60));
    if entries.is_empty() {
        println!("   Nothing logged.");
        return;
    }

    for meal in MealType::ALL {
        let meal_entries: Vec<&NutritionEntry> =
            entries.iter().filter(|e| e.meal_type == meal).collect();
        if meal_entries.is_empty() {
            continue;
        }
        println!("{meal}:");
        for entry in meal_entries {
            println!(
                "   {:<24} {:>6.0} g {:>5} kcal  P {:.1} F {:.1} C {:.1}  [{}]",
                entry.food_name,
                entry.portion_grams,
                entry.calories,
                entry.protein_g,
                entry.fat_g,
                entry.carbs_g,
                entry.id
            );
        }
    }

    let totals = aggregate_nutrition_for_day(entries, date);
    println!("{}", "-".repeat(60));
    println!(
        "   Total: {} kcal, protein {} g, fat {} g, carbs {} g",
        totals.calories, totals.protein_g, totals.fat_g, totals.carbs_g
    );
}

/// Display the dashboard for a day
pub fn display_summary(profile: &UserProfile, summary: &DailySummary) {
    println!("\n{} - {}", profile.name, summary.date);
    println!("{}", "=".repeat(60));

    println!(
        "Calories: {} / {} kcal {}",
        summary.nutrition.calories,
        summary.calorie_target,
        progress_bar(&summary.calorie_progress)
    );
    println!(
        "   Protein {} / {:.0} g, fat {} / {:.0} g, carbs {} / {:.0} g",
        summary.nutrition.protein_g,
        summary.macro_targets.protein_g,
        summary.nutrition.fat_g,
        summary.macro_targets.fat_g,
        summary.nutrition.carbs_g,
        summary.macro_targets.carbs_g
    );

    let source = if summary.display.live_steps {
        "sensor"
    } else {
        "recorded"
    };
    println!(
        "Steps: {} / {} ({source}) {}",
        summary.display.steps,
        profile.daily_step_goal,
        progress_bar(&summary.step_progress)
    );

    if summary.display.weight_kg > 0.0 {
        println!("Weight: {:.1} kg", summary.display.weight_kg);
    }
    let trend = &summary.weight_trend;
    if trend.samples > 1 {
        println!(
            "Weight trend: {:.1} kg ({:+.1} kg over {} weigh-ins)",
            trend.current_kg, trend.delta_kg, trend.samples
        );
    }
    println!("BMI: {}", format_bmi(summary));
    println!(
        "Water target: {:.2} L ({} glasses)",
        summary.water_target.liters, summary.water_target.glasses
    );
}

/// Display today's step count and archived days
pub fn display_steps(today: NaiveDate, today_steps: u64, archived: &[ArchivedDay]) {
    println!("\nSteps");
    println!("{}", "=".repeat(30));
    println!("   {today} (today): {today_steps}");
    for day in archived.iter().rev() {
        println!("   {}: {}", day.date, day.steps);
    }
}

fn progress_bar(progress: &GoalProgress) -> String {
    let filled = (progress.ratio * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled),
        progress.percent
    )
}

fn or_dash(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("{value:.decimals$}")
    } else {
        "-".to_owned()
    }
}

fn format_bmi(summary: &DailySummary) -> String {
    summary.bmi_category.map_or_else(
        || "n/a (height not set)".to_owned(),
        |category| format!("{:.1} ({category})", summary.bmi),
    )
}
