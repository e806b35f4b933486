// ABOUTME: Health Monitor CLI - command-line front end for the personal health tracker
// ABOUTME: Profile, daily metrics, food catalog, food diary, daily summary and step readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show or edit the profile
//! health-monitor profile show
//! health-monitor profile update --age 31 --activity-level active
//!
//! # Log today's metrics (fields not given are kept)
//! health-monitor health log --weight 81.5 --heart-rate 62 --sleep 7.5
//! health-monitor health weight 81.2 --date 2025-06-01
//!
//! # Browse the food catalog and log a portion
//! health-monitor food search chicken
//! health-monitor diary add "Chicken breast" --portion 150 --meal lunch
//!
//! # Dashboard for a day
//! health-monitor summary --date 2025-06-01 --json
//!
//! # Feed a cumulative step sensor reading
//! health-monitor steps reading 10452
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use health_monitor::{
    config::environment::AppConfig,
    database::Database,
    logging::LoggingConfig,
    repository::{HealthRepository, HealthRepositoryImpl},
    state::HealthState,
};
use health_monitor_intelligence::HealthMetricsEngine;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "health-monitor",
    about = "Personal health tracker",
    long_about = "Track body metrics, a food diary and daily steps, with calorie, macro and water targets derived from your profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Tracked user override
    #[arg(long, global = true)]
    user_id: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Daily body metrics commands
    Health {
        #[command(subcommand)]
        action: HealthCommand,
    },

    /// Food catalog commands
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },

    /// Food diary commands
    Diary {
        #[command(subcommand)]
        action: DiaryCommand,
    },

    /// Show the dashboard for a day
    Summary {
        /// Day to summarize (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step counter commands
    Steps {
        #[command(subcommand)]
        action: StepsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the profile with derived targets
    Show,

    /// Edit profile fields; malformed numbers keep the previous value
    Update {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Sex (male, female)
        #[arg(long)]
        sex: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<String>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<String>,

        /// Target weight in kilograms
        #[arg(long)]
        target_weight: Option<String>,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long)]
        activity_level: Option<String>,

        /// Weight goal (lose, maintain, gain)
        #[arg(long)]
        goal: Option<String>,

        /// Daily step goal
        #[arg(long)]
        step_goal: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HealthCommand {
    /// Record metrics for a day; omitted fields keep their stored value
    Log {
        /// Day of the measurements (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Weight in kilograms (malformed: 70)
        #[arg(long)]
        weight: Option<String>,

        /// Heart rate in bpm (malformed: 70)
        #[arg(long)]
        heart_rate: Option<String>,

        /// Systolic blood pressure (mmHg)
        #[arg(long)]
        systolic: Option<String>,

        /// Diastolic blood pressure (mmHg)
        #[arg(long)]
        diastolic: Option<String>,

        /// Step count
        #[arg(long)]
        steps: Option<String>,

        /// Sleep in hours
        #[arg(long)]
        sleep: Option<String>,

        /// Water in liters
        #[arg(long)]
        water: Option<String>,
    },

    /// Record only a weight
    Weight {
        /// Weight in kilograms (malformed: 70)
        weight: String,

        /// Day of the weighing (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List recorded days
    List,

    /// Delete a day record
    Delete {
        /// Record ID
        record_id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodCommand {
    /// List the catalog
    List {
        /// Only foods of this category (meat, dairy, vegetables, fruits, grains, other)
        #[arg(long)]
        category: Option<String>,
    },

    /// Search foods by name
    Search {
        /// Part of the food name
        query: String,
    },

    /// Add a custom food; values are per 100 g
    Add {
        /// Food name
        #[arg(long)]
        name: String,

        /// Category (default other)
        #[arg(long, default_value = "other")]
        category: String,

        /// Calories (malformed: 100)
        #[arg(long, default_value = "")]
        calories: String,

        /// Protein in grams (malformed: 0)
        #[arg(long, default_value = "")]
        protein: String,

        /// Carbohydrates in grams (malformed: 0)
        #[arg(long, default_value = "")]
        carbs: String,

        /// Fat in grams (malformed: 0)
        #[arg(long, default_value = "")]
        fat: String,

        /// Fiber in grams (malformed: 0)
        #[arg(long, default_value = "")]
        fiber: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DiaryCommand {
    /// Log a portion of a catalog food
    Add {
        /// Food ID or name
        food: String,

        /// Portion in grams (malformed: 100)
        #[arg(long, default_value = "")]
        portion: String,

        /// Meal (breakfast, lunch, dinner, snack)
        #[arg(long, default_value = "snack")]
        meal: String,

        /// Day of the meal (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List diary entries of a day
    List {
        /// Day to list (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a diary entry
    Delete {
        /// Entry ID
        entry_id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum StepsCommand {
    /// Feed a cumulative sensor reading taken now
    Reading {
        /// Steps since sensor boot
        total: u64,
    },

    /// Show today's count and archived days
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    debug!("{}", config.summary());

    let database_url = cli
        .database_url
        .unwrap_or_else(|| config.database.url.to_connection_string());
    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url, config.effective_max_connections()).await?;

    let repository: Arc<dyn HealthRepository> =
        Arc::new(HealthRepositoryImpl::new(database.clone()));
    let engine = HealthMetricsEngine::new(config.metrics.clone());
    let user_id = cli.user_id.unwrap_or_else(|| config.user_id.clone());
    let state = HealthState::new(repository, engine, user_id);
    state.load_initial().await?;

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&state),
            ProfileCommand::Update {
                name,
                sex,
                age,
                height,
                target_weight,
                activity_level,
                goal,
                step_goal,
            } => {
                let edit = commands::profile::ProfileEdit {
                    name,
                    sex,
                    age,
                    height,
                    target_weight,
                    activity_level,
                    goal,
                    step_goal,
                };
                commands::profile::update(&state, edit).await?;
            }
        },
        Command::Health { action } => match action {
            HealthCommand::Log {
                date,
                weight,
                heart_rate,
                systolic,
                diastolic,
                steps,
                sleep,
                water,
            } => {
                let input = commands::health::MetricsInput {
                    weight,
                    heart_rate,
                    systolic,
                    diastolic,
                    steps,
                    sleep,
                    water,
                };
                commands::health::log(&state, date, &input).await?;
            }
            HealthCommand::Weight { weight, date } => {
                commands::health::weight(&state, &weight, date).await?;
            }
            HealthCommand::List => commands::health::list(&state),
            HealthCommand::Delete { record_id } => {
                commands::health::delete(&state, &record_id).await?;
            }
        },
        Command::Food { action } => match action {
            FoodCommand::List { category } => {
                commands::food::list(&state, category.as_deref()).await;
            }
            FoodCommand::Search { query } => commands::food::search(&state, &query).await,
            FoodCommand::Add {
                name,
                category,
                calories,
                protein,
                carbs,
                fat,
                fiber,
            } => {
                let input = commands::food::FoodInput {
                    name,
                    category,
                    calories,
                    protein,
                    carbs,
                    fat,
                    fiber,
                };
                commands::food::add(&state, &input).await?;
            }
        },
        Command::Diary { action } => match action {
            DiaryCommand::Add {
                food,
                portion,
                meal,
                date,
            } => {
                commands::diary::add(&state, &food, &portion, &meal, date).await?;
            }
            DiaryCommand::List { date } => commands::diary::list(&state, date),
            DiaryCommand::Delete { entry_id } => {
                commands::diary::delete(&state, &entry_id).await?;
            }
        },
        Command::Summary { date, json } => {
            commands::summary::show(&state, &database, date, json).await?;
        }
        Command::Steps { action } => match action {
            StepsCommand::Reading { total } => {
                commands::steps::reading(&state, &database, total).await?;
            }
            StepsCommand::Show => commands::steps::show(&database).await?,
        },
    }

    database.close().await;
    Ok(())
}
