// ABOUTME: Main library entry point for the Health Monitor personal health tracker
// ABOUTME: Wires SQLite storage, the repository facade, observable state, and the step counter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Monitor
//!
//! A personal health tracker: body metrics per calendar day, a food diary with
//! per-portion calorie and macro computation, and a step counter that buckets
//! cumulative sensor readings into days.
//!
//! ## Architecture
//!
//! - **Database**: `SQLite` tables behind per-table managers
//! - **Repository**: `HealthRepository` async facade used by everything above storage
//! - **State**: `HealthState`, an observable holder pushing the latest value to subscribers
//! - **Steps**: `StepCounter`, consuming cumulative sensor readings
//! - **Config / Logging**: environment-only configuration and `tracing` setup
//!
//! Formulas live in `health-monitor-intelligence`; shared types in
//! `health-monitor-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use health_monitor::config::environment::AppConfig;
//! use health_monitor::database::Database;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let database = Database::new(
//!         &config.database.url.to_connection_string(),
//!         config.effective_max_connections(),
//!     )
//!     .await?;
//!     println!("Connected, tracking user {}", config.user_id);
//!     drop(database);
//!     Ok(())
//! }
//! ```

/// Unified error types re-exported from the core crate
pub mod errors;

/// Application constants and environment variable defaults
pub mod constants;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// `SQLite` storage layer
pub mod database;

/// Async repository facade over the database
pub mod repository;

/// Observable application state
pub mod state;

/// Step counter service
pub mod steps;

pub use health_monitor_core::models;
