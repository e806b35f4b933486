// ABOUTME: System-wide constants and environment variable defaults for Health Monitor
// ABOUTME: Re-exports domain constants from the core crate and adds storage defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Domain constants come from `health-monitor-core`; this module adds the
//! environment-driven values only the application layer needs.

use std::env;

pub use health_monitor_core::constants::{
    default_profile, input_defaults, nutrition, service_names, step_state_keys, weight_history,
    DAY_KEY_FORMAT,
};

/// Storage defaults
pub mod defaults {
    /// Database used when `DATABASE_URL` is not set
    pub const DATABASE_URL: &str = "sqlite:./data/health_monitor.db";
    /// Pool size used when `DATABASE_MAX_CONNECTIONS` is not set
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// In-memory databases are per-connection, so they are pinned to one
    pub const MEMORY_DATABASE_MAX_CONNECTIONS: u32 = 1;
}

/// Environment-based configuration
pub mod env_config {
    use super::{defaults, env};
    use health_monitor_core::constants::default_profile;

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.into())
    }

    /// Get database pool size from environment or default
    #[must_use]
    pub fn database_max_connections() -> u32 {
        env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults::DATABASE_MAX_CONNECTIONS)
    }

    /// Get the tracked user id from environment or default
    #[must_use]
    pub fn user_id() -> String {
        env::var("HEALTH_MONITOR_USER_ID").unwrap_or_else(|_| default_profile::USER_ID.into())
    }

    /// Get the macro preset name from environment, if set
    #[must_use]
    pub fn macro_preset() -> Option<String> {
        env::var("HEALTH_MONITOR_MACRO_PRESET").ok()
    }

    /// Get the deployment environment name from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }
}
