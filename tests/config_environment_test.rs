// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates parsing of database URLs, presets, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_monitor::config::environment::{
    AppConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel,
};
use health_monitor_intelligence::MacroPreset;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const MANAGED_VARS: [&str; 6] = [
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "HEALTH_MONITOR_USER_ID",
    "HEALTH_MONITOR_MACRO_PRESET",
    "ENVIRONMENT",
    "RUST_LOG",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_database_url_parsing() {
    assert_eq!(
        DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
        DatabaseUrl::Memory
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:./data/health.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/health.db")
        }
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:///var/lib/health.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("/var/lib/health.db")
        }
    );

    // Bare paths are SQLite files
    let bare = DatabaseUrl::parse_url("health.db").unwrap();
    assert_eq!(bare.to_connection_string(), "sqlite:health.db");

    assert!(DatabaseUrl::parse_url("postgresql://localhost/health").is_err());
    assert!(DatabaseUrl::parse_url("sqlite:").is_err());
}

#[test]
fn test_database_defaults() {
    let config = DatabaseConfig::default();
    assert!(!config.url.is_memory());
    assert_eq!(
        config.url.to_connection_string(),
        "sqlite:./data/health_monitor.db"
    );
    assert_eq!(config.max_connections, 5);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.user_id, "user_1");
    assert_eq!(config.metrics.macro_preset, MacroPreset::Balanced);
    assert!(config.summary().contains("Macro Preset: balanced"));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("DATABASE_MAX_CONNECTIONS", "8");
    env::set_var("HEALTH_MONITOR_USER_ID", "alex");
    env::set_var("HEALTH_MONITOR_MACRO_PRESET", "40-30-30");
    env::set_var("ENVIRONMENT", "production");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.database.url.is_memory());
    assert_eq!(config.database.max_connections, 8);
    // In-memory databases are per-connection
    assert_eq!(config.effective_max_connections(), 1);
    assert_eq!(config.user_id, "alex");
    assert_eq!(config.metrics.macro_preset, MacroPreset::Classic);
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_from_env_rejects_bad_values() {
    clear_env();
    env::set_var("HEALTH_MONITOR_MACRO_PRESET", "keto");
    assert!(AppConfig::from_env().is_err());

    clear_env();
    env::set_var("HEALTH_MONITOR_USER_ID", "   ");
    assert!(AppConfig::from_env().is_err());

    clear_env();
    env::set_var("DATABASE_MAX_CONNECTIONS", "0");
    assert!(AppConfig::from_env().is_err());

    clear_env();
}
