// ABOUTME: Configuration management module for Health Monitor settings
// ABOUTME: Environment-only configuration with typed values and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Health Monitor
//!
//! Everything is read from environment variables at startup; there is no
//! configuration file. Formula constants live in
//! `health_monitor_intelligence::config::MetricsConfig`.

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel};
