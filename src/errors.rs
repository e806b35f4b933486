// ABOUTME: Re-exports the unified error type for the Health Monitor crate
// ABOUTME: AppError, AppResult and ErrorCode live in health-monitor-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Storage, repository and configuration code return [`AppResult`]. The state
//! holder never surfaces these errors: it logs them and keeps the last good
//! state.

pub use health_monitor_core::errors::{AppError, AppResult, ErrorCode};
