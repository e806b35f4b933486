// ABOUTME: Core types and constants for the Health Monitor personal health tracker
// ABOUTME: Foundation crate with error handling, domain models, constants, and input parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Monitor Core
//!
//! Foundation crate providing shared types and constants for the Health Monitor
//! tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Profile, daily health record, nutrition entry and food reference
//! - **input**: Lossy parsing of user-typed numeric fields with documented defaults

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and default values organized by domain
pub mod constants;

/// Core data models (profile, daily health records, nutrition diary, food catalog)
pub mod models;

/// Parsing of free-text numeric input with fallback defaults
pub mod input;
