// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for health-monitor
// ABOUTME: Provides profile, health, food, diary, summary and step commands

pub mod diary;
pub mod food;
pub mod health;
pub mod profile;
pub mod steps;
pub mod summary;
