// ABOUTME: Core types and constants for workout exploratory data analysis
// ABOUTME: Foundation crate with error handling, workout models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout EDA Core
//!
//! Foundation crate providing shared types and constants for workout
//! exploratory data analysis. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and per-record `DataQualityError`
//! - **constants**: Dataset field names and default analysis parameters
//! - **models**: `WorkoutRecord`, its permissive wire shape, and categorical types

/// Unified error handling system with standard error codes and data-quality defects
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutRecord`, `Gender`, `Sport`, `Measurement`)
pub mod models;
