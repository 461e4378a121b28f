// ABOUTME: Main library entry point for workout dataset exploratory analysis
// ABOUTME: Wires loading, balanced sampling, time normalization, summaries, and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout EDA
//!
//! Exploratory analysis over a fitness workout dataset in which every record
//! is one recorded session with per-sample sensor series.
//!
//! ## Architecture
//!
//! - **`workout-eda-core`**: record model, schema validation, error types
//! - **`workout-eda-analysis`**: balanced sampler, time normalizer, statistics
//! - **this crate**: configuration, logging, dataset loading, export, pipeline
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_eda::config::PipelineConfig;
//! use workout_eda::pipeline::run_pipeline;
//! use workout_eda_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = PipelineConfig::new("endomondo.json")
//!         .with_output_dir("eda_output")
//!         .with_max_users_per_gender(5)
//!         .with_max_workouts_per_sport(10);
//!
//!     let outcome = run_pipeline(&config)?;
//!     println!("normalized {} workouts", outcome.report.normalized_workouts);
//!     Ok(())
//! }
//! ```

/// Environment-driven pipeline configuration
pub mod config;

/// Dataset file reading and validation
pub mod dataset;

/// JSON-lines projection and report output
pub mod export;

/// Structured logging setup
pub mod logging;

/// Stage orchestration
pub mod pipeline;

/// Aggregated run report
pub mod report;
