// ABOUTME: Workout analysis engine: balanced sampling, time normalization, summary statistics
// ABOUTME: Pure, stateless transformations over in-memory workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout EDA Analysis
//!
//! - **sampler**: gender- and sport-balanced, deterministic subset selection
//! - **time_normalizer**: duration, start time, normalized time and intervals per workout
//! - **statistics**: dataset overview, per-series "describe", per-workout summaries
//! - **config**: sampling caps and configuration errors

/// Sampling caps and configuration error types
pub mod config;

/// Balanced subset selection bounded by per-gender and per-sport caps
pub mod sampler;

/// Summary statistics over records and normalized workouts
pub mod statistics;

/// Temporal feature derivation from timestamp sequences
pub mod time_normalizer;

pub use config::{ConfigError, SamplingCaps};
pub use sampler::{BalancedSampler, SampledSubset, SamplingReport, ValidatedSample};
pub use statistics::{
    CountDistribution, DatasetOverview, FeatureSummary, SeriesSummary, WorkoutSummary,
};
pub use time_normalizer::{NormalizationBatch, NormalizedWorkout, TimeNormalizer};
