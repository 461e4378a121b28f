// ABOUTME: Benchmark test fixtures for generating realistic workout records
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating realistic workout records.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{DateTime, Utc};
use workout_eda_core::models::{Gender, Measurement, Sport, WorkoutRecord};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum WorkoutBatchSize {
    /// Small dataset (100 workouts) - quick benchmarks
    Small,
    /// Medium dataset (1000 workouts) - a filtered dataset slice
    Medium,
}

impl WorkoutBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Medium => 1000,
        }
    }
}

/// Samples per generated workout, close to the dataset's fixed 500
pub const SAMPLES_PER_WORKOUT: usize = 500;

const BASE_EPOCH: i64 = 1_408_898_746;
const SPORTS: [&str; 4] = ["run", "bike", "mountain bike", "walk"];

/// Generate a single workout with irregular sampling
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn generate_workout(index: usize) -> Option<WorkoutRecord> {
    let gender = match index % 3 {
        0 => Gender::Male,
        1 => Gender::Female,
        _ => Gender::Unknown,
    };
    let sport = Sport::parse(SPORTS[index % SPORTS.len()])?;
    let start = BASE_EPOCH + (index as i64) * 86_400;

    let mut offset = 0_i64;
    let mut timestamps: Vec<DateTime<Utc>> = Vec::with_capacity(SAMPLES_PER_WORKOUT);
    for sample in 0..SAMPLES_PER_WORKOUT {
        offset += ((index + sample * 7) % 12) as i64;
        timestamps.push(DateTime::from_timestamp(start + offset, 0)?);
    }

    let heart_rate = (0..SAMPLES_PER_WORKOUT)
        .map(|sample| (sample % 50 != 0).then(|| 110.0 + ((index + sample) % 60) as f64))
        .collect();
    let speed = (0..SAMPLES_PER_WORKOUT)
        .map(|sample| Some(8.0 + ((index * 3 + sample) % 20) as f64 / 2.0))
        .collect();

    WorkoutRecord::new(
        format!("w{index}"),
        format!("u{}", index / 4),
        gender,
        sport,
        timestamps,
    )
    .with_series(Measurement::HeartRate, heart_rate)
    .ok()?
    .with_series(Measurement::Speed, speed)
    .ok()
}

/// Generate a batch of workouts
#[must_use]
pub fn generate_workouts(size: WorkoutBatchSize) -> Vec<WorkoutRecord> {
    (0..size.count()).filter_map(generate_workout).collect()
}
