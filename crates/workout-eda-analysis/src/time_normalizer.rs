// ABOUTME: Time normalizer deriving duration, start time, normalized time and intervals
// ABOUTME: Reports empty or decreasing timestamp sequences as temporal defects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Time Normalizer
//!
//! Converts the timestamp sequence of one workout into whole-second temporal
//! features. Given timestamps `[T, T+5s, T+5s, T+20s]` it produces
//! `normalized_time = [0, 5, 5, 20]`, `interval = [5, 0, 15]` and
//! `duration_seconds = 20`.

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use rayon::prelude::*;
use tracing::debug;
use workout_eda_core::errors::{DataQualityError, DefectKind};
use workout_eda_core::models::WorkoutRecord;

/// Derived temporal view of a workout record
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedWorkout<'a> {
    /// Record the features were derived from
    pub record: &'a WorkoutRecord,
    /// First timestamp sample
    pub start_time: DateTime<Utc>,
    /// Whole seconds between the first and last sample
    pub duration_seconds: i64,
    /// Whole seconds since the first sample, one per sample
    pub normalized_time: Vec<i64>,
    /// Whole seconds since the previous sample, one per sample after the first
    pub interval: Vec<i64>,
}

impl NormalizedWorkout<'_> {
    /// Elapsed time between first and last sample
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.duration_seconds)
    }

    /// Clock time of day at which the workout started (UTC)
    #[must_use]
    pub fn start_time_of_day(&self) -> NaiveTime {
        self.start_time.time()
    }

    /// Number of samples
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.normalized_time.len()
    }
}

/// Normalized workouts and the records that could not be normalized
#[derive(Debug, Clone, Default)]
pub struct NormalizationBatch<'a> {
    /// Successfully normalized workouts in input order
    pub workouts: Vec<NormalizedWorkout<'a>>,
    /// Temporal defects of excluded records in input order
    pub defects: Vec<DataQualityError>,
}

/// Stateless temporal feature derivation
pub struct TimeNormalizer;

impl TimeNormalizer {
    /// Derive temporal features for one workout
    ///
    /// # Errors
    ///
    /// Returns a temporal defect if the timestamp sequence is empty or
    /// decreases anywhere; no features are produced for such a record.
    pub fn normalize(record: &WorkoutRecord) -> Result<NormalizedWorkout<'_>, DataQualityError> {
        let timestamps = &record.timestamps;
        let Some(&start_time) = timestamps.first() else {
            return Err(DataQualityError::empty_timestamps(record.id.as_str()));
        };

        Self::check_monotonic(record)?;

        let normalized_time: Vec<i64> = timestamps
            .iter()
            .map(|ts| (*ts - start_time).num_seconds())
            .collect();
        let interval: Vec<i64> = timestamps
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_seconds())
            .collect();
        let duration_seconds = normalized_time.last().copied().unwrap_or(0);

        Ok(NormalizedWorkout {
            record,
            start_time,
            duration_seconds,
            normalized_time,
            interval,
        })
    }

    /// Normalize many workouts in parallel
    ///
    /// Output order follows input order regardless of thread count.
    #[must_use]
    pub fn normalize_all<'a>(records: &[&'a WorkoutRecord]) -> NormalizationBatch<'a> {
        let outcomes: Vec<Result<NormalizedWorkout<'a>, DataQualityError>> = records
            .par_iter()
            .map(|&record| Self::normalize(record))
            .collect();

        let mut batch = NormalizationBatch {
            workouts: Vec::with_capacity(outcomes.len()),
            defects: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                Ok(workout) => batch.workouts.push(workout),
                Err(defect) => {
                    debug!(
                        workout_id = defect.record_id.as_deref().unwrap_or("unknown"),
                        defect = %defect.kind,
                        "Workout excluded from time normalization"
                    );
                    batch.defects.push(defect);
                }
            }
        }
        batch
    }

    fn check_monotonic(record: &WorkoutRecord) -> Result<(), DataQualityError> {
        let decrease = record
            .timestamps
            .windows(2)
            .position(|pair| pair[1] < pair[0]);

        match decrease {
            None => Ok(()),
            Some(offset) => {
                let previous = record.timestamps[offset].timestamp();
                let current = record.timestamps[offset + 1].timestamp();
                Err(DataQualityError::new(
                    Some(record.id.to_string()),
                    DefectKind::NonMonotonicTimestamps {
                        index: offset + 1,
                        previous,
                        current,
                    },
                ))
            }
        }
    }
}
