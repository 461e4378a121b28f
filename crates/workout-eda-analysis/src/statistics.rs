// ABOUTME: Summary statistics over workout records and normalized workouts
// ABOUTME: Dataset overview, per-series describe, per-workout and per-feature summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Summary Statistics
//!
//! All maps are ordered so that serialized reports are stable between runs.

use crate::time_normalizer::NormalizedWorkout;
use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use workout_eda_core::models::{Gender, Measurement, Sport, UserId, WorkoutRecord};

/// Describe-style summary of one numeric series
///
/// Sentinels (`None`) and non-finite values are counted as missing and
/// excluded from every other statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// Present values
    pub count: usize,
    /// Missing values
    pub missing: usize,
    /// Arithmetic mean of present values
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1), needs at least two values
    pub std_dev: Option<f64>,
    /// Smallest present value
    pub min: Option<f64>,
    /// Largest present value
    pub max: Option<f64>,
}

impl SeriesSummary {
    /// Summarize a series that may contain sentinels
    pub fn from_optional<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut missing = 0usize;
        let present: Vec<f64> = values
            .into_iter()
            .filter_map(|value| match value {
                Some(v) if v.is_finite() => Some(v),
                _ => {
                    missing += 1;
                    None
                }
            })
            .collect();

        let mut summary = Self::from_present(&present);
        summary.missing = missing;
        summary
    }

    /// Summarize a series of present values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_optional(values.into_iter().map(Some))
    }

    fn from_present(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = (values.len() > 1).then(|| {
            let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        });
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count: values.len(),
            missing: 0,
            mean: Some(mean),
            std_dev,
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Min / max / mean of a per-group count
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CountDistribution {
    /// Smallest group
    pub min: usize,
    /// Largest group
    pub max: usize,
    /// Mean group size
    pub mean: f64,
}

impl CountDistribution {
    fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let counts: Vec<usize> = counts.into_iter().collect();
        if counts.is_empty() {
            return Self::default();
        }
        Self {
            min: counts.iter().copied().min().unwrap_or(0),
            max: counts.iter().copied().max().unwrap_or(0),
            mean: counts.iter().sum::<usize>() as f64 / counts.len() as f64,
        }
    }
}

/// Categorical breakdown of a workout collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetOverview {
    /// Number of workouts
    pub workouts: usize,
    /// Number of distinct users
    pub distinct_users: usize,
    /// Workouts per gender
    pub workouts_per_gender: BTreeMap<Gender, usize>,
    /// Distinct users per gender
    pub users_per_gender: BTreeMap<Gender, usize>,
    /// Workouts per sport
    pub workouts_per_sport: BTreeMap<Sport, usize>,
    /// Distribution of workout counts across users
    pub workouts_per_user: CountDistribution,
}

impl DatasetOverview {
    /// Build an overview from any collection of records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a WorkoutRecord>,
    {
        let mut overview = Self::default();
        let mut per_user: BTreeMap<&UserId, usize> = BTreeMap::new();
        let mut users_by_gender: BTreeMap<Gender, BTreeSet<&UserId>> = BTreeMap::new();

        for record in records {
            overview.workouts += 1;
            *overview.workouts_per_gender.entry(record.gender).or_default() += 1;
            *overview
                .workouts_per_sport
                .entry(record.sport.clone())
                .or_default() += 1;
            *per_user.entry(&record.user_id).or_default() += 1;
            users_by_gender
                .entry(record.gender)
                .or_default()
                .insert(&record.user_id);
        }

        overview.distinct_users = per_user.len();
        overview.users_per_gender = users_by_gender
            .into_iter()
            .map(|(gender, users)| (gender, users.len()))
            .collect();
        overview.workouts_per_user = CountDistribution::from_counts(per_user.into_values());
        overview
    }
}

/// One-row summary of a normalized workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Workout id
    pub id: String,
    /// Athlete id
    pub user_id: String,
    /// Athlete gender
    pub gender: Gender,
    /// Activity label
    pub sport: Sport,
    /// Number of samples
    pub samples: usize,
    /// First sample instant
    pub start_time: DateTime<Utc>,
    /// Clock time of the first sample
    pub start_time_of_day: NaiveTime,
    /// Whole seconds between first and last sample
    pub duration_seconds: i64,
    /// Mean seconds between consecutive samples
    pub mean_interval_seconds: Option<f64>,
    /// Longest gap between consecutive samples
    pub max_interval_seconds: Option<i64>,
    /// Mean heart rate
    pub avg_heart_rate: Option<f64>,
    /// Peak heart rate
    pub max_heart_rate: Option<f64>,
    /// Mean speed
    pub avg_speed: Option<f64>,
    /// Peak speed
    pub max_speed: Option<f64>,
    /// Lowest altitude
    pub min_altitude: Option<f64>,
    /// Highest altitude
    pub max_altitude: Option<f64>,
}

impl WorkoutSummary {
    /// Summarize one normalized workout
    #[must_use]
    pub fn from_normalized(workout: &NormalizedWorkout<'_>) -> Self {
        let record = workout.record;
        let heart_rate =
            SeriesSummary::from_optional(record.series(Measurement::HeartRate).iter().copied());
        let speed = SeriesSummary::from_optional(record.series(Measurement::Speed).iter().copied());
        let altitude =
            SeriesSummary::from_optional(record.series(Measurement::Altitude).iter().copied());
        let intervals = SeriesSummary::from_values(workout.interval.iter().map(|&s| s as f64));

        Self {
            id: record.id.to_string(),
            user_id: record.user_id.to_string(),
            gender: record.gender,
            sport: record.sport.clone(),
            samples: workout.sample_count(),
            start_time: workout.start_time,
            start_time_of_day: workout.start_time_of_day(),
            duration_seconds: workout.duration_seconds,
            mean_interval_seconds: intervals.mean,
            max_interval_seconds: workout.interval.iter().copied().max(),
            avg_heart_rate: heart_rate.mean,
            max_heart_rate: heart_rate.max,
            avg_speed: speed.mean,
            max_speed: speed.max,
            min_altitude: altitude.min,
            max_altitude: altitude.max,
        }
    }
}

/// Dataset-level describe of every measurement and derived feature
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureSummary {
    /// Per-measurement summaries across all samples of all workouts
    pub measurements: BTreeMap<Measurement, SeriesSummary>,
    /// Workout durations in seconds
    pub duration_seconds: SeriesSummary,
    /// Sample intervals in seconds across all workouts
    pub interval_seconds: SeriesSummary,
    /// Samples per workout
    pub samples_per_workout: SeriesSummary,
}

impl FeatureSummary {
    /// Summarize a batch of normalized workouts
    #[must_use]
    pub fn from_workouts(workouts: &[NormalizedWorkout<'_>]) -> Self {
        let measurements = Measurement::ALL
            .into_iter()
            .map(|measurement| {
                let values = workouts
                    .iter()
                    .flat_map(|w| w.record.series(measurement).iter().copied());
                (measurement, SeriesSummary::from_optional(values))
            })
            .collect();

        Self {
            measurements,
            duration_seconds: SeriesSummary::from_values(
                workouts.iter().map(|w| w.duration_seconds as f64),
            ),
            interval_seconds: SeriesSummary::from_values(
                workouts
                    .iter()
                    .flat_map(|w| w.interval.iter().map(|&s| s as f64)),
            ),
            samples_per_workout: SeriesSummary::from_values(
                workouts.iter().map(|w| w.sample_count() as f64),
            ),
        }
    }
}
