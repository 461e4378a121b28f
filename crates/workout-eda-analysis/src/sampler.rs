// ABOUTME: Balanced sampler selecting a bounded, gender- and sport-balanced workout subset
// ABOUTME: Deterministic encounter-order selection; both caps hold on the returned subset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Balanced Sampler
//!
//! Selection runs in two passes over the input in its given order:
//!
//! 1. **User cap**: for each gender, the first `max_users_per_gender`
//!    distinct users encountered are admitted. Every record of an admitted
//!    user survives this pass.
//! 2. **Sport cap**: over the survivors, for each sport, the first
//!    `max_workouts_per_sport` distinct workout ids encountered are admitted.
//!
//! The second pass only removes records, so the per-gender user bound from
//! the first pass still holds on the final subset. Output order matches input
//! order, which makes the result reproducible for a fixed input and fixed caps.

use crate::config::SamplingCaps;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};
use workout_eda_core::errors::DataQualityError;
use workout_eda_core::models::{Gender, RawWorkoutRecord, Sport, UserId, WorkoutId, WorkoutRecord};

/// Outcome counters for one sampling run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SamplingReport {
    /// Caps the run was configured with
    pub caps: Option<SamplingCaps>,
    /// Records offered to the sampler
    pub input_records: usize,
    /// Records in the returned subset
    pub selected_records: usize,
    /// Records dropped because their user was beyond the per-gender cap
    pub rejected_by_user_cap: usize,
    /// Records dropped because their sport's workout cap was exhausted
    pub rejected_by_sport_cap: usize,
    /// Distinct users represented per gender in the returned subset
    pub users_per_gender: BTreeMap<Gender, usize>,
    /// Distinct workouts represented per sport in the returned subset
    pub workouts_per_sport: BTreeMap<Sport, usize>,
}

/// Bounded subset of workout records, borrowed from the caller's collection
#[derive(Debug, Clone)]
pub struct SampledSubset<'a> {
    records: Vec<&'a WorkoutRecord>,
    report: SamplingReport,
}

impl<'a> SampledSubset<'a> {
    /// Selected records in input order
    #[must_use]
    pub fn records(&self) -> &[&'a WorkoutRecord] {
        &self.records
    }

    /// Counters describing the selection
    #[must_use]
    pub const fn report(&self) -> &SamplingReport {
        &self.report
    }

    /// Number of selected records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids of the selected workouts in order
    #[must_use]
    pub fn workout_ids(&self) -> Vec<&'a WorkoutId> {
        self.records.iter().map(|record| &record.id).collect()
    }

    /// Clone the selected records into an owned collection
    #[must_use]
    pub fn into_owned(self) -> Vec<WorkoutRecord> {
        self.records.into_iter().cloned().collect()
    }
}

/// Result of sampling raw, not yet validated records
#[derive(Debug, Clone)]
pub struct ValidatedSample {
    /// Selected, schema-valid records in input order
    pub records: Vec<WorkoutRecord>,
    /// Counters describing the selection over the valid records
    pub report: SamplingReport,
    /// Schema defects of the records that were excluded before sampling
    pub defects: Vec<DataQualityError>,
}

/// Deterministic sampler bounded by per-gender user and per-sport workout caps
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedSampler {
    caps: SamplingCaps,
}

impl BalancedSampler {
    /// Create a sampler with the given caps
    #[must_use]
    pub const fn new(caps: SamplingCaps) -> Self {
        Self { caps }
    }

    /// Select a balanced subset of `records`
    ///
    /// Caps `<= 0` yield an empty subset. When both caps exceed the distinct
    /// counts present, every record is returned unchanged.
    #[must_use]
    pub fn sample<'a>(&self, records: &'a [WorkoutRecord]) -> SampledSubset<'a> {
        let refs: Vec<&'a WorkoutRecord> = records.iter().collect();
        self.sample_refs(&refs)
    }

    /// Select a balanced subset from already-borrowed records
    #[must_use]
    pub fn sample_refs<'a>(&self, records: &[&'a WorkoutRecord]) -> SampledSubset<'a> {
        let (selected, report) = self.select_indices(records);
        SampledSubset {
            records: selected.into_iter().map(|index| records[index]).collect(),
            report,
        }
    }

    /// Validate raw records, then sample the valid ones
    ///
    /// Malformed records are excluded and reported; they never count against
    /// a cap, so they cannot change which valid records are selected.
    #[must_use]
    pub fn sample_raw(&self, raw_records: Vec<RawWorkoutRecord>) -> ValidatedSample {
        let validated: Vec<Result<WorkoutRecord, DataQualityError>> = raw_records
            .into_par_iter()
            .map(WorkoutRecord::try_from)
            .collect();

        let mut valid = Vec::with_capacity(validated.len());
        let mut defects = Vec::new();
        for outcome in validated {
            match outcome {
                Ok(record) => valid.push(record),
                Err(defect) => defects.push(defect),
            }
        }

        let refs: Vec<&WorkoutRecord> = valid.iter().collect();
        let (selected, report) = self.select_indices(&refs);
        let selected: HashSet<usize> = selected.into_iter().collect();

        let records = valid
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| selected.contains(&index).then_some(record))
            .collect();

        ValidatedSample {
            records,
            report,
            defects,
        }
    }

    /// Indices of the selected records in input order, with run counters
    fn select_indices(&self, records: &[&WorkoutRecord]) -> (Vec<usize>, SamplingReport) {
        let user_survivors = self.apply_user_cap(records);
        let rejected_by_user_cap = records.len() - user_survivors.len();

        let selected = self.apply_sport_cap(records, &user_survivors);
        let rejected_by_sport_cap = user_survivors.len() - selected.len();

        let chosen: Vec<&WorkoutRecord> = selected.iter().map(|&index| records[index]).collect();
        let report = SamplingReport {
            caps: Some(self.caps),
            input_records: records.len(),
            selected_records: selected.len(),
            rejected_by_user_cap,
            rejected_by_sport_cap,
            users_per_gender: distinct_users_per_gender(&chosen),
            workouts_per_sport: distinct_workouts_per_sport(&chosen),
        };

        debug!(
            input = report.input_records,
            selected = report.selected_records,
            rejected_by_user_cap,
            rejected_by_sport_cap,
            max_users_per_gender = self.caps.max_users_per_gender,
            max_workouts_per_sport = self.caps.max_workouts_per_sport,
            "Balanced sampling complete"
        );

        (selected, report)
    }

    /// First pass: admit the first `user_limit` distinct users of each gender
    fn apply_user_cap(&self, records: &[&WorkoutRecord]) -> Vec<usize> {
        let limit = self.caps.user_limit();
        let mut admitted: BTreeMap<Gender, HashSet<&UserId>> = BTreeMap::new();
        let mut survivors = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let users = admitted.entry(record.gender).or_default();
            if users.contains(&record.user_id) {
                survivors.push(index);
            } else if users.len() < limit {
                users.insert(&record.user_id);
                survivors.push(index);
            } else {
                trace!(
                    workout_id = %record.id,
                    user_id = %record.user_id,
                    gender = %record.gender,
                    "Workout excluded by per-gender user cap"
                );
            }
        }

        survivors
    }

    /// Second pass over the survivors: admit the first `workout_limit` distinct workouts of each sport
    fn apply_sport_cap(&self, records: &[&WorkoutRecord], candidates: &[usize]) -> Vec<usize> {
        let limit = self.caps.workout_limit();
        let mut admitted: BTreeMap<&Sport, HashSet<&WorkoutId>> = BTreeMap::new();
        let mut selected = Vec::with_capacity(candidates.len());

        for &index in candidates {
            let record = records[index];
            let workouts = admitted.entry(&record.sport).or_default();
            if workouts.contains(&record.id) {
                selected.push(index);
            } else if workouts.len() < limit {
                workouts.insert(&record.id);
                selected.push(index);
            } else {
                trace!(
                    workout_id = %record.id,
                    sport = %record.sport,
                    "Workout excluded by per-sport workout cap"
                );
            }
        }

        selected
    }
}

fn distinct_users_per_gender(records: &[&WorkoutRecord]) -> BTreeMap<Gender, usize> {
    let mut users: BTreeMap<Gender, HashSet<&UserId>> = BTreeMap::new();
    for record in records {
        users.entry(record.gender).or_default().insert(&record.user_id);
    }
    users.into_iter().map(|(gender, set)| (gender, set.len())).collect()
}

fn distinct_workouts_per_sport(records: &[&WorkoutRecord]) -> BTreeMap<Sport, usize> {
    let mut workouts: BTreeMap<&Sport, HashSet<&WorkoutId>> = BTreeMap::new();
    for record in records {
        workouts.entry(&record.sport).or_default().insert(&record.id);
    }
    workouts
        .into_iter()
        .map(|(sport, set)| (sport.clone(), set.len()))
        .collect()
}
