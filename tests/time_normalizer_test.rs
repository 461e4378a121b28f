// ABOUTME: Integration tests for the time normalizer
// ABOUTME: Verifies derived feature shapes, round-trip with intervals, and parallel batch ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use workout_eda_analysis::TimeNormalizer;
use workout_eda_core::errors::{DefectCategory, DefectKind};
use workout_eda_core::models::{Gender, WorkoutRecord};

fn irregular_workouts() -> Vec<WorkoutRecord> {
    (0..40_i64)
        .map(|n| {
            let mut offset = 0;
            let offsets: Vec<i64> = (0..=(n % 7))
                .map(|step| {
                    offset += (step * 3 + n) % 11;
                    offset
                })
                .collect();
            common::workout(&format!("w{n}"), "u1", Gender::Female, "run", &offsets)
        })
        .collect()
}

#[test]
fn test_feature_shapes_and_round_trip() {
    common::init_test_logging();

    for record in irregular_workouts() {
        let normalized = TimeNormalizer::normalize(&record).unwrap();
        let n = record.sample_count();

        assert_eq!(normalized.normalized_time.len(), n);
        assert_eq!(normalized.interval.len(), n - 1);
        assert_eq!(normalized.normalized_time[0], 0);
        assert!(normalized.interval.iter().all(|&gap| gap >= 0));
        assert!(normalized
            .normalized_time
            .windows(2)
            .all(|pair| pair[0] <= pair[1]));

        for i in 1..n {
            assert_eq!(
                normalized.normalized_time[i] - normalized.normalized_time[i - 1],
                normalized.interval[i - 1]
            );
        }
        assert_eq!(
            normalized.duration_seconds,
            *normalized.normalized_time.last().unwrap()
        );
        assert_eq!(normalized.start_time, record.timestamps[0]);
    }
}

#[test]
fn test_reference_timestamps() {
    let record = common::workout("w1", "u1", Gender::Male, "run", &[0, 5, 5, 20]);
    let normalized = TimeNormalizer::normalize(&record).unwrap();

    assert_eq!(normalized.interval, vec![5, 0, 15]);
    assert_eq!(normalized.normalized_time, vec![0, 5, 5, 20]);
    assert_eq!(normalized.duration_seconds, 20);
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let mut records = irregular_workouts();
    records.push(common::workout("empty", "u2", Gender::Male, "bike", &[]));
    records.push(common::workout("backwards", "u2", Gender::Male, "bike", &[0, 9, 3]));
    let refs: Vec<&WorkoutRecord> = records.iter().collect();

    let batch = TimeNormalizer::normalize_all(&refs);

    let mut sequential = Vec::new();
    let mut sequential_defects = Vec::new();
    for record in &records {
        match TimeNormalizer::normalize(record) {
            Ok(workout) => sequential.push(workout),
            Err(defect) => sequential_defects.push(defect),
        }
    }

    assert_eq!(batch.workouts, sequential);
    assert_eq!(batch.defects, sequential_defects);
}

#[test]
fn test_empty_and_decreasing_are_excluded_not_zeroed() {
    let records = vec![
        common::workout("ok", "u1", Gender::Male, "run", &[0, 1]),
        common::workout("empty", "u1", Gender::Male, "run", &[]),
        common::workout("backwards", "u1", Gender::Male, "run", &[0, 9, 3]),
    ];
    let refs: Vec<&WorkoutRecord> = records.iter().collect();
    let batch = TimeNormalizer::normalize_all(&refs);

    assert_eq!(batch.workouts.len(), 1);
    assert_eq!(batch.workouts[0].record.id.as_str(), "ok");
    assert_eq!(batch.defects.len(), 2);
    assert!(batch
        .defects
        .iter()
        .all(|defect| defect.category() == DefectCategory::Temporal));
    assert_eq!(batch.defects[0].kind, DefectKind::EmptyTimestamps);
    assert_eq!(batch.defects[0].record_id.as_deref(), Some("empty"));
    assert!(matches!(
        batch.defects[1].kind,
        DefectKind::NonMonotonicTimestamps { index: 2, .. }
    ));
}
