// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, workout record builders, and dataset file helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `workout_eda`

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use workout_eda_core::models::{Gender, Measurement, Sport, WorkoutRecord};

static INIT_LOGGER: Once = Once::new();

/// Epoch seconds of 2014-08-24T16:45:46Z
pub const BASE_EPOCH: i64 = 1_408_898_746;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        // Another test binary component may have installed one already
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Timestamps at the given offsets from [`BASE_EPOCH`]
pub fn timestamps(offsets: &[i64]) -> Vec<DateTime<Utc>> {
    offsets
        .iter()
        .map(|offset| DateTime::from_timestamp(BASE_EPOCH + offset, 0).unwrap())
        .collect()
}

/// A validated workout with one heart-rate value per sample
pub fn workout(id: &str, user: &str, gender: Gender, sport: &str, offsets: &[i64]) -> WorkoutRecord {
    let heart_rate = (0..offsets.len()).map(|i| Some(120.0 + i as f64)).collect();
    WorkoutRecord::new(id, user, gender, Sport::parse(sport).unwrap(), timestamps(offsets))
        .with_series(Measurement::HeartRate, heart_rate)
        .unwrap()
}

/// A single-sample workout, for sampler tests where time does not matter
pub fn simple_workout(id: &str, user: &str, gender: Gender, sport: &str) -> WorkoutRecord {
    workout(id, user, gender, sport, &[0])
}

/// Dataset entry in the on-disk JSON shape
pub fn record_json(id: i64, user: i64, gender: &str, sport: &str, offsets: &[i64]) -> Value {
    let timestamp: Vec<i64> = offsets.iter().map(|o| BASE_EPOCH + o).collect();
    let heart_rate: Vec<f64> = (0..offsets.len()).map(|i| 100.0 + i as f64).collect();
    let speed: Vec<f64> = (0..offsets.len()).map(|i| 10.0 + i as f64 / 2.0).collect();
    json!({
        "id": id,
        "userId": user,
        "gender": gender,
        "sport": sport,
        "url": "https://www.endomondo.com/users/0/workouts/0",
        "timestamp": timestamp,
        "heart_rate": heart_rate,
        "speed": speed,
    })
}

/// Write entries as JSON lines, plus any raw extra lines, and return the path
pub fn write_jsonl(dir: &Path, name: &str, entries: &[Value], extra_lines: &[&str]) -> PathBuf {
    let mut contents = String::new();
    for entry in entries {
        contents.push_str(&entry.to_string());
        contents.push('\n');
    }
    for line in extra_lines {
        contents.push_str(line);
        contents.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
