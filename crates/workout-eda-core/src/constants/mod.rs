// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Dataset field names, analysis defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Field names as they appear in the JSON workout dataset
pub mod fields {
    /// Workout identifier
    pub const ID: &str = "id";
    /// Athlete identifier
    pub const USER_ID: &str = "userId";
    /// Athlete gender
    pub const GENDER: &str = "gender";
    /// Activity label
    pub const SPORT: &str = "sport";
    /// Per-sample absolute timestamps (Unix epoch seconds)
    pub const TIMESTAMP: &str = "timestamp";
    /// Per-sample altitude
    pub const ALTITUDE: &str = "altitude";
    /// Per-sample heart rate
    pub const HEART_RATE: &str = "heart_rate";
    /// Per-sample latitude
    pub const LATITUDE: &str = "latitude";
    /// Per-sample longitude
    pub const LONGITUDE: &str = "longitude";
    /// Per-sample speed
    pub const SPEED: &str = "speed";
}

/// Default analysis parameters
pub mod defaults {
    /// Default cap on distinct users kept per gender value
    pub const MAX_USERS_PER_GENDER: i64 = 5;
    /// Default cap on distinct workouts kept per sport value
    pub const MAX_WORKOUTS_PER_SPORT: i64 = 10;
    /// Export per-sample projection rows unless disabled
    pub const EXPORT_SAMPLES: bool = true;
    /// Default output directory for exported tables
    pub const OUTPUT_DIR: &str = "./eda_output";
}

/// Output file names written by the exporter
pub mod output_files {
    /// One row per sample of each normalized workout
    pub const SAMPLES: &str = "samples.jsonl";
    /// One row per normalized workout
    pub const WORKOUTS: &str = "workouts.jsonl";
    /// Dataset overview, feature summary, sampling report and defects
    pub const REPORT: &str = "report.json";
}

/// Service identification
pub mod service_names {
    /// Name used in structured logs
    pub const WORKOUT_EDA: &str = "workout-eda";
}

/// Process exit codes (sysexits.h)
pub mod exit_codes {
    /// Input data was incorrect
    pub const DATA_ERROR: i32 = 65;
    /// Input file did not exist or was not readable
    pub const NO_INPUT: i32 = 66;
    /// Internal software error
    pub const SOFTWARE: i32 = 70;
    /// Input/output error
    pub const IO_ERROR: i32 = 74;
    /// Configuration error
    pub const CONFIG: i32 = 78;
}
