// ABOUTME: Core data models for workout exploratory data analysis
// ABOUTME: Re-exports WorkoutRecord, its wire shape, and categorical types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `RawWorkoutRecord`: permissive wire shape of one dataset entry
//! - `WorkoutRecord`: schema-validated workout with index-aligned series
//! - `Gender`: closed categorical set
//! - `Sport`: open-set activity label
//! - `Measurement`: per-sample series channels

mod gender;
mod measurement;
mod sport;
mod workout;

pub use gender::Gender;
pub use measurement::Measurement;
pub use sport::Sport;
pub use workout::{OpaqueToken, RawTimestamp, RawWorkoutRecord, UserId, WorkoutId, WorkoutRecord};
