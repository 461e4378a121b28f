// ABOUTME: Configuration module for the workout analysis crate
// ABOUTME: Sampling caps and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use workout_eda_core::constants::defaults;

/// Upper bounds applied by the balanced sampler
///
/// Caps are signed so that values read from the environment or the command
/// line keep their meaning: any cap `<= 0` selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingCaps {
    /// Maximum distinct users kept per gender value
    pub max_users_per_gender: i64,
    /// Maximum distinct workouts kept per sport value
    pub max_workouts_per_sport: i64,
}

impl SamplingCaps {
    /// Create caps from raw values
    #[must_use]
    pub const fn new(max_users_per_gender: i64, max_workouts_per_sport: i64) -> Self {
        Self {
            max_users_per_gender,
            max_workouts_per_sport,
        }
    }

    /// Caps large enough to keep any dataset whole
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(i64::MAX, i64::MAX)
    }

    /// User cap as a count; non-positive caps become zero
    #[must_use]
    pub fn user_limit(&self) -> usize {
        usize::try_from(self.max_users_per_gender).unwrap_or(0)
    }

    /// Workout cap as a count; non-positive caps become zero
    #[must_use]
    pub fn workout_limit(&self) -> usize {
        usize::try_from(self.max_workouts_per_sport).unwrap_or(0)
    }
}

impl Default for SamplingCaps {
    fn default() -> Self {
        Self::new(
            defaults::MAX_USERS_PER_GENDER,
            defaults::MAX_WORKOUTS_PER_SPORT,
        )
    }
}
