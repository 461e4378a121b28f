// ABOUTME: Per-sample measurement channels carried by a workout record
// ABOUTME: Enumerates altitude, heart rate, position, and speed series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::fields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A per-sample series aligned with the workout's timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Altitude in meters
    Altitude,
    /// Heart rate in beats per minute
    HeartRate,
    /// Latitude in degrees
    Latitude,
    /// Longitude in degrees
    Longitude,
    /// Speed as reported by the device
    Speed,
}

impl Measurement {
    /// Every measurement channel, in dataset column order
    pub const ALL: [Self; 5] = [
        Self::Altitude,
        Self::HeartRate,
        Self::Latitude,
        Self::Longitude,
        Self::Speed,
    ];

    /// Field name in the JSON dataset
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Altitude => fields::ALTITUDE,
            Self::HeartRate => fields::HEART_RATE,
            Self::Latitude => fields::LATITUDE,
            Self::Longitude => fields::LONGITUDE,
            Self::Speed => fields::SPEED,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
