// ABOUTME: Sport label for workout records
// ABOUTME: Open-set activity label observed at runtime, trimmed and never empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity label of a workout
///
/// The dataset does not constrain sport values, so the label is kept as
/// observed (e.g. `run`, `bike`, `mountain bike`). Surrounding whitespace is
/// removed and a blank label is rejected by [`Sport::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sport(String);

impl Sport {
    /// Parse a raw label, returning `None` for blank labels
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// The label as stored
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
