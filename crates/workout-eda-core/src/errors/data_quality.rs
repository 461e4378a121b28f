// ABOUTME: Per-record data-quality defect types for schema, temporal, and format violations
// ABOUTME: Defects exclude one record without invalidating the rest of the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data-Quality Defects
//!
//! - `DataQualityError` - a defect tied to one workout record (or one dataset line)
//! - `DefectKind` - what went wrong
//! - `DefectCategory` - schema, temporal, or format classification

use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Classification of a data-quality defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectCategory {
    /// Missing required fields, unknown categorical values, misaligned arrays
    Schema,
    /// Empty or decreasing timestamp sequences, unrepresentable instants
    Temporal,
    /// Dataset entry could not be parsed at all
    Format,
}

impl fmt::Display for DefectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => f.pad("schema"),
            Self::Temporal => f.pad("temporal"),
            Self::Format => f.pad("format"),
        }
    }
}

/// What is wrong with a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefectKind {
    /// A required field is absent or blank
    MissingField {
        /// Dataset name of the missing field
        field: &'static str,
    },
    /// Gender label outside the closed set
    InvalidGender {
        /// The label as it appeared in the record
        value: String,
    },
    /// A per-sample series does not line up with `timestamp`
    LengthMismatch {
        /// Dataset name of the misaligned series
        field: &'static str,
        /// Number of timestamp samples
        expected: usize,
        /// Number of values in the series
        actual: usize,
    },
    /// Timestamp cannot be represented as an instant
    InvalidTimestamp {
        /// Sample index of the offending value
        index: usize,
    },
    /// Timestamp sequence has no samples
    EmptyTimestamps,
    /// Timestamp sequence decreases between two consecutive samples
    NonMonotonicTimestamps {
        /// Index of the sample that is earlier than its predecessor
        index: usize,
        /// Epoch seconds of the predecessor
        previous: i64,
        /// Epoch seconds of the offending sample
        current: i64,
    },
    /// A dataset entry could not be decoded
    Unparsable {
        /// 1-based line (or array element) number
        line: usize,
        /// Parser message
        reason: String,
    },
}

impl DefectKind {
    /// Classify this defect
    #[must_use]
    pub const fn category(&self) -> DefectCategory {
        match self {
            Self::MissingField { .. } | Self::InvalidGender { .. } | Self::LengthMismatch { .. } => {
                DefectCategory::Schema
            }
            Self::InvalidTimestamp { .. }
            | Self::EmptyTimestamps
            | Self::NonMonotonicTimestamps { .. } => DefectCategory::Temporal,
            Self::Unparsable { .. } => DefectCategory::Format,
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field '{field}'"),
            Self::InvalidGender { value } => write!(f, "unrecognized gender '{value}'"),
            Self::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "series '{field}' has {actual} values but timestamp has {expected}"
            ),
            Self::InvalidTimestamp { index } => {
                write!(f, "timestamp at index {index} is out of range")
            }
            Self::EmptyTimestamps => write!(f, "timestamp sequence is empty"),
            Self::NonMonotonicTimestamps {
                index,
                previous,
                current,
            } => write!(
                f,
                "timestamp decreases at index {index} ({previous} -> {current})"
            ),
            Self::Unparsable { line, reason } => {
                write!(f, "entry {line} could not be parsed: {reason}")
            }
        }
    }
}

/// A data-quality defect attributed to a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataQualityError {
    /// Workout id when it could be read from the record
    pub record_id: Option<String>,
    /// The defect
    #[serde(flatten)]
    pub kind: DefectKind,
    /// Classification, serialized for reports
    pub category: DefectCategory,
}

impl DataQualityError {
    /// Create a defect for the given record
    #[must_use]
    pub fn new(record_id: Option<String>, kind: DefectKind) -> Self {
        let category = kind.category();
        Self {
            record_id,
            kind,
            category,
        }
    }

    /// Create a "missing field" defect
    #[must_use]
    pub fn missing_field(record_id: Option<String>, field: &'static str) -> Self {
        Self::new(record_id, DefectKind::MissingField { field })
    }

    /// Create a "length mismatch" defect
    #[must_use]
    pub fn length_mismatch(
        record_id: Option<String>,
        field: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::new(
            record_id,
            DefectKind::LengthMismatch {
                field,
                expected,
                actual,
            },
        )
    }

    /// Create an "empty timestamps" defect
    #[must_use]
    pub fn empty_timestamps(record_id: impl Into<String>) -> Self {
        Self::new(Some(record_id.into()), DefectKind::EmptyTimestamps)
    }

    /// Create an "unparsable entry" defect
    #[must_use]
    pub fn unparsable(line: usize, reason: impl Into<String>) -> Self {
        Self::new(
            None,
            DefectKind::Unparsable {
                line,
                reason: reason.into(),
            },
        )
    }

    /// Classification of this defect
    #[must_use]
    pub const fn category(&self) -> DefectCategory {
        self.category
    }
}

impl fmt::Display for DataQualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record_id {
            Some(id) => write!(f, "{} violation in workout {id}: {}", self.category, self.kind),
            None => write!(f, "{} violation: {}", self.category, self.kind),
        }
    }
}

impl Error for DataQualityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            DataQualityError::missing_field(None, "gender").category(),
            DefectCategory::Schema
        );
        assert_eq!(
            DataQualityError::empty_timestamps("w1").category(),
            DefectCategory::Temporal
        );
        assert_eq!(
            DataQualityError::unparsable(3, "expected value").category(),
            DefectCategory::Format
        );
    }

    #[test]
    fn test_display_names_record() {
        let defect = DataQualityError::length_mismatch(Some("w7".to_owned()), "speed", 4, 3);
        assert_eq!(
            defect.to_string(),
            "schema violation in workout w7: series 'speed' has 3 values but timestamp has 4"
        );
    }

    #[test]
    fn test_serializes_flat() {
        let defect = DataQualityError::empty_timestamps("w2");
        let json = serde_json::to_value(&defect).unwrap();

        assert_eq!(json["record_id"], "w2");
        assert_eq!(json["kind"], "empty_timestamps");
        assert_eq!(json["category"], "temporal");
    }
}
