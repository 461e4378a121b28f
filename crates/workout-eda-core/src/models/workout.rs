// ABOUTME: Workout record model with its permissive wire shape and schema validation
// ABOUTME: Converts raw JSON records into validated, index-aligned WorkoutRecord values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Gender, Measurement, Sport};
use crate::constants::fields;
use crate::errors::{DataQualityError, DefectKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier token as it appears on the wire (number or string)
///
/// Any JSON number is accepted; only its rendering is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpaqueToken {
    /// Signed integer identifier
    Integer(i64),
    /// Integer identifier above `i64::MAX`
    Unsigned(u64),
    /// Identifier written as a float (`123.0`, `1e9`)
    Float(f64),
    /// Textual identifier
    Text(String),
}

impl OpaqueToken {
    /// Normalize to a string, treating blank text as absent
    #[must_use]
    pub fn into_token(self) -> Option<String> {
        match self {
            Self::Integer(value) => Some(value.to_string()),
            Self::Unsigned(value) => Some(value.to_string()),
            // integral floats render without the trailing `.0`
            Self::Float(value) if value.fract() == 0.0 && value.abs() < 1e16 => {
                Some(format!("{value:.0}"))
            }
            Self::Float(value) => Some(value.to_string()),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            }
        }
    }
}

/// Timestamp sample as it appears on the wire (Unix epoch seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Whole epoch seconds
    Seconds(i64),
    /// Epoch seconds with a fractional part
    Fractional(f64),
}

impl RawTimestamp {
    /// Whole epoch seconds; sub-second precision is dropped
    #[must_use]
    pub fn epoch_seconds(self) -> Option<i64> {
        match self {
            Self::Seconds(secs) => Some(secs),
            Self::Fractional(value) => {
                let truncated = value.trunc();
                // i64::MAX is not exactly representable; the cast saturates
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Some(truncated as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Convert to an instant
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        self.epoch_seconds()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Workout record as it arrives from the dataset, every field optional
///
/// Unknown fields (e.g. `url`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWorkoutRecord {
    /// Workout identifier
    pub id: Option<OpaqueToken>,
    /// Athlete identifier
    #[serde(rename = "userId")]
    pub user_id: Option<OpaqueToken>,
    /// Athlete gender label
    pub gender: Option<String>,
    /// Activity label
    pub sport: Option<String>,
    /// Per-sample timestamps
    pub timestamp: Option<Vec<RawTimestamp>>,
    /// Per-sample altitude
    pub altitude: Option<Vec<Option<f64>>>,
    /// Per-sample heart rate
    pub heart_rate: Option<Vec<Option<f64>>>,
    /// Per-sample latitude
    pub latitude: Option<Vec<Option<f64>>>,
    /// Per-sample longitude
    pub longitude: Option<Vec<Option<f64>>>,
    /// Per-sample speed
    pub speed: Option<Vec<Option<f64>>>,
}

/// Unique workout identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

/// Athlete identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Create an identifier from any string-like value
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

string_id!(WorkoutId);
string_id!(UserId);

/// One recorded workout with index-aligned per-sample series
///
/// Every series has exactly `timestamps.len()` entries; a missing sample is
/// `None`. Timestamp ordering is not enforced here, the time normalizer
/// reports empty or decreasing sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Workout identifier
    pub id: WorkoutId,
    /// Athlete identifier
    pub user_id: UserId,
    /// Athlete gender
    pub gender: Gender,
    /// Activity label
    pub sport: Sport,
    /// Absolute instant of each sample
    pub timestamps: Vec<DateTime<Utc>>,
    /// Altitude per sample
    pub altitude: Vec<Option<f64>>,
    /// Heart rate per sample
    pub heart_rate: Vec<Option<f64>>,
    /// Latitude per sample
    pub latitude: Vec<Option<f64>>,
    /// Longitude per sample
    pub longitude: Vec<Option<f64>>,
    /// Speed per sample
    pub speed: Vec<Option<f64>>,
}

impl WorkoutRecord {
    /// Create a record whose measurement series are all missing
    #[must_use]
    pub fn new(
        id: impl Into<WorkoutId>,
        user_id: impl Into<UserId>,
        gender: Gender,
        sport: Sport,
        timestamps: Vec<DateTime<Utc>>,
    ) -> Self {
        let n = timestamps.len();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            gender,
            sport,
            timestamps,
            altitude: vec![None; n],
            heart_rate: vec![None; n],
            latitude: vec![None; n],
            longitude: vec![None; n],
            speed: vec![None; n],
        }
    }

    /// Replace one measurement series
    ///
    /// # Errors
    ///
    /// Returns a schema defect if `values` is not aligned with the timestamps
    pub fn with_series(
        mut self,
        measurement: Measurement,
        values: Vec<Option<f64>>,
    ) -> Result<Self, DataQualityError> {
        let expected = self.sample_count();
        if values.len() != expected {
            return Err(DataQualityError::length_mismatch(
                Some(self.id.to_string()),
                measurement.field_name(),
                expected,
                values.len(),
            ));
        }
        *self.series_mut(measurement) = values;
        Ok(self)
    }

    /// Number of samples (N)
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.timestamps.len()
    }

    /// Borrow one measurement series
    #[must_use]
    pub fn series(&self, measurement: Measurement) -> &[Option<f64>] {
        match measurement {
            Measurement::Altitude => &self.altitude,
            Measurement::HeartRate => &self.heart_rate,
            Measurement::Latitude => &self.latitude,
            Measurement::Longitude => &self.longitude,
            Measurement::Speed => &self.speed,
        }
    }

    fn series_mut(&mut self, measurement: Measurement) -> &mut Vec<Option<f64>> {
        match measurement {
            Measurement::Altitude => &mut self.altitude,
            Measurement::HeartRate => &mut self.heart_rate,
            Measurement::Latitude => &mut self.latitude,
            Measurement::Longitude => &mut self.longitude,
            Measurement::Speed => &mut self.speed,
        }
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Align an optional series with `n` timestamps, filling absent series with sentinels
fn align_series(
    record_id: &str,
    measurement: Measurement,
    series: Option<Vec<Option<f64>>>,
    n: usize,
) -> Result<Vec<Option<f64>>, DataQualityError> {
    match series {
        None => Ok(vec![None; n]),
        Some(values) if values.len() == n => Ok(values
            .into_iter()
            .map(|value| value.filter(|v| v.is_finite()))
            .collect()),
        Some(values) => Err(DataQualityError::length_mismatch(
            Some(record_id.to_owned()),
            measurement.field_name(),
            n,
            values.len(),
        )),
    }
}

impl TryFrom<RawWorkoutRecord> for WorkoutRecord {
    type Error = DataQualityError;

    fn try_from(raw: RawWorkoutRecord) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .and_then(OpaqueToken::into_token)
            .ok_or_else(|| DataQualityError::missing_field(None, fields::ID))?;
        let defect = |kind: DefectKind| DataQualityError::new(Some(id.clone()), kind);

        let user_id = raw
            .user_id
            .and_then(OpaqueToken::into_token)
            .ok_or_else(|| defect(DefectKind::MissingField { field: fields::USER_ID }))?;

        let gender_label = raw
            .gender
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| defect(DefectKind::MissingField { field: fields::GENDER }))?;
        let gender = gender_label
            .parse::<Gender>()
            .map_err(|value| defect(DefectKind::InvalidGender { value }))?;

        let sport = raw
            .sport
            .as_deref()
            .and_then(Sport::parse)
            .ok_or_else(|| defect(DefectKind::MissingField { field: fields::SPORT }))?;

        let raw_timestamps = raw
            .timestamp
            .ok_or_else(|| defect(DefectKind::MissingField { field: fields::TIMESTAMP }))?;
        let timestamps = raw_timestamps
            .iter()
            .enumerate()
            .map(|(index, ts)| {
                ts.to_datetime()
                    .ok_or_else(|| defect(DefectKind::InvalidTimestamp { index }))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let n = timestamps.len();
        let altitude = align_series(&id, Measurement::Altitude, raw.altitude, n)?;
        let heart_rate = align_series(&id, Measurement::HeartRate, raw.heart_rate, n)?;
        let latitude = align_series(&id, Measurement::Latitude, raw.latitude, n)?;
        let longitude = align_series(&id, Measurement::Longitude, raw.longitude, n)?;
        let speed = align_series(&id, Measurement::Speed, raw.speed, n)?;

        Ok(Self {
            id: WorkoutId(id),
            user_id: UserId(user_id),
            gender,
            sport,
            timestamps,
            altitude,
            heart_rate,
            latitude,
            longitude,
            speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DefectCategory;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawWorkoutRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_record_converts() {
        let record = WorkoutRecord::try_from(raw(json!({
            "id": 396_826_535,
            "userId": 10_921_915,
            "gender": "male",
            "sport": "bike",
            "timestamp": [1_408_898_746, 1_408_898_754, 1_408_898_765],
            "heart_rate": [100, 111, null],
            "speed": [6.8, 16.5, 19.2],
            "url": "https://www.endomondo.com/users/10921915/workouts/396826535"
        })))
        .unwrap();

        assert_eq!(record.id.as_str(), "396826535");
        assert_eq!(record.user_id.as_str(), "10921915");
        assert_eq!(record.gender, Gender::Male);
        assert_eq!(record.sample_count(), 3);
        assert_eq!(record.heart_rate, vec![Some(100.0), Some(111.0), None]);
        // Absent series are filled with sentinels
        assert_eq!(record.altitude, vec![None, None, None]);
    }

    #[test]
    fn test_any_json_number_is_a_valid_id() {
        let record = WorkoutRecord::try_from(raw(json!({
            "id": 18_446_744_073_709_551_615_u64,
            "userId": 10_921_915.0,
            "gender": "male",
            "sport": "run",
            "timestamp": [1, 2]
        })))
        .unwrap();

        assert_eq!(record.id.as_str(), "18446744073709551615");
        assert_eq!(record.user_id.as_str(), "10921915");

        let fractional = OpaqueToken::Float(12.5).into_token();
        assert_eq!(fractional.as_deref(), Some("12.5"));
    }

    #[test]
    fn test_missing_gender_is_schema_violation() {
        let err = WorkoutRecord::try_from(raw(json!({
            "id": "w1", "userId": "u1", "sport": "run", "timestamp": [1, 2]
        })))
        .unwrap_err();

        assert_eq!(err.record_id.as_deref(), Some("w1"));
        assert_eq!(err.kind, DefectKind::MissingField { field: "gender" });
        assert_eq!(err.category(), DefectCategory::Schema);
    }

    #[test]
    fn test_missing_id_has_no_record_id() {
        let err = WorkoutRecord::try_from(raw(json!({
            "userId": "u1", "gender": "female", "sport": "run", "timestamp": [1]
        })))
        .unwrap_err();

        assert!(err.record_id.is_none());
        assert_eq!(err.kind, DefectKind::MissingField { field: "id" });
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = WorkoutRecord::try_from(raw(json!({
            "id": "w1", "userId": "u1", "gender": "female", "sport": "run",
            "timestamp": [1, 2, 3],
            "altitude": [10.0, 11.0]
        })))
        .unwrap_err();

        assert_eq!(
            err.kind,
            DefectKind::LengthMismatch {
                field: "altitude",
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_unknown_gender_label_rejected() {
        let err = WorkoutRecord::try_from(raw(json!({
            "id": "w1", "userId": "u1", "gender": "robot", "sport": "run", "timestamp": [1]
        })))
        .unwrap_err();

        assert_eq!(
            err.kind,
            DefectKind::InvalidGender {
                value: "robot".to_owned()
            }
        );
    }

    #[test]
    fn test_empty_timestamps_pass_schema_validation() {
        let record = WorkoutRecord::try_from(raw(json!({
            "id": "w1", "userId": "u1", "gender": "male", "sport": "run", "timestamp": []
        })))
        .unwrap();

        assert_eq!(record.sample_count(), 0);
    }

    #[test]
    fn test_fractional_timestamps_truncate() {
        assert_eq!(RawTimestamp::Fractional(1_408_898_746.9).epoch_seconds(), Some(1_408_898_746));
        assert_eq!(RawTimestamp::Fractional(f64::NAN).epoch_seconds(), None);
    }

    #[test]
    fn test_with_series_checks_alignment() {
        let ts = vec![DateTime::from_timestamp(0, 0).unwrap(); 2];
        let record = WorkoutRecord::new("w1", "u1", Gender::Female, Sport::parse("run").unwrap(), ts);

        assert!(record
            .clone()
            .with_series(Measurement::Speed, vec![Some(1.0), Some(2.0)])
            .is_ok());
        assert!(record.with_series(Measurement::Speed, vec![Some(1.0)]).is_err());
    }
}
