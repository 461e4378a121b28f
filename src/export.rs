// ABOUTME: Tabular projection of normalized workouts and report file output
// ABOUTME: Writes per-sample and per-workout JSON lines plus the JSON report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Export
//!
//! The per-sample projection has one row per timestamp sample of every
//! normalized workout; `interval` is `null` on the first row of a workout.
//! Missing measurement values are written as `null`.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use workout_eda_analysis::{NormalizedWorkout, WorkoutSummary};
use workout_eda_core::constants::output_files;
use workout_eda_core::errors::AppResult;
use workout_eda_core::models::{Gender, Measurement, Sport};

use crate::logging::AppLogger;
use crate::report::EdaReport;

/// One sample of one workout, flattened for plotting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow<'a> {
    /// Workout id
    pub id: &'a str,
    /// Athlete id
    pub user_id: &'a str,
    /// Athlete gender
    pub gender: Gender,
    /// Activity label
    pub sport: &'a Sport,
    /// Position of the sample within its workout
    pub sample_index: usize,
    /// Sample instant in epoch seconds
    pub timestamp: i64,
    /// Seconds since the workout's first sample
    pub normalized_time: i64,
    /// Seconds since the previous sample
    pub interval: Option<i64>,
    /// Altitude
    pub altitude: Option<f64>,
    /// Heart rate
    pub heart_rate: Option<f64>,
    /// Latitude
    pub latitude: Option<f64>,
    /// Longitude
    pub longitude: Option<f64>,
    /// Speed
    pub speed: Option<f64>,
}

/// Rows of one normalized workout in sample order
pub fn sample_rows<'a>(workout: &'a NormalizedWorkout<'a>) -> impl Iterator<Item = SampleRow<'a>> {
    let record = workout.record;
    let value = move |measurement: Measurement, index: usize| {
        record.series(measurement).get(index).copied().flatten()
    };

    workout
        .normalized_time
        .iter()
        .enumerate()
        .map(move |(index, &normalized_time)| SampleRow {
            id: record.id.as_str(),
            user_id: record.user_id.as_str(),
            gender: record.gender,
            sport: &record.sport,
            sample_index: index,
            timestamp: record.timestamps[index].timestamp(),
            normalized_time,
            interval: index
                .checked_sub(1)
                .and_then(|previous| workout.interval.get(previous).copied()),
            altitude: value(Measurement::Altitude, index),
            heart_rate: value(Measurement::HeartRate, index),
            latitude: value(Measurement::Latitude, index),
            longitude: value(Measurement::Longitude, index),
            speed: value(Measurement::Speed, index),
        })
}

/// Write values as JSON lines, returning the number of rows written
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_jsonl<W, T, I>(writer: W, rows: I) -> AppResult<usize>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = BufWriter::new(writer);
    let mut written = 0usize;
    for row in rows {
        serde_json::to_writer(&mut writer, &row)?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Files produced by one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Per-sample projection, absent when disabled
    pub samples: Option<PathBuf>,
    /// Per-workout summaries
    pub workouts: PathBuf,
    /// Aggregated report
    pub report: PathBuf,
}

/// Writes pipeline results into an output directory
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    export_samples: bool,
}

impl Exporter {
    /// Exporter for a directory; the directory is created on first write
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, export_samples: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            export_samples,
        }
    }

    /// Write every output file
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a file cannot
    /// be written.
    pub fn export(
        &self,
        workouts: &[NormalizedWorkout<'_>],
        summaries: &[WorkoutSummary],
        report: &EdaReport,
    ) -> AppResult<ExportPaths> {
        fs::create_dir_all(&self.output_dir)?;

        let samples = if self.export_samples {
            let path = self.output_dir.join(output_files::SAMPLES);
            let rows = write_jsonl(
                File::create(&path)?,
                workouts.iter().flat_map(|workout| sample_rows(workout)),
            )?;
            AppLogger::log_export(&path.display().to_string(), rows);
            Some(path)
        } else {
            None
        };

        let workouts_path = self.output_dir.join(output_files::WORKOUTS);
        let rows = write_jsonl(File::create(&workouts_path)?, summaries)?;
        AppLogger::log_export(&workouts_path.display().to_string(), rows);

        let report_path = self.output_dir.join(output_files::REPORT);
        let mut writer = BufWriter::new(File::create(&report_path)?);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        AppLogger::log_export(&report_path.display().to_string(), 1);

        Ok(ExportPaths {
            samples,
            workouts: workouts_path,
            report: report_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use workout_eda_analysis::TimeNormalizer;
    use workout_eda_core::models::WorkoutRecord;

    #[test]
    fn test_sample_rows_projection() {
        let ts = [100, 105, 120]
            .iter()
            .map(|&s| DateTime::from_timestamp(s, 0).unwrap())
            .collect();
        let record = WorkoutRecord::new("w1", "u1", Gender::Female, Sport::parse("bike").unwrap(), ts)
            .with_series(Measurement::HeartRate, vec![Some(100.0), None, Some(110.0)])
            .unwrap();
        let normalized = TimeNormalizer::normalize(&record).unwrap();
        let rows: Vec<SampleRow<'_>> = sample_rows(&normalized).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].interval, None);
        assert_eq!(rows[1].interval, Some(5));
        assert_eq!(rows[2].interval, Some(15));
        assert_eq!(rows[2].normalized_time, 20);
        assert_eq!(rows[1].heart_rate, None);
        assert_eq!(rows[2].heart_rate, Some(110.0));
        assert_eq!(rows[0].speed, None);
    }

    #[test]
    fn test_write_jsonl_counts_rows() {
        let mut buffer = Vec::new();
        let written = write_jsonl(&mut buffer, [1, 2, 3]).unwrap();

        assert_eq!(written, 3);
        assert_eq!(String::from_utf8(buffer).unwrap(), "1\n2\n3\n");
    }
}
