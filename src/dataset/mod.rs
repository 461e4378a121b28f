// ABOUTME: Dataset loading for workout records stored as JSON lines or a JSON array
// ABOUTME: Parses and schema-validates records in parallel, collecting per-entry defects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dataset Loading
//!
//! Two layouts are accepted, chosen by the first non-whitespace byte:
//!
//! - `[` : a single JSON array of workout objects
//! - anything else: JSON lines, one workout object per line
//!
//! An entry that cannot be parsed is reported as a format defect with its
//! 1-based position and never affects the other entries.

use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use workout_eda_core::errors::{AppError, AppResult, DataQualityError, ErrorCode};
use workout_eda_core::models::{RawWorkoutRecord, WorkoutRecord};

use crate::logging::AppLogger;

/// Parsed but not yet validated dataset
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    /// Parsed records in file order
    pub records: Vec<RawWorkoutRecord>,
    /// Entries that could not be parsed
    pub defects: Vec<DataQualityError>,
}

/// Schema-valid records and every defect found while loading
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    /// Valid records in file order
    pub records: Vec<WorkoutRecord>,
    /// Format defects in file order, then schema defects in record order
    pub defects: Vec<DataQualityError>,
}

impl LoadedDataset {
    /// Validate every raw record, keeping the valid ones
    #[must_use]
    pub fn validate(raw: RawDataset) -> Self {
        let outcomes: Vec<Result<WorkoutRecord, DataQualityError>> = raw
            .records
            .into_par_iter()
            .map(WorkoutRecord::try_from)
            .collect();

        let mut dataset = Self {
            records: Vec::with_capacity(outcomes.len()),
            defects: raw.defects,
        };
        for outcome in outcomes {
            match outcome {
                Ok(record) => dataset.records.push(record),
                Err(defect) => {
                    debug!(defect = %defect, "Record failed schema validation");
                    dataset.defects.push(defect);
                }
            }
        }
        dataset
    }

    /// Number of valid records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no valid record was loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read and parse a dataset file without validating it
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it is a JSON array
/// document that is not valid JSON as a whole.
pub fn read_raw(path: &Path) -> AppResult<RawDataset> {
    let contents = fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        AppError::new(code, format!("cannot read {}: {e}", path.display())).with_source(e)
    })?;
    parse_raw(&contents)
}

/// Read, parse and validate a dataset file
///
/// # Errors
///
/// See [`read_raw`].
pub fn load_dataset(path: &Path) -> AppResult<LoadedDataset> {
    let started = Instant::now();
    let raw = read_raw(path)?;
    let entries = raw.records.len() + raw.defects.len();
    let dataset = LoadedDataset::validate(raw);

    info!(
        path = %path.display(),
        records = dataset.records.len(),
        defects = dataset.defects.len(),
        "Dataset loaded"
    );
    AppLogger::log_stage("load", entries, dataset.records.len(), started.elapsed());
    AppLogger::log_defects("load", &dataset.defects);
    Ok(dataset)
}

/// Parse dataset text in either accepted layout
///
/// # Errors
///
/// Returns an [`ErrorCode::InvalidFormat`] error when the text starts like a
/// JSON array but is not a valid JSON array.
pub fn parse_raw(contents: &str) -> AppResult<RawDataset> {
    let first = contents.bytes().find(|b| !b.is_ascii_whitespace());
    match first {
        None => Ok(RawDataset::default()),
        Some(b'[') => parse_array(contents),
        Some(_) => Ok(parse_lines(contents)),
    }
}

fn parse_array(contents: &str) -> AppResult<RawDataset> {
    let entries: Vec<Value> = serde_json::from_str(contents).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("dataset is not a valid JSON array: {e}"),
        )
        .with_source(e)
    })?;

    let parsed: Vec<(usize, Result<RawWorkoutRecord, serde_json::Error>)> = entries
        .into_par_iter()
        .enumerate()
        .map(|(index, value)| (index + 1, serde_json::from_value(value)))
        .collect();
    Ok(collect_parsed(parsed))
}

fn parse_lines(contents: &str) -> RawDataset {
    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let parsed: Vec<(usize, Result<RawWorkoutRecord, serde_json::Error>)> = lines
        .into_par_iter()
        .map(|(line_number, line)| (line_number, serde_json::from_str(line)))
        .collect();
    collect_parsed(parsed)
}

fn collect_parsed(
    parsed: Vec<(usize, Result<RawWorkoutRecord, serde_json::Error>)>,
) -> RawDataset {
    let mut dataset = RawDataset {
        records: Vec::with_capacity(parsed.len()),
        defects: Vec::new(),
    };
    for (line, outcome) in parsed {
        match outcome {
            Ok(record) => dataset.records.push(record),
            Err(e) => {
                debug!(line, error = %e, "Dataset entry could not be parsed");
                dataset
                    .defects
                    .push(DataQualityError::unparsable(line, e.to_string()));
            }
        }
    }
    dataset
}
