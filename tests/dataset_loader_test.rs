// ABOUTME: Integration tests for dataset file loading
// ABOUTME: Covers JSON lines and JSON array files, per-line defects, and I/O errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serde_json::Value;
use std::fs;
use tempfile::TempDir;
use workout_eda::dataset::{load_dataset, read_raw};
use workout_eda_core::errors::{DefectCategory, DefectKind, ErrorCode};
use workout_eda_core::models::Gender;

#[test]
fn test_load_json_lines_with_defects() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();

    let mut no_sport = common::record_json(3, 30, "female", "run", &[0, 1]);
    no_sport.as_object_mut().unwrap().remove("sport");
    let path = common::write_jsonl(
        dir.path(),
        "data.jsonl",
        &[
            common::record_json(1, 10, "male", "run", &[0, 5, 10]),
            common::record_json(2, 20, "female", "bike", &[0, 3]),
            no_sport,
        ],
        &["{'id': 4, 'gender': 'male'}"],
    );

    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records[0].id.as_str(), "1");
    assert_eq!(dataset.records[1].gender, Gender::Female);
    assert_eq!(dataset.records[0].speed.len(), 3);
    assert!(dataset.records[0].altitude.iter().all(Option::is_none));

    let categories: Vec<DefectCategory> = dataset.defects.iter().map(|d| d.category()).collect();
    assert_eq!(categories, vec![DefectCategory::Format, DefectCategory::Schema]);
    assert!(matches!(
        dataset.defects[0].kind,
        DefectKind::Unparsable { line: 4, .. }
    ));
    assert_eq!(dataset.defects[1].record_id.as_deref(), Some("3"));
}

#[test]
fn test_load_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let entries = Value::Array(vec![
        common::record_json(1, 10, "male", "run", &[0, 5]),
        common::record_json(2, 10, "male", "run", &[0, 7]),
    ]);
    fs::write(&path, serde_json::to_string_pretty(&entries).unwrap()).unwrap();

    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.len(), 2);
    assert!(dataset.defects.is_empty());
}

#[test]
fn test_empty_file_is_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.jsonl");
    fs::write(&path, "\n\n").unwrap();

    let dataset = load_dataset(&path).unwrap();
    assert!(dataset.is_empty());
    assert!(dataset.defects.is_empty());
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_raw(&dir.path().join("absent.json")).unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(err.message.contains("absent.json"));
}

#[test]
fn test_mismatched_series_is_schema_defect() {
    let dir = TempDir::new().unwrap();
    let mut entry = common::record_json(7, 70, "male", "run", &[0, 1, 2]);
    entry["heart_rate"] = serde_json::json!([100, 101]);
    let path = common::write_jsonl(dir.path(), "data.jsonl", &[entry], &[]);

    let dataset = load_dataset(&path).unwrap();

    assert!(dataset.is_empty());
    assert!(matches!(
        dataset.defects[0].kind,
        DefectKind::LengthMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}
