// ABOUTME: Aggregated EDA report combining overviews, feature summaries, and defects
// ABOUTME: Serialized as report.json alongside the tabular exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::collections::BTreeMap;
use workout_eda_analysis::{DatasetOverview, FeatureSummary, SamplingReport};
use workout_eda_core::errors::{DataQualityError, DefectCategory};

/// Everything learned about one dataset in one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdaReport {
    /// Dataset file the run read, when known
    pub source: Option<String>,
    /// Breakdown of every schema-valid record
    pub dataset: DatasetOverview,
    /// Breakdown of the sampled subset
    pub sampled: DatasetOverview,
    /// Sampler counters
    pub sampling: SamplingReport,
    /// Dataset-level describe of the normalized sample
    pub features: FeatureSummary,
    /// Number of normalized workouts
    pub normalized_workouts: usize,
    /// Defect totals per category
    pub defect_counts: BTreeMap<DefectCategory, usize>,
    /// Every defect in the order it was found
    pub defects: Vec<DataQualityError>,
}

impl EdaReport {
    /// Total defects across all categories
    #[must_use]
    pub fn defect_total(&self) -> usize {
        self.defects.len()
    }
}

/// Count defects per category
#[must_use]
pub fn count_defects(defects: &[DataQualityError]) -> BTreeMap<DefectCategory, usize> {
    let mut counts = BTreeMap::new();
    for defect in defects {
        *counts.entry(defect.category()).or_default() += 1;
    }
    counts
}
