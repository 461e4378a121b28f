// ABOUTME: Pipeline orchestration from dataset loading through sampling, normalization, and export
// ABOUTME: Aggregates per-record defects without aborting; only I/O and configuration errors abort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pipeline
//!
//! `load -> sample -> normalize -> summarize -> export`

use std::time::Instant;
use tracing::info;
use workout_eda_analysis::{
    BalancedSampler, DatasetOverview, FeatureSummary, NormalizationBatch, SampledSubset,
    SamplingCaps, TimeNormalizer, WorkoutSummary,
};
use workout_eda_core::errors::{AppError, AppResult};

use crate::config::PipelineConfig;
use crate::dataset::{load_dataset, LoadedDataset};
use crate::export::{ExportPaths, Exporter};
use crate::logging::AppLogger;
use crate::report::{count_defects, EdaReport};

/// In-memory results of analysing one dataset
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    /// Balanced subset drawn from the dataset
    pub sample: SampledSubset<'a>,
    /// Temporal features of the sampled workouts
    pub normalized: NormalizationBatch<'a>,
    /// One summary per normalized workout
    pub summaries: Vec<WorkoutSummary>,
    /// Aggregated report
    pub report: EdaReport,
}

/// Sample, normalize and summarize an already loaded dataset
#[must_use]
pub fn analyze(dataset: &LoadedDataset, caps: SamplingCaps) -> Analysis<'_> {
    let started = Instant::now();
    let sample = BalancedSampler::new(caps).sample(&dataset.records);
    AppLogger::log_stage("sample", dataset.records.len(), sample.len(), started.elapsed());

    let started = Instant::now();
    let normalized = TimeNormalizer::normalize_all(sample.records());
    AppLogger::log_stage(
        "normalize",
        sample.len(),
        normalized.workouts.len(),
        started.elapsed(),
    );
    AppLogger::log_defects("normalize", &normalized.defects);

    let started = Instant::now();
    let summaries: Vec<WorkoutSummary> = normalized
        .workouts
        .iter()
        .map(WorkoutSummary::from_normalized)
        .collect();

    let mut defects = dataset.defects.clone();
    defects.extend(normalized.defects.iter().cloned());

    let report = EdaReport {
        source: None,
        dataset: DatasetOverview::from_records(&dataset.records),
        sampled: DatasetOverview::from_records(sample.records().iter().copied()),
        sampling: sample.report().clone(),
        features: FeatureSummary::from_workouts(&normalized.workouts),
        normalized_workouts: normalized.workouts.len(),
        defect_counts: count_defects(&defects),
        defects,
    };
    AppLogger::log_stage(
        "summarize",
        normalized.workouts.len(),
        summaries.len(),
        started.elapsed(),
    );

    Analysis {
        sample,
        normalized,
        summaries,
        report,
    }
}

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Aggregated report, also written to disk
    pub report: EdaReport,
    /// Per-workout summaries, also written to disk
    pub summaries: Vec<WorkoutSummary>,
    /// Files written
    pub exported: ExportPaths,
}

/// Run every stage and write the outputs
///
/// # Errors
///
/// Returns an error if no input is configured, the dataset cannot be read,
/// or an output file cannot be written. Data-quality defects never abort the
/// run; they are collected in the report.
pub fn run_pipeline(config: &PipelineConfig) -> AppResult<PipelineOutcome> {
    let run_started = Instant::now();
    let input = config
        .input_path()
        .map_err(|e| AppError::config("no input dataset configured").with_source(e))?;

    info!(
        input = %input.display(),
        output_dir = %config.output_dir.display(),
        max_users_per_gender = config.caps.max_users_per_gender,
        max_workouts_per_sport = config.caps.max_workouts_per_sport,
        export_samples = config.export_samples,
        "Starting workout EDA pipeline"
    );

    let dataset = load_dataset(input)?;
    let mut analysis = analyze(&dataset, config.caps);
    analysis.report.source = Some(input.display().to_string());

    let started = Instant::now();
    let exporter = Exporter::new(&config.output_dir, config.export_samples);
    let exported = exporter.export(
        &analysis.normalized.workouts,
        &analysis.summaries,
        &analysis.report,
    )?;
    AppLogger::log_stage(
        "export",
        analysis.normalized.workouts.len(),
        analysis.summaries.len(),
        started.elapsed(),
    );

    let elapsed = run_started.elapsed();
    AppLogger::log_performance_metric("pipeline.duration", elapsed.as_secs_f64() * 1000.0, "ms");
    info!(
        records = dataset.len(),
        sampled = analysis.sample.len(),
        normalized = analysis.normalized.workouts.len(),
        defects = analysis.report.defect_total(),
        "Workout EDA pipeline complete"
    );

    Ok(PipelineOutcome {
        report: analysis.report,
        summaries: analysis.summaries,
        exported,
    })
}
