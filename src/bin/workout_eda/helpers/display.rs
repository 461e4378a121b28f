// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for workout-eda
// ABOUTME: Provides consistent display functions for overviews, samples, and run results

use std::collections::BTreeMap;
use workout_eda::pipeline::PipelineOutcome;
use workout_eda_analysis::{DatasetOverview, SamplingReport};
use workout_eda_core::errors::{AppResult, DataQualityError, DefectCategory};
use workout_eda_core::models::WorkoutRecord;

/// Defects listed individually before the output is truncated
const MAX_LISTED_DEFECTS: usize = 20;

/// Display the categorical breakdown of a dataset
pub fn display_overview(overview: &DatasetOverview) {
    println!("Workouts: {}", overview.workouts);
    println!("Distinct users: {}", overview.distinct_users);
    println!(
        "Workouts per user: min {} / max {} / mean {:.2}",
        overview.workouts_per_user.min,
        overview.workouts_per_user.max,
        overview.workouts_per_user.mean
    );

    println!("\nBy gender (workouts / users):");
    for (gender, workouts) in &overview.workouts_per_gender {
        let users = overview.users_per_gender.get(gender).copied().unwrap_or(0);
        println!("   {gender:<8} {workouts:>8} / {users}");
    }

    println!("\nBy sport (workouts):");
    for (sport, workouts) in &overview.workouts_per_sport {
        println!("   {:<24} {workouts:>8}", sport.as_str());
    }
}

/// Display the selected workouts and the sampling counters
pub fn display_sample(records: &[WorkoutRecord], report: &SamplingReport) -> AppResult<()> {
    println!("Selected {} of {} workouts", report.selected_records, report.input_records);
    println!(
        "   rejected by user cap: {}, by sport cap: {}",
        report.rejected_by_user_cap, report.rejected_by_sport_cap
    );
    println!("{}", "=".repeat(60));
    for record in records {
        println!(
            "{:<12} user {:<12} {:<8} {}",
            record.id.as_str(),
            record.user_id.as_str(),
            record.gender,
            record.sport
        );
    }
    println!("{}", "=".repeat(60));
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Display defect totals and the first few defects
pub fn display_defects(counts: &BTreeMap<DefectCategory, usize>, defects: &[DataQualityError]) {
    if defects.is_empty() {
        println!("\nNo data-quality defects");
        return;
    }

    println!("\nData-quality defects: {}", defects.len());
    for (category, count) in counts {
        println!("   {category:<10} {count}");
    }
    for defect in defects.iter().take(MAX_LISTED_DEFECTS) {
        println!("   - {defect}");
    }
    if defects.len() > MAX_LISTED_DEFECTS {
        println!("   ... {} more", defects.len() - MAX_LISTED_DEFECTS);
    }
}

/// Display the outcome of a full pipeline run
pub fn display_run(outcome: &PipelineOutcome) {
    let report = &outcome.report;
    println!("Pipeline complete");
    println!("   valid workouts:      {}", report.dataset.workouts);
    println!("   sampled workouts:    {}", report.sampling.selected_records);
    println!("   normalized workouts: {}", report.normalized_workouts);
    println!("   defects:             {}", report.defect_total());

    println!("\nOutputs:");
    if let Some(samples) = &outcome.exported.samples {
        println!("   {}", samples.display());
    }
    println!("   {}", outcome.exported.workouts.display());
    println!("   {}", outcome.exported.report.display());
}
