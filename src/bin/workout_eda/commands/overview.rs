// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Overview command printing the dataset breakdown and defect counts
// ABOUTME: Loads and validates the dataset without sampling or exporting

use workout_eda::config::PipelineConfig;
use workout_eda::dataset::load_dataset;
use workout_eda::report::count_defects;
use workout_eda_analysis::DatasetOverview;
use workout_eda_core::errors::{AppError, AppResult};

use crate::helpers::display;

/// Load the configured dataset and print its overview
pub fn execute(config: &PipelineConfig) -> AppResult<()> {
    let input = config
        .input_path()
        .map_err(|e| AppError::config("no input dataset configured").with_source(e))?;
    let dataset = load_dataset(input)?;
    let overview = DatasetOverview::from_records(&dataset.records);

    display::display_overview(&overview);
    display::display_defects(&count_defects(&dataset.defects), &dataset.defects);
    Ok(())
}
