// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Sample command printing the balanced subset and its sampling report
// ABOUTME: Samples raw records so that malformed entries are reported alongside

use workout_eda::config::PipelineConfig;
use workout_eda::dataset::read_raw;
use workout_eda::report::count_defects;
use workout_eda_analysis::BalancedSampler;
use workout_eda_core::errors::{AppError, AppResult};

use crate::helpers::display;

/// Draw the balanced sample from the configured dataset and print it
pub fn execute(config: &PipelineConfig) -> AppResult<()> {
    let input = config
        .input_path()
        .map_err(|e| AppError::config("no input dataset configured").with_source(e))?;
    let raw = read_raw(input)?;

    let mut sample = BalancedSampler::new(config.caps).sample_raw(raw.records);
    let mut defects = raw.defects;
    defects.append(&mut sample.defects);

    display::display_sample(&sample.records, &sample.report)?;
    display::display_defects(&count_defects(&defects), &defects);
    Ok(())
}
