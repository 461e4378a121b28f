// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Run command executing the full pipeline with export
// ABOUTME: Prints the written files and a short run summary

use workout_eda::config::PipelineConfig;
use workout_eda::pipeline::run_pipeline;
use workout_eda_core::errors::AppResult;

use crate::helpers::display;

/// Run the pipeline and print where its outputs went
pub fn execute(config: &PipelineConfig) -> AppResult<()> {
    let outcome = run_pipeline(config)?;
    display::display_run(&outcome);
    Ok(())
}
