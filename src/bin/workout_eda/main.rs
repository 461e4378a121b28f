// ABOUTME: workout-eda command-line tool for exploratory analysis of workout datasets
// ABOUTME: Overview, balanced sampling, and full pipeline runs with structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Category breakdown and defect counts of a dataset
//! workout-eda overview --input endomondoHR.json
//!
//! # Balanced subset with explicit caps
//! workout-eda sample --input endomondoHR.json --max-users-per-gender 5 --max-workouts-per-sport 10
//!
//! # Full pipeline with export
//! workout-eda run --input endomondoHR.json --output-dir ./eda_output
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use workout_eda::config::PipelineConfig;
use workout_eda::logging::{LogFormat, LoggingConfig};
use workout_eda_core::constants::exit_codes;
use workout_eda_core::errors::AppError;

#[derive(Parser)]
#[command(
    name = "workout-eda",
    version,
    about = "Exploratory analysis of fitness workout datasets",
    long_about = "Loads a workout dataset, draws a gender- and sport-balanced sample, derives \
                  whole-second time features, and writes summaries for plotting."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Log output format (json, pretty, compact)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the dataset overview and defect counts
    Overview {
        /// Dataset file (falls back to `WORKOUT_EDA_INPUT`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Print the balanced sample and its sampling report
    Sample {
        /// Dataset file (falls back to `WORKOUT_EDA_INPUT`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        #[command(flatten)]
        caps: CapArgs,
    },

    /// Run the full pipeline and write its outputs
    Run {
        /// Dataset file (falls back to `WORKOUT_EDA_INPUT`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output directory (falls back to `WORKOUT_EDA_OUTPUT_DIR`)
        #[arg(long, short = 'o')]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        caps: CapArgs,

        /// Skip the per-sample projection
        #[arg(long)]
        no_samples: bool,
    },
}

#[derive(Args)]
struct CapArgs {
    /// Maximum distinct users per gender
    #[arg(long, allow_hyphen_values = true)]
    max_users_per_gender: Option<i64>,

    /// Maximum distinct workouts per sport
    #[arg(long, allow_hyphen_values = true)]
    max_workouts_per_sport: Option<i64>,
}

impl CapArgs {
    fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(cap) = self.max_users_per_gender {
            config = config.with_max_users_per_gender(cap);
        }
        if let Some(cap) = self.max_workouts_per_sport {
            config = config.with_max_workouts_per_sport(cap);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Some(format) = cli.log_format {
        logging = logging.with_format(format);
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "workout-eda failed");
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let base = PipelineConfig::from_env()?;

    match command {
        Command::Overview { input } => {
            let config = with_input(base, input);
            commands::overview::execute(&config)?;
        }
        Command::Sample { input, caps } => {
            let config = caps.apply(with_input(base, input));
            commands::sample::execute(&config)?;
        }
        Command::Run {
            input,
            output_dir,
            caps,
            no_samples,
        } => {
            let mut config = caps.apply(with_input(base, input));
            if let Some(dir) = output_dir {
                config = config.with_output_dir(dir);
            }
            if no_samples {
                config = config.with_export_samples(false);
            }
            commands::run::execute(&config)?;
        }
    }
    Ok(())
}

fn with_input(config: PipelineConfig, input: Option<PathBuf>) -> PipelineConfig {
    match input {
        Some(path) => config.with_input(path),
        None => config,
    }
}

fn exit_code_for(error: &anyhow::Error) -> u8 {
    let code = error.downcast_ref::<AppError>().map_or_else(
        || {
            if error.is::<workout_eda_analysis::ConfigError>() {
                exit_codes::CONFIG
            } else {
                exit_codes::SOFTWARE
            }
        },
        |app_error| app_error.code.exit_code(),
    );
    u8::try_from(code).unwrap_or(1)
}
