// ABOUTME: Environment-driven configuration for the workout EDA pipeline
// ABOUTME: Reads input, output, sampling caps, and export switches with typed parse errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pipeline configuration.
//!
//! Every value has an environment variable and a default. Command-line flags
//! are applied on top through the builder methods.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use workout_eda_analysis::{ConfigError, SamplingCaps};
use workout_eda_core::constants::defaults;

/// Environment variable names
pub mod env_keys {
    /// Dataset file to read
    pub const INPUT: &str = "WORKOUT_EDA_INPUT";
    /// Directory that receives exported files
    pub const OUTPUT_DIR: &str = "WORKOUT_EDA_OUTPUT_DIR";
    /// Per-gender distinct user cap
    pub const MAX_USERS_PER_GENDER: &str = "WORKOUT_EDA_MAX_USERS_PER_GENDER";
    /// Per-sport distinct workout cap
    pub const MAX_WORKOUTS_PER_SPORT: &str = "WORKOUT_EDA_MAX_WORKOUTS_PER_SPORT";
    /// Whether the per-sample projection is written
    pub const EXPORT_SAMPLES: &str = "WORKOUT_EDA_EXPORT_SAMPLES";
}

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Dataset file; required before the pipeline can run
    pub input: Option<PathBuf>,
    /// Directory for `samples.jsonl`, `workouts.jsonl` and `report.json`
    pub output_dir: PathBuf,
    /// Sampler caps
    pub caps: SamplingCaps,
    /// Write the per-sample projection
    pub export_samples: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            caps: SamplingCaps::default(),
            export_samples: defaults::EXPORT_SAMPLES,
        }
    }
}

impl PipelineConfig {
    /// Configuration for a given dataset file with default settings
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a cap or the export switch is set to
    /// a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let input = env::var(env_keys::INPUT)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let caps = SamplingCaps::new(
            parse_env(
                env_keys::MAX_USERS_PER_GENDER,
                defaults::MAX_USERS_PER_GENDER,
            )?,
            parse_env(
                env_keys::MAX_WORKOUTS_PER_SPORT,
                defaults::MAX_WORKOUTS_PER_SPORT,
            )?,
        );

        Ok(Self {
            input,
            output_dir: PathBuf::from(env_var_or(env_keys::OUTPUT_DIR, defaults::OUTPUT_DIR)),
            caps,
            export_samples: parse_bool_env(env_keys::EXPORT_SAMPLES, defaults::EXPORT_SAMPLES)?,
        })
    }

    /// Override the dataset file
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Override the output directory
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Override the per-gender user cap
    #[must_use]
    pub const fn with_max_users_per_gender(mut self, cap: i64) -> Self {
        self.caps.max_users_per_gender = cap;
        self
    }

    /// Override the per-sport workout cap
    #[must_use]
    pub const fn with_max_workouts_per_sport(mut self, cap: i64) -> Self {
        self.caps.max_workouts_per_sport = cap;
        self
    }

    /// Enable or disable the per-sample projection
    #[must_use]
    pub const fn with_export_samples(mut self, export_samples: bool) -> Self {
        self.export_samples = export_samples;
        self
    }

    /// Dataset file, if one has been configured
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when no input was given.
    pub fn input_path(&self) -> Result<&Path, ConfigError> {
        self.input
            .as_deref()
            .ok_or(ConfigError::Missing {
                key: env_keys::INPUT,
            })
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_bool_env(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: "expected true or false".to_owned(),
        }),
    }
}
