// ABOUTME: Errors raised while assembling pipeline settings from the environment
// ABOUTME: Distinguishes an unset required key from a key whose value does not parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Pipeline configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting was never provided
    #[error("{key} is not set")]
    Missing {
        /// Environment key of the setting
        key: &'static str,
    },

    /// A setting holds a value that cannot be used
    #[error("{key}={value:?} is invalid: {reason}")]
    InvalidValue {
        /// Environment key of the setting
        key: &'static str,
        /// Value as found in the environment
        value: String,
        /// Why it was rejected
        reason: String,
    },
}
