// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for workout-eda
// ABOUTME: Provides the overview, sample, and run subcommands

pub mod overview;
pub mod run;
pub mod sample;
