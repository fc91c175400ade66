// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the simulation harness
//!
//! The monitor operations themselves are infallible; only the harness
//! around them can fail.

use thiserror::Error;

/// Errors surfaced while setting up or running a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] onelane_core::ConfigError),
    #[error("entity task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
