// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration
//!
//! Arrival rates and crossing-time ranges are inputs to the harness,
//! not part of the monitor's contract. Defaults mirror the reference
//! scenario: cars arrive every 0.5s on average, pedestrians every 5s,
//! cars cross in 0.5-1s, pedestrians in 10-30s.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Range of simulated crossing times, sampled uniformly
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    #[serde(with = "humantime_serde")]
    pub min: Duration,
    #[serde(with = "humantime_serde")]
    pub max: Duration,
}

impl DelayRange {
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    fn check(&self, stream: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedDelayRange {
                stream,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Configuration errors, rejected before a simulation starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{stream} crossing range: min {min:?} exceeds max {max:?}")]
    InvertedDelayRange {
        stream: &'static str,
        min: Duration,
        max: Duration,
    },
    #[error("{stream} arrival gap must be positive when entities are scheduled")]
    ZeroArrivalGap { stream: &'static str },
}

/// Full description of one simulation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Cars spawned in each direction
    pub cars_per_direction: u32,
    /// Pedestrians spawned
    pub pedestrians: u32,
    /// Mean gap between car arrivals, per direction
    #[serde(with = "humantime_serde")]
    pub car_gap: Duration,
    /// Mean gap between pedestrian arrivals
    #[serde(with = "humantime_serde")]
    pub pedestrian_gap: Duration,
    /// Crossing time range for cars, either direction
    pub car_crossing: DelayRange,
    /// Crossing time range for pedestrians
    pub pedestrian_crossing: DelayRange,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cars_per_direction: 30,
            pedestrians: 5,
            car_gap: Duration::from_millis(500),
            pedestrian_gap: Duration::from_secs(5),
            car_crossing: DelayRange::new(Duration::from_millis(500), Duration::from_secs(1)),
            pedestrian_crossing: DelayRange::new(
                Duration::from_secs(10),
                Duration::from_secs(30),
            ),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.car_crossing.check("car")?;
        self.pedestrian_crossing.check("pedestrian")?;
        if self.cars_per_direction > 0 && self.car_gap.is_zero() {
            return Err(ConfigError::ZeroArrivalGap { stream: "car" });
        }
        if self.pedestrians > 0 && self.pedestrian_gap.is_zero() {
            return Err(ConfigError::ZeroArrivalGap { stream: "pedestrian" });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
