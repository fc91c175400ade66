// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-class entity generation
//!
//! Each traffic class gets one generator that spawns entities at
//! exponentially distributed intervals and waits for all of them to
//! finish crossing. The three generators run concurrently and share
//! nothing but the monitor and the id counter.

use crate::entity::{self, EventSender};
use crate::error::SimError;
use crate::monitor::BridgeMonitor;
use onelane_core::{DelayRange, TrafficClass};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Spawns entities of one class at randomized intervals
pub struct Generator {
    class: TrafficClass,
    count: u32,
    mean_gap: Duration,
    crossing: DelayRange,
    rng: StdRng,
}

impl Generator {
    pub fn new(
        class: TrafficClass,
        count: u32,
        mean_gap: Duration,
        crossing: DelayRange,
        rng: StdRng,
    ) -> Self {
        Self {
            class,
            count,
            mean_gap,
            crossing,
            rng,
        }
    }

    /// Spawn `count` entities with an exponential gap between arrivals,
    /// then wait for every spawned entity to finish crossing.
    ///
    /// Returns the number of entities that crossed.
    pub async fn run(
        mut self,
        monitor: Arc<BridgeMonitor>,
        ids: Arc<AtomicU64>,
        events: EventSender,
    ) -> Result<u32, SimError> {
        tracing::info!(class = %self.class, count = self.count, "generator started");
        let mut entities = JoinSet::new();
        for _ in 0..self.count {
            let entity = ids.fetch_add(1, Ordering::Relaxed);
            let delay = self.crossing_delay();
            entities.spawn(entity::cross(
                Arc::clone(&monitor),
                self.class,
                entity,
                delay,
                events.clone(),
            ));
            tokio::time::sleep(self.arrival_gap()).await;
        }

        let mut crossed = 0;
        while let Some(result) = entities.join_next().await {
            result?;
            crossed += 1;
        }
        tracing::info!(class = %self.class, crossed, "generator finished");
        Ok(crossed)
    }

    /// Exponential inter-arrival gap with the configured mean, by
    /// inverse transform over a uniform sample.
    fn arrival_gap(&mut self) -> Duration {
        let mean = self.mean_gap.as_secs_f64();
        if mean == 0.0 {
            return Duration::ZERO;
        }
        let u: f64 = self.rng.random();
        Duration::from_secs_f64(-mean * (1.0 - u).ln())
    }

    /// Uniform crossing delay within the class's configured range.
    fn crossing_delay(&mut self) -> Duration {
        if self.crossing.min == self.crossing.max {
            return self.crossing.min;
        }
        let secs = self
            .rng
            .random_range(self.crossing.min.as_secs_f64()..=self.crossing.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
