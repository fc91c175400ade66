// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation runner
//!
//! Wires the three generation streams (northbound cars, southbound
//! cars, pedestrians) to one shared monitor and runs them to
//! completion. The run ends when the generators stop producing and
//! every in-flight entity has left the bridge.

use crate::entity::EventSender;
use crate::error::SimError;
use crate::generator::Generator;
use crate::monitor::{BridgeMonitor, BridgeState};
use onelane_core::{SimConfig, TrafficClass};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

/// Entities crossed per class, indexed by [`TrafficClass::index`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimSummary {
    pub crossed: [u32; 3],
}

impl SimSummary {
    pub fn crossed(&self, class: TrafficClass) -> u32 {
        self.crossed[class.index()]
    }

    pub fn total(&self) -> u32 {
        self.crossed.iter().sum()
    }
}

/// A configured, validated simulation
pub struct Simulation {
    config: SimConfig,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run all three generation streams to completion.
    ///
    /// Crossing events are delivered on `events` as they happen; the
    /// sender is dropped when the last entity has left, closing the
    /// channel for the consumer.
    pub async fn run(&self, events: EventSender) -> Result<SimSummary, SimError> {
        let monitor = Arc::new(BridgeMonitor::new());
        let ids = Arc::new(AtomicU64::new(1));
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Independent per-stream rngs so the streams never contend.
        let north = Generator::new(
            TrafficClass::CarNorth,
            self.config.cars_per_direction,
            self.config.car_gap,
            self.config.car_crossing,
            StdRng::from_rng(&mut rng),
        );
        let south = Generator::new(
            TrafficClass::CarSouth,
            self.config.cars_per_direction,
            self.config.car_gap,
            self.config.car_crossing,
            StdRng::from_rng(&mut rng),
        );
        let walkers = Generator::new(
            TrafficClass::Pedestrian,
            self.config.pedestrians,
            self.config.pedestrian_gap,
            self.config.pedestrian_crossing,
            StdRng::from_rng(&mut rng),
        );

        let (north, south, walkers) = tokio::try_join!(
            north.run(Arc::clone(&monitor), Arc::clone(&ids), events.clone()),
            south.run(Arc::clone(&monitor), Arc::clone(&ids), events.clone()),
            walkers.run(Arc::clone(&monitor), Arc::clone(&ids), events),
        )?;

        let summary = SimSummary {
            crossed: [north, south, walkers],
        };
        // Every entity has left; the monitor must be fully drained.
        debug_assert_eq!(monitor.snapshot(), BridgeState::default());
        tracing::info!(total = summary.total(), "simulation complete");
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod tests;
