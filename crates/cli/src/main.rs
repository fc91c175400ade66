// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! onelane - one-lane bridge crossing simulator

mod output;

use anyhow::Result;
use clap::Parser;
use onelane_core::{DelayRange, SimConfig};
use onelane_engine::Simulation;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(
    name = "onelane",
    version,
    about = "Simulate a one-lane bridge shared by cars and pedestrians"
)]
struct Cli {
    /// Cars to spawn in each direction
    #[arg(long, default_value_t = 30)]
    cars: u32,

    /// Pedestrians to spawn
    #[arg(long, default_value_t = 5)]
    pedestrians: u32,

    /// Mean gap between car arrivals, per direction
    #[arg(long, value_parser = humantime::parse_duration, default_value = "500ms")]
    car_gap: Duration,

    /// Mean gap between pedestrian arrivals
    #[arg(long, value_parser = humantime::parse_duration, default_value = "5s")]
    ped_gap: Duration,

    /// Shortest car crossing time
    #[arg(long, value_parser = humantime::parse_duration, default_value = "500ms")]
    car_cross_min: Duration,

    /// Longest car crossing time
    #[arg(long, value_parser = humantime::parse_duration, default_value = "1s")]
    car_cross_max: Duration,

    /// Shortest pedestrian crossing time
    #[arg(long, value_parser = humantime::parse_duration, default_value = "10s")]
    ped_cross_min: Duration,

    /// Longest pedestrian crossing time
    #[arg(long, value_parser = humantime::parse_duration, default_value = "30s")]
    ped_cross_max: Duration,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Emit crossing events as JSON lines
    #[arg(long)]
    json: bool,

    /// Suppress per-event narration, print only the summary
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            cars_per_direction: self.cars,
            pedestrians: self.pedestrians,
            car_gap: self.car_gap,
            pedestrian_gap: self.ped_gap,
            car_crossing: DelayRange::new(self.car_cross_min, self.car_cross_max),
            pedestrian_crossing: DelayRange::new(self.ped_cross_min, self.ped_cross_max),
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let sim = Simulation::new(cli.config())?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let json = cli.json;
    let quiet = cli.quiet;
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if quiet {
                continue;
            }
            if json {
                match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::error!(error = %e, "failed to encode event"),
                }
            } else {
                println!("{}", output::narrate(&event));
            }
        }
    });

    let summary = sim.run(tx).await?;
    printer.await?;

    output::print_summary(&summary);
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
