// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable narration of crossing events

use onelane_core::{CrossingEvent, TrafficClass};
use onelane_engine::SimSummary;

pub fn narrate(event: &CrossingEvent) -> String {
    let class = event.class();
    let entity = event.entity();
    match event {
        CrossingEvent::Requested { .. } => format!("{class} {entity} wants to enter"),
        CrossingEvent::Entered { .. } => format!("{class} {entity} enters the bridge"),
        CrossingEvent::Leaving { .. } => format!("{class} {entity} leaving the bridge"),
        CrossingEvent::Left { .. } => format!("{class} {entity} out of the bridge"),
    }
}

pub fn print_summary(summary: &SimSummary) {
    println!(
        "crossed: {} car-north, {} car-south, {} pedestrian",
        summary.crossed(TrafficClass::CarNorth),
        summary.crossed(TrafficClass::CarSouth),
        summary.crossed(TrafficClass::Pedestrian),
    );
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
