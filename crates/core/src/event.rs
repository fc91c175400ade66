// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crossing lifecycle events
//!
//! Emitted by entities as they move through the admission protocol.
//! These are narration only; the monitor's contract does not depend
//! on them and consumers may drop them freely.

use crate::class::TrafficClass;
use serde::{Deserialize, Serialize};

/// State transitions in an entity's crossing lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum CrossingEvent {
    /// Entity asked to enter and may block
    Requested { class: TrafficClass, entity: u64 },

    /// Entity admitted onto the bridge
    Entered { class: TrafficClass, entity: u64 },

    /// Entity finished crossing, about to release its slot
    Leaving { class: TrafficClass, entity: u64 },

    /// Entity off the bridge
    Left { class: TrafficClass, entity: u64 },
}

impl CrossingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CrossingEvent::Requested { .. } => "requested",
            CrossingEvent::Entered { .. } => "entered",
            CrossingEvent::Leaving { .. } => "leaving",
            CrossingEvent::Left { .. } => "left",
        }
    }

    pub fn class(&self) -> TrafficClass {
        match self {
            CrossingEvent::Requested { class, .. }
            | CrossingEvent::Entered { class, .. }
            | CrossingEvent::Leaving { class, .. }
            | CrossingEvent::Left { class, .. } => *class,
        }
    }

    pub fn entity(&self) -> u64 {
        match self {
            CrossingEvent::Requested { entity, .. }
            | CrossingEvent::Entered { entity, .. }
            | CrossingEvent::Leaving { entity, .. }
            | CrossingEvent::Left { entity, .. } => *entity,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
