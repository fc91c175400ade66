// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entity crossing lifecycle
//!
//! One entity is one car or pedestrian: request entry, cross for a
//! simulated delay, release. The delay runs strictly outside the
//! monitor's lock, so a slow crossing never blocks contention for it.

use crate::monitor::BridgeMonitor;
use onelane_core::{CrossingEvent, TrafficClass};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Sender for crossing narration events
pub type EventSender = mpsc::UnboundedSender<CrossingEvent>;

/// Run one entity through the full admission protocol.
///
/// Event delivery is best-effort; a dropped receiver does not affect
/// the crossing.
pub async fn cross(
    monitor: Arc<BridgeMonitor>,
    class: TrafficClass,
    entity: u64,
    delay: Duration,
    events: EventSender,
) {
    let _ = events.send(CrossingEvent::Requested { class, entity });
    tracing::debug!(%class, entity, "wants to enter");

    monitor.enter(class).await;
    let _ = events.send(CrossingEvent::Entered { class, entity });
    tracing::debug!(%class, entity, delay_ms = delay.as_millis() as u64, "crossing");

    tokio::time::sleep(delay).await;

    let _ = events.send(CrossingEvent::Leaving { class, entity });
    monitor.leave(class);
    let _ = events.send(CrossingEvent::Left { class, entity });
    tracing::debug!(%class, entity, "off the bridge");
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
