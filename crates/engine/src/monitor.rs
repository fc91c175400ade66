// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge admission monitor
//!
//! Enforces three-way mutual exclusion over the bridge: at most one
//! traffic class occupies it at any instant, while any number of
//! same-class entities may cross together. Callers follow the
//! `enter` / cross / `leave` protocol; `enter` suspends without
//! busy-waiting until the caller's class may occupy the bridge.

use onelane_core::TrafficClass;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::Notify;

/// Point-in-time copy of the monitor's counters, indexed by
/// [`TrafficClass::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BridgeState {
    /// Entities blocked in `enter`, per class. Observational only;
    /// never consulted by the admission predicate.
    pub waiting: [u32; 3],
    /// Entities currently on the bridge, per class.
    pub inside: [u32; 3],
}

impl BridgeState {
    pub fn waiting(&self, class: TrafficClass) -> u32 {
        self.waiting[class.index()]
    }

    pub fn inside(&self, class: TrafficClass) -> u32 {
        self.inside[class.index()]
    }

    /// A class may enter iff no other class occupies the bridge.
    fn admissible(&self, class: TrafficClass) -> bool {
        let [a, b] = class.others();
        self.inside[a.index()] == 0 && self.inside[b.index()] == 0
    }

    fn check_exclusion(&self) {
        debug_assert!(
            self.inside.iter().filter(|&&n| n > 0).count() <= 1,
            "two traffic classes on the bridge at once: {:?}",
            self.inside
        );
    }
}

/// Monitor guarding the one-lane bridge.
///
/// All six counters live behind one mutex; suspension releases the
/// mutex and re-checks the admission predicate on every wake. One
/// wait queue per class, woken by broadcast from [`BridgeMonitor::leave`].
pub struct BridgeMonitor {
    state: Mutex<BridgeState>,
    queues: [Notify; 3],
}

impl BridgeMonitor {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BridgeState::default()),
            queues: [Notify::new(), Notify::new(), Notify::new()],
        }
    }

    fn lock(&self) -> MutexGuard<'_, BridgeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Suspend until no other class occupies the bridge, then occupy it.
    ///
    /// Admission looks only at occupancy counts, so waiters never hold
    /// each other back and several same-class callers may be admitted
    /// off a single wake. No ordering is guaranteed among waiters.
    pub async fn enter(&self, class: TrafficClass) {
        let idx = class.index();
        {
            let mut state = self.lock();
            state.waiting[idx] += 1;
        }
        tracing::trace!(%class, "waiting to enter");

        let notified = self.queues[idx].notified();
        tokio::pin!(notified);
        loop {
            // Register for a wakeup before checking the predicate, so a
            // `leave` that lands between the check and the await is not
            // lost.
            notified.as_mut().enable();
            {
                let mut state = self.lock();
                if state.admissible(class) {
                    state.waiting[idx] -= 1;
                    state.inside[idx] += 1;
                    state.check_exclusion();
                    tracing::trace!(%class, inside = state.inside[idx], "admitted");
                    return;
                }
            }
            notified.as_mut().await;
            notified.set(self.queues[idx].notified());
        }
    }

    /// Release one occupancy slot for `class`. Never blocks.
    ///
    /// # Panics
    ///
    /// Panics if `class` has no entity on the bridge. That is a broken
    /// caller contract, never silently corrected.
    pub fn leave(&self, class: TrafficClass) {
        let idx = class.index();
        let cleared = {
            let mut state = self.lock();
            assert!(
                state.inside[idx] > 0,
                "leave({class}) with no {class} on the bridge"
            );
            state.inside[idx] -= 1;
            state.check_exclusion();
            state.inside[idx] == 0
        };
        // Clearing this class can satisfy both other classes' admission
        // predicates at once, so wake every waiter on both queues and
        // let each re-check under the lock.
        if cleared {
            tracing::trace!(%class, "bridge cleared, waking waiters");
            for other in class.others() {
                self.queues[other.index()].notify_waiters();
            }
        }
    }

    /// Point-in-time copy of the counters.
    pub fn snapshot(&self) -> BridgeState {
        *self.lock()
    }
}

impl Default for BridgeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
