// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! onelane-engine: the bridge monitor and its simulation harness
//!
//! The monitor is the only component with correctness requirements;
//! entities and generators are harness code that call into it.

mod entity;
mod error;
mod generator;
mod monitor;
mod sim;

pub use entity::{cross, EventSender};
pub use error::SimError;
pub use generator::Generator;
pub use monitor::{BridgeMonitor, BridgeState};
pub use sim::{SimSummary, Simulation};
