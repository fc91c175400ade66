// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! onelane-core: Core types for the one-lane bridge simulator
//!
//! This crate provides:
//! - The traffic class selector shared by every component
//! - Crossing lifecycle events for observability
//! - Simulation configuration and its validation

pub mod class;
pub mod config;
pub mod event;

// Re-exports
pub use class::{ParseClassError, TrafficClass};
pub use config::{ConfigError, DelayRange, SimConfig};
pub use event::CrossingEvent;
