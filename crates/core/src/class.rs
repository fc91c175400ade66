// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traffic classes contending for the bridge

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the three classes of traffic that contend for the bridge.
///
/// Classes exclude each other on the bridge; entities within one class
/// do not. The variant is used purely as a selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrafficClass {
    /// Car travelling north
    CarNorth,
    /// Car travelling south
    CarSouth,
    /// Pedestrian
    Pedestrian,
}

impl TrafficClass {
    /// All classes, in stable slot order.
    pub const ALL: [TrafficClass; 3] = [
        TrafficClass::CarNorth,
        TrafficClass::CarSouth,
        TrafficClass::Pedestrian,
    ];

    /// Stable index into per-class state arrays.
    pub const fn index(self) -> usize {
        match self {
            TrafficClass::CarNorth => 0,
            TrafficClass::CarSouth => 1,
            TrafficClass::Pedestrian => 2,
        }
    }

    /// The two classes this one excludes.
    pub const fn others(self) -> [TrafficClass; 2] {
        match self {
            TrafficClass::CarNorth => [TrafficClass::CarSouth, TrafficClass::Pedestrian],
            TrafficClass::CarSouth => [TrafficClass::CarNorth, TrafficClass::Pedestrian],
            TrafficClass::Pedestrian => [TrafficClass::CarNorth, TrafficClass::CarSouth],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TrafficClass::CarNorth => "car-north",
            TrafficClass::CarSouth => "car-south",
            TrafficClass::Pedestrian => "pedestrian",
        }
    }
}

impl std::fmt::Display for TrafficClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unknown class selector, rejected at the API boundary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown traffic class: {0} (expected car-north, car-south, or pedestrian)")]
pub struct ParseClassError(pub String);

impl FromStr for TrafficClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car-north" | "north" => Ok(TrafficClass::CarNorth),
            "car-south" | "south" => Ok(TrafficClass::CarSouth),
            "pedestrian" | "ped" => Ok(TrafficClass::Pedestrian),
            other => Err(ParseClassError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "class_tests.rs"]
mod tests;
