//! Shared helpers for CLI specs

use assert_cmd::Command;

pub fn onelane() -> Command {
    Command::cargo_bin("onelane").unwrap()
}

/// Arguments for a run small and fast enough for CI.
pub fn fast_run() -> Vec<&'static str> {
    vec![
        "--cars",
        "3",
        "--pedestrians",
        "1",
        "--car-gap",
        "1ms",
        "--ped-gap",
        "1ms",
        "--car-cross-min",
        "1ms",
        "--car-cross-max",
        "2ms",
        "--ped-cross-min",
        "1ms",
        "--ped-cross-max",
        "2ms",
        "--seed",
        "7",
    ]
}
