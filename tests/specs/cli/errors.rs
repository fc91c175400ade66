//! Input validation specs

use crate::prelude::*;
use predicates::str::contains;

#[test]
fn rejects_unparseable_duration() {
    onelane()
        .args(["--car-gap", "fast"])
        .assert()
        .failure()
        .stderr(contains("--car-gap"));
}

#[test]
fn rejects_inverted_car_crossing_range() {
    onelane()
        .args(["--car-cross-min", "5s", "--car-cross-max", "1s"])
        .assert()
        .failure()
        .stderr(contains("exceeds"));
}

#[test]
fn rejects_zero_arrival_gap() {
    onelane()
        .args(["--cars", "0", "--pedestrians", "1", "--ped-gap", "0s"])
        .assert()
        .failure()
        .stderr(contains("arrival gap"));
}

#[test]
fn rejects_unknown_flag() {
    onelane().arg("--bicycles").assert().failure();
}
