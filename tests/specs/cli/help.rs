//! Help and version output specs

use crate::prelude::*;
use predicates::str::contains;

#[test]
fn help_describes_the_simulation() {
    onelane()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("one-lane bridge"));
}

#[test]
fn help_lists_traffic_flags() {
    onelane()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--cars"))
        .stdout(contains("--pedestrians"))
        .stdout(contains("--seed"));
}

#[test]
fn version_prints() {
    onelane().arg("--version").assert().success();
}
