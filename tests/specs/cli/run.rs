//! End-to-end run specs

use crate::prelude::*;
use predicates::str::contains;

#[test]
fn fast_run_reports_summary() {
    onelane()
        .args(fast_run())
        .assert()
        .success()
        .stdout(contains("crossed: 3 car-north, 3 car-south, 1 pedestrian"));
}

#[test]
fn narration_mentions_the_bridge() {
    onelane()
        .args(fast_run())
        .assert()
        .success()
        .stdout(contains("enters the bridge"))
        .stdout(contains("out of the bridge"));
}

#[test]
fn quiet_run_prints_only_the_summary() {
    let output = onelane().args(fast_run()).arg("--quiet").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "{stdout}");
    assert!(stdout.starts_with("crossed:"), "{stdout}");
}

#[test]
fn json_run_emits_parseable_events() {
    let output = onelane().args(fast_run()).arg("--json").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let mut left = 0;
    for line in stdout.lines().filter(|l| l.starts_with('{')) {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(event["event"].is_string(), "{line}");
        assert!(event["entity"].is_u64(), "{line}");
        if event["event"] == "left" {
            left += 1;
        }
    }
    assert_eq!(left, 7, "expected every entity to leave\n{stdout}");
}

#[test]
fn empty_run_completes() {
    onelane()
        .args(["--cars", "0", "--pedestrians", "0"])
        .assert()
        .success()
        .stdout(contains("crossed: 0 car-north, 0 car-south, 0 pedestrian"));
}
