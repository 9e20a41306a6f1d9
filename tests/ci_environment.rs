//! Tests for CI-marker detection.
//!
//! These mutate the process environment, so they are serialized.

use serial_test::serial;

use airlift::report::ci_suppressed;

#[test]
#[serial]
fn ci_marker_suppresses_reporting() {
    std::env::set_var("CI", "true");
    assert!(ci_suppressed());
    std::env::remove_var("CI");
}

#[test]
#[serial]
fn any_ci_value_counts_even_false() {
    // Presence is the marker; the value is not interpreted.
    std::env::set_var("CI", "false");
    assert!(ci_suppressed());
    std::env::remove_var("CI");
}

#[test]
#[serial]
fn absent_ci_marker_allows_reporting() {
    std::env::remove_var("CI");
    assert!(!ci_suppressed());
}
