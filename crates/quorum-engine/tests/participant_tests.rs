//! Tests for participant record normalization: sanitization, merging, and
//! scheduling-window clipping.

use chrono::{TimeZone, Utc};
use quorum_engine::{ParticipantAvailability, TimeInterval};

/// Helper to create an interval from hour/minute ranges on a fixed day.
fn iv(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeInterval {
    TimeInterval::new(
        Utc.with_ymd_and_hms(2026, 9, 1, start_hour, start_min, 0)
            .unwrap(),
        Utc.with_ymd_and_hms(2026, 9, 1, end_hour, end_min, 0)
            .unwrap(),
    )
}

#[test]
fn sanitized_drops_only_malformed_intervals() {
    let p = ParticipantAvailability::new(
        "u1",
        "Alice",
        vec![iv(9, 0, 10, 0), iv(11, 0, 11, 0), iv(12, 0, 11, 30)],
    );

    let clean = p.sanitized();

    assert_eq!(clean.intervals, vec![iv(9, 0, 10, 0)]);
    assert_eq!(clean.user_id, "u1");
    assert_eq!(clean.user_name, "Alice");
}

#[test]
fn merged_intervals_normalize_overlapping_submissions() {
    // Painted out of order, with an overlap and a touching fragment.
    let p = ParticipantAvailability::new(
        "u1",
        "Alice",
        vec![iv(9, 30, 10, 30), iv(9, 0, 9, 45), iv(10, 30, 11, 0)],
    );

    assert_eq!(p.merged_intervals(), vec![iv(9, 0, 11, 0)]);
}

#[test]
fn clipped_to_clamps_intervals_to_the_scheduling_window() {
    let p = ParticipantAvailability::new(
        "u1",
        "Alice",
        vec![
            iv(7, 0, 9, 0),   // straddles the window start
            iv(10, 0, 11, 0), // fully inside
            iv(11, 30, 13, 0), // straddles the window end
            iv(14, 0, 15, 0), // fully outside — dropped
        ],
    );

    let clipped = p.clipped_to(&iv(8, 0, 12, 0));

    assert_eq!(
        clipped.intervals,
        vec![iv(8, 0, 9, 0), iv(10, 0, 11, 0), iv(11, 30, 12, 0)]
    );
}

#[test]
fn clipping_drops_intervals_that_collapse_to_nothing() {
    // Touches the window boundary exactly: empty once clipped.
    let p = ParticipantAvailability::new("u1", "Alice", vec![iv(7, 0, 8, 0)]);

    let clipped = p.clipped_to(&iv(8, 0, 12, 0));

    assert!(clipped.intervals.is_empty());
}
