//! Tests for the per-slot coverage grid.

use chrono::{TimeZone, Utc};
use quorum_engine::{coverage_grid, CoverageOptions, MatchError, MatchWindow};

fn window(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32, count: usize) -> MatchWindow {
    let ids: Vec<String> = (0..count).map(|i| format!("u{i}")).collect();
    let names: Vec<String> = (0..count).map(|i| format!("User {i}")).collect();
    MatchWindow {
        start: Utc
            .with_ymd_and_hms(2026, 9, 1, start_hour, start_min, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(2026, 9, 1, end_hour, end_min, 0)
            .unwrap(),
        participants: ids,
        participant_names: names,
        score: count as f64,
        total_participants: count,
    }
}

fn day_range() -> (chrono::DateTime<Utc>, chrono::DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 9, 1, 23, 59, 0).unwrap(),
    )
}

#[test]
fn default_grid_covers_the_operating_band_in_half_hour_slots() {
    let (start, end) = day_range();

    let cells = coverage_grid(&[], start, end, &CoverageOptions::default()).unwrap();

    // Hours 12-22 in 30-minute slots: 20 cells, all empty.
    assert_eq!(cells.len(), 20);
    assert_eq!(
        cells[0].start,
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(
        cells[19].start,
        Utc.with_ymd_and_hms(2026, 9, 1, 21, 30, 0).unwrap()
    );
    assert!(cells.iter().all(|c| c.participant_count == 0));
}

#[test]
fn cell_takes_the_best_count_among_overlapping_windows() {
    let windows = vec![
        window(14, 0, 14, 30, 2),
        window(14, 15, 14, 45, 3),
    ];
    let (start, end) = day_range();

    let cells = coverage_grid(&windows, start, end, &CoverageOptions::default()).unwrap();

    let at = |h: u32, m: u32| {
        cells
            .iter()
            .find(|c| c.start == Utc.with_ymd_and_hms(2026, 9, 1, h, m, 0).unwrap())
            .unwrap()
    };

    // 14:00-14:30 overlaps both windows; the larger attendance wins.
    assert_eq!(at(14, 0).participant_count, 3);
    // 14:30-15:00 only overlaps the 14:15-14:45 window.
    assert_eq!(at(14, 30).participant_count, 3);
    // 13:30-14:00 merely touches the first window — touching is not overlap.
    assert_eq!(at(13, 30).participant_count, 0);
    assert_eq!(at(15, 0).participant_count, 0);
}

#[test]
fn grid_spans_every_local_day_in_the_range() {
    let start = Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 9, 2, 10, 0, 0).unwrap();

    let cells = coverage_grid(&[], start, end, &CoverageOptions::default()).unwrap();

    assert_eq!(cells.len(), 40);
    assert_eq!(
        cells[20].start,
        Utc.with_ymd_and_hms(2026, 9, 2, 12, 0, 0).unwrap()
    );
}

#[test]
fn slots_are_laid_out_on_local_days_of_the_reference_timezone() {
    let (start, end) = day_range();
    let options = CoverageOptions {
        reference_timezone: "Asia/Tokyo".parse().unwrap(),
        ..CoverageOptions::default()
    };

    let cells = coverage_grid(&[], start, end, &options).unwrap();

    // 2026-09-01T00:00Z is already Sep 1 in Tokyo; noon JST is 03:00 UTC.
    assert_eq!(
        cells[0].start,
        Utc.with_ymd_and_hms(2026, 9, 1, 3, 0, 0).unwrap()
    );
}

#[test]
fn zero_slot_size_is_a_configuration_error() {
    let (start, end) = day_range();
    let options = CoverageOptions {
        slot_minutes: 0,
        ..CoverageOptions::default()
    };

    assert_eq!(
        coverage_grid(&[], start, end, &options).unwrap_err(),
        MatchError::InvalidSlotMinutes(0)
    );
}

#[test]
fn inverted_hour_band_is_a_configuration_error() {
    let (start, end) = day_range();
    let options = CoverageOptions {
        hour_start: 22,
        hour_end: 12,
        ..CoverageOptions::default()
    };

    assert_eq!(
        coverage_grid(&[], start, end, &options).unwrap_err(),
        MatchError::InvalidHourBand { start: 22, end: 12 }
    );
}
