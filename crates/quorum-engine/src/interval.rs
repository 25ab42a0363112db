//! Interval algebra over absolute UTC instants.
//!
//! Free time is represented as half-open `[start, end)` intervals. Two
//! operations carry the whole engine: `merge` normalizes an arbitrary
//! interval set into a sorted, non-overlapping sequence, and `intersect`
//! computes the common free time of two such sets.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of absolute instants during which a
/// participant is free.
///
/// A well-formed interval has `start < end` strictly; records violating
/// that are dropped at the engine boundary rather than propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Length of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// `start < end` strictly — zero-length and inverted intervals are not
    /// well-formed.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Whether this interval fully contains `[start, end)`.
    ///
    /// Containment, not mere overlap: the window must fit inside the
    /// interval entirely.
    pub fn contains(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start <= start && self.end >= end
    }
}

/// Merge overlapping or touching intervals into a sorted, non-overlapping
/// sequence.
///
/// Intervals are sorted by `(start, end)` and walked left to right, extending
/// the current run whenever the next interval starts at or before the run's
/// end. Touching intervals coalesce: `[9:00, 9:30)` and `[9:30, 10:00)`
/// become `[9:00, 10:00)`. Merging an already-merged sequence is a no-op.
pub fn merge(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut sorted: Vec<TimeInterval> = intervals.to_vec();
    if sorted.is_empty() {
        return sorted;
    }

    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or touching — extend the current run.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Intersect two interval sets: the merged union of every pairwise overlap.
///
/// For each pair (one interval from each side) the overlap is
/// `[max(starts), min(ends))`, kept only when non-empty. Every point of the
/// result lies in some interval of `a` and some interval of `b`.
pub fn intersect(a: &[TimeInterval], b: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut overlaps = Vec::new();

    for ai in a {
        for bi in b {
            let start = ai.start.max(bi.start);
            let end = ai.end.min(bi.end);
            if start < end {
                overlaps.push(TimeInterval::new(start, end));
            }
        }
    }

    merge(&overlaps)
}
