//! Time-of-day desirability scoring.
//!
//! A window's rank is weighted by how conventional its start time is: late
//! morning scores highest, mid afternoon slightly above neutral, everything
//! else neutral. The score only orders candidates — it never excludes one.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Hours `[9, 12)` local — strongest multiplier.
const LATE_MORNING: std::ops::Range<u32> = 9..12;

/// Hours `[14, 17)` local — mild multiplier.
const MID_AFTERNOON: std::ops::Range<u32> = 14..17;

/// Desirability multiplier for a window starting at `instant`.
///
/// The hour of day is read in `zone`, the caller-supplied reference
/// timezone. Returns `1.1` during late morning, `1.05` during mid
/// afternoon, `1.0` otherwise.
pub fn business_hours_score(instant: DateTime<Utc>, zone: Tz) -> f64 {
    let hour = instant.with_timezone(&zone).hour();

    if LATE_MORNING.contains(&hour) {
        1.1
    } else if MID_AFTERNOON.contains(&hour) {
        1.05
    } else {
        1.0
    }
}
