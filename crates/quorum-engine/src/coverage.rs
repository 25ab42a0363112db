//! Per-slot coverage grid over a date range.
//!
//! Backs a results heatmap: for each day of the range and each fixed-size
//! slot inside an operating-hour band, the best participant count among the
//! match windows overlapping that slot. Slots are laid out on local days of
//! the reference timezone; a window that merely touches a slot boundary
//! does not count as overlapping it.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::window::MatchWindow;

/// Grid layout configuration. Defaults mirror the classic results screen:
/// 30-minute slots between noon and 10 pm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageOptions {
    /// Size of one slot, in minutes.
    pub slot_minutes: u32,
    /// First hour of the operating band (inclusive, local).
    pub hour_start: u32,
    /// Last hour of the operating band (exclusive, local).
    pub hour_end: u32,
    /// Zone whose local days the grid is laid out on.
    pub reference_timezone: Tz,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            slot_minutes: 30,
            hour_start: 12,
            hour_end: 22,
            reference_timezone: Tz::UTC,
        }
    }
}

/// One (day, slot) cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageCell {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Best participant count among windows overlapping this slot; 0 when
    /// nothing overlaps.
    pub participant_count: usize,
}

/// Compute the coverage grid for `windows` between `range_start` and
/// `range_end` (both inclusive of the local days they fall on).
///
/// Cells are emitted day by day, slot by slot, in chronological order.
/// Local times that do not exist in the reference timezone (spring-forward
/// gaps) are skipped.
///
/// # Errors
/// Returns a [`MatchError`] when `slot_minutes` is zero or the hour band is
/// empty.
pub fn coverage_grid(
    windows: &[MatchWindow],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    options: &CoverageOptions,
) -> Result<Vec<CoverageCell>> {
    if options.slot_minutes == 0 {
        return Err(MatchError::InvalidSlotMinutes(options.slot_minutes));
    }
    if options.hour_end <= options.hour_start {
        return Err(MatchError::InvalidHourBand {
            start: options.hour_start,
            end: options.hour_end,
        });
    }

    let zone = options.reference_timezone;
    let first_day = range_start.with_timezone(&zone).date_naive();
    let last_day = range_end.with_timezone(&zone).date_naive();

    let band_minutes = (options.hour_end - options.hour_start) * 60;
    let slots_per_day = band_minutes / options.slot_minutes;
    let slot_len = Duration::minutes(i64::from(options.slot_minutes));

    let mut cells = Vec::new();
    let mut day = first_day;
    while day <= last_day {
        let midnight = day.and_time(NaiveTime::MIN);
        for slot in 0..slots_per_day {
            let offset =
                Duration::minutes(i64::from(options.hour_start * 60 + slot * options.slot_minutes));
            // Nonexistent local times (DST gap) produce no cell.
            let Some(local_start) = zone.from_local_datetime(&(midnight + offset)).earliest()
            else {
                continue;
            };

            let slot_start = local_start.with_timezone(&Utc);
            let slot_end = slot_start + slot_len;

            let participant_count = windows
                .iter()
                .filter(|w| w.start < slot_end && slot_start < w.end)
                .map(|w| w.participants.len())
                .max()
                .unwrap_or(0);

            cells.push(CoverageCell {
                start: slot_start,
                end: slot_end,
                participant_count,
            });
        }

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(cells)
}
