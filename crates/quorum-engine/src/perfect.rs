//! Perfect-match strategy: windows where every participant is free.
//!
//! Folds interval intersection across all participants' merged free-time
//! sets; each surviving interval is then sliced into candidate windows of
//! the requested duration on a fixed 15-minute grid.

use chrono::Duration;
use chrono_tz::Tz;
use log::debug;

use crate::interval::{self, TimeInterval};
use crate::participant::ParticipantAvailability;
use crate::score::business_hours_score;
use crate::window::{MatchWindow, MAX_WINDOWS};

/// Step between consecutive candidate window starts.
const SLOT_STEP_MINUTES: i64 = 15;

/// Find windows covered by literally everyone.
///
/// Returns chronological windows, capped at [`MAX_WINDOWS`]. An empty
/// return means this strategy yields nothing — either the common free time
/// is empty, or no common interval is long enough for the requested
/// duration — and the caller falls back to the partial strategy.
pub fn find_perfect_windows(
    participants: &[ParticipantAvailability],
    duration_minutes: u32,
    zone: Tz,
) -> Vec<MatchWindow> {
    if participants.is_empty() {
        return Vec::new();
    }

    let common = common_free_time(participants);
    debug!(
        "common free time across {} participant(s): {} interval(s)",
        participants.len(),
        common.len()
    );

    let user_ids: Vec<String> = participants.iter().map(|p| p.user_id.clone()).collect();
    let user_names: Vec<String> = participants.iter().map(|p| p.user_name.clone()).collect();
    let total = participants.len();
    let duration = Duration::minutes(i64::from(duration_minutes));
    let step = Duration::minutes(SLOT_STEP_MINUTES);

    let mut windows = Vec::new();
    for iv in &common {
        let mut cursor = iv.start;
        while cursor + duration <= iv.end {
            // All participants cover the window by construction of the fold.
            windows.push(MatchWindow {
                start: cursor,
                end: cursor + duration,
                participants: user_ids.clone(),
                participant_names: user_names.clone(),
                score: total as f64 * business_hours_score(cursor, zone),
                total_participants: total,
            });
            cursor += step;
        }
    }

    // `common` is merged, so the generated windows are already chronological.
    windows.truncate(MAX_WINDOWS);
    windows
}

/// The common free time of all participants, merged.
///
/// Exposed for callers that want the raw intersection (e.g. to display the
/// group's shared availability) without slicing it into windows.
pub fn common_free_time(participants: &[ParticipantAvailability]) -> Vec<TimeInterval> {
    let mut iter = participants.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    // Fold intersection across the remaining participants, in input order.
    // The operation is commutative in its result; only allocation cost
    // varies with ordering.
    let mut common = first.merged_intervals();
    for p in iter {
        if common.is_empty() {
            break;
        }
        common = interval::intersect(&common, &p.merged_intervals());
    }
    common
}
