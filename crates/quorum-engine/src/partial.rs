//! Partial-match strategy: best-effort windows covering a subset of the
//! group.
//!
//! Runs only when the perfect strategy yields nothing. Sweeps the distinct
//! interval boundaries of all participants as candidate window starts, asks
//! which participants' free time fully contains each candidate window, and
//! ranks the survivors by score.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use log::{debug, trace};

use crate::participant::ParticipantAvailability;
use crate::score::business_hours_score;
use crate::window::{MatchWindow, MAX_WINDOWS};

/// Every distinct interval boundary across all participants, sorted.
///
/// Boundaries of malformed intervals are excluded; everything else — starts
/// and ends alike, pre-merge — is a candidate window start.
pub fn collect_breakpoints(participants: &[ParticipantAvailability]) -> Vec<DateTime<Utc>> {
    let set: BTreeSet<DateTime<Utc>> = participants
        .iter()
        .flat_map(|p| p.boundaries())
        .collect();
    set.into_iter().collect()
}

/// Find the best-scoring windows that at least `min_participants` can attend.
///
/// Candidates start at each breakpoint and run for exactly the requested
/// duration; candidates reaching past the final breakpoint are discarded
/// (there is no availability data out there). A participant qualifies for a
/// candidate only when one of their merged free intervals fully contains it
/// — containment, not mere overlap.
///
/// Survivors are sorted by score descending, then earlier start, then larger
/// participant count (stable beyond that, so equal candidates keep
/// breakpoint order), deduplicated on consecutive identical
/// `(start, participant count)` pairs, and capped at [`MAX_WINDOWS`].
pub fn find_partial_windows(
    participants: &[ParticipantAvailability],
    duration_minutes: u32,
    min_participants: usize,
    zone: Tz,
) -> Vec<MatchWindow> {
    let breakpoints = collect_breakpoints(participants);
    let Some(&horizon) = breakpoints.last() else {
        return Vec::new();
    };

    let merged: Vec<_> = participants
        .iter()
        .map(|p| (p, p.merged_intervals()))
        .collect();

    let total = participants.len();
    let duration = Duration::minutes(i64::from(duration_minutes));

    let mut windows = Vec::new();
    for &window_start in breakpoints.iter().take(breakpoints.len().saturating_sub(1)) {
        let window_end = window_start + duration;
        if window_end > horizon {
            // Breakpoints are sorted, so every later candidate overruns too.
            break;
        }

        let mut qualifying = Vec::new();
        let mut qualifying_names = Vec::new();
        for (p, intervals) in &merged {
            if intervals
                .iter()
                .any(|iv| iv.contains(window_start, window_end))
            {
                qualifying.push(p.user_id.clone());
                qualifying_names.push(p.user_name.clone());
            }
        }

        if qualifying.len() >= min_participants {
            let score = qualifying.len() as f64 * business_hours_score(window_start, zone);
            windows.push(MatchWindow {
                start: window_start,
                end: window_end,
                participants: qualifying,
                participant_names: qualifying_names,
                score,
                total_participants: total,
            });
        }
    }

    trace!(
        "{} of {} breakpoint candidates cleared min_participants={}",
        windows.len(),
        breakpoints.len(),
        min_participants
    );

    // Rank: score descending, earlier start first, larger group first. The
    // sort is stable, so anything still tied keeps breakpoint order.
    windows.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| b.participants.len().cmp(&a.participants.len()))
    });

    windows.dedup_by(|cur, prev| {
        cur.start == prev.start && cur.participants.len() == prev.participants.len()
    });
    windows.truncate(MAX_WINDOWS);

    debug!("partial strategy produced {} window(s)", windows.len());
    windows
}
