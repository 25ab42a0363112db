//! Strategy dispatch and configuration validation.
//!
//! The orchestrator validates options, sanitizes the input records once,
//! tries the perfect strategy, and falls back to the partial strategy when
//! the perfect one yields no windows. The two strategies are mutually
//! exclusive — a result is never blended from both.

use chrono_tz::Tz;
use log::debug;

use crate::error::{MatchError, Result};
use crate::participant::ParticipantAvailability;
use crate::window::MatchResult;
use crate::{partial, perfect};

/// Engine configuration.
///
/// `reference_timezone` is the IANA zone in which the scorer reads
/// hour-of-day; the engine never consults the process-local zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Exact length of every produced window, in minutes.
    pub duration_minutes: u32,
    /// Minimum number of participants a partial window must cover.
    pub min_participants: usize,
    /// Zone for time-of-day scoring.
    pub reference_timezone: Tz,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            duration_minutes: 30,
            min_participants: 1,
            reference_timezone: Tz::UTC,
        }
    }
}

impl MatchOptions {
    /// Fail fast on configuration that would otherwise produce an empty or
    /// misleading result. `total_participants` is the size of the group the
    /// options are applied to; the group-size check is skipped for an empty
    /// group, which short-circuits to an empty result instead.
    fn validate(&self, total_participants: usize) -> Result<()> {
        if self.duration_minutes == 0 {
            return Err(MatchError::InvalidDuration(self.duration_minutes));
        }
        if self.min_participants == 0 {
            return Err(MatchError::InvalidMinParticipants(self.min_participants));
        }
        if total_participants > 0 && self.min_participants > total_participants {
            return Err(MatchError::MinParticipantsExceedsGroup {
                required: self.min_participants,
                total: total_participants,
            });
        }
        Ok(())
    }
}

/// Compute meeting-time candidates for a group.
///
/// Tries the perfect strategy first; when it yields at least one window the
/// result is returned with `perfect_match = true` and the partial strategy
/// never runs. Otherwise the partial strategy runs and the result carries
/// `perfect_match = false` — even if some window happens to cover everyone.
///
/// An empty participant list is a valid input and returns the empty result
/// immediately. Malformed intervals are dropped per-record before either
/// strategy sees them.
///
/// # Errors
/// Returns a [`MatchError`] when the options are inconsistent
/// (zero duration, zero minimum, or a minimum exceeding the group size).
pub fn run_match(
    participants: &[ParticipantAvailability],
    options: &MatchOptions,
) -> Result<MatchResult> {
    options.validate(participants.len())?;

    if participants.is_empty() {
        return Ok(MatchResult::empty());
    }

    debug!(
        "matching {} participant(s), duration {} min, min {} attendee(s), zone {}",
        participants.len(),
        options.duration_minutes,
        options.min_participants,
        options.reference_timezone
    );

    let sanitized: Vec<ParticipantAvailability> =
        participants.iter().map(|p| p.sanitized()).collect();

    let windows = perfect::find_perfect_windows(
        &sanitized,
        options.duration_minutes,
        options.reference_timezone,
    );
    if !windows.is_empty() {
        debug!("perfect strategy produced {} window(s)", windows.len());
        return Ok(MatchResult {
            windows,
            perfect_match: true,
        });
    }

    let windows = partial::find_partial_windows(
        &sanitized,
        options.duration_minutes,
        options.min_participants,
        options.reference_timezone,
    );
    Ok(MatchResult {
        windows,
        perfect_match: false,
    })
}
