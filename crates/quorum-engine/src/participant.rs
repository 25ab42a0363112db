//! Participant availability records.
//!
//! A participant is an opaque stable id, a display name, and the set of
//! intervals they marked themselves free. Intervals arrive in whatever order
//! and shape the caller painted them — possibly overlapping, unsorted, or
//! malformed — so every consumer goes through the sanitize/merge helpers
//! here instead of trusting the raw set.

use chrono::{DateTime, Utc};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::interval::{self, TimeInterval};

/// One participant's free-time submission.
///
/// `user_id` is an opaque stable identifier supplied by the caller's
/// identity layer; the engine never interprets it. Wire format is camelCase
/// (`userId`, `userName`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantAvailability {
    pub user_id: String,
    pub user_name: String,
    pub intervals: Vec<TimeInterval>,
}

impl ParticipantAvailability {
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        intervals: Vec<TimeInterval>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            intervals,
        }
    }

    /// Copy of this record with malformed intervals (`end <= start`) dropped.
    ///
    /// One bad interval must not blank out the whole group's result, so bad
    /// records are skipped in isolation. Order of the surviving intervals is
    /// preserved.
    pub fn sanitized(&self) -> ParticipantAvailability {
        let kept: Vec<TimeInterval> = self
            .intervals
            .iter()
            .copied()
            .filter(TimeInterval::is_well_formed)
            .collect();

        if kept.len() < self.intervals.len() {
            trace!(
                "participant {}: dropped {} malformed interval(s)",
                self.user_id,
                self.intervals.len() - kept.len()
            );
        }

        ParticipantAvailability {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            intervals: kept,
        }
    }

    /// This participant's free time as a sorted, non-overlapping interval
    /// set (malformed records dropped, the rest merged).
    pub fn merged_intervals(&self) -> Vec<TimeInterval> {
        interval::merge(&self.sanitized().intervals)
    }

    /// Copy of this record clamped to a scheduling window.
    ///
    /// Each interval is clipped to `[window.start, window.end)`; intervals
    /// that fall entirely outside, or collapse to nothing once clipped, are
    /// dropped. Callers holding a group date range apply this before
    /// matching so no one can mark time outside the window.
    pub fn clipped_to(&self, window: &TimeInterval) -> ParticipantAvailability {
        let clipped: Vec<TimeInterval> = self
            .sanitized()
            .intervals
            .into_iter()
            .map(|iv| TimeInterval::new(iv.start.max(window.start), iv.end.min(window.end)))
            .filter(TimeInterval::is_well_formed)
            .collect();

        ParticipantAvailability {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            intervals: clipped,
        }
    }

    /// Every well-formed interval boundary (starts and ends), unsorted.
    pub(crate) fn boundaries(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.intervals
            .iter()
            .filter(|iv| iv.is_well_formed())
            .flat_map(|iv| [iv.start, iv.end])
    }
}
