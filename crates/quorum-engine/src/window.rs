//! Match result types.
//!
//! A `MatchWindow` is a candidate meeting slot of exactly the requested
//! duration together with the participants who can attend it; a
//! `MatchResult` is the ranked window list plus the strategy flag. Both are
//! JSON-serializable boundary types (camelCase on the wire, instants as
//! ISO-8601 strings).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hard cap on the number of windows returned by either strategy.
pub const MAX_WINDOWS: usize = 50;

/// A candidate meeting slot.
///
/// `end - start` equals the requested duration exactly. `participants`
/// holds only userIds whose availability fully covers `[start, end)`;
/// `participant_names` is aligned index-for-index with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub participants: Vec<String>,
    pub participant_names: Vec<String>,
    pub score: f64,
    pub total_participants: usize,
}

/// Outcome of one engine invocation.
///
/// Windows are chronological when `perfect_match` is true and
/// score-descending otherwise. `windows.len() <= MAX_WINDOWS` always; an
/// empty list is a valid, non-error outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub windows: Vec<MatchWindow>,
    pub perfect_match: bool,
}

impl MatchResult {
    /// The empty result: no windows, partial-strategy flag.
    pub fn empty() -> Self {
        Self {
            windows: Vec::new(),
            perfect_match: false,
        }
    }
}
