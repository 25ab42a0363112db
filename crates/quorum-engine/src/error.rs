//! Error types for matching-engine operations.

use thiserror::Error;

/// Errors raised by configuration validation.
///
/// Malformed availability records are never errors — they are skipped in
/// isolation so one bad interval cannot blank out a whole group's result.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// `duration_minutes` was zero.
    #[error("meeting duration must be at least one minute (got {0})")]
    InvalidDuration(u32),

    /// `min_participants` was zero.
    #[error("minimum participant count must be at least 1 (got {0})")]
    InvalidMinParticipants(usize),

    /// `min_participants` exceeds the size of a non-empty group.
    #[error("minimum participant count {required} exceeds group size {total}")]
    MinParticipantsExceedsGroup { required: usize, total: usize },

    /// Coverage-grid slot size was zero.
    #[error("coverage slot size must be at least one minute (got {0})")]
    InvalidSlotMinutes(u32),

    /// Coverage-grid operating-hour band was empty or inverted.
    #[error("coverage hour band {start}..{end} is empty")]
    InvalidHourBand { start: u32, end: u32 },
}

/// Convenience alias used throughout quorum-engine.
pub type Result<T> = std::result::Result<T, MatchError>;
