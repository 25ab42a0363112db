//! # quorum-engine
//!
//! Availability matching for group scheduling: given each participant's
//! free-time intervals inside a shared date window, find either slots where
//! *everyone* is free, or — failing that — the best-scoring slots where
//! only *some* participants are free.
//!
//! The engine is a pure, synchronous computation over request-scoped data.
//! It performs no I/O, holds no cross-call state, and is safe to invoke
//! concurrently for different requests without locking. Persistence,
//! identity, and transport belong to the caller.
//!
//! ## Quick start
//!
//! ```rust
//! use quorum_engine::{run_match, MatchOptions, ParticipantAvailability, TimeInterval};
//!
//! let alice = ParticipantAvailability::new(
//!     "u1",
//!     "Alice",
//!     vec![TimeInterval::new(
//!         "2026-09-01T14:00:00Z".parse().unwrap(),
//!         "2026-09-01T15:00:00Z".parse().unwrap(),
//!     )],
//! );
//! let bob = ParticipantAvailability::new(
//!     "u2",
//!     "Bob",
//!     vec![TimeInterval::new(
//!         "2026-09-01T14:00:00Z".parse().unwrap(),
//!         "2026-09-01T15:00:00Z".parse().unwrap(),
//!     )],
//! );
//!
//! let result = run_match(&[alice, bob], &MatchOptions::default()).unwrap();
//! assert!(result.perfect_match);
//! assert_eq!(result.windows[0].participants.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — interval algebra: merge and intersect over UTC instants
//! - [`participant`] — availability records, sanitization, window clipping
//! - [`score`] — time-of-day desirability multiplier
//! - [`window`] — `MatchWindow` / `MatchResult` output types
//! - [`perfect`] — everyone-free strategy
//! - [`partial`] — best-effort subset strategy
//! - [`engine`] — option validation and strategy dispatch
//! - [`coverage`] — per-slot participant-count grid for heatmap rendering
//! - [`error`] — configuration-error types

pub mod coverage;
pub mod engine;
pub mod error;
pub mod interval;
pub mod participant;
pub mod partial;
pub mod perfect;
pub mod score;
pub mod window;

pub use coverage::{coverage_grid, CoverageCell, CoverageOptions};
pub use engine::{run_match, MatchOptions};
pub use error::MatchError;
pub use interval::TimeInterval;
pub use participant::ParticipantAvailability;
pub use window::{MatchResult, MatchWindow, MAX_WINDOWS};
