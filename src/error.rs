//! Core error kinds (§7)
//!
//! Hard rejects from matchers and infeasibility are never represented here —
//! they are ordinary `UnmatchedReason` values on a successful result. This
//! enum only carries the two caller-visible failure kinds the spec names.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchingError {
    /// The call itself is malformed — e.g. `direction = TO_EVENT` with no
    /// `eventStartTime` (§6, §7). Fails before any mutation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Defensive fallback for states the Context Builder's own invariants
    /// are supposed to make unreachable (e.g. a distance-matrix index that
    /// must exist because it was assigned at build time). Never expected to
    /// fire in a correct build.
    #[error("internal error: {0}")]
    Internal(String),
}
