//! DriverPreferenceMatcher (§4.3.5, priority 4)
//!
//! Reserved for a future explicit passenger->driver preference list; no
//! such signal exists on the wire today, so every pair scores the fixed
//! neutral midpoint. Still enters the weighted sum at its configured
//! weight so turning the signal on later is a scoring-layer change only.

use super::MatchVerdict;

pub fn evaluate() -> MatchVerdict {
    MatchVerdict::Score(0.5)
}
