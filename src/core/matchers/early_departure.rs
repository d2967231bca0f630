//! EarlyDepartureMatcher (§4.3.2, priority 1)
//!
//! Vestigial: `TimingMatcher` already hard-rejects any outbound pair with
//! mismatched early-departure flags, so this matcher can never be the
//! deciding factor in practice. Its weight defaults to 0.0 and the
//! Scoring Aggregator does not call it; it is kept only so the formula
//! from §4.3.2 stays inspectable and testable on its own.

use crate::types::TripDirection;

use super::MatchVerdict;

pub fn evaluate(direction: TripDirection, passenger_leaving_early: bool, driver_leaving_early: bool) -> MatchVerdict {
    match direction {
        TripDirection::ToEvent => MatchVerdict::Score(0.5),
        TripDirection::FromEvent => match (passenger_leaving_early, driver_leaving_early) {
            (true, true) => MatchVerdict::Score(1.0),
            (false, false) => MatchVerdict::Score(0.5),
            _ => MatchVerdict::Score(0.1),
        },
    }
}
