//! AgeMatcher (§4.3.8, priority 7)
//!
//! Never rejects. Two-branch formula: within the configured grouping range
//! the score decays linearly from 1.0 to 0.5; beyond it, it keeps decaying
//! but is floored at 0.1 rather than ever reaching zero.

use super::MatchVerdict;

pub fn evaluate(passenger_age: u32, driver_age: u32, group_by_age_range: u32) -> MatchVerdict {
    let diff = (passenger_age as i64 - driver_age as i64).unsigned_abs() as f64;
    let range = group_by_age_range as f64;

    if diff == 0.0 {
        return MatchVerdict::Score(1.0);
    }
    if range > 0.0 && diff <= range {
        return MatchVerdict::Score(1.0 - 0.5 * diff / range);
    }
    let over = diff - range;
    MatchVerdict::Score((0.5 - over / 50.0).max(0.1))
}
