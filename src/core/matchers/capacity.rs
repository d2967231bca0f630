//! CapacityMatcher (§4.3.3, priority 2)
//!
//! Hard-rejects a driver with no remaining seats; otherwise scores higher
//! for drivers that are already more full, biasing toward consolidating
//! passengers into partially-full cars rather than spreading them thin.
//! The score never enters the weighted sum (capacity is a gate, not a
//! ranking signal, §4.4) but is kept as a real computation rather than a
//! bare bool so the formula stays inspectable.

use super::MatchVerdict;

pub fn evaluate(remaining_seats: u32, driver_total_seats: u32) -> MatchVerdict {
    if remaining_seats == 0 {
        return MatchVerdict::HardReject;
    }
    if driver_total_seats == 0 {
        return MatchVerdict::Score(0.5);
    }
    let fill_ratio = (driver_total_seats - remaining_seats) as f64 / driver_total_seats as f64;
    MatchVerdict::Score(0.5 + 0.5 * fill_ratio)
}
