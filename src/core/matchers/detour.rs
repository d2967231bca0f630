//! DetourMatcher (§4.3.6, priority 5)
//!
//! The marginal cost of inserting one more passenger at the end of a
//! driver's current stop order. Shared with the Assignment Engine's sweep
//! pass and the Route Optimizer, which both need the same incremental/total
//! detour arithmetic outside of a scoring context.

use crate::core::context::MatcherContext;
use crate::types::{MatchingConfig, TripDirection};

use super::{clamp01, route_endpoints, MatchVerdict};

/// `(incremental, total)` detour in miles from appending `passenger_id` to
/// `driver_id`'s current assignment list. `incremental` is the marginal
/// cost of this one insertion; `total` is the full route's overage past
/// the driver's direct distance once the passenger is added.
pub fn incremental_and_total_detour(
    ctx: &MatcherContext,
    direction: TripDirection,
    driver_id: &str,
    passenger_id: &str,
) -> (f64, f64) {
    let (origin, destination) = route_endpoints(direction, driver_id);
    let current = ctx.assignments.get(driver_id).cloned().unwrap_or_default();

    let without = ctx.route_distance_through(&origin, &current, &destination);

    let mut with = current.clone();
    with.push(passenger_id.to_string());
    let with_distance = ctx.route_distance_through(&origin, &with, &destination);

    let incremental = with_distance - without;
    let total = with_distance - ctx.driver_direct_distance(driver_id);
    (incremental, total)
}

pub fn evaluate(
    passenger_id: &str,
    driver_id: &str,
    ctx: &MatcherContext,
    config: &MatchingConfig,
    direction: TripDirection,
) -> MatchVerdict {
    let (incremental, total) = incremental_and_total_detour(ctx, direction, driver_id, passenger_id);

    if direction.is_inbound() && total > config.max_detour_miles {
        return MatchVerdict::HardReject;
    }

    if config.max_detour_miles <= 0.0 {
        return MatchVerdict::Score(if incremental <= 0.0 { 1.0 } else { 0.0 });
    }

    MatchVerdict::Score(clamp01(1.0 - incremental / config.max_detour_miles))
}
