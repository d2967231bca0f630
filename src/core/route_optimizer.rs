//! Route Optimizer (§4.6)
//!
//! Orders each driver's assigned passengers with a greedy
//! nearest-neighbor walk from the route's origin, then derives per-stop
//! detour and cumulative-distance figures from that order. No attempt at
//! a globally optimal tour — nearest-neighbor is sufficient for the
//! group sizes this worker handles.

use crate::core::context::MatcherContext;
use crate::core::matchers::route_endpoints;
use crate::types::{Driver, RideGroup, TripDirection, Waypoint};

pub struct RouteOptimizer;

impl RouteOptimizer {
    pub fn build_ride_group(
        ctx: &MatcherContext,
        driver: &Driver,
        assigned_passenger_ids: &[String],
        direction: TripDirection,
    ) -> RideGroup {
        if assigned_passenger_ids.is_empty() {
            return RideGroup::empty(driver.id(), direction);
        }

        let (origin, destination) = route_endpoints(direction, driver.id());
        let ordered = nearest_neighbor_order(ctx, &origin, assigned_passenger_ids);

        let mut waypoints = Vec::with_capacity(ordered.len());
        let mut cumulative = 0.0;
        let mut previous = origin.clone();
        for (i, passenger_id) in ordered.iter().enumerate() {
            let leg = ctx.distance(&previous, passenger_id);
            cumulative += leg;
            let stop_order = (i + 1) as u32;
            waypoints.push(Waypoint {
                passenger_id: passenger_id.clone(),
                stop_order,
                drop_off_order: direction.is_outbound().then_some(stop_order),
                pickup_order: direction.is_inbound().then_some(stop_order),
                detour_added_miles: leg,
                distance_from_origin_miles: cumulative,
            });
            previous = passenger_id.clone();
        }

        let total_route_distance = ctx.route_distance_through(&origin, &ordered, &destination);
        let direct_distance = ctx.driver_direct_distance(driver.id());
        let total_detour = (total_route_distance - direct_distance).max(0.0);

        RideGroup {
            driver_id: driver.id().to_string(),
            ordered_passengers: ordered,
            direction,
            total_route_distance_miles: total_route_distance,
            total_detour_miles: total_detour,
            waypoints,
            schedule: None,
        }
    }
}

/// Greedy nearest-neighbor walk starting at `origin`: repeatedly pick the
/// closest remaining passenger to the current position.
fn nearest_neighbor_order(ctx: &MatcherContext, origin: &str, passenger_ids: &[String]) -> Vec<String> {
    let mut remaining: Vec<String> = passenger_ids.to_vec();
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = origin.to_string();

    while !remaining.is_empty() {
        let (idx, _) = remaining
            .iter()
            .enumerate()
            .map(|(i, id)| (i, ctx.distance(&current, id)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap();
        let next = remaining.remove(idx);
        current = next.clone();
        ordered.push(next);
    }

    ordered
}
