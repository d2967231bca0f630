//! RouteEfficiencyMatcher (§4.3.4, priority 3)
//!
//! Compares the driver's direct event<->home distance `D` against the
//! round-the-passenger route distance `R`. A tight-efficiency ratio `e =
//! D / R` scores high; for inbound trips an `R - D` overage past the
//! configured detour cap is an infeasible route, not just a low score.

use crate::core::context::MatcherContext;
use crate::types::{Driver, MatchingConfig, Passenger, TripDirection};

use super::{clamp01, route_endpoints, MatchVerdict};

pub fn evaluate(
    passenger: &Passenger,
    driver: &Driver,
    ctx: &MatcherContext,
    config: &MatchingConfig,
    direction: TripDirection,
) -> MatchVerdict {
    let (origin, destination) = route_endpoints(direction, driver.id());

    let leg_to_passenger = ctx.distance(&origin, passenger.id());
    let leg_from_passenger = ctx.distance(passenger.id(), &destination);
    if !leg_to_passenger.is_finite() || !leg_from_passenger.is_finite() {
        return MatchVerdict::HardReject;
    }

    let route_distance = leg_to_passenger + leg_from_passenger;
    let direct_distance = ctx.driver_direct_distance(driver.id());

    if direction.is_inbound() && route_distance - direct_distance > config.max_detour_miles {
        return MatchVerdict::HardReject;
    }

    let efficiency = if route_distance <= 0.0 {
        1.0
    } else {
        direct_distance / route_distance
    };

    MatchVerdict::Score(clamp01((efficiency - 0.5) * 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ContextBuilder;
    use crate::types::{Coordinate, Gender, GenderPreference, Person};

    fn person(id: &str, lat: f64, lng: f64) -> Person {
        Person {
            id: id.to_string(),
            name: id.to_string(),
            gender: Gender::PreferNotToSay,
            age: 30,
            home_coordinate: Coordinate::new(lat, lng),
            leaving_early: false,
            early_departure_time: None,
        }
    }

    fn passenger(id: &str, lat: f64, lng: f64) -> Passenger {
        Passenger {
            person: person(id, lat, lng),
            needs_ride: true,
            gender_preference: GenderPreference::Any,
        }
    }

    fn driver(id: &str, lat: f64, lng: f64) -> Driver {
        Driver {
            person: person(id, lat, lng),
            can_drive: true,
            available_seats: 3,
        }
    }

    #[test]
    fn passenger_on_the_way_scores_high() {
        let event = Coordinate::new(37.0, -122.0);
        let p = passenger("p1", 37.02, -122.02);
        let d = driver("d1", 37.05, -122.05);
        let ctx = ContextBuilder::build(&[p.clone()], &[d.clone()], &event);
        let config = MatchingConfig::default();
        match evaluate(&p, &d, &ctx, &config, TripDirection::FromEvent) {
            MatchVerdict::Score(s) => assert!(s > 0.5, "got {s}"),
            other => panic!("expected score, got {other:?}"),
        }
    }

    #[test]
    fn passenger_far_out_of_the_way_scores_low() {
        let event = Coordinate::new(37.0, -122.0);
        let p = passenger("p1", 38.5, -120.0);
        let d = driver("d1", 37.01, -122.01);
        let ctx = ContextBuilder::build(&[p.clone()], &[d.clone()], &event);
        let config = MatchingConfig::default();
        match evaluate(&p, &d, &ctx, &config, TripDirection::FromEvent) {
            MatchVerdict::Score(s) => assert!(s < 0.5, "got {s}"),
            other => panic!("expected score, got {other:?}"),
        }
    }

    #[test]
    fn inbound_overage_past_detour_cap_rejects() {
        let event = Coordinate::new(37.0, -122.0);
        let p = passenger("p1", 38.5, -120.0);
        let d = driver("d1", 37.01, -122.01);
        let ctx = ContextBuilder::build(&[p.clone()], &[d.clone()], &event);
        let mut config = MatchingConfig::default();
        config.max_detour_miles = 0.1;
        assert_eq!(
            evaluate(&p, &d, &ctx, &config, TripDirection::ToEvent),
            MatchVerdict::HardReject
        );
    }

    #[test]
    fn missing_coordinate_rejects() {
        let event = Coordinate::new(37.0, -122.0);
        let p = passenger("p1", 999.0, 999.0);
        let d = driver("d1", 37.01, -122.01);
        let ctx = ContextBuilder::build(&[p.clone()], &[d.clone()], &event);
        let config = MatchingConfig::default();
        assert_eq!(
            evaluate(&p, &d, &ctx, &config, TripDirection::FromEvent),
            MatchVerdict::HardReject
        );
    }
}
