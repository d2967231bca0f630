//! Scoring Aggregator (§4.4)
//!
//! Evaluates one (passenger, driver) pair against the matchers in a fixed
//! short-circuit order and, if nothing rejects, folds the survivors into
//! a single weighted score. The order follows each matcher's declared
//! priority (§4.3): Timing(0) and Capacity(2) gate eligibility outright;
//! RouteEfficiency(3) and Gender(6) can also hard-reject; Detour(5)
//! hard-rejects only inbound. EarlyDeparture and the remaining soft
//! matchers never reject and are folded straight into the sum.

use chrono::{DateTime, Utc};

use crate::core::context::MatcherContext;
use crate::core::matchers::{age, capacity, detour, driver_preference, gender, route_efficiency, timing, MatchVerdict};
use crate::types::{Driver, MatchingConfig, Passenger, TripDirection};

/// Which matcher produced a hard reject, kept so reason-determination
/// (§6 selection rule 4, "TimingMatcher was the sole matcher that
/// rejected") doesn't need to re-derive it from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectingMatcher {
    Timing,
    Capacity,
    RouteEfficiency,
    Gender,
    Detour,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairVerdict {
    pub hard_reject: Option<RejectingMatcher>,
    pub score: Option<f64>,
}

impl PairVerdict {
    fn reject(matcher: RejectingMatcher) -> Self {
        Self {
            hard_reject: Some(matcher),
            score: None,
        }
    }
}

/// Score one (passenger, driver) pair against the current ledger state in
/// `ctx`. Pure and read-only: callers decide whether/how to act on the
/// result.
pub fn score_pair(
    passenger: &Passenger,
    driver: &Driver,
    ctx: &MatcherContext,
    config: &MatchingConfig,
    direction: TripDirection,
    event_start_time: Option<DateTime<Utc>>,
) -> PairVerdict {
    if timing::evaluate(passenger, driver, ctx, &config.timing, direction, event_start_time) == MatchVerdict::HardReject {
        return PairVerdict::reject(RejectingMatcher::Timing);
    }

    let remaining_seats = ctx.available_seats.get(driver.id()).copied().unwrap_or(0);
    if capacity::evaluate(remaining_seats, driver.available_seats) == MatchVerdict::HardReject {
        return PairVerdict::reject(RejectingMatcher::Capacity);
    }

    let s_route = match route_efficiency::evaluate(passenger, driver, ctx, config, direction) {
        MatchVerdict::HardReject => return PairVerdict::reject(RejectingMatcher::RouteEfficiency),
        MatchVerdict::Score(s) => s,
    };

    let s_gender = match gender::evaluate(
        passenger.gender_preference,
        passenger.person.gender,
        driver.person.gender,
        config.enforce_gender_preference,
    ) {
        MatchVerdict::HardReject => return PairVerdict::reject(RejectingMatcher::Gender),
        MatchVerdict::Score(s) => s,
    };

    let s_detour = match detour::evaluate(passenger.id(), driver.id(), ctx, config, direction) {
        MatchVerdict::HardReject if direction.is_inbound() => return PairVerdict::reject(RejectingMatcher::Detour),
        MatchVerdict::HardReject => 0.1,
        MatchVerdict::Score(s) => s,
    };

    let s_age = match age::evaluate(passenger.person.age, driver.person.age, config.group_by_age_range) {
        MatchVerdict::Score(s) => s,
        MatchVerdict::HardReject => unreachable!("AgeMatcher never rejects"),
    };

    let s_pref = match driver_preference::evaluate() {
        MatchVerdict::Score(s) => s,
        MatchVerdict::HardReject => unreachable!("DriverPreferenceMatcher never rejects"),
    };

    let w = &config.weights;
    let total = w.route_efficiency * s_route
        + w.detour * s_detour
        + w.gender_match * s_gender
        + w.age_match * s_age
        + w.driver_preference * s_pref;

    PairVerdict {
        hard_reject: None,
        score: Some(total),
    }
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

    fn driver(id: &str, lat: f64, lng: f64, seats: u32) -> Driver {
        Driver {
            person: person(id, lat, lng),
            can_drive: true,
            available_seats: seats,
        }
    }

    #[test]
    fn reasonable_pair_scores_between_zero_and_one() {
        let event = Coordinate::new(37.0, -122.0);
        let p = passenger("p1", 37.02, -122.02);
        let d = driver("d1", 37.05, -122.05, 3);
        let ctx = ContextBuilder::build(&[p.clone()], &[d.clone()], &event);
        let config = MatchingConfig::default();
        let verdict = score_pair(&p, &d, &ctx, &config, TripDirection::FromEvent, None);
        assert!(verdict.hard_reject.is_none());
        let score = verdict.score.unwrap();
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn full_driver_rejects_at_capacity() {
        let event = Coordinate::new(37.0, -122.0);
        let p = passenger("p1", 37.02, -122.02);
        let d = driver("d1", 37.05, -122.05, 1);
        let mut ctx = ContextBuilder::build(&[p.clone()], &[d.clone()], &event);
        ctx.available_seats.insert("d1".to_string(), 0);
        let config = MatchingConfig::default();
        let verdict = score_pair(&p, &d, &ctx, &config, TripDirection::FromEvent, None);
        assert_eq!(verdict.hard_reject, Some(RejectingMatcher::Capacity));
    }

    #[test]
    fn outbound_mismatched_departure_rejects_at_timing() {
        let event = Coordinate::new(37.0, -122.0);
        let mut p = passenger("p1", 37.02, -122.02);
        p.person.leaving_early = true;
        let d = driver("d1", 37.05, -122.05, 3);
        let ctx = ContextBuilder::build(&[p.clone()], &[d.clone()], &event);
        let config = MatchingConfig::default();
        let verdict = score_pair(&p, &d, &ctx, &config, TripDirection::FromEvent, None);
        assert_eq!(verdict.hard_reject, Some(RejectingMatcher::Timing));
    }
}
