//! TimingMatcher (§4.3.1, priority 0)
//!
//! Outbound: both parties must agree on early-vs-normal departure, and
//! neither may ask to leave earlier than the other is willing to.
//! Inbound: the computed pickup instant must fall within a sane morning
//! window; anything earlier reads as infeasible rather than merely
//! inconvenient.

use chrono::{DateTime, Timelike, Utc};

use crate::core::distance::travel_time_minutes;
use crate::core::context::MatcherContext;
use crate::types::{Driver, Passenger, TimingConfig, TripDirection, EVENT_ID};

use super::MatchVerdict;

pub fn evaluate(
    passenger: &Passenger,
    driver: &Driver,
    ctx: &MatcherContext,
    timing: &TimingConfig,
    direction: TripDirection,
    event_start_time: Option<DateTime<Utc>>,
) -> MatchVerdict {
    match direction {
        TripDirection::FromEvent => evaluate_outbound(passenger, driver),
        TripDirection::ToEvent => evaluate_inbound(passenger, ctx, timing, event_start_time),
    }
}

fn evaluate_outbound(passenger: &Passenger, driver: &Driver) -> MatchVerdict {
    let p_early = passenger.person.leaving_early;
    let d_early = driver.person.leaving_early;

    if p_early != d_early {
        return MatchVerdict::HardReject;
    }

    if p_early && d_early {
        if let (Some(p_time), Some(d_time)) =
            (passenger.person.early_departure_time, driver.person.early_departure_time)
        {
            if p_time < d_time {
                return MatchVerdict::HardReject;
            }
        }
        return MatchVerdict::Score(1.0);
    }

    MatchVerdict::Score(0.5)
}

fn evaluate_inbound(
    passenger: &Passenger,
    ctx: &MatcherContext,
    timing: &TimingConfig,
    event_start_time: Option<DateTime<Utc>>,
) -> MatchVerdict {
    let Some(event_start) = event_start_time else {
        return MatchVerdict::Score(0.5);
    };

    let distance = ctx.distance(passenger.id(), EVENT_ID);
    if !distance.is_finite() {
        return MatchVerdict::HardReject;
    }

    let travel_minutes = travel_time_minutes(distance, timing.traffic_buffer_multiplier);
    let total_minutes = travel_minutes + timing.load_time_minutes;
    let pickup = event_start - chrono::Duration::milliseconds((total_minutes * 60_000.0) as i64);

    let event_hour = event_start.hour();
    let pickup_hour = pickup.hour();
    let too_early = if event_hour < 12 { pickup_hour < 5 } else { pickup_hour < 6 };

    if too_early {
        MatchVerdict::HardReject
    } else {
        MatchVerdict::Score(0.7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinate, Gender, GenderPreference, Person};
    use chrono::TimeZone;

    fn person(id: &str, leaving_early: bool, early_time: Option<DateTime<Utc>>) -> Person {
        Person {
            id: id.to_string(),
            name: id.to_string(),
            gender: Gender::PreferNotToSay,
            age: 30,
            home_coordinate: Coordinate::new(37.0, -122.0),
            leaving_early,
            early_departure_time: early_time,
        }
    }

    fn passenger(id: &str, leaving_early: bool, early_time: Option<DateTime<Utc>>) -> Passenger {
        Passenger {
            person: person(id, leaving_early, early_time),
            needs_ride: true,
            gender_preference: GenderPreference::Any,
        }
    }

    fn driver(id: &str, leaving_early: bool, early_time: Option<DateTime<Utc>>) -> Driver {
        Driver {
            person: person(id, leaving_early, early_time),
            can_drive: true,
            available_seats: 3,
        }
    }

    #[test]
    fn outbound_mismatched_early_flags_reject() {
        let p = passenger("p1", true, None);
        let d = driver("d1", false, None);
        assert_eq!(evaluate_outbound(&p, &d), MatchVerdict::HardReject);
    }

    #[test]
    fn outbound_both_normal_scores_half() {
        let p = passenger("p1", false, None);
        let d = driver("d1", false, None);
        assert_eq!(evaluate_outbound(&p, &d), MatchVerdict::Score(0.5));
    }

    #[test]
    fn outbound_both_early_passenger_later_than_driver_rejects() {
        let base = Utc.with_ymd_and_hms(2026, 6, 1, 15, 0, 0).unwrap();
        let p = passenger("p1", true, Some(base + chrono::Duration::minutes(10)));
        let d = driver("d1", true, Some(base));
        assert_eq!(evaluate_outbound(&p, &d), MatchVerdict::HardReject);
    }

    #[test]
    fn outbound_both_early_passenger_no_later_than_driver_accepts() {
        let base = Utc.with_ymd_and_hms(2026, 6, 1, 15, 0, 0).unwrap();
        let p = passenger("p1", true, Some(base));
        let d = driver("d1", true, Some(base));
        assert_eq!(evaluate_outbound(&p, &d), MatchVerdict::Score(1.0));
    }

    #[test]
    fn inbound_without_event_start_is_neutral() {
        let event = Coordinate::new(37.0, -122.0);
        let ctx = crate::core::context::ContextBuilder::build(&[], &[], &event);
        let p = passenger("p1", false, None);
        assert_eq!(
            evaluate_inbound(&p, &ctx, &TimingConfig::default(), None),
            MatchVerdict::Score(0.5)
        );
    }

    #[test]
    fn inbound_reasonable_pickup_hour_accepts() {
        let event = Coordinate::new(37.0, -122.0);
        let p = passenger("p1", false, None);
        let ctx = crate::core::context::ContextBuilder::build(&[p.clone()], &[], &event);
        let start = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
        let verdict = evaluate_inbound(&p, &ctx, &TimingConfig::default(), Some(start));
        assert_eq!(verdict, MatchVerdict::Score(0.7));
    }

    #[test]
    fn inbound_missing_coordinate_rejects() {
        let event = Coordinate::new(37.0, -122.0);
        let mut p = passenger("p1", false, None);
        p.person.home_coordinate = Coordinate::new(999.0, 999.0);
        let ctx = crate::core::context::ContextBuilder::build(&[p.clone()], &[], &event);
        let start = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
        assert_eq!(
            evaluate_inbound(&p, &ctx, &TimingConfig::default(), Some(start)),
            MatchVerdict::HardReject
        );
    }
}
