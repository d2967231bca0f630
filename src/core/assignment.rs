//! Assignment Engine (§4.5)
//!
//! The only component allowed to mutate a `MatcherContext`'s ledger.
//! Drivers are processed furthest-first so the hardest-to-fill seats get
//! first pick; within a driver, candidates are scored and appended in
//! descending-score order while seats remain. Outbound runs additionally
//! partition early/normal departures and finish with a sweep pass that
//! guarantees every normal-departure passenger gets a seat if one exists
//! anywhere, even at non-optimal detour cost; inbound has no sweep, since
//! an inbound detour breach is a hard reject rather than a soft cost.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::context::MatcherContext;
use super::matchers::detour;
use super::scoring::score_pair;
use crate::types::{Driver, Gender, GenderPreference, MatchingConfig, Passenger, TripDirection};

pub struct AssignmentEngine;

impl AssignmentEngine {
    pub fn assign(
        ctx: &mut MatcherContext,
        passengers: &[Passenger],
        drivers: &[Driver],
        direction: TripDirection,
        config: &MatchingConfig,
        event_start_time: Option<DateTime<Utc>>,
    ) {
        let driver_order = Self::driver_processing_order(drivers, passengers, ctx);

        match direction {
            TripDirection::FromEvent => {
                Self::assign_outbound(ctx, passengers, drivers, &driver_order, config, event_start_time)
            }
            TripDirection::ToEvent => {
                Self::assign_inbound(ctx, passengers, drivers, &driver_order, config, event_start_time)
            }
        }
    }

    /// Furthest-first by direct event<->home distance; ties broken toward
    /// the driver whose gender matches more of the outstanding
    /// same-gender-preferring passengers (materialized once, §9 DESIGN
    /// NOTES: "avoid recomputing this per comparison").
    fn driver_processing_order(drivers: &[Driver], passengers: &[Passenger], ctx: &MatcherContext) -> Vec<String> {
        let mut same_gender_pref_counts: HashMap<Gender, usize> = HashMap::new();
        for p in passengers {
            if p.gender_preference == GenderPreference::SameGender {
                *same_gender_pref_counts.entry(p.person.gender).or_insert(0) += 1;
            }
        }

        let mut ordered: Vec<&Driver> = drivers.iter().collect();
        ordered.sort_by(|a, b| {
            let dist_a = ctx.driver_direct_distance(a.id());
            let dist_b = ctx.driver_direct_distance(b.id());
            dist_b
                .partial_cmp(&dist_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    let count_a = same_gender_pref_counts.get(&a.person.gender).copied().unwrap_or(0);
                    let count_b = same_gender_pref_counts.get(&b.person.gender).copied().unwrap_or(0);
                    count_b.cmp(&count_a)
                })
        });
        ordered.into_iter().map(|d| d.id().to_string()).collect()
    }

    fn assign_outbound(
        ctx: &mut MatcherContext,
        passengers: &[Passenger],
        drivers: &[Driver],
        driver_order: &[String],
        config: &MatchingConfig,
        event_start_time: Option<DateTime<Utc>>,
    ) {
        let driver_by_id: HashMap<&str, &Driver> = drivers.iter().map(|d| (d.id(), d)).collect();
        let passenger_by_id: HashMap<&str, &Passenger> = passengers.iter().map(|p| (p.id(), p)).collect();

        let (early_drivers, normal_drivers): (Vec<&String>, Vec<&String>) = driver_order
            .iter()
            .partition(|id| driver_by_id.get(id.as_str()).is_some_and(|d| d.person.leaving_early));

        for driver_id in early_drivers {
            let candidates: Vec<&str> = passengers
                .iter()
                .filter(|p| p.person.leaving_early && ctx.available_passengers.contains(p.id()))
                .map(|p| p.id())
                .collect();
            Self::assign_candidates_to_driver(
                ctx,
                driver_by_id[driver_id.as_str()],
                &candidates,
                &passenger_by_id,
                config,
                TripDirection::FromEvent,
                event_start_time,
            );
        }

        for driver_id in normal_drivers {
            let candidates: Vec<&str> = passengers
                .iter()
                .filter(|p| !p.person.leaving_early && ctx.available_passengers.contains(p.id()))
                .map(|p| p.id())
                .collect();
            Self::assign_candidates_to_driver(
                ctx,
                driver_by_id[driver_id.as_str()],
                &candidates,
                &passenger_by_id,
                config,
                TripDirection::FromEvent,
                event_start_time,
            );
        }

        Self::sweep_remaining_normal_departures(ctx, passengers, drivers);
    }

    fn assign_inbound(
        ctx: &mut MatcherContext,
        passengers: &[Passenger],
        drivers: &[Driver],
        driver_order: &[String],
        config: &MatchingConfig,
        event_start_time: Option<DateTime<Utc>>,
    ) {
        let driver_by_id: HashMap<&str, &Driver> = drivers.iter().map(|d| (d.id(), d)).collect();
        let passenger_by_id: HashMap<&str, &Passenger> = passengers.iter().map(|p| (p.id(), p)).collect();

        for driver_id in driver_order {
            let candidates: Vec<&str> = passengers
                .iter()
                .filter(|p| ctx.available_passengers.contains(p.id()))
                .map(|p| p.id())
                .collect();
            Self::assign_candidates_to_driver_inbound(
                ctx,
                driver_by_id[driver_id.as_str()],
                &candidates,
                &passenger_by_id,
                config,
                event_start_time,
            );
        }
    }

    /// Inbound variant of [`Self::assign_candidates_to_driver`]: candidates
    /// are still ranked by a one-shot score, but each append re-checks the
    /// detour bound against the route as it actually stands after the
    /// previous appends, since two passengers individually within
    /// `maxDetourMiles` can jointly push the accumulated route past it
    /// (§4.5 inbound step 2, §8 "Inbound detour bound"). A candidate that
    /// would breach the bound is skipped, not treated as a break, since a
    /// cheaper candidate further down the ranking may still fit.
    fn assign_candidates_to_driver_inbound(
        ctx: &mut MatcherContext,
        driver: &Driver,
        candidate_ids: &[&str],
        passenger_by_id: &HashMap<&str, &Passenger>,
        config: &MatchingConfig,
        event_start_time: Option<DateTime<Utc>>,
    ) {
        let mut scored: Vec<(String, f64)> = Vec::new();
        for &pid in candidate_ids {
            let passenger = passenger_by_id[pid];
            let verdict = score_pair(passenger, driver, ctx, config, TripDirection::ToEvent, event_start_time);
            if let Some(score) = verdict.score {
                scored.push((pid.to_string(), score));
            }
        }
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        for (pid, score) in scored {
            if score <= 0.0 {
                break;
            }
            let remaining = ctx.available_seats.get(driver.id()).copied().unwrap_or(0);
            if remaining == 0 {
                break;
            }
            let (_, total) = detour::incremental_and_total_detour(ctx, TripDirection::ToEvent, driver.id(), &pid);
            if total > config.max_detour_miles {
                continue;
            }
            ctx.assignments.get_mut(driver.id()).unwrap().push(pid.clone());
            *ctx.available_seats.get_mut(driver.id()).unwrap() -= 1;
            ctx.available_passengers.remove(&pid);
        }
    }

    /// Score every candidate against `driver`, then append in descending
    /// score order while seats remain and score stays positive (§4.5).
    fn assign_candidates_to_driver(
        ctx: &mut MatcherContext,
        driver: &Driver,
        candidate_ids: &[&str],
        passenger_by_id: &HashMap<&str, &Passenger>,
        config: &MatchingConfig,
        direction: TripDirection,
        event_start_time: Option<DateTime<Utc>>,
    ) {
        let mut scored: Vec<(String, f64)> = Vec::new();
        for &pid in candidate_ids {
            let passenger = passenger_by_id[pid];
            let verdict = score_pair(passenger, driver, ctx, config, direction, event_start_time);
            if let Some(score) = verdict.score {
                scored.push((pid.to_string(), score));
            }
        }
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        for (pid, score) in scored {
            if score <= 0.0 {
                break;
            }
            let remaining = ctx.available_seats.get(driver.id()).copied().unwrap_or(0);
            if remaining == 0 {
                break;
            }
            ctx.assignments.get_mut(driver.id()).unwrap().push(pid.clone());
            *ctx.available_seats.get_mut(driver.id()).unwrap() -= 1;
            ctx.available_passengers.remove(&pid);
        }
    }

    /// Final outbound pass (§4.5): every still-available normal-departure
    /// passenger is placed with whichever driver with remaining seats
    /// would incur the least incremental detour, regardless of score.
    fn sweep_remaining_normal_departures(ctx: &mut MatcherContext, passengers: &[Passenger], drivers: &[Driver]) {
        let remaining_ids: Vec<String> = passengers
            .iter()
            .filter(|p| !p.person.leaving_early && ctx.available_passengers.contains(p.id()))
            .map(|p| p.id().to_string())
            .collect();

        for pid in remaining_ids {
            let mut best: Option<(String, f64)> = None;
            for driver in drivers {
                let seats = ctx.available_seats.get(driver.id()).copied().unwrap_or(0);
                if seats == 0 {
                    continue;
                }
                let (incremental, _total) =
                    detour::incremental_and_total_detour(ctx, TripDirection::FromEvent, driver.id(), &pid);
                let better = match &best {
                    None => true,
                    Some((_, best_incremental)) => incremental < *best_incremental,
                };
                if better {
                    best = Some((driver.id().to_string(), incremental));
                }
            }

            if let Some((driver_id, _)) = best {
                ctx.assignments.get_mut(&driver_id).unwrap().push(pid.clone());
                *ctx.available_seats.get_mut(&driver_id).unwrap() -= 1;
                ctx.available_passengers.remove(&pid);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ContextBuilder;
    use crate::types::{Coordinate, GenderPreference, Person};

    fn person(id: &str, lat: f64, lng: f64, leaving_early: bool) -> Person {
        Person {
            id: id.to_string(),
            name: id.to_string(),
            gender: Gender::PreferNotToSay,
            age: 30,
            home_coordinate: Coordinate::new(lat, lng),
            leaving_early,
            early_departure_time: None,
        }
    }

    fn passenger(id: &str, lat: f64, lng: f64, leaving_early: bool) -> Passenger {
        Passenger {
            person: person(id, lat, lng, leaving_early),
            needs_ride: true,
            gender_preference: GenderPreference::Any,
        }
    }

    fn driver(id: &str, lat: f64, lng: f64, seats: u32, leaving_early: bool) -> Driver {
        Driver {
            person: person(id, lat, lng, leaving_early),
            can_drive: true,
            available_seats: seats,
        }
    }

    #[test]
    fn outbound_assigns_nearby_passenger_to_sole_driver() {
        let event = Coordinate::new(37.0, -122.0);
        let passengers = vec![passenger("p1", 37.02, -122.02, false)];
        let drivers = vec![driver("d1", 37.05, -122.05, 2, false)];
        let mut ctx = ContextBuilder::build(&passengers, &drivers, &event);
        let config = MatchingConfig::default();
        AssignmentEngine::assign(&mut ctx, &passengers, &drivers, TripDirection::FromEvent, &config, None);
        assert_eq!(ctx.assignments.get("d1"), Some(&vec!["p1".to_string()]));
        assert!(!ctx.available_passengers.contains("p1"));
    }

    #[test]
    fn outbound_respects_seat_limits() {
        let event = Coordinate::new(37.0, -122.0);
        let passengers = vec![
            passenger("p1", 37.01, -122.01, false),
            passenger("p2", 37.02, -122.02, false),
        ];
        let drivers = vec![driver("d1", 37.05, -122.05, 1, false)];
        let mut ctx = ContextBuilder::build(&passengers, &drivers, &event);
        let config = MatchingConfig::default();
        AssignmentEngine::assign(&mut ctx, &passengers, &drivers, TripDirection::FromEvent, &config, None);
        assert_eq!(ctx.assignments.get("d1").unwrap().len(), 1);
        assert_eq!(ctx.available_passengers.len(), 1);
    }

    #[test]
    fn outbound_early_and_normal_drivers_never_cross_pools() {
        let event = Coordinate::new(37.0, -122.0);
        let passengers = vec![passenger("p1", 37.01, -122.01, true)];
        let drivers = vec![driver("d1", 37.02, -122.02, 3, false)];
        let mut ctx = ContextBuilder::build(&passengers, &drivers, &event);
        let config = MatchingConfig::default();
        AssignmentEngine::assign(&mut ctx, &passengers, &drivers, TripDirection::FromEvent, &config, None);
        assert!(ctx.assignments.get("d1").unwrap().is_empty());
        assert!(ctx.available_passengers.contains("p1"));
    }

    #[test]
    fn outbound_sweep_places_a_passenger_the_main_pass_hard_rejected() {
        // p2 is gender-mismatched under an enforced same-gender preference,
        // so the scored main pass never considers it at all (Gender hard
        // rejects before a score is ever produced). The sweep pass ignores
        // matcher verdicts entirely and should still seat it in the spare
        // capacity p1 didn't use.
        let event = Coordinate::new(37.0, -122.0);
        let p1 = passenger("p1", 37.01, -122.01, false);
        let mut p2 = passenger("p2", 37.02, -122.02, false);
        p2.gender_preference = GenderPreference::SameGender;
        p2.person.gender = Gender::Female;
        let mut d1 = driver("d1", 37.05, -122.05, 2, false);
        d1.person.gender = Gender::Male;
        let passengers = vec![p1, p2];
        let drivers = vec![d1];
        let mut ctx = ContextBuilder::build(&passengers, &drivers, &event);
        let mut config = MatchingConfig::default();
        config.enforce_gender_preference = true;
        AssignmentEngine::assign(&mut ctx, &passengers, &drivers, TripDirection::FromEvent, &config, None);
        assert_eq!(ctx.assignments.get("d1").unwrap().len(), 2);
        assert!(ctx.available_passengers.is_empty());
    }

    #[test]
    fn inbound_per_append_check_bounds_accumulated_detour() {
        // Three passengers spread around the driver's home; individually each
        // might fit under the cap, but appending all three in one route must
        // not let the accumulated detour sail past maxDetourMiles.
        let event = Coordinate::new(37.0, -122.0);
        let passengers = vec![
            passenger("p1", 37.05, -121.95, false),
            passenger("p2", 37.05, -122.05, false),
            passenger("p3", 36.95, -122.0, false),
        ];
        let drivers = vec![driver("d1", 37.0, -122.0, 4, false)];
        let mut ctx = ContextBuilder::build(&passengers, &drivers, &event);
        let mut config = MatchingConfig::default();
        config.max_detour_miles = 3.0;
        AssignmentEngine::assign(&mut ctx, &passengers, &drivers, TripDirection::ToEvent, &config, None);

        let assigned = ctx.assignments.get("d1").unwrap().clone();
        let total = ctx.route_distance_through("d1", &assigned, crate::types::EVENT_ID) - ctx.driver_direct_distance("d1");
        assert!(total <= config.max_detour_miles + 1e-6, "accumulated detour {total} exceeded cap");
    }

    #[test]
    fn inbound_has_no_sweep_and_can_leave_passengers_unmatched() {
        let event = Coordinate::new(37.0, -122.0);
        let passengers = vec![passenger("p1", 38.5, -120.0, false)];
        let drivers = vec![driver("d1", 37.01, -122.01, 1, false)];
        let mut ctx = ContextBuilder::build(&passengers, &drivers, &event);
        let mut config = MatchingConfig::default();
        config.max_detour_miles = 0.01;
        AssignmentEngine::assign(&mut ctx, &passengers, &drivers, TripDirection::ToEvent, &config, None);
        assert!(ctx.assignments.get("d1").unwrap().is_empty());
        assert!(ctx.available_passengers.contains("p1"));
    }

    #[test]
    fn driver_processing_order_is_furthest_first() {
        let event = Coordinate::new(37.0, -122.0);
        let drivers = vec![driver("near", 37.01, -122.01, 3, false), driver("far", 38.0, -123.0, 3, false)];
        let ctx = ContextBuilder::build(&[], &drivers, &event);
        let order = AssignmentEngine::driver_processing_order(&drivers, &[], &ctx);
        assert_eq!(order, vec!["far".to_string(), "near".to_string()]);
    }
}
