//! The matching core (§3-§7): pure, synchronous, and free of any
//! transport or persistence concern. `match_ride_groups` is the single
//! entry point the NATS handler (and the `match-file` CLI path) call.

pub mod assignment;
pub mod context;
pub mod distance;
pub mod matchers;
pub mod route_optimizer;
pub mod scoring;
pub mod timing_planner;

use std::time::Instant;

use crate::error::MatchingError;
use crate::types::{
    ALGORITHM_VERSION, Driver, MatchRequest, MatchingConfig, MatchingMetadata, MatchingResult, Passenger,
    TripDirection, UnmatchedPassenger, UnmatchedReason,
};

use assignment::AssignmentEngine;
use context::ContextBuilder;
use route_optimizer::RouteOptimizer;
use scoring::{score_pair, RejectingMatcher};
use timing_planner::TimingPlanner;

/// Runs one full matching pass (§6 "match"). Pure function of its inputs
/// apart from the wall-clock duration recorded in the metadata and the
/// fresh UUID assigned to the result.
pub fn match_ride_groups(request: &MatchRequest, base_config: &MatchingConfig) -> Result<MatchingResult, MatchingError> {
    let started = Instant::now();

    validate(request)?;

    let config = base_config.merged_with(request.config_overrides.as_ref());

    let passengers: Vec<Passenger> = request.passengers.iter().filter(|p| p.needs_ride).cloned().collect();
    let drivers: Vec<Driver> = request.drivers.iter().filter(|d| d.is_eligible()).cloned().collect();

    let mut ctx = ContextBuilder::build(&passengers, &drivers, &request.event_location);

    AssignmentEngine::assign(
        &mut ctx,
        &passengers,
        &drivers,
        request.direction,
        &config,
        request.event_start_time,
    );

    let mut ride_groups = Vec::with_capacity(drivers.len());
    for driver in &drivers {
        let assigned = ctx.assignments.get(driver.id()).cloned().unwrap_or_default();
        ride_groups.push(RouteOptimizer::build_ride_group(&ctx, driver, &assigned, request.direction));
    }

    if request.direction.is_inbound() {
        if let Some(event_start) = request.event_start_time {
            for group in ride_groups.iter_mut() {
                TimingPlanner::apply(&ctx, group, event_start, &config.timing);
            }
        }
    }

    let unmatched_passengers: Vec<UnmatchedPassenger> = passengers
        .iter()
        .filter(|p| ctx.available_passengers.contains(p.id()))
        .map(|p| {
            let reason = determine_reason(p, &ctx, &drivers, &config, request.direction, request.event_start_time);
            UnmatchedPassenger::new(p.clone(), reason)
        })
        .collect();

    let unmatched_drivers: Vec<String> = ride_groups
        .iter()
        .filter(|g| g.ordered_passengers.is_empty())
        .map(|g| g.driver_id.clone())
        .collect();

    let matched_passengers = passengers.len() as u32 - unmatched_passengers.len() as u32;
    let matched_drivers = drivers.len() as u32 - unmatched_drivers.len() as u32;

    Ok(MatchingResult {
        id: uuid::Uuid::new_v4(),
        trip_direction: request.direction,
        start_location: request.event_location,
        event_start_time: request.event_start_time,
        ride_groups,
        unmatched_passengers,
        unmatched_drivers,
        metadata: MatchingMetadata {
            total_passengers: passengers.len() as u32,
            total_drivers: drivers.len() as u32,
            matched_passengers,
            matched_drivers,
            matching_duration_ms: started.elapsed().as_millis() as u64,
            algorithm_version: ALGORITHM_VERSION.to_string(),
            priority_order: config.priority_order.clone(),
            trip_direction: request.direction,
        },
    })
}

fn validate(request: &MatchRequest) -> Result<(), MatchingError> {
    if request.direction.is_inbound() && request.event_start_time.is_none() {
        return Err(MatchingError::Validation(
            "eventStartTime is required when direction is to_event".to_string(),
        ));
    }
    Ok(())
}

/// Selection rules for the reason attached to an unmatched passenger
/// (§6), evaluated in priority order against the final ledger state.
fn determine_reason(
    passenger: &Passenger,
    ctx: &context::MatcherContext,
    drivers: &[Driver],
    config: &MatchingConfig,
    direction: TripDirection,
    event_start_time: Option<chrono::DateTime<chrono::Utc>>,
) -> UnmatchedReason {
    if direction.is_outbound() && passenger.person.leaving_early {
        let any_early_driver = drivers.iter().any(|d| d.person.leaving_early);
        if !any_early_driver {
            return UnmatchedReason::EarlyDepartureMismatch;
        }
    }

    let total_remaining_seats: u32 = drivers
        .iter()
        .map(|d| ctx.available_seats.get(d.id()).copied().unwrap_or(0))
        .sum();
    if total_remaining_seats == 0 {
        return UnmatchedReason::NoSeatsAvailable;
    }

    if config.enforce_gender_preference && passenger.gender_preference == crate::types::GenderPreference::SameGender {
        let any_same_gender_with_seats = drivers.iter().any(|d| {
            let seats = ctx.available_seats.get(d.id()).copied().unwrap_or(0);
            seats > 0 && d.person.gender == passenger.person.gender
        });
        if !any_same_gender_with_seats {
            return UnmatchedReason::GenderPreferenceUnmet;
        }
    }

    if direction.is_inbound() {
        let drivers_with_seats: Vec<&Driver> = drivers
            .iter()
            .filter(|d| ctx.available_seats.get(d.id()).copied().unwrap_or(0) > 0)
            .collect();
        if !drivers_with_seats.is_empty() {
            let all_rejected_on_timing = drivers_with_seats.iter().all(|d| {
                matches!(
                    score_pair(passenger, d, ctx, config, direction, event_start_time).hard_reject,
                    Some(RejectingMatcher::Timing)
                )
            });
            if all_rejected_on_timing {
                return UnmatchedReason::CannotArriveOnTime;
            }
        }
    }

    UnmatchedReason::NoAvailableDrivers
}
