//! Timing Planner (§4.7, inbound only)
//!
//! Works backward from the event's start time to a per-passenger
//! "ready by" instant and a driver departure time, using the same
//! dynamic-speed model as the Distance Oracle. Outbound trips have no
//! schedule: nothing downstream of the event has a fixed start time to
//! count back from.

use chrono::{DateTime, Utc};

use crate::core::context::MatcherContext;
use crate::core::distance::travel_time_minutes;
use crate::types::{GroupSchedule, PassengerReadyTime, RideGroup, TimingConfig, EVENT_ID};

pub struct TimingPlanner;

impl TimingPlanner {
    /// Populates `group.schedule` in place. No-op for an empty group.
    pub fn apply(ctx: &MatcherContext, group: &mut RideGroup, event_start: DateTime<Utc>, timing: &TimingConfig) {
        if group.ordered_passengers.is_empty() {
            return;
        }

        let ordered = &group.ordered_passengers;
        let n = ordered.len();

        let mut ready_times = Vec::with_capacity(n);
        for (k, passenger_id) in ordered.iter().enumerate() {
            let remaining_stops_after_k = (n - 1 - k) as f64;
            let dist_to_event = ctx.route_distance_through(passenger_id, &ordered[k + 1..], EVENT_ID);
            let travel_minutes = travel_time_minutes(dist_to_event, timing.traffic_buffer_multiplier);
            let load_buffer_minutes = remaining_stops_after_k * timing.load_time_minutes;
            let should_be_ready_by =
                event_start - minutes_duration(travel_minutes + load_buffer_minutes);
            ready_times.push(PassengerReadyTime {
                passenger_id: passenger_id.clone(),
                should_be_ready_by,
            });
        }

        let total_route_distance = ctx.route_distance_through(&group.driver_id, ordered, EVENT_ID);
        let total_travel_minutes = travel_time_minutes(total_route_distance, timing.traffic_buffer_multiplier);
        let total_load_minutes = n as f64 * timing.load_time_minutes;
        let safety_buffer_minutes = 10.0;
        let driver_departure_time =
            event_start - minutes_duration(total_travel_minutes + total_load_minutes + safety_buffer_minutes);

        let estimated_arrival_time = event_start - minutes_duration(5.0);

        group.schedule = Some(GroupSchedule {
            driver_departure_time,
            passenger_ready_times: ready_times,
            estimated_arrival_time,
        });
    }
}

fn minutes_duration(minutes: f64) -> chrono::Duration {
    chrono::Duration::milliseconds((minutes * 60_000.0) as i64)
}
