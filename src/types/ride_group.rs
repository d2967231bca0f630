//! Output ride groups, stop ordering, and inbound schedules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::TripDirection;

/// One stop in a driver's ordered route (§4.6).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub passenger_id: String,
    pub stop_order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_off_order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_order: Option<u32>,
    pub detour_added_miles: f64,
    pub distance_from_origin_miles: f64,
}

/// Per-passenger instant by which they must be ready, for inbound trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerReadyTime {
    pub passenger_id: String,
    pub should_be_ready_by: DateTime<Utc>,
}

/// Inbound-only per-group schedule (§4.7).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSchedule {
    pub driver_departure_time: DateTime<Utc>,
    pub passenger_ready_times: Vec<PassengerReadyTime>,
    pub estimated_arrival_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideGroup {
    pub driver_id: String,
    pub ordered_passengers: Vec<String>,
    pub direction: TripDirection,
    pub total_route_distance_miles: f64,
    pub total_detour_miles: f64,
    pub waypoints: Vec<Waypoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<GroupSchedule>,
}

impl RideGroup {
    /// An empty shell for a driver who received no passengers (§4.6: "For
    /// empty-assignment drivers, produce an empty ride group rather than
    /// omitting the driver" applies to the route optimizer's internal
    /// bookkeeping; at the result boundary these surface as
    /// `unmatchedDrivers` instead, see `core::mod`).
    pub fn empty(driver_id: impl Into<String>, direction: TripDirection) -> Self {
        Self {
            driver_id: driver_id.into(),
            ordered_passengers: vec![],
            direction,
            total_route_distance_miles: 0.0,
            total_detour_miles: 0.0,
            waypoints: vec![],
            schedule: None,
        }
    }
}
