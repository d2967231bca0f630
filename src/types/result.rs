//! The `match` operation's result envelope (§6)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::TripDirection;
use super::geo::Coordinate;
use super::ride_group::RideGroup;
use super::unmatched::UnmatchedPassenger;

/// Current algorithm version, bumped whenever the scoring model or phased
/// assignment order changes in a way that could alter results for identical
/// inputs.
pub const ALGORITHM_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingMetadata {
    pub total_passengers: u32,
    pub total_drivers: u32,
    pub matched_passengers: u32,
    pub matched_drivers: u32,
    pub matching_duration_ms: u64,
    pub algorithm_version: String,
    pub priority_order: Vec<String>,
    pub trip_direction: TripDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingResult {
    pub id: Uuid,
    pub trip_direction: TripDirection,
    pub start_location: Coordinate,
    pub event_start_time: Option<DateTime<Utc>>,
    pub ride_groups: Vec<RideGroup>,
    pub unmatched_passengers: Vec<UnmatchedPassenger>,
    pub unmatched_drivers: Vec<String>,
    pub metadata: MatchingMetadata,
}
