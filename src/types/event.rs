//! Event context and trip direction

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripDirection {
    /// Arriving at the event from homes. Route origin is the driver's home.
    ToEvent,
    /// Departing from the event toward homes. Route origin is the event.
    FromEvent,
}

impl TripDirection {
    pub fn is_inbound(self) -> bool {
        matches!(self, TripDirection::ToEvent)
    }

    pub fn is_outbound(self) -> bool {
        matches!(self, TripDirection::FromEvent)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContext {
    pub coordinate: Coordinate,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    pub direction: TripDirection,
}
