//! Geographic primitives

use serde::{Deserialize, Serialize};

/// A point on the globe, as resolved by the transport layer's geocoder.
///
/// The core never geocodes; it only ever sees coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Identifier used as both map key and distance-matrix index label.
/// Opaque from the core's point of view; the sentinel `"event"` never
/// collides with a passenger/driver id because those are validated UUIDs
/// at the transport boundary.
pub const EVENT_ID: &str = "event";
