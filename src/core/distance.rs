//! Distance Oracle (§4.1)
//!
//! Pure, deterministic straight-line-to-road distance approximation and a
//! dynamic speed model for travel-time estimation. No I/O, no state.

use crate::types::Coordinate;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Straight-line-to-road coefficient.
const ROAD_COEFFICIENT: f64 = 1.4;

/// Haversine distance between two coordinates, in miles.
pub fn haversine_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Estimated road distance from straight-line distance, in miles.
pub fn road_distance_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_miles(from, to) * ROAD_COEFFICIENT
}

/// Distance-tiered mph used for time estimation (§4.1, GLOSSARY "Dynamic speed").
pub fn dynamic_speed_mph(distance_miles: f64) -> f64 {
    if distance_miles < 5.0 {
        20.0
    } else if distance_miles < 15.0 {
        35.0
    } else {
        55.0
    }
}

/// Travel time in minutes for a leg of the given length, honoring the
/// configured traffic buffer.
pub fn travel_time_minutes(distance_miles: f64, traffic_buffer_multiplier: f64) -> f64 {
    if distance_miles <= 0.0 {
        return 0.0;
    }
    let speed = dynamic_speed_mph(distance_miles);
    (distance_miles / speed) * 60.0 * traffic_buffer_multiplier
}
