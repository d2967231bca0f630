//! Context Builder (§4.2)
//!
//! Builds the dense pairwise distance matrix and the run's mutable ledgers.
//! Callers must pre-filter inputs (`needsRide` passengers; drivers with
//! `canDrive` and `availableSeats > 0`) before calling `build` — the builder
//! itself does no filtering, only indexing.

use std::collections::{HashMap, HashSet};

use crate::core::distance::road_distance_miles;
use crate::types::{Coordinate, Driver, Passenger, EVENT_ID};

/// Per-run context: an immutable distance matrix / direct-distance table,
/// plus a ledger that only the Assignment Engine may mutate (§9 DESIGN NOTES
/// "Context mutability").
#[derive(Debug, Clone)]
pub struct MatcherContext {
    /// index -> id; index 0 is always the event sentinel.
    ids: Vec<String>,
    index_of: HashMap<String, usize>,
    /// Dense distance matrix in miles. `distance_matrix[i][j]` is the
    /// road-distance estimate from `ids[i]` to `ids[j]`; `+inf` if either
    /// endpoint has no usable coordinate.
    distance_matrix: Vec<Vec<f64>>,
    /// driverId -> direct distance to the event, in miles (event<->home is
    /// symmetric so this serves both trip directions, §4.2).
    driver_direct_distance: HashMap<String, f64>,

    // Mutable ledger (§3 MatcherContext).
    pub available_passengers: HashSet<String>,
    pub available_seats: HashMap<String, u32>,
    pub assignments: HashMap<String, Vec<String>>,
}

impl MatcherContext {
    /// Distance in miles between two ids. Unknown ids (not present at build
    /// time) are treated the same as a missing coordinate: `+inf`, which
    /// propagates to a hard reject downstream rather than a panic.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        match (self.index_of.get(a), self.index_of.get(b)) {
            (Some(&i), Some(&j)) => self.distance_matrix[i][j],
            _ => f64::INFINITY,
        }
    }

    pub fn driver_direct_distance(&self, driver_id: &str) -> f64 {
        self.driver_direct_distance
            .get(driver_id)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Total distance of the route `event/home -> p0 -> p1 -> ... -> destination`
    /// through the given ordered passenger ids, for the given origin/destination
    /// sentinel ids (which may be `EVENT_ID` or a driver id depending on
    /// direction). Used by the DetourMatcher and the Route Optimizer.
    pub fn route_distance_through(&self, origin: &str, passenger_ids: &[String], destination: &str) -> f64 {
        if passenger_ids.is_empty() {
            return self.distance(origin, destination);
        }
        let mut total = self.distance(origin, &passenger_ids[0]);
        for pair in passenger_ids.windows(2) {
            total += self.distance(&pair[0], &pair[1]);
        }
        total += self.distance(passenger_ids.last().unwrap(), destination);
        total
    }
}

pub struct ContextBuilder;

impl ContextBuilder {
    /// Build a fresh context for one matching run. `passengers` and `drivers`
    /// must already be filtered (§4.2).
    pub fn build(passengers: &[Passenger], drivers: &[Driver], event_coordinate: &Coordinate) -> MatcherContext {
        let mut ids: Vec<String> = Vec::with_capacity(1 + passengers.len() + drivers.len());
        ids.push(EVENT_ID.to_string());
        for p in passengers {
            ids.push(p.id().to_string());
        }
        for d in drivers {
            ids.push(d.id().to_string());
        }

        let mut index_of = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            index_of.insert(id.clone(), i);
        }

        let mut coordinates: Vec<Option<Coordinate>> = Vec::with_capacity(ids.len());
        coordinates.push(Some(*event_coordinate));
        for p in passengers {
            coordinates.push(Some(p.person.home_coordinate));
        }
        for d in drivers {
            coordinates.push(Some(d.person.home_coordinate));
        }

        let n = ids.len();
        let mut distance_matrix = vec![vec![0.0_f64; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    distance_matrix[i][j] = 0.0;
                    continue;
                }
                distance_matrix[i][j] = match (coordinates[i], coordinates[j]) {
                    (Some(a), Some(b)) if a.is_valid() && b.is_valid() => road_distance_miles(&a, &b),
                    _ => f64::INFINITY,
                };
            }
        }

        let mut driver_direct_distance = HashMap::with_capacity(drivers.len());
        for d in drivers {
            let dist = distance_matrix[0][index_of[d.id()]];
            driver_direct_distance.insert(d.id().to_string(), dist);
        }

        let available_passengers: HashSet<String> = passengers.iter().map(|p| p.id().to_string()).collect();
        let available_seats: HashMap<String, u32> = drivers
            .iter()
            .map(|d| (d.id().to_string(), d.available_seats))
            .collect();
        let assignments: HashMap<String, Vec<String>> = drivers.iter().map(|d| (d.id().to_string(), Vec::new())).collect();

        MatcherContext {
            ids,
            index_of,
            distance_matrix,
            driver_direct_distance,
            available_passengers,
            available_seats,
            assignments,
        }
    }
}
