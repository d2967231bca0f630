//! Out-of-core collaborators (§1, §9 DESIGN NOTES)
//!
//! Geocoding and result persistence are explicitly out of scope for the
//! matching core itself; it only ever sees coordinates in and a
//! `MatchingResult` out. These traits are the seam a real deployment
//! plugs a geocoder and a datastore into. Only mock/in-memory
//! implementations live here — anything backed by a real geocoding API or
//! database belongs in a deployment-specific crate, not this one.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::types::{Coordinate, MatchingResult};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn geocode(&self, address: &str) -> anyhow::Result<Coordinate>;
    async fn reverse_geocode(&self, coordinate: Coordinate) -> anyhow::Result<String>;
}

#[async_trait]
pub trait ResultsSink: Send + Sync {
    async fn put(&self, result: MatchingResult) -> anyhow::Result<()>;
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<MatchingResult>>;
}

/// Fixed-lookup geocoder for tests and local CLI runs; never makes a
/// network call.
#[derive(Debug, Default)]
pub struct MockLocationProvider {
    known: HashMap<String, Coordinate>,
}

impl MockLocationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_known(mut self, address: impl Into<String>, coordinate: Coordinate) -> Self {
        self.known.insert(address.into(), coordinate);
        self
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn geocode(&self, address: &str) -> anyhow::Result<Coordinate> {
        self.known
            .get(address)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no known coordinate for address {address:?}"))
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> anyhow::Result<String> {
        Ok(format!("{:.4},{:.4}", coordinate.lat, coordinate.lng))
    }
}

/// In-process results store, keyed by the result's own id. Good enough
/// for a single worker process and for tests; a real deployment backs
/// this with whatever datastore the rest of the fleet already uses.
#[derive(Debug, Default)]
pub struct InMemoryResultsSink {
    results: Mutex<HashMap<Uuid, MatchingResult>>,
}

impl InMemoryResultsSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultsSink for InMemoryResultsSink {
    async fn put(&self, result: MatchingResult) -> anyhow::Result<()> {
        self.results.lock().unwrap().insert(result.id, result);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<MatchingResult>> {
        Ok(self.results.lock().unwrap().get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_geocoder_resolves_known_addresses() {
        let provider = MockLocationProvider::new().with_known("123 Main St", Coordinate::new(37.0, -122.0));
        let coord = provider.geocode("123 Main St").await.unwrap();
        assert_eq!(coord, Coordinate::new(37.0, -122.0));
    }

    #[tokio::test]
    async fn mock_geocoder_rejects_unknown_addresses() {
        let provider = MockLocationProvider::new();
        assert!(provider.geocode("nowhere").await.is_err());
    }

    #[tokio::test]
    async fn in_memory_sink_round_trips_a_result() {
        let sink = InMemoryResultsSink::new();
        let result = crate::types::MatchingResult {
            id: Uuid::new_v4(),
            trip_direction: crate::types::TripDirection::FromEvent,
            start_location: Coordinate::new(37.0, -122.0),
            event_start_time: None,
            ride_groups: vec![],
            unmatched_passengers: vec![],
            unmatched_drivers: vec![],
            metadata: crate::types::MatchingMetadata {
                total_passengers: 0,
                total_drivers: 0,
                matched_passengers: 0,
                matched_drivers: 0,
                matching_duration_ms: 0,
                algorithm_version: crate::types::ALGORITHM_VERSION.to_string(),
                priority_order: crate::types::default_priority_order(),
                trip_direction: crate::types::TripDirection::FromEvent,
            },
        };
        let id = result.id;
        sink.put(result).await.unwrap();
        let fetched = sink.get(id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().id, id);
    }
}
