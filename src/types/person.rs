//! Shared fields between passengers and drivers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

/// Fields common to both passengers and drivers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub home_coordinate: Coordinate,
    pub leaving_early: bool,
    #[serde(default)]
    pub early_departure_time: Option<DateTime<Utc>>,
}
