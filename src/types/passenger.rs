//! Passenger type

use serde::{Deserialize, Serialize};

use super::person::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPreference {
    SameGender,
    Any,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    #[serde(flatten)]
    pub person: Person,
    pub needs_ride: bool,
    pub gender_preference: GenderPreference,
}

impl Passenger {
    pub fn id(&self) -> &str {
        &self.person.id
    }
}
