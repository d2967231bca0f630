//! Driver type

use serde::{Deserialize, Serialize};

use super::person::Person;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(flatten)]
    pub person: Person,
    pub can_drive: bool,
    pub available_seats: u32,
}

impl Driver {
    pub fn id(&self) -> &str {
        &self.person.id
    }

    /// True if this driver should be considered for a matching run at all
    /// (§4.2 input filter).
    pub fn is_eligible(&self) -> bool {
        self.can_drive && self.available_seats > 0
    }
}
