//! Unmatched-passenger reason taxonomy (§6)

use serde::{Deserialize, Serialize};

use super::passenger::Passenger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedReason {
    NoAvailableDrivers,
    ExceedsDetourLimit,
    GenderPreferenceUnmet,
    NoSeatsAvailable,
    CheckedInTooLate,
    EarlyDepartureMismatch,
    CannotArriveOnTime,
}

impl UnmatchedReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoAvailableDrivers => "no_available_drivers",
            Self::ExceedsDetourLimit => "exceeds_detour_limit",
            Self::GenderPreferenceUnmet => "gender_preference_unmet",
            Self::NoSeatsAvailable => "no_seats_available",
            Self::CheckedInTooLate => "checked_in_too_late",
            Self::EarlyDepartureMismatch => "early_departure_mismatch",
            Self::CannotArriveOnTime => "cannot_arrive_on_time",
        }
    }

    /// Short human-readable suggestion, keyed by reason (§6 table).
    pub fn suggested_action(self) -> &'static str {
        match self {
            Self::NoAvailableDrivers => {
                "Ask organizers to recruit another driver for this group."
            }
            Self::ExceedsDetourLimit => {
                "Look for a driver whose route passes closer to this passenger's home."
            }
            Self::GenderPreferenceUnmet => {
                "Relax the gender preference or find a same-gender driver with open seats."
            }
            Self::NoSeatsAvailable => {
                "All drivers are full; add a driver or increase available seats."
            }
            Self::CheckedInTooLate => {
                "Passenger checked in after assignment closed; add to a later sweep or manual override."
            }
            Self::EarlyDepartureMismatch => {
                "No early-leaving driver is available; ask an early driver to take this passenger or adjust their departure time."
            }
            Self::CannotArriveOnTime => {
                "This passenger's home is too far from the event to arrive on time at typical speeds; consider an earlier departure."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedPassenger {
    #[serde(flatten)]
    pub passenger: Passenger,
    pub reason: UnmatchedReason,
    pub suggested_action: String,
}

impl UnmatchedPassenger {
    pub fn new(passenger: Passenger, reason: UnmatchedReason) -> Self {
        Self {
            passenger,
            reason,
            suggested_action: reason.suggested_action().to_string(),
        }
    }
}
