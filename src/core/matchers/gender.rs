//! GenderMatcher (§4.3.7, priority 6)
//!
//! `prefer_not_to_say` on either side always satisfies the constraint.
//! Under a strict `same_gender` preference, a real mismatch is a hard
//! reject only when the caller has turned on `enforceGenderPreference`;
//! otherwise it survives as a soft-scored candidate.

use crate::types::{Gender, GenderPreference};

use super::MatchVerdict;

pub fn evaluate(
    preference: GenderPreference,
    passenger_gender: Gender,
    driver_gender: Gender,
    enforce_gender_preference: bool,
) -> MatchVerdict {
    let genders_equal = passenger_gender == driver_gender;
    let either_indifferent =
        passenger_gender == Gender::PreferNotToSay || driver_gender == Gender::PreferNotToSay;
    let satisfied = preference == GenderPreference::Any || either_indifferent || genders_equal;

    if !satisfied {
        return if enforce_gender_preference {
            MatchVerdict::HardReject
        } else {
            MatchVerdict::Score(0.2)
        };
    }

    if genders_equal {
        MatchVerdict::Score(1.0)
    } else {
        MatchVerdict::Score(0.6)
    }
}
