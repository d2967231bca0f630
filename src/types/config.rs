//! Matching configuration: defaults, overrides, and persistence validation.

use serde::{Deserialize, Serialize};

/// Scoring weights applied by the Scoring Aggregator (§4.4).
///
/// `early_departure` defaults to 0.0 — `EarlyDepartureMatcher` never enters
/// the weighted sum by default (see its module doc for why it exists at all).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub route_efficiency: f64,
    pub detour: f64,
    pub gender_match: f64,
    pub age_match: f64,
    pub driver_preference: f64,
    pub early_departure: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            route_efficiency: 0.40,
            detour: 0.20,
            gender_match: 0.15,
            age_match: 0.15,
            driver_preference: 0.10,
            early_departure: 0.0,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.route_efficiency
            + self.detour
            + self.gender_match
            + self.age_match
            + self.driver_preference
            + self.early_departure
    }

    /// Field-wise merge: any `Some` field in `patch` overrides `self`.
    fn merged_with(&self, patch: &WeightsPatch) -> Self {
        Self {
            route_efficiency: patch.route_efficiency.unwrap_or(self.route_efficiency),
            detour: patch.detour.unwrap_or(self.detour),
            gender_match: patch.gender_match.unwrap_or(self.gender_match),
            age_match: patch.age_match.unwrap_or(self.age_match),
            driver_preference: patch.driver_preference.unwrap_or(self.driver_preference),
            early_departure: patch.early_departure.unwrap_or(self.early_departure),
        }
    }
}

/// Partial weights patch carried in a `ConfigOverrides` (§6: "weights is
/// merged field-wise").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsPatch {
    pub route_efficiency: Option<f64>,
    pub detour: Option<f64>,
    pub gender_match: Option<f64>,
    pub age_match: Option<f64>,
    pub driver_preference: Option<f64>,
    pub early_departure: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingConfig {
    pub traffic_buffer_multiplier: f64,
    pub load_time_minutes: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            traffic_buffer_multiplier: 1.3,
            load_time_minutes: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingConfig {
    pub max_detour_miles: f64,
    pub enforce_gender_preference: bool,
    pub group_by_age_range: u32,
    pub timing: TimingConfig,
    pub weights: Weights,
    /// Caller-facing label for the matcher evaluation order; echoed into
    /// `metadata.priorityOrder` but does not itself reorder the fixed
    /// Timing -> RouteEfficiency -> Gender short-circuit chain (§6).
    pub priority_order: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_detour_miles: 5.0,
            enforce_gender_preference: false,
            group_by_age_range: 10,
            timing: TimingConfig::default(),
            weights: Weights::default(),
            priority_order: default_priority_order(),
        }
    }
}

pub fn default_priority_order() -> Vec<String> {
    vec![
        "timing".to_string(),
        "early_departure".to_string(),
        "capacity".to_string(),
        "route_efficiency".to_string(),
        "driver_preference".to_string(),
        "detour".to_string(),
        "gender".to_string(),
        "age".to_string(),
    ]
}

/// Partial config accepted on a `match` call (§6).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub max_detour_miles: Option<f64>,
    pub enforce_gender_preference: Option<bool>,
    pub group_by_age_range: Option<u32>,
    pub timing: Option<TimingConfig>,
    pub weights: Option<WeightsPatch>,
    pub priority_order: Option<Vec<String>>,
}

impl MatchingConfig {
    /// Merge overrides into a base config. `weights` merges field-wise;
    /// `priority_order` and the remaining scalar/struct fields replace
    /// wholesale (§6).
    pub fn merged_with(&self, overrides: Option<&ConfigOverrides>) -> Self {
        let Some(overrides) = overrides else {
            return self.clone();
        };

        Self {
            max_detour_miles: overrides.max_detour_miles.unwrap_or(self.max_detour_miles),
            enforce_gender_preference: overrides
                .enforce_gender_preference
                .unwrap_or(self.enforce_gender_preference),
            group_by_age_range: overrides.group_by_age_range.unwrap_or(self.group_by_age_range),
            timing: overrides.timing.unwrap_or(self.timing),
            weights: match &overrides.weights {
                Some(patch) => self.weights.merged_with(patch),
                None => self.weights,
            },
            priority_order: overrides
                .priority_order
                .clone()
                .unwrap_or_else(|| self.priority_order.clone()),
        }
    }

    /// Validation run at config-save time, not per matching call (§7):
    /// weights must sum within 0.01 of 1.0.
    pub fn validate_for_persistence(&self) -> Result<(), String> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 0.01 {
            return Err(format!(
                "weights must sum to ~1.0, got {sum:.4}"
            ));
        }
        Ok(())
    }
}
