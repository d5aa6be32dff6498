use super::EmissionsError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// qualitative severity of a trip's emissions, used to color-code options.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    Low,
    Medium,
    High,
}

impl ImpactTier {
    /// ratios below this bound are low
    const LOW_UPPER_BOUND: f64 = 0.33;
    /// ratios below this bound (and at least the low bound) are medium
    const MEDIUM_UPPER_BOUND: f64 = 0.66;

    /// classifies emissions against a maximum. the ratio is capped at 1, and
    /// a ratio sitting exactly on a bound belongs to the higher tier.
    ///
    /// # Arguments
    ///
    /// * `emissions`     - grams of CO2 for the trip, must be finite
    /// * `max_emissions` - grams of CO2 treated as the top of the scale, must be > 0
    pub fn from_emissions(emissions: f64, max_emissions: f64) -> Result<ImpactTier, EmissionsError> {
        if !max_emissions.is_finite() || max_emissions <= 0.0 {
            return Err(EmissionsError::InvalidMaxEmissions(max_emissions));
        }
        if !emissions.is_finite() {
            return Err(EmissionsError::InvalidEmissions(emissions));
        }
        let ratio = (emissions / max_emissions).min(1.0);
        let tier = if ratio < Self::LOW_UPPER_BOUND {
            ImpactTier::Low
        } else if ratio < Self::MEDIUM_UPPER_BOUND {
            ImpactTier::Medium
        } else {
            ImpactTier::High
        };
        Ok(tier)
    }

    /// display color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            ImpactTier::Low => "#28a745",
            ImpactTier::Medium => "#ffc107",
            ImpactTier::High => "#dc3545",
        }
    }
}

impl Display for ImpactTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImpactTier::Low => "low",
            ImpactTier::Medium => "medium",
            ImpactTier::High => "high",
        };
        write!(f, "{}", s)
    }
}
