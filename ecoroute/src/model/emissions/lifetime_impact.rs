use super::impact_summary;
use serde::{Deserialize, Serialize};

/// a historical record that contributed some grams of CO2 saved.
pub trait CarbonSaving {
    fn carbon_saved(&self) -> f64;
}

impl CarbonSaving for f64 {
    fn carbon_saved(&self) -> f64 {
        *self
    }
}

/// total carbon saved across a trip history, with relatable equivalents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifetimeImpact {
    /// grams of CO2
    pub total_saved: f64,
    pub kg_saved: f64,
    pub tree_days: f64,
    pub car_km: f64,
}

impl LifetimeImpact {
    /// sums the carbon saved by each trip. an empty history is all zeros.
    pub fn from_trips<T: CarbonSaving>(trips: &[T]) -> LifetimeImpact {
        let total_saved: f64 = trips.iter().map(|t| t.carbon_saved()).sum();
        LifetimeImpact {
            total_saved,
            kg_saved: impact_summary::kilograms(total_saved),
            tree_days: impact_summary::tree_days(total_saved),
            car_km: impact_summary::car_km_equivalent(total_saved),
        }
    }
}
