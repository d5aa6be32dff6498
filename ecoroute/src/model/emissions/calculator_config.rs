use super::{EmissionsTable, Region};
use serde::{Deserialize, Serialize};

/// settings for building an [`super::EmissionsCalculator`].
///
/// # Example
///
/// ```toml
/// max_emissions = 2000.0
/// region = "europe"
///
/// [emissions]
/// walking = 0.0
/// bus = 68.0
/// car_medium = 170.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// emissions factors in grams of CO2 per kilometer. defaults to the
    /// built-in table (walking 0, biking 0, bus 68, train 41, car_small 120,
    /// car_medium 170, car_large 220, rideshare 180).
    pub emissions: EmissionsTable,
    /// grams of CO2 at the top of the impact tier scale. defaults to 2000.
    pub max_emissions: f64,
    /// region applied to trip emissions when a call does not name one.
    /// defaults to no adjustment.
    pub region: Region,
}

impl CalculatorConfig {
    pub const DEFAULT_MAX_EMISSIONS: f64 = 2000.0;
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            emissions: EmissionsTable::default(),
            max_emissions: Self::DEFAULT_MAX_EMISSIONS,
            region: Region::default(),
        }
    }
}
