mod calculator_config;
mod emissions_calculator;
mod emissions_error;
mod emissions_table;
pub mod impact_summary;
mod impact_tier;
mod lifetime_impact;
mod ranked_option;
mod region;

pub use calculator_config::CalculatorConfig;
pub use emissions_calculator::EmissionsCalculator;
pub use emissions_error::EmissionsError;
pub use emissions_table::EmissionsTable;
pub use impact_summary::ImpactSummary;
pub use impact_tier::ImpactTier;
pub use lifetime_impact::{CarbonSaving, LifetimeImpact};
pub use ranked_option::{RankedOption, TransportOption};
pub use region::Region;
