use serde::{Deserialize, Serialize};

/// grams of CO2 one tree absorbs in a year
pub const TREE_ABSORPTION_YEARLY_G: f64 = 21000.0;
/// reference driving emissions used when framing savings as car kilometers.
/// kept separate from the emissions table's "car_medium" factor.
pub const DRIVING_EMISSIONS_G_PER_KM: f64 = 170.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const GRAMS_PER_KG: f64 = 1000.0;

const TREE_DAYS_CLAUSE_MIN: f64 = 1.0;
const CAR_KM_CLAUSE_MIN: f64 = 1.0;
const FALLBACK_DESCRIPTION: &str = "Every bit of CO₂ reduction helps the environment!";

/// days a single tree would take to absorb this much CO2
pub fn tree_days(carbon_g: f64) -> f64 {
    carbon_g / (TREE_ABSORPTION_YEARLY_G / DAYS_PER_YEAR)
}

/// kilometers of reference driving that emit this much CO2
pub fn car_km_equivalent(carbon_g: f64) -> f64 {
    carbon_g / DRIVING_EMISSIONS_G_PER_KM
}

pub fn kilograms(carbon_g: f64) -> f64 {
    carbon_g / GRAMS_PER_KG
}

/// relatable equivalents for a quantity of CO2 saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub tree_days: f64,
    pub car_km_equivalent: f64,
    pub carbon_kg: f64,
}

impl ImpactSummary {
    /// converts grams of CO2 saved. values are not clamped, so negative
    /// input produces negative equivalents.
    pub fn from_grams(carbon_saved: f64) -> ImpactSummary {
        ImpactSummary {
            tree_days: tree_days(carbon_saved),
            car_km_equivalent: car_km_equivalent(carbon_saved),
            carbon_kg: kilograms(carbon_saved),
        }
    }

    /// a sentence describing this impact. each clause is included only when
    /// its unrounded value is at least 1; the displayed number is rounded.
    pub fn description(&self) -> String {
        let mut clauses = vec![];
        if self.tree_days >= TREE_DAYS_CLAUSE_MIN {
            clauses.push(format!(
                "Equivalent to a tree absorbing CO₂ for {} day(s).",
                self.tree_days.round()
            ));
        }
        if self.car_km_equivalent >= CAR_KM_CLAUSE_MIN {
            clauses.push(format!(
                "You've saved as much CO₂ as driving a car for {} km.",
                self.car_km_equivalent.round()
            ));
        }
        if clauses.is_empty() {
            String::from(FALLBACK_DESCRIPTION)
        } else {
            clauses.join(" ")
        }
    }
}
