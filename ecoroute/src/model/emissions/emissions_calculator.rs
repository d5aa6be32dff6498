use super::{
    CalculatorConfig, CarbonSaving, EmissionsError, EmissionsTable, ImpactSummary, ImpactTier,
    LifetimeImpact, RankedOption, Region, TransportOption,
};
use indexmap::IndexMap;

/// converts transport choices and distances into emissions, savings, and
/// relatable impact figures. all operations are pure over the fixed table;
/// build one instance per application context and pass it by reference.
#[derive(Clone, Debug)]
pub struct EmissionsCalculator {
    table: EmissionsTable,
    max_emissions: f64,
    region: Region,
}

impl EmissionsCalculator {
    /// builds a calculator, validating the impact tier scale.
    pub fn new(config: CalculatorConfig) -> Result<EmissionsCalculator, EmissionsError> {
        let CalculatorConfig {
            emissions,
            max_emissions,
            region,
        } = config;
        if !max_emissions.is_finite() || max_emissions <= 0.0 {
            return Err(EmissionsError::InvalidMaxEmissions(max_emissions));
        }
        log::debug!(
            "emissions calculator with {} modes, max emissions {max_emissions} g, region {region}",
            emissions.len()
        );
        Ok(EmissionsCalculator {
            table: emissions,
            max_emissions,
            region,
        })
    }

    pub fn from_table(table: EmissionsTable) -> EmissionsCalculator {
        EmissionsCalculator {
            table,
            ..Default::default()
        }
    }

    pub fn table(&self) -> &EmissionsTable {
        &self.table
    }

    pub fn max_emissions(&self) -> f64 {
        self.max_emissions
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// grams of CO2 for traveling a distance by some mode. unknown modes
    /// are zero-emission.
    ///
    /// # Arguments
    ///
    /// * `mode`        - transport mode name, such as "bus"
    /// * `distance_km` - trip distance, must be finite and non-negative
    pub fn emissions(&self, mode: &str, distance_km: f64) -> Result<f64, EmissionsError> {
        validate_distance(distance_km)?;
        Ok(self.table.factor(mode) * distance_km)
    }

    /// grams of CO2 avoided by choosing `chosen` over `reference`. a choice
    /// that emits more than the reference saves 0, never a negative amount.
    pub fn savings(
        &self,
        chosen: &str,
        reference: &str,
        distance_km: f64,
    ) -> Result<f64, EmissionsError> {
        let chosen_emissions = self.emissions(chosen, distance_km)?;
        let reference_emissions = self.emissions(reference, distance_km)?;
        Ok((reference_emissions - chosen_emissions).max(0.0))
    }

    pub fn impact_summary(&self, carbon_saved: f64) -> ImpactSummary {
        ImpactSummary::from_grams(carbon_saved)
    }

    pub fn impact_description(&self, carbon_saved: f64) -> String {
        ImpactSummary::from_grams(carbon_saved).description()
    }

    /// impact tier of an emissions figure. uses the configured maximum
    /// unless `max_emissions` is provided.
    pub fn emissions_color(
        &self,
        emissions: f64,
        max_emissions: Option<f64>,
    ) -> Result<ImpactTier, EmissionsError> {
        ImpactTier::from_emissions(emissions, max_emissions.unwrap_or(self.max_emissions))
    }

    /// computes emissions for each option and orders them from least to most
    /// emitting. options with equal emissions keep their input order.
    pub fn rank(
        &self,
        options: &IndexMap<String, TransportOption>,
    ) -> Result<Vec<RankedOption>, EmissionsError> {
        let mut ranked = options
            .iter()
            .map(|(mode, option)| {
                Ok(RankedOption {
                    mode: mode.clone(),
                    emissions: self.emissions(mode, option.distance)?,
                    distance: option.distance,
                    duration: option.duration,
                })
            })
            .collect::<Result<Vec<_>, EmissionsError>>()?;
        ranked.sort_by(|a, b| a.emissions.total_cmp(&b.emissions));
        Ok(ranked)
    }

    pub fn lifetime_impact<T: CarbonSaving>(&self, trips: &[T]) -> LifetimeImpact {
        LifetimeImpact::from_trips(trips)
    }

    /// emissions factor scaled for a region. falls back to the configured
    /// region when none is given.
    pub fn emissions_factor(&self, mode: &str, region: Option<Region>) -> f64 {
        let region = region.unwrap_or(self.region);
        self.table.factor(mode) * region.adjustment_factor()
    }

    /// grams of CO2 for a trip using the regionally adjusted factor.
    pub fn trip_emissions(
        &self,
        mode: &str,
        distance_km: f64,
        region: Option<Region>,
    ) -> Result<f64, EmissionsError> {
        validate_distance(distance_km)?;
        Ok(self.emissions_factor(mode, region) * distance_km)
    }
}

impl Default for EmissionsCalculator {
    fn default() -> Self {
        Self {
            table: EmissionsTable::default(),
            max_emissions: CalculatorConfig::DEFAULT_MAX_EMISSIONS,
            region: Region::default(),
        }
    }
}

fn validate_distance(distance_km: f64) -> Result<(), EmissionsError> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(())
    } else {
        Err(EmissionsError::InvalidDistance(distance_km))
    }
}
