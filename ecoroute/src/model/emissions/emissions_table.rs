use super::EmissionsError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// built-in emissions factors in grams of CO2-equivalent per kilometer
const DEFAULT_EMISSIONS: [(&str, f64); 8] = [
    ("walking", 0.0),
    ("biking", 0.0),
    ("bus", 68.0),
    ("train", 41.0),
    ("car_small", 120.0),
    ("car_medium", 170.0),
    ("car_large", 220.0),
    ("rideshare", 180.0),
];

/// lookup from transport mode name to an emissions factor in grams of
/// CO2-equivalent per kilometer. the table is fixed once built. modes
/// missing from the table are treated as zero-emission.
///
/// # Example
///
/// the serialized form is a flat map of mode name to factor:
///
/// ```json
/// { "walking": 0.0, "bus": 68.0, "car_medium": 170.0 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, f64>", into = "IndexMap<String, f64>")]
pub struct EmissionsTable(IndexMap<String, f64>);

impl EmissionsTable {
    /// builds a table, rejecting negative or non-finite factors.
    pub fn new<I, K>(factors: I) -> Result<EmissionsTable, EmissionsError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let table = factors
            .into_iter()
            .map(|(mode, value)| {
                let mode = mode.into();
                if value.is_finite() && value >= 0.0 {
                    Ok((mode, value))
                } else {
                    Err(EmissionsError::InvalidFactor { mode, value })
                }
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;
        Ok(EmissionsTable(table))
    }

    /// emissions factor for a mode, or 0 if the mode is not in the table.
    pub fn factor(&self, mode: &str) -> f64 {
        match self.0.get(mode) {
            Some(factor) => *factor,
            None => {
                log::debug!("mode '{mode}' not found in emissions table, using 0 g/km");
                0.0
            }
        }
    }

    pub fn get(&self, mode: &str) -> Option<f64> {
        self.0.get(mode).copied()
    }

    pub fn contains(&self, mode: &str) -> bool {
        self.0.contains_key(mode)
    }

    /// mode names in table order
    pub fn modes(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for EmissionsTable {
    fn default() -> Self {
        let table = DEFAULT_EMISSIONS
            .iter()
            .map(|(mode, factor)| (mode.to_string(), *factor))
            .collect();
        EmissionsTable(table)
    }
}

impl TryFrom<IndexMap<String, f64>> for EmissionsTable {
    type Error = EmissionsError;

    fn try_from(value: IndexMap<String, f64>) -> Result<Self, Self::Error> {
        EmissionsTable::new(value)
    }
}

impl From<EmissionsTable> for IndexMap<String, f64> {
    fn from(value: EmissionsTable) -> Self {
        value.0
    }
}
