use serde::{Deserialize, Serialize};

/// a candidate way of making a trip, as supplied by a routing source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportOption {
    /// trip distance in kilometers
    pub distance: f64,
    /// trip duration in minutes
    pub duration: f64,
}

impl TransportOption {
    pub fn new(distance: f64, duration: f64) -> TransportOption {
        TransportOption { distance, duration }
    }
}

/// a transport option with its computed emissions in grams of CO2.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedOption {
    pub mode: String,
    pub emissions: f64,
    pub distance: f64,
    pub duration: f64,
}
