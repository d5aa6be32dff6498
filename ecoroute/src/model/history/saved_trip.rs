use crate::model::emissions::CarbonSaving;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// a trip a traveler recorded after choosing a lower-emission mode.
///
/// # Example
///
/// ```json
/// {
///   "start": "Union Station",
///   "end": "City Park",
///   "distance_km": 6.2,
///   "transport_mode": "biking",
///   "carbon_saved": 1054.0,
///   "date_saved": "2024-05-01T08:30:00Z"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedTrip {
    pub start: String,
    pub end: String,
    pub distance_km: f64,
    pub transport_mode: String,
    /// grams of CO2 saved compared to the reference mode
    pub carbon_saved: f64,
    pub date_saved: DateTime<Utc>,
}

impl CarbonSaving for SavedTrip {
    fn carbon_saved(&self) -> f64 {
        self.carbon_saved
    }
}

#[cfg(test)]
impl SavedTrip {
    /// builds a trip saved at an RFC 3339 timestamp
    pub(crate) fn test_trip(transport_mode: &str, carbon_saved: f64, date_saved: &str) -> SavedTrip {
        SavedTrip {
            start: String::from("home"),
            end: String::from("work"),
            distance_km: 10.0,
            transport_mode: transport_mode.to_string(),
            carbon_saved,
            date_saved: DateTime::parse_from_rfc3339(date_saved)
                .expect("test dates are RFC 3339")
                .with_timezone(&Utc),
        }
    }
}
