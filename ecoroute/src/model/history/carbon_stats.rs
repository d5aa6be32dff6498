use super::{trip_history_ops, SavedTrip};
use crate::model::emissions::ImpactSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// summary statistics over a traveler's saved trips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonStats {
    /// grams of CO2 saved across all trips
    pub total_carbon_saved: f64,
    pub total_trips: usize,
    /// trip count per transport mode
    pub transport_modes: BTreeMap<String, usize>,
    /// grams saved per "YYYY-MM" month over the past year
    pub monthly_data: BTreeMap<String, f64>,
    pub environmental_impact: ImpactSummary,
}

impl CarbonStats {
    pub fn from_trips(trips: &[SavedTrip], now: &DateTime<Utc>) -> CarbonStats {
        let total_carbon_saved: f64 = trips.iter().map(|t| t.carbon_saved).sum();
        let transport_modes = trip_history_ops::mode_counts(trips);
        CarbonStats {
            total_carbon_saved,
            total_trips: transport_modes.values().sum(),
            transport_modes,
            monthly_data: trip_history_ops::monthly_savings(trips, now),
            environmental_impact: ImpactSummary::from_grams(total_carbon_saved),
        }
    }

    pub fn carbon_kg(&self) -> f64 {
        self.environmental_impact.carbon_kg
    }

    /// trips recorded for a transport mode, 0 if none
    pub fn mode_trips(&self, mode: &str) -> usize {
        self.transport_modes.get(mode).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::CarbonStats;
    use crate::model::history::SavedTrip;
    use chrono::Utc;

    #[test]
    fn test_empty_stats() {
        let stats = CarbonStats::from_trips(&[], &Utc::now());
        assert_eq!(stats.total_carbon_saved, 0.0);
        assert_eq!(stats.total_trips, 0);
        assert!(stats.transport_modes.is_empty());
        assert!(stats.monthly_data.is_empty());
        assert_eq!(stats.environmental_impact.tree_days, 0.0);
    }

    #[test]
    fn test_stats_totals() {
        let trips = vec![
            SavedTrip::test_trip("bus", 1360.0, "2024-03-01T08:00:00Z"),
            SavedTrip::test_trip("biking", 3400.0, "2024-03-02T08:00:00Z"),
            SavedTrip::test_trip("bus", 640.0, "2024-04-11T08:00:00Z"),
        ];
        let now = chrono::DateTime::parse_from_rfc3339("2024-04-30T00:00:00Z")
            .expect("valid date")
            .with_timezone(&Utc);
        let stats = CarbonStats::from_trips(&trips, &now);
        assert_eq!(stats.total_carbon_saved, 5400.0);
        assert_eq!(stats.total_trips, 3);
        assert_eq!(stats.mode_trips("bus"), 2);
        assert_eq!(stats.mode_trips("train"), 0);
        assert_eq!(stats.carbon_kg(), 5.4);
        assert_eq!(stats.monthly_data.get("2024-03"), Some(&4760.0));
        assert_eq!(stats.monthly_data.get("2024-04"), Some(&640.0));
    }
}
