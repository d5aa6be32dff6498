use super::SavedTrip;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

/// trips saved within this many days before "now" are included in monthly data
pub const MONTHLY_WINDOW_DAYS: i64 = 365;

/// most recently saved trips first, up to `limit` trips.
pub fn recent_trips(trips: &[SavedTrip], limit: usize) -> Vec<&SavedTrip> {
    trips
        .iter()
        .sorted_by(|a, b| b.date_saved.cmp(&a.date_saved))
        .take(limit)
        .collect()
}

/// number of trips per transport mode
pub fn mode_counts(trips: &[SavedTrip]) -> BTreeMap<String, usize> {
    trips
        .iter()
        .map(|t| t.transport_mode.clone())
        .counts()
        .into_iter()
        .collect()
}

/// grams of CO2 saved per calendar month ("YYYY-MM") for trips saved in the
/// year leading up to `now`.
pub fn monthly_savings(trips: &[SavedTrip], now: &DateTime<Utc>) -> BTreeMap<String, f64> {
    let window_start = *now - Duration::days(MONTHLY_WINDOW_DAYS);
    let mut result: BTreeMap<String, f64> = BTreeMap::new();
    for trip in trips.iter().filter(|t| t.date_saved >= window_start) {
        let month = trip.date_saved.format("%Y-%m").to_string();
        *result.entry(month).or_insert(0.0) += trip.carbon_saved;
    }
    result
}

/// length of the longest run of consecutive calendar days (UTC) with at
/// least one saved trip.
pub fn longest_streak(trips: &[SavedTrip]) -> u32 {
    let days: BTreeSet<NaiveDate> = trips.iter().map(|t| t.date_saved.date_naive()).collect();
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;
    for day in days {
        current = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == day => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }
    longest
}
