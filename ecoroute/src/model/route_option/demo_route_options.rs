use crate::model::emissions::{EmissionsError, TransportOption};
use indexmap::IndexMap;

/// modes offered in a demo comparison, in presentation order
pub const DEMO_MODES: [&str; 6] = ["walking", "biking", "bus", "train", "car_medium", "rideshare"];

/// sample options for comparing modes over a trip when no routing source is
/// available. transit routes are longer than the direct distance and carry
/// fixed wait times; durations are in minutes.
///
/// # Arguments
///
/// * `base_distance_km` - direct trip distance, must be finite and non-negative
///
/// # Returns
///
/// An option per mode in [`DEMO_MODES`] order, or an error for an invalid distance.
pub fn demo_route_options(
    base_distance_km: f64,
) -> Result<IndexMap<String, TransportOption>, EmissionsError> {
    if !base_distance_km.is_finite() || base_distance_km < 0.0 {
        return Err(EmissionsError::InvalidDistance(base_distance_km));
    }
    let d = base_distance_km;
    let options = DEMO_MODES
        .iter()
        .map(|mode| {
            let option = match *mode {
                "walking" => TransportOption::new(d, d * 12.0),
                "biking" => TransportOption::new(d, d * 4.0),
                "bus" => TransportOption::new(d * 1.2, d * 3.0 + 10.0),
                "train" => TransportOption::new(d * 1.3, d * 2.0 + 15.0),
                "rideshare" => TransportOption::new(d, d * 1.5 + 5.0),
                _ => TransportOption::new(d, d * 1.5),
            };
            (mode.to_string(), option)
        })
        .collect();
    Ok(options)
}
