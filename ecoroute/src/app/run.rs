use super::EcoRouteCliError;
use crate::model::{
    emissions::{EmissionsCalculator, Region},
    history::{evaluate_achievements, trip_history_ops, CarbonStats, SavedTrip},
    route_option::demo_route_options,
};
use chrono::Utc;
use ecoroute_map::model::{
    demo_routes, FitBoundsOptions, GeoJsonMapView, RouteMapView, RouteStyle,
};
use geo::{line_measures::LengthMeasurable, Haversine, Point};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use std::path::Path;

/// compares a chosen mode against a reference mode over one trip.
pub fn run_compare(
    calc: &EmissionsCalculator,
    chosen: &str,
    reference: &str,
    distance_km: f64,
    region: Option<Region>,
) -> Result<serde_json::Value, EcoRouteCliError> {
    let chosen_emissions = calc.emissions(chosen, distance_km)?;
    let reference_emissions = calc.emissions(reference, distance_km)?;
    let carbon_saved = calc.savings(chosen, reference, distance_km)?;
    let chosen_tier = calc.emissions_color(chosen_emissions, None)?;
    let reference_tier = calc.emissions_color(reference_emissions, None)?;
    let region = region.unwrap_or(calc.region());
    log::info!(
        "{chosen} saves {carbon_saved:.1} g CO2 over {reference} for a {distance_km} km trip"
    );
    let result = json!({
        "distance_km": distance_km,
        "region": region,
        "chosen": {
            "mode": chosen,
            "emissions": chosen_emissions,
            "regional_emissions": calc.trip_emissions(chosen, distance_km, Some(region))?,
            "tier": chosen_tier,
            "color": chosen_tier.color(),
        },
        "reference": {
            "mode": reference,
            "emissions": reference_emissions,
            "regional_emissions": calc.trip_emissions(reference, distance_km, Some(region))?,
            "tier": reference_tier,
            "color": reference_tier.color(),
        },
        "carbon_saved": carbon_saved,
        "impact": calc.impact_summary(carbon_saved),
        "description": calc.impact_description(carbon_saved),
    });
    Ok(result)
}

/// ranks the sample transport options for a trip distance.
pub fn run_rank(
    calc: &EmissionsCalculator,
    distance_km: f64,
) -> Result<serde_json::Value, EcoRouteCliError> {
    let options = demo_route_options(distance_km)?;
    let ranked = calc.rank(&options)?;
    let rows = ranked
        .into_iter()
        .map(|option| {
            let tier = calc.emissions_color(option.emissions, None)?;
            Ok(json!({
                "mode": option.mode,
                "emissions": option.emissions,
                "distance": option.distance,
                "duration": option.duration,
                "tier": tier,
                "color": tier.color(),
            }))
        })
        .collect::<Result<Vec<_>, EcoRouteCliError>>()?;
    Ok(serde_json::Value::Array(rows))
}

/// summarizes a saved trip history read from a JSON array on disk.
pub fn run_history(
    calc: &EmissionsCalculator,
    trips_file: &Path,
    recent: usize,
) -> Result<serde_json::Value, EcoRouteCliError> {
    let contents = std::fs::read_to_string(trips_file)?;
    let trips: Vec<SavedTrip> = serde_json::from_str(&contents)?;
    log::info!("read {} trips from {}", trips.len(), trips_file.display());

    let stats = CarbonStats::from_trips(&trips, &Utc::now());
    let streak = trip_history_ops::longest_streak(&trips);
    let achievements = evaluate_achievements(&stats, streak);
    let result = json!({
        "lifetime_impact": calc.lifetime_impact(&trips),
        "description": calc.impact_description(stats.total_carbon_saved),
        "stats": stats,
        "longest_streak": streak,
        "recent_trips": trip_history_ops::recent_trips(&trips, recent),
        "achievements": achievements,
    });
    Ok(result)
}

/// draws a demo route per mode between two points, colors each by impact
/// tier, selects the least emitting route and writes the map as GeoJSON.
pub fn run_map(
    calc: &EmissionsCalculator,
    fit_options: &FitBoundsOptions,
    start: Point<f64>,
    end: Point<f64>,
    modes: &[String],
    seed: Option<u64>,
    output_file: &Path,
) -> Result<serde_json::Value, EcoRouteCliError> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let routes = demo_routes::generate_demo_routes(start, end, modes, &mut rng);

    let mut view = GeoJsonMapView::new(fit_options.clone());
    view.add_markers(start, end)?;
    let mut rows = vec![];
    let mut best: Option<(String, f64)> = None;
    for (mode, route) in routes.into_iter() {
        let distance_km = route.length(&Haversine) / 1000.0;
        let emissions = calc.emissions(&mode, distance_km)?;
        let tier = calc.emissions_color(emissions, None)?;
        view.add_route(&mode, route, RouteStyle::with_color(tier.color()))?;
        if best.as_ref().is_none_or(|(_, e)| emissions < *e) {
            best = Some((mode.clone(), emissions));
        }
        rows.push(json!({
            "mode": mode,
            "distance_km": distance_km,
            "emissions": emissions,
            "tier": tier,
            "color": tier.color(),
        }));
    }
    if let Some((mode, _)) = &best {
        view.show_route(mode)?;
    }
    let viewport = view.fit_bounds();
    view.write_geojson(output_file)?;
    log::info!("wrote {} routes to {}", rows.len(), output_file.display());

    let result = json!({
        "output_file": output_file.display().to_string(),
        "selected_route": view.selected_route(),
        "viewport": viewport,
        "routes": rows,
    });
    Ok(result)
}
