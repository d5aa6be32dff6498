use super::{run, EcoRouteCliError};
use crate::{
    config::EcoRouteConfiguration,
    model::{
        emissions::{EmissionsCalculator, Region},
        route_option::DEMO_MODES,
    },
};
use clap::{Parser, Subcommand};
use geo::Point;
use std::path::Path;

/// command line tool comparing the carbon emissions of transport choices
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EcoRouteCliArguments {
    /// TOML or JSON file with calculator and map settings
    #[arg(long, global = true)]
    pub config_file: Option<String>,
    /// select the ecoroute operation to run
    #[command(subcommand)]
    pub op: EcoRouteOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum EcoRouteOperation {
    /// compares the emissions of a chosen mode against a reference mode
    /// over the same trip distance.
    Compare {
        /// transport mode taken, such as "bus"
        #[arg(short, long)]
        chosen: String,
        /// transport mode compared against
        #[arg(short, long, default_value_t = String::from("car_medium"))]
        reference: String,
        /// trip distance in kilometers
        #[arg(short, long)]
        distance: f64,
        /// region used for adjusted emissions (europe, usa, asia)
        #[arg(long)]
        region: Option<Region>,
    },
    /// ranks sample transport options for a trip from least to most emitting
    Rank {
        /// direct trip distance in kilometers
        #[arg(short, long)]
        distance: f64,
    },
    /// summarizes a JSON array of saved trips with lifetime impact,
    /// statistics and achievements.
    History {
        /// JSON file containing saved trips
        #[arg(short, long)]
        trips_file: String,
        /// number of recent trips to report
        #[arg(long, default_value_t = 5)]
        recent: usize,
    },
    /// writes demo routes between two points to a GeoJSON file, colored by
    /// emissions tier.
    Map {
        /// trip origin as "lat,lon"
        #[arg(long, value_parser = parse_lat_lon)]
        start: Point<f64>,
        /// trip destination as "lat,lon"
        #[arg(long, value_parser = parse_lat_lon)]
        end: Point<f64>,
        /// comma-delimited transport modes to draw
        #[arg(long, default_value_t = DEMO_MODES.join(","))]
        modes: String,
        /// seed for route jitter. omit for a random seed.
        #[arg(long)]
        seed: Option<u64>,
        /// GeoJSON output file path
        #[arg(short, long)]
        output_file: String,
    },
}

impl EcoRouteOperation {
    pub fn run(&self, conf: &EcoRouteConfiguration) -> Result<serde_json::Value, EcoRouteCliError> {
        let calc = EmissionsCalculator::new(conf.calculator.clone())?;
        match self {
            EcoRouteOperation::Compare {
                chosen,
                reference,
                distance,
                region,
            } => run::run_compare(&calc, chosen, reference, *distance, *region),
            EcoRouteOperation::Rank { distance } => run::run_rank(&calc, *distance),
            EcoRouteOperation::History { trips_file, recent } => {
                run::run_history(&calc, Path::new(trips_file), *recent)
            }
            EcoRouteOperation::Map {
                start,
                end,
                modes,
                seed,
                output_file,
            } => {
                let modes = modes
                    .split(",")
                    .map(|m| m.trim().to_owned())
                    .filter(|m| !m.is_empty())
                    .collect::<Vec<_>>();
                if modes.is_empty() {
                    return Err(EcoRouteCliError::InvalidArgument(String::from(
                        "at least one transport mode is required",
                    )));
                }
                run::run_map(
                    &calc,
                    &conf.map,
                    *start,
                    *end,
                    &modes,
                    *seed,
                    Path::new(output_file),
                )
            }
        }
    }
}

/// parses "lat,lon" into a point with x=longitude, y=latitude
fn parse_lat_lon(s: &str) -> Result<Point<f64>, String> {
    let (lat, lon) = s
        .split_once(",")
        .ok_or_else(|| format!("expected 'lat,lon', found '{s}'"))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
    Ok(Point::new(lon, lat))
}
