//! sample route geometry for demonstrating a trip comparison before real
//! routes are available. output is cosmetic: walking and biking routes are
//! jittered with the provided random source, which should be seeded when
//! reproducible output is needed.
use geo::{Coord, LineString, Point};
use indexmap::IndexMap;
use rand::Rng;

/// fractional (latitude, longitude) positions between start and end
const BUS_WAYPOINTS: [(f64, f64); 4] = [(0.2, 0.2), (0.4, 0.35), (0.6, 0.5), (0.8, 0.75)];
const TRAIN_WAYPOINTS: [(f64, f64); 2] = [(0.3, 0.25), (0.7, 0.75)];
const CAR_WAYPOINTS: [(f64, f64); 2] = [(0.33, 0.33), (0.66, 0.66)];
const RIDESHARE_WAYPOINTS: [(f64, f64); 2] = [(0.4, 0.35), (0.7, 0.65)];

/// shape of the demo route drawn for a transport mode
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DemoGeometry {
    /// evenly spaced waypoints with uniform noise of +/- jitter/2 degrees
    Jittered { waypoints: usize, jitter: f64 },
    /// fixed fractional waypoints
    Fixed(&'static [(f64, f64)]),
    /// straight line from start to end
    Direct,
}

impl DemoGeometry {
    pub fn for_mode(mode: &str) -> DemoGeometry {
        match mode {
            "walking" => DemoGeometry::Jittered {
                waypoints: 5,
                jitter: 0.005,
            },
            "biking" => DemoGeometry::Jittered {
                waypoints: 3,
                jitter: 0.003,
            },
            "bus" => DemoGeometry::Fixed(&BUS_WAYPOINTS),
            "train" => DemoGeometry::Fixed(&TRAIN_WAYPOINTS),
            "rideshare" => DemoGeometry::Fixed(&RIDESHARE_WAYPOINTS),
            m if m == "car" || m.starts_with("car_") => DemoGeometry::Fixed(&CAR_WAYPOINTS),
            _ => DemoGeometry::Direct,
        }
    }
}

/// generates a demo route for each mode, keyed by mode in the order given.
/// each route begins at `start` and finishes at `end`.
pub fn generate_demo_routes<R>(
    start: Point<f64>,
    end: Point<f64>,
    modes: &[String],
    rng: &mut R,
) -> IndexMap<String, LineString<f64>>
where
    R: Rng,
{
    modes
        .iter()
        .map(|mode| {
            let waypoints = match DemoGeometry::for_mode(mode) {
                DemoGeometry::Jittered { waypoints, jitter } => {
                    jittered_waypoints(&start, &end, waypoints, jitter, rng)
                }
                DemoGeometry::Fixed(fractions) => fractions
                    .iter()
                    .map(|(lat_ratio, lon_ratio)| interpolate(&start, &end, *lat_ratio, *lon_ratio))
                    .collect(),
                DemoGeometry::Direct => vec![],
            };
            let mut coords = Vec::with_capacity(waypoints.len() + 2);
            coords.push(start.0);
            coords.extend(waypoints);
            coords.push(end.0);
            (mode.clone(), LineString::new(coords))
        })
        .collect()
}

fn jittered_waypoints<R>(
    start: &Point<f64>,
    end: &Point<f64>,
    count: usize,
    jitter: f64,
    rng: &mut R,
) -> Vec<Coord<f64>>
where
    R: Rng,
{
    (1..=count)
        .map(|i| {
            let ratio = i as f64 / (count + 1) as f64;
            let base = interpolate(start, end, ratio, ratio);
            let lat_noise = (rng.random::<f64>() - 0.5) * jitter;
            let lon_noise = (rng.random::<f64>() - 0.5) * jitter;
            Coord {
                x: base.x + lon_noise,
                y: base.y + lat_noise,
            }
        })
        .collect()
}

fn interpolate(start: &Point<f64>, end: &Point<f64>, lat_ratio: f64, lon_ratio: f64) -> Coord<f64> {
    Coord {
        x: start.x() + (end.x() - start.x()) * lon_ratio,
        y: start.y() + (end.y() - start.y()) * lat_ratio,
    }
}
