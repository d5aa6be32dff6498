use geo::{BoundingRect, MultiPoint, Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// web mercator tile width in pixels
const TILE_SIZE: f64 = 256.0;
/// latitude limit of the web mercator projection
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_6;

/// controls how a map viewport is fitted around displayed content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitBoundsOptions {
    /// pixels kept free on each side, as (horizontal, vertical)
    pub padding: (u32, u32),
    /// upper bound on the fitted zoom level
    pub max_zoom: u8,
    /// size of the map surface in pixels, as (width, height)
    pub viewport_size: (u32, u32),
}

impl Default for FitBoundsOptions {
    fn default() -> Self {
        Self {
            padding: (50, 50),
            max_zoom: 15,
            viewport_size: (800, 600),
        }
    }
}

/// the region of the map to display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub bounds: Rect<f64>,
    pub center: Point<f64>,
    pub zoom: u8,
}

impl Viewport {
    /// fits a viewport around a set of points.
    ///
    /// # Arguments
    ///
    /// * `points`  - every point currently displayed
    /// * `options` - padding, zoom limit and surface size
    ///
    /// # Returns
    ///
    /// The fitted viewport, or None if there are no points.
    pub fn fit<I>(points: I, options: &FitBoundsOptions) -> Option<Viewport>
    where
        I: IntoIterator<Item = Point<f64>>,
    {
        let multi_point: MultiPoint<f64> = points.into_iter().collect();
        let bounds = multi_point.bounding_rect()?;
        let zoom = bounds_zoom(&bounds, options);
        Some(Viewport {
            bounds,
            center: bounds.center().into(),
            zoom,
        })
    }
}

/// largest whole zoom level at which the bounds fit inside the padded surface
fn bounds_zoom(bounds: &Rect<f64>, options: &FitBoundsOptions) -> u8 {
    let (width, height) = options.viewport_size;
    let (pad_x, pad_y) = options.padding;
    let available_x = (width as f64 - 2.0 * pad_x as f64).max(1.0);
    let available_y = (height as f64 - 2.0 * pad_y as f64).max(1.0);

    let x_fraction = bounds.width() / 360.0;
    let y_fraction = (mercator_y(bounds.max().y) - mercator_y(bounds.min().y)) / (2.0 * PI);

    let zoom = axis_zoom(available_x, x_fraction)
        .min(axis_zoom(available_y, y_fraction))
        .floor();
    zoom.clamp(0.0, options.max_zoom as f64) as u8
}

fn axis_zoom(available: f64, world_fraction: f64) -> f64 {
    if world_fraction <= 0.0 {
        f64::INFINITY
    } else {
        (available / (TILE_SIZE * world_fraction)).log2()
    }
}

fn mercator_y(lat: f64) -> f64 {
    let phi = lat
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    (PI / 4.0 + phi / 2.0).tan().ln()
}

#[cfg(test)]
mod tests {
    use super::{FitBoundsOptions, Viewport};
    use geo::point;

    #[test]
    fn test_empty_has_no_viewport() {
        let result = Viewport::fit(Vec::<geo::Point<f64>>::new(), &FitBoundsOptions::default());
        assert!(result.is_none());
    }

    #[test]
    fn test_single_point_uses_max_zoom() {
        let p = point! { x: -122.4194, y: 37.7749 };
        let viewport =
            Viewport::fit(vec![p], &FitBoundsOptions::default()).expect("should fit one point");
        assert_eq!(viewport.zoom, 15);
        assert_eq!(viewport.center, p);
    }

    #[test]
    fn test_world_span_zooms_out() {
        let points = vec![point! { x: -180.0, y: 0.0 }, point! { x: 180.0, y: 0.0 }];
        let viewport =
            Viewport::fit(points, &FitBoundsOptions::default()).expect("should fit world");
        // 700 available pixels across a 256 * 2^z world
        assert_eq!(viewport.zoom, 1);
        assert_eq!(viewport.center, point! { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_small_span_clamped_by_max_zoom() {
        let points = vec![point! { x: 0.0, y: 0.0 }, point! { x: 0.01, y: 0.01 }];
        let clamped = Viewport::fit(points.clone(), &FitBoundsOptions::default())
            .expect("should fit points");
        assert_eq!(clamped.zoom, 15);

        let options = FitBoundsOptions {
            max_zoom: 18,
            ..Default::default()
        };
        let unclamped = Viewport::fit(points, &options).expect("should fit points");
        assert_eq!(unclamped.zoom, 16);
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let points = vec![
            point! { x: -105.0, y: 39.7 },
            point! { x: -104.9, y: 39.8 },
            point! { x: -104.95, y: 39.65 },
        ];
        let viewport =
            Viewport::fit(points, &FitBoundsOptions::default()).expect("should fit points");
        assert_eq!(viewport.bounds.min().x, -105.0);
        assert_eq!(viewport.bounds.max().x, -104.9);
        assert_eq!(viewport.bounds.min().y, 39.65);
        assert_eq!(viewport.bounds.max().y, 39.8);
    }
}
