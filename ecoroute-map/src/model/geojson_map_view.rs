use super::{FitBoundsOptions, MapViewError, RouteMapView, RouteStyle, Viewport};
use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use indexmap::IndexMap;
use serde_json::json;
use std::path::Path;

/// a [`RouteMapView`] that records markers and routes and exports them as a
/// GeoJSON FeatureCollection with styling stored in feature properties.
#[derive(Debug, Default)]
pub struct GeoJsonMapView {
    markers: Vec<Marker>,
    routes: IndexMap<String, RouteLine>,
    selected_route: Option<String>,
    fit_options: FitBoundsOptions,
    viewport: Option<Viewport>,
}

#[derive(Clone, Debug)]
struct Marker {
    point: Point<f64>,
    popup: String,
}

#[derive(Clone, Debug)]
pub struct RouteLine {
    pub geometry: LineString<f64>,
    pub style: RouteStyle,
}

impl GeoJsonMapView {
    pub fn new(fit_options: FitBoundsOptions) -> GeoJsonMapView {
        GeoJsonMapView {
            fit_options,
            ..Default::default()
        }
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn selected_route(&self) -> Option<&str> {
        self.selected_route.as_deref()
    }

    pub fn get_route(&self, name: &str) -> Option<&RouteLine> {
        self.routes.get(name)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// route names in the order they were drawn
    pub fn route_names(&self) -> impl Iterator<Item = &String> {
        self.routes.keys()
    }

    /// exports markers and routes. routes are drawn in insertion order after markers.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let marker_features = self.markers.iter().map(|m| {
            let mut props = JsonObject::new();
            props.insert(String::from("kind"), json!("marker"));
            props.insert(String::from("popup"), json!(m.popup));
            new_feature(geojson::Value::from(&m.point), props)
        });
        let route_features = self.routes.iter().map(|(name, route)| {
            let mut props = JsonObject::new();
            props.insert(String::from("kind"), json!("route"));
            props.insert(String::from("name"), json!(name));
            props.insert(String::from("color"), json!(route.style.color));
            props.insert(String::from("weight"), json!(route.style.weight));
            props.insert(String::from("opacity"), json!(route.style.opacity));
            props.insert(
                String::from("selected"),
                json!(self.selected_route.as_deref() == Some(name.as_str())),
            );
            new_feature(geojson::Value::from(&route.geometry), props)
        });
        let bbox = self.viewport.as_ref().map(|v| {
            vec![
                v.bounds.min().x,
                v.bounds.min().y,
                v.bounds.max().x,
                v.bounds.max().y,
            ]
        });
        FeatureCollection {
            bbox,
            features: marker_features.chain(route_features).collect(),
            foreign_members: None,
        }
    }

    pub fn write_geojson(&self, output_file: &Path) -> Result<(), MapViewError> {
        let geojson = GeoJson::FeatureCollection(self.to_feature_collection());
        std::fs::write(output_file, geojson.to_string()).map_err(|e| {
            MapViewError::WriteError(format!("failure writing {}: {e}", output_file.display()))
        })?;
        log::info!(
            "wrote {} markers and {} routes to {}",
            self.markers.len(),
            self.routes.len(),
            output_file.display()
        );
        Ok(())
    }

    fn displayed_points(&self) -> impl Iterator<Item = Point<f64>> + '_ {
        let marker_points = self.markers.iter().map(|m| m.point);
        let route_points = self.routes.values().flat_map(|r| r.geometry.points());
        marker_points.chain(route_points)
    }
}

impl RouteMapView for GeoJsonMapView {
    fn add_markers(&mut self, start: Point<f64>, end: Point<f64>) -> Result<(), MapViewError> {
        validate_point(&start)?;
        validate_point(&end)?;
        self.clear_markers();
        self.markers.push(Marker {
            point: start,
            popup: format!("Start: {}, {}", start.y(), start.x()),
        });
        self.markers.push(Marker {
            point: end,
            popup: format!("End: {}, {}", end.y(), end.x()),
        });
        self.fit_bounds();
        Ok(())
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.fit_bounds();
    }

    fn add_route(
        &mut self,
        name: &str,
        coordinates: LineString<f64>,
        style: RouteStyle,
    ) -> Result<(), MapViewError> {
        let count = coordinates.0.len();
        if count < 2 {
            return Err(MapViewError::InsufficientCoordinates {
                name: name.to_string(),
                count,
            });
        }
        for point in coordinates.points() {
            validate_point(&point)?;
        }
        log::debug!("adding route '{name}' with {count} coordinates");
        self.routes.insert(
            name.to_string(),
            RouteLine {
                geometry: coordinates,
                style,
            },
        );
        self.fit_bounds();
        Ok(())
    }

    fn show_route(&mut self, name: &str) -> Result<(), MapViewError> {
        if !self.routes.contains_key(name) {
            return Err(MapViewError::UnknownRoute(name.to_string()));
        }
        if let Some(previous) = self.selected_route.take() {
            if let Some(route) = self.routes.get_mut(&previous) {
                route.style.opacity = RouteStyle::DIMMED_OPACITY;
            }
        }
        if let Some(route) = self.routes.get_mut(name) {
            route.style.opacity = RouteStyle::SELECTED_OPACITY;
        }
        self.selected_route = Some(name.to_string());
        Ok(())
    }

    fn remove_route(&mut self, name: &str) -> bool {
        let removed = self.routes.shift_remove(name).is_some();
        if removed {
            if self.selected_route.as_deref() == Some(name) {
                self.selected_route = None;
            }
            self.fit_bounds();
        }
        removed
    }

    fn clear_routes(&mut self) {
        self.routes.clear();
        self.selected_route = None;
        self.fit_bounds();
    }

    fn fit_bounds(&mut self) -> Option<Viewport> {
        let viewport = Viewport::fit(self.displayed_points(), &self.fit_options);
        self.viewport = viewport.clone();
        viewport
    }
}

fn new_feature(value: geojson::Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn validate_point(point: &Point<f64>) -> Result<(), MapViewError> {
    let (lon, lat) = (point.x(), point.y());
    let msg = if !lon.is_finite() || !lat.is_finite() {
        Some("coordinates must be finite")
    } else if !(-90.0..=90.0).contains(&lat) {
        Some("latitude must be within [-90, 90]")
    } else if !(-180.0..=180.0).contains(&lon) {
        Some("longitude must be within [-180, 180]")
    } else {
        None
    };
    match msg {
        None => Ok(()),
        Some(msg) => Err(MapViewError::InvalidCoordinate {
            lon,
            lat,
            msg: msg.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::GeoJsonMapView;
    use crate::model::{MapViewError, RouteMapView, RouteStyle};
    use geo::{line_string, point};

    fn sample_view() -> GeoJsonMapView {
        let mut view = GeoJsonMapView::default();
        view.add_markers(
            point! { x: -122.4194, y: 37.7749 },
            point! { x: -122.40, y: 37.79 },
        )
        .expect("markers should be valid");
        view.add_route(
            "bus",
            line_string![(x: -122.4194, y: 37.7749), (x: -122.41, y: 37.78), (x: -122.40, y: 37.79)],
            RouteStyle::with_color("#ffc107"),
        )
        .expect("route should be valid");
        view.add_route(
            "walking",
            line_string![(x: -122.4194, y: 37.7749), (x: -122.43, y: 37.80)],
            RouteStyle::default(),
        )
        .expect("route should be valid");
        view
    }

    #[test]
    fn test_markers_replace_previous() {
        let mut view = sample_view();
        view.add_markers(point! { x: 0.0, y: 0.0 }, point! { x: 1.0, y: 1.0 })
            .expect("markers should be valid");
        assert_eq!(view.marker_count(), 2);
        view.clear_markers();
        assert_eq!(view.marker_count(), 0);
    }

    #[test]
    fn test_viewport_covers_markers_and_routes() {
        let view = sample_view();
        let viewport = view.viewport().expect("should have fitted a viewport");
        assert_eq!(viewport.bounds.min().x, -122.43);
        assert_eq!(viewport.bounds.max().y, 37.80);
        assert!(viewport.zoom <= 15);
    }

    #[test]
    fn test_show_route_dims_previous_selection() {
        let mut view = sample_view();
        view.show_route("bus").expect("bus is displayed");
        view.show_route("walking").expect("walking is displayed");
        let bus = view.get_route("bus").expect("bus is displayed");
        let walking = view.get_route("walking").expect("walking is displayed");
        assert_eq!(bus.style.opacity, RouteStyle::DIMMED_OPACITY);
        assert_eq!(walking.style.opacity, RouteStyle::SELECTED_OPACITY);
        assert_eq!(view.selected_route(), Some("walking"));
    }

    #[test]
    fn test_show_unknown_route_keeps_selection() {
        let mut view = sample_view();
        view.show_route("bus").expect("bus is displayed");
        let result = view.show_route("teleport");
        assert!(matches!(result, Err(MapViewError::UnknownRoute(_))));
        assert_eq!(view.selected_route(), Some("bus"));
        let bus = view.get_route("bus").expect("bus is displayed");
        assert_eq!(bus.style.opacity, RouteStyle::SELECTED_OPACITY);
    }

    #[test]
    fn test_remove_and_clear_routes() {
        let mut view = sample_view();
        view.show_route("bus").expect("bus is displayed");
        assert!(view.remove_route("bus"));
        assert!(!view.remove_route("bus"));
        assert_eq!(view.selected_route(), None);
        view.clear_routes();
        assert_eq!(view.route_names().count(), 0);
    }

    #[test]
    fn test_viewport_shrinks_when_content_is_removed() {
        let mut view = GeoJsonMapView::default();
        view.add_route(
            "far",
            line_string![(x: 0.0, y: 0.0), (x: 50.0, y: 50.0)],
            RouteStyle::default(),
        )
        .expect("route should be valid");
        view.add_route(
            "near",
            line_string![(x: 0.0, y: 0.0), (x: 0.1, y: 0.1)],
            RouteStyle::default(),
        )
        .expect("route should be valid");
        assert_eq!(
            view.to_feature_collection().bbox,
            Some(vec![0.0, 0.0, 50.0, 50.0])
        );

        assert!(view.remove_route("far"));
        assert_eq!(
            view.to_feature_collection().bbox,
            Some(vec![0.0, 0.0, 0.1, 0.1])
        );

        view.add_markers(point! { x: 1.0, y: 1.0 }, point! { x: 2.0, y: 2.0 })
            .expect("markers should be valid");
        view.clear_routes();
        let viewport = view.viewport().expect("markers are still displayed");
        assert_eq!(viewport.bounds.min().x, 1.0);

        view.clear_markers();
        assert!(view.fit_bounds().is_none());
        assert!(view.viewport().is_none());
        assert_eq!(view.to_feature_collection().bbox, None);
    }

    #[test]
    fn test_rejects_degenerate_routes() {
        let mut view = GeoJsonMapView::default();
        let single = line_string![(x: 0.0, y: 0.0)];
        let result = view.add_route("car", single, RouteStyle::default());
        assert!(matches!(
            result,
            Err(MapViewError::InsufficientCoordinates { count: 1, .. })
        ));
        let out_of_range = line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 91.0)];
        let result = view.add_route("car", out_of_range, RouteStyle::default());
        assert!(matches!(result, Err(MapViewError::InvalidCoordinate { .. })));
        assert!(view.viewport().is_none());
    }

    #[test]
    fn test_feature_collection_properties() {
        let mut view = sample_view();
        view.show_route("bus").expect("bus is displayed");
        let fc = view.to_feature_collection();
        assert_eq!(fc.features.len(), 4);
        assert_eq!(fc.bbox.as_ref().map(|b| b.len()), Some(4));
        let bus = &fc.features[2];
        let props = bus.properties.as_ref().expect("routes carry properties");
        assert_eq!(props.get("name"), Some(&serde_json::json!("bus")));
        assert_eq!(props.get("color"), Some(&serde_json::json!("#ffc107")));
        assert_eq!(props.get("selected"), Some(&serde_json::json!(true)));
        let start = &fc.features[0];
        let popup = start
            .properties
            .as_ref()
            .and_then(|p| p.get("popup"))
            .and_then(|p| p.as_str())
            .expect("markers carry a popup");
        assert_eq!(popup, "Start: 37.7749, -122.4194");
    }
}
