use super::{MapViewError, RouteStyle, Viewport};
use geo::{LineString, Point};

/// the minimal capability set needed to display trip comparisons on a map.
/// coordinates are (x=longitude, y=latitude) in WGS84 degrees.
///
/// implementations wrap some concrete map surface, such as an interactive
/// widget or a GeoJSON document, and keep the viewport fitted to the union
/// of all displayed markers and routes.
pub trait RouteMapView {
    /// replaces any existing markers with a start and end marker
    fn add_markers(&mut self, start: Point<f64>, end: Point<f64>) -> Result<(), MapViewError>;

    /// removes all point markers
    fn clear_markers(&mut self);

    /// draws a named polyline. a route with the same name is replaced.
    fn add_route(
        &mut self,
        name: &str,
        coordinates: LineString<f64>,
        style: RouteStyle,
    ) -> Result<(), MapViewError>;

    /// highlights the named route and dims the previously selected one
    fn show_route(&mut self, name: &str) -> Result<(), MapViewError>;

    /// removes the named polyline, returning true if it was displayed
    fn remove_route(&mut self, name: &str) -> bool;

    /// removes all polylines and clears the selection
    fn clear_routes(&mut self);

    /// fits the viewport to every displayed point. returns None when the
    /// map has nothing to display.
    fn fit_bounds(&mut self) -> Option<Viewport>;
}
