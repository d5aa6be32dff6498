pub mod demo_routes;
mod fit_bounds;
mod geojson_map_view;
mod map_view;
mod map_view_error;
mod route_style;

pub use fit_bounds::{FitBoundsOptions, Viewport};
pub use geojson_map_view::GeoJsonMapView;
pub use map_view::RouteMapView;
pub use map_view_error::MapViewError;
pub use route_style::RouteStyle;
