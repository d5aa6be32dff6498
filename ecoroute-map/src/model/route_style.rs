use serde::{Deserialize, Serialize};

/// visual properties of a route polyline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    /// CSS-style color string, such as "#3388ff"
    pub color: String,
    /// stroke width in pixels
    pub weight: u32,
    /// stroke opacity in [0, 1]
    pub opacity: f64,
}

impl RouteStyle {
    pub const DEFAULT_COLOR: &str = "#3388ff";
    pub const DEFAULT_WEIGHT: u32 = 5;
    pub const DEFAULT_OPACITY: f64 = 0.7;
    /// opacity of the currently selected route
    pub const SELECTED_OPACITY: f64 = 1.0;
    /// opacity applied to a route once another route is selected
    pub const DIMMED_OPACITY: f64 = 0.3;

    pub fn with_color(color: &str) -> Self {
        Self {
            color: color.to_string(),
            ..Default::default()
        }
    }
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: String::from(Self::DEFAULT_COLOR),
            weight: Self::DEFAULT_WEIGHT,
            opacity: Self::DEFAULT_OPACITY,
        }
    }
}
