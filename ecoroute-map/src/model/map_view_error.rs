#[derive(thiserror::Error, Debug)]
pub enum MapViewError {
    #[error("route '{0}' is not displayed on this map")]
    UnknownRoute(String),
    #[error("route '{name}' requires at least two coordinates, found {count}")]
    InsufficientCoordinates { name: String, count: usize },
    #[error("invalid coordinate (lon={lon}, lat={lat}): {msg}")]
    InvalidCoordinate { lon: f64, lat: f64, msg: String },
    #[error("failure writing map output: {0}")]
    WriteError(String),
}
