use crate::model::emissions::EmissionsError;
use ecoroute_map::model::MapViewError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoRouteCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failure computing emissions: {source}")]
    EmissionsError {
        #[from]
        source: EmissionsError,
    },
    #[error("failure building map: {source}")]
    MapViewError {
        #[from]
        source: MapViewError,
    },
    #[error("failure reading input file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure processing JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
