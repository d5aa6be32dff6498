mod ecoroute_cli;
mod ecoroute_cli_error;
pub mod run;

pub use ecoroute_cli::{EcoRouteCliArguments, EcoRouteOperation};
pub use ecoroute_cli_error::EcoRouteCliError;
