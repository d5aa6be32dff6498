mod ecoroute_configuration;

pub use ecoroute_configuration::EcoRouteConfiguration;
