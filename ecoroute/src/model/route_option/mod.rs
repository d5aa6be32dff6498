mod demo_route_options;

pub use demo_route_options::{demo_route_options, DEMO_MODES};
