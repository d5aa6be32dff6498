pub mod emissions;
pub mod history;
pub mod route_option;
