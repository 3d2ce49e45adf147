pub mod calculator_controller;

pub use calculator_controller::{calculate, configure_calculator_routes, home, ping};
