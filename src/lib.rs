//! Payment Calculator Service Library
//!
//! Computes level loan/rent payments with the fixed-rate annuity formula and
//! exposes the calculation over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

use crate::config::CalculatorConfig;

// Re-export commonly used types
pub use modules::calculator;
pub use modules::health;

/// Register every application route: health probe plus calculator endpoints
pub fn configure_app(settings: CalculatorConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.configure(health::configure)
            .configure(calculator::configure_calculator_routes(settings));
    }
}
