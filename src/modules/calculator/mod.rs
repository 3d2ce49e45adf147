pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure_calculator_routes;
pub use models::{CalculationInput, CalculationRequest, CalculationResult, PaymentFrequency};
pub use services::PaymentCalculator;
