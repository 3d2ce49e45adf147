pub mod calculation;

pub use calculation::{
    CalculationInput, CalculationRequest, CalculationResponse, CalculationResult,
    PaymentFrequency,
};
