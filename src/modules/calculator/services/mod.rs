pub mod payment_calculator;

pub use payment_calculator::PaymentCalculator;
