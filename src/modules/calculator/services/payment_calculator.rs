use tracing::debug;

use crate::modules::calculator::models::{CalculationInput, CalculationResult, PaymentFrequency};

/// PaymentCalculator evaluates the fixed-rate annuity formula.
///
/// The calculator is stateless; a single instance can be shared freely
/// between workers.
pub struct PaymentCalculator;

impl PaymentCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the level payment that retires `principal` over
    /// `payments_per_year` periods at the periodic rate.
    ///
    /// payment = (P × r) / (1 − (1 + r)^(−n)), with r = annual% / 100 / n.
    /// A zero rate falls back to P / n.
    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        let principal = input.principal();
        let payments_per_year = input.payments_per_year();
        let periods = f64::from(payments_per_year);

        let rate = input.annual_rate_percent() / 100.0;
        let periodic_rate = rate / periods;
        let straight_line = principal / periods;

        // Keep the straight-line branch: the annuity denominator tends to 0/0 as r -> 0.
        let payment_amount = if periodic_rate > 0.0 {
            let payment = (principal * periodic_rate) / annuity_denominator(periodic_rate, periods);
            // Interest never lowers the payment; only rounding can.
            payment.max(straight_line)
        } else {
            straight_line
        };

        let total_paid = payment_amount * periods;
        let total_interest = total_paid - principal;
        let payment_frequency = PaymentFrequency::from_payments_per_year(payments_per_year);

        debug!(
            principal,
            periodic_rate,
            payments_per_year,
            payment_amount,
            "Calculated {} payment schedule",
            payment_frequency
        );

        CalculationResult {
            payment_amount,
            payments_per_year,
            payment_frequency,
            total_paid,
            total_interest,
        }
    }
}

/// 1 − (1 + r)^(−n), evaluated through ln_1p/exp_m1.
///
/// The naive form cancels to 0 once `1 + r` rounds to 1, which happens for
/// periodic rates below ~1e-16.
fn annuity_denominator(periodic_rate: f64, periods: f64) -> f64 {
    -(-periods * periodic_rate.ln_1p()).exp_m1()
}

impl Default for PaymentCalculator {
    fn default() -> Self {
        Self::new()
    }
}
