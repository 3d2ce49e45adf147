use serde::{Deserialize, Serialize};

use crate::core::{AppError, FieldViolation, Result};

/// Body of `POST {base}/calculate`.
///
/// Every field is optional at the wire level so that a missing or `null`
/// field surfaces as a `MissingField` violation instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub loan_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub payments_per_year: Option<i64>,
}

impl CalculationRequest {
    pub fn new(loan_amount: f64, interest_rate: f64, payments_per_year: i64) -> Self {
        Self {
            loan_amount: Some(loan_amount),
            interest_rate: Some(interest_rate),
            payments_per_year: Some(payments_per_year),
        }
    }

    /// Check every field and convert into a [`CalculationInput`].
    ///
    /// All violations are collected so the client sees every offending
    /// field in one response.
    pub fn validate(&self) -> Result<CalculationInput> {
        let mut violations = Vec::new();

        let principal = match self.loan_amount {
            None => {
                violations.push(FieldViolation::missing(
                    "loanAmount",
                    "Loan amount is required",
                ));
                None
            }
            Some(value) if !value.is_finite() || value <= 0.0 => {
                violations.push(FieldViolation::out_of_range(
                    "loanAmount",
                    "Loan amount must be greater than 0",
                ));
                None
            }
            Some(value) => Some(value),
        };

        let annual_rate_percent = match self.interest_rate {
            None => {
                violations.push(FieldViolation::missing(
                    "interestRate",
                    "Interest rate is required",
                ));
                None
            }
            Some(value) if !value.is_finite() || value < 0.0 => {
                violations.push(FieldViolation::out_of_range(
                    "interestRate",
                    "Interest rate must be 0 or greater",
                ));
                None
            }
            Some(value) => Some(value),
        };

        let payments_per_year = match self.payments_per_year {
            None => {
                violations.push(FieldViolation::missing(
                    "paymentsPerYear",
                    "Payments per year is required",
                ));
                None
            }
            Some(value) if value < 1 => {
                violations.push(FieldViolation::out_of_range(
                    "paymentsPerYear",
                    "Payments per year must be at least 1",
                ));
                None
            }
            Some(value) => match u32::try_from(value) {
                Ok(count) => Some(count),
                Err(_) => {
                    violations.push(FieldViolation::out_of_range(
                        "paymentsPerYear",
                        format!("Payments per year must not exceed {}", u32::MAX),
                    ));
                    None
                }
            },
        };

        match (principal, annual_rate_percent, payments_per_year) {
            (Some(principal), Some(rate), Some(count)) if violations.is_empty() => {
                Ok(CalculationInput {
                    principal,
                    annual_rate_percent: rate,
                    payments_per_year: count,
                })
            }
            _ => Err(AppError::Validation(violations)),
        }
    }
}

/// Validated calculation input. Holding one means the invariants
/// `principal > 0`, `annual_rate_percent >= 0` and `payments_per_year >= 1`
/// are satisfied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    principal: f64,
    annual_rate_percent: f64,
    payments_per_year: u32,
}

impl CalculationInput {
    pub fn new(principal: f64, annual_rate_percent: f64, payments_per_year: u32) -> Result<Self> {
        CalculationRequest::new(principal, annual_rate_percent, i64::from(payments_per_year))
            .validate()
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }
}

/// Human-readable payment frequency derived from payments per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Monthly,
    #[serde(rename = "Bi-Monthly")]
    BiMonthly,
    Quarterly,
    Annual,
    Custom,
}

impl PaymentFrequency {
    pub fn from_payments_per_year(payments_per_year: u32) -> Self {
        match payments_per_year {
            12 => Self::Monthly,
            6 => Self::BiMonthly,
            4 => Self::Quarterly,
            1 => Self::Annual,
            _ => Self::Custom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::BiMonthly => "Bi-Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annual => "Annual",
            Self::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a payment calculation. Amounts are unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub payment_amount: f64,
    pub payments_per_year: u32,
    pub payment_frequency: PaymentFrequency,
    pub total_paid: f64,
    pub total_interest: f64,
}

impl CalculationResult {
    /// Reject results that overflowed `f64`.
    ///
    /// Valid but extreme inputs (a loan amount or rate near `f64::MAX`) can
    /// push the payment or totals to infinity, which JSON cannot carry.
    pub fn ensure_finite(self) -> Result<Self> {
        let finite = self.payment_amount.is_finite()
            && self.total_paid.is_finite()
            && self.total_interest.is_finite();

        if finite {
            Ok(self)
        } else {
            Err(AppError::Validation(vec![
                FieldViolation::out_of_range(
                    "loanAmount",
                    "Loan amount is too large to calculate at this interest rate",
                ),
                FieldViolation::out_of_range(
                    "interestRate",
                    "Interest rate is too large to calculate for this loan amount",
                ),
            ]))
        }
    }
}

/// Response body of `POST {base}/calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub payment_amount: f64,
    pub payments_per_year: u32,
    pub payment_frequency: PaymentFrequency,
    pub total_paid: f64,
    pub total_interest: f64,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(result: CalculationResult) -> Self {
        Self {
            payment_amount: result.payment_amount,
            payments_per_year: result.payments_per_year,
            payment_frequency: result.payment_frequency,
            total_paid: result.total_paid,
            total_interest: result.total_interest,
        }
    }
}
