// Boundary validation of calculation requests
//
// Invalid inputs must be rejected with a tagged violation, never computed.

use payment_calculator::calculator::{CalculationInput, CalculationRequest};
use payment_calculator::core::{AppError, ViolationKind};
use proptest::prelude::*;

fn single_violation(request: CalculationRequest) -> (&'static str, ViolationKind, String) {
    let err = request.validate().expect_err("request should be rejected");
    assert!(matches!(err, AppError::Validation(_)));

    let violations = err.violations();
    assert_eq!(violations.len(), 1, "unexpected violations: {:?}", violations);
    (
        violations[0].field,
        violations[0].kind,
        violations[0].message.clone(),
    )
}

#[test]
fn test_zero_principal_is_rejected() {
    let (field, kind, message) = single_violation(CalculationRequest::new(0.0, 5.0, 12));
    assert_eq!(field, "loanAmount");
    assert_eq!(kind, ViolationKind::OutOfRange);
    assert_eq!(message, "Loan amount must be greater than 0");
}

#[test]
fn test_negative_principal_is_rejected() {
    let (field, kind, _) = single_violation(CalculationRequest::new(-100.0, 5.0, 12));
    assert_eq!(field, "loanAmount");
    assert_eq!(kind, ViolationKind::OutOfRange);
}

#[test]
fn test_negative_rate_is_rejected() {
    let (field, kind, message) = single_violation(CalculationRequest::new(1000.0, -1.0, 12));
    assert_eq!(field, "interestRate");
    assert_eq!(kind, ViolationKind::OutOfRange);
    assert_eq!(message, "Interest rate must be 0 or greater");
}

#[test]
fn test_zero_payments_per_year_is_rejected() {
    let (field, kind, message) = single_violation(CalculationRequest::new(1000.0, 5.0, 0));
    assert_eq!(field, "paymentsPerYear");
    assert_eq!(kind, ViolationKind::OutOfRange);
    assert_eq!(message, "Payments per year must be at least 1");
}

#[test]
fn test_missing_fields_are_reported() {
    let err = CalculationRequest::default()
        .validate()
        .expect_err("empty request should be rejected");

    let violations = err.violations();
    assert_eq!(violations.len(), 3);
    assert!(violations
        .iter()
        .all(|v| v.kind == ViolationKind::MissingField));
    assert_eq!(violations[0].message, "Loan amount is required");
    assert_eq!(violations[1].message, "Interest rate is required");
    assert_eq!(violations[2].message, "Payments per year is required");
}

#[test]
fn test_zero_rate_is_accepted() {
    let input = CalculationRequest::new(1000.0, 0.0, 1)
        .validate()
        .expect("zero interest is valid");
    assert_eq!(input.annual_rate_percent(), 0.0);
    assert_eq!(input.payments_per_year(), 1);
}

#[test]
fn test_input_constructor_enforces_invariants() {
    assert!(CalculationInput::new(1000.0, 5.0, 12).is_ok());
    assert!(CalculationInput::new(1000.0, 5.0, 0).is_err());
    assert!(CalculationInput::new(0.0, 5.0, 12).is_err());
}

proptest! {
    #[test]
    fn test_non_positive_principal_always_rejected(principal in -1_000_000.0f64..=0.0) {
        let err = CalculationRequest::new(principal, 5.0, 12).validate().unwrap_err();
        prop_assert_eq!(err.violations()[0].field, "loanAmount");
    }

    #[test]
    fn test_valid_requests_always_accepted(
        principal in 0.01f64..1_000_000_000.0,
        rate in 0.0f64..1000.0,
        payments_per_year in 1i64..100_000i64
    ) {
        let input = CalculationRequest::new(principal, rate, payments_per_year).validate();
        prop_assert!(input.is_ok());
    }
}
