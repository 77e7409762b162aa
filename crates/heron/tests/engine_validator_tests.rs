#![cfg(feature = "dev")]
//! Tests for input and parameter validation.

use heron::internals::engine::validator::Validator;
use heron::internals::primitives::errors::HeronError;

/// Test value validation.
#[test]
fn test_validate_value() {
    assert!(Validator::validate_value(4.0_f64, false).is_ok());
    assert!(Validator::validate_value(-4.0_f64, false).is_ok());
    assert!(Validator::validate_value(0.0_f64, true).is_ok());
    assert_eq!(
        Validator::validate_value(-4.0_f64, true),
        Err(HeronError::NegativeInput(-4.0))
    );
    assert_eq!(
        Validator::validate_value(f64::INFINITY, false),
        Err(HeronError::InvalidNumericValue("val=inf".to_string()))
    );
}

/// Test that non-finite values are rejected before the sign check.
#[test]
fn test_validate_value_finite_first() {
    assert_eq!(
        Validator::validate_value(f64::NEG_INFINITY, true),
        Err(HeronError::InvalidNumericValue("val=-inf".to_string()))
    );
}

/// Test tolerance validation with and without a cap.
#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(1e-4_f64, false).is_ok());
    assert!(Validator::validate_tolerance(0.0_f64, true).is_ok());
    assert!(Validator::validate_tolerance(-1.0_f64, true).is_ok());
    assert!(Validator::validate_tolerance(0.0_f64, false).is_err());
    assert!(Validator::validate_tolerance(f64::INFINITY, true).is_err());
}

/// Test cap and duplicate validation.
#[test]
fn test_validate_cap_and_duplicates() {
    assert!(Validator::validate_max_iterations(1).is_ok());
    assert!(Validator::validate_max_iterations(0).is_err());
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("tolerance")),
        Err(HeronError::DuplicateParameter {
            parameter: "tolerance"
        })
    );
}
