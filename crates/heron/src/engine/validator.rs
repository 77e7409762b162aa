//! Input validation for solver configuration and inputs.
//!
//! ## Purpose
//!
//! This module checks builder parameters and solver inputs before any
//! iteration runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * The free functions in the API layer bypass this module entirely.
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::HeronError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for solver configuration and inputs.
pub struct Validator;

impl Validator {
    /// Validate the value whose square root is requested.
    pub fn validate_value<T: Float>(val: T, reject_negative: bool) -> Result<(), HeronError> {
        if !val.is_finite() {
            return Err(HeronError::InvalidNumericValue(format!(
                "val={}",
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if reject_negative && val < T::zero() {
            return Err(HeronError::NegativeInput(val.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    ///
    /// A non-positive tolerance can keep the loop running forever, so it
    /// is accepted only when an iteration cap bounds the run.
    pub fn validate_tolerance<T: Float>(tol: T, capped: bool) -> Result<(), HeronError> {
        if !tol.is_finite() || (!capped && tol <= T::zero()) {
            return Err(HeronError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), HeronError> {
        if max_iterations == 0 {
            return Err(HeronError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), HeronError> {
        if let Some(parameter) = duplicate_param {
            return Err(HeronError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
