//! Error types for square-root solver operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the validated
//! solver surface: builder configuration, input checks, and exhaustion of
//! the optional iteration cap.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value or the iteration count.
//! * **Deferred**: Builder misuse (duplicate setters) is recorded and
//!   reported when `.build()` is called.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Non-goals
//!
//! * The free functions `square_root` and `mean_val` never return errors;
//!   they follow IEEE-754 arithmetic.
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for square-root solver operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HeronError {
    /// Tolerance must be finite, and positive unless an iteration cap is set.
    InvalidTolerance(f64),

    /// An iteration cap must allow at least one update.
    InvalidMaxIterations(usize),

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Negative input rejected by the opt-in domain check.
    NegativeInput(f64),

    /// The iteration cap was exhausted before the convergence test passed.
    DidNotConverge {
        /// Number of updates performed.
        iterations: usize,
        /// Last estimate produced before giving up.
        estimate: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HeronError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be finite and positive without an iteration cap)")
            }
            Self::InvalidMaxIterations(n) => {
                write!(f, "Invalid max_iterations: {n} (must be at least 1)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NegativeInput(val) => {
                write!(f, "Negative input: {val} has no real square root")
            }
            Self::DidNotConverge {
                iterations,
                estimate,
            } => write!(
                f,
                "Did not converge after {iterations} iterations (last estimate: {estimate})"
            ),
            Self::DuplicateParameter { parameter } => {
                write!(f, "Parameter '{parameter}' was set multiple times")
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for HeronError {}
