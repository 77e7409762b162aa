//! Result structure for validated solver runs.
//!
//! ## Purpose
//!
//! [`SqrtResult`] reports the estimate together with how it was reached, so
//! callers can spot the early exits of the signed stopping rule.
//!
//! ## Invariants
//!
//! * `residual == value * value - input`.
//! * `iterations == 0` means the seed estimate was returned untouched.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::convergence::ConvergenceRule;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a square-root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtResult<T> {
    /// Value whose square root was requested.
    pub input: T,

    /// Square-root estimate.
    pub value: T,

    /// Number of Babylonian updates applied.
    pub iterations: usize,

    /// Final step ratio compared against the tolerance.
    pub step_ratio: T,

    /// `value^2 - input`.
    pub residual: T,

    /// Tolerance used for the run.
    pub tolerance: T,

    /// Stopping rule used for the run.
    pub rule: ConvergenceRule,
}

impl<T: Float> SqrtResult<T> {
    /// Whether the run stopped on an upward step, i.e. before the estimate
    /// had settled.
    pub fn stopped_on_upward_step(&self) -> bool {
        self.step_ratio < T::zero()
    }

    /// Whether the returned value is the untouched seed.
    pub fn is_seed(&self) -> bool {
        self.iterations == 0
    }

    /// `|residual| / |input|`, or `|residual|` for a zero input.
    pub fn relative_residual(&self) -> T {
        if self.input == T::zero() {
            self.residual.abs()
        } else {
            (self.residual / self.input).abs()
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SqrtResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Input:      {}", self.input)?;
        writeln!(f, "  Estimate:   {}", self.value)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Rule:       {}", self.rule.name())?;
        writeln!(f, "  Tolerance:  {}", self.tolerance)?;
        writeln!(f, "  Step ratio: {}", self.step_ratio)?;
        write!(f, "  Residual:   {}", self.residual)
    }
}
