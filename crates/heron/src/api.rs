//! High-level API for square-root estimation and averaging.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points:
//!
//! * [`square_root`], [`square_root_default`] and [`mean_val`]: unchecked
//!   free functions following plain IEEE-754 arithmetic.
//! * [`SquareRootBuilder`]: a fluent builder producing a validated
//!   [`SquareRootSolver`] with an optional iteration cap, a choice of
//!   stopping rule, and an opt-in domain check.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SquareRootBuilder`] via `SquareRoot::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.max_iterations()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`SquareRootSolver`].
//! 4. Call `.solve(val)` as often as needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorConfig, SqrtExecutor};
use crate::engine::validator::Validator;
use crate::primitives::constants::default_tolerance;

// Publicly re-exported types
pub use crate::algorithms::convergence::ConvergenceRule;
pub use crate::engine::output::SqrtResult;
pub use crate::math::mean::mean_val;
pub use crate::primitives::constants::DEFAULT_TOLERANCE;
pub use crate::primitives::errors::HeronError;

// ============================================================================
// Free Functions
// ============================================================================

/// Approximate `sqrt(val)` by Babylonian iteration until
/// `(guess - guess_new) / guess_new <= tol`.
///
/// No input is checked and there is no iteration cap:
///
/// * `val <= 0.02` (zero and negatives included) returns the seed `0.01`
///   without a single update.
/// * For `val < 4` the first update moves upward and stops the loop, so
///   `square_root(2.0, 1e-4) == 1.5`.
/// * A non-positive `tol` may never terminate. Use [`SquareRootBuilder`]
///   with `.max_iterations()` when that matters.
///
/// # Example
///
/// ```
/// use heron::prelude::*;
///
/// assert_eq!(square_root(4.0, 1e-4), 2.0);
/// ```
pub fn square_root<T: Float>(val: T, tol: T) -> T {
    let config = ExecutorConfig {
        tolerance: tol,
        ..ExecutorConfig::default()
    };
    SqrtExecutor::new(config).iterate(val).guess_new
}

/// [`square_root`] with the default tolerance of `1e-4`.
pub fn square_root_default<T: Float>(val: T) -> T {
    square_root(val, default_tolerance())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a validated square-root solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareRootBuilder<T> {
    /// Convergence tolerance (default: 1e-4).
    pub tolerance: Option<T>,

    /// Upper bound on the number of updates (default: none).
    pub max_iterations: Option<usize>,

    /// Stopping rule (default: SignedRelative).
    pub convergence_rule: Option<ConvergenceRule>,

    /// Reject negative inputs in `solve` (default: false).
    pub reject_negative: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SquareRootBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SquareRootBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            max_iterations: None,
            convergence_rule: None,
            reject_negative: None,
            duplicate_param: None,
        }
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Cap the number of updates; exhausting it fails with `DidNotConverge`.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the stopping rule.
    ///
    /// `AbsoluteRelative` without `.max_iterations()` also rejects negative
    /// inputs, as if `.reject_negative()` were set.
    pub fn convergence_rule(mut self, rule: ConvergenceRule) -> Self {
        if self.convergence_rule.is_some() {
            self.duplicate_param = Some("convergence_rule");
        }
        self.convergence_rule = Some(rule);
        self
    }

    /// Reject negative inputs with `NegativeInput` instead of iterating.
    pub fn reject_negative(mut self) -> Self {
        if self.reject_negative.is_some() {
            self.duplicate_param = Some("reject_negative");
        }
        self.reject_negative = Some(true);
        self
    }

    /// Validate the configuration and build the solver.
    pub fn build(self) -> Result<SquareRootSolver<T>, HeronError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate iteration cap
        if let Some(cap) = self.max_iterations {
            Validator::validate_max_iterations(cap)?;
        }

        // Validate tolerance
        let tolerance = self.tolerance.unwrap_or_else(default_tolerance);
        Validator::validate_tolerance(tolerance, self.max_iterations.is_some())?;

        // Uncapped rules that do not settle on negative input reject it
        let rule = self.convergence_rule.unwrap_or_default();
        let unbounded = self.max_iterations.is_none() && !rule.settles_on_negative();

        Ok(SquareRootSolver {
            executor: SqrtExecutor::new(ExecutorConfig {
                tolerance,
                max_iterations: self.max_iterations,
                rule,
            }),
            reject_negative: self.reject_negative.unwrap_or(false) || unbounded,
        })
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Validated square-root solver produced by [`SquareRootBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRootSolver<T> {
    executor: SqrtExecutor<T>,
    reject_negative: bool,
}

impl<T: Float> SquareRootSolver<T> {
    /// Estimate `sqrt(val)`.
    pub fn solve(&self, val: T) -> Result<SqrtResult<T>, HeronError> {
        Validator::validate_value(val, self.reject_negative)?;
        self.executor.run(val)
    }

    /// Tolerance in use.
    pub fn tolerance(&self) -> T {
        self.executor.config().tolerance
    }

    /// Iteration cap in use, if any.
    pub fn max_iterations(&self) -> Option<usize> {
        self.executor.config().max_iterations
    }

    /// Stopping rule in use.
    pub fn convergence_rule(&self) -> ConvergenceRule {
        self.executor.config().rule
    }
}
