//! Loop driver for the square-root solver.
//!
//! ## Purpose
//!
//! This module runs [`IterationState`] updates until the configured
//! [`ConvergenceRule`] is satisfied, optionally bounded by an iteration cap.
//!
//! ## Design notes
//!
//! * **Uncapped**: [`SqrtExecutor::iterate`] has no upper bound. A
//!   non-positive tolerance may keep it running forever.
//! * **Capped**: with `max_iterations = Some(n)`, at most `n` updates are
//!   applied; if the rule still asks for more, the run fails with
//!   [`HeronError::DidNotConverge`].
//! * **Tracing**: each update emits a `trace` event, the outcome a `debug`
//!   event. No subscriber is installed here.

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::convergence::ConvergenceRule;
use crate::algorithms::iteration::IterationState;
use crate::engine::output::SqrtResult;
use crate::primitives::constants::default_tolerance;
use crate::primitives::errors::HeronError;

// ============================================================================
// Configuration
// ============================================================================

/// Execution parameters of one solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutorConfig<T> {
    /// Convergence tolerance.
    pub tolerance: T,

    /// Optional upper bound on the number of updates.
    pub max_iterations: Option<usize>,

    /// Stopping rule.
    pub rule: ConvergenceRule,
}

impl<T: Float> Default for ExecutorConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: None,
            rule: ConvergenceRule::default(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the refinement loop for a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtExecutor<T> {
    config: ExecutorConfig<T>,
}

impl<T: Float> SqrtExecutor<T> {
    /// Create an executor for `config`.
    pub fn new(config: ExecutorConfig<T>) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ExecutorConfig<T> {
        &self.config
    }

    /// Run without a cap and return the final state.
    ///
    /// Ignores `max_iterations`.
    pub fn iterate(&self, val: T) -> IterationState<T> {
        match self.drive(val, None) {
            Ok(state) | Err(state) => state,
        }
    }

    /// Run honouring `max_iterations` and package the outcome.
    pub fn run(&self, val: T) -> Result<SqrtResult<T>, HeronError> {
        let ExecutorConfig {
            tolerance,
            max_iterations,
            rule,
        } = self.config;

        let state = self
            .drive(val, max_iterations)
            .map_err(|state| HeronError::DidNotConverge {
                iterations: state.counter,
                estimate: to_f64(state.guess_new),
            })?;

        Ok(SqrtResult {
            input: val,
            value: state.guess_new,
            iterations: state.counter,
            step_ratio: state.step_ratio(rule),
            residual: state.guess_new * state.guess_new - val,
            tolerance,
            rule,
        })
    }

    // Apply updates until the rule is satisfied (`Ok`) or `cap` updates
    // have been spent with the rule still pending (`Err`).
    fn drive(
        &self,
        val: T,
        cap: Option<usize>,
    ) -> Result<IterationState<T>, IterationState<T>> {
        let ExecutorConfig {
            tolerance, rule, ..
        } = self.config;

        let mut state = IterationState::new(val);
        while state.pending(rule, tolerance) {
            if cap.is_some_and(|cap| state.counter >= cap) {
                debug!(
                    iterations = state.counter,
                    estimate = to_f64(state.guess_new),
                    "square root iteration cap exhausted"
                );
                return Err(state);
            }
            state.advance();
            trace_update(&state);
        }

        debug!(
            iterations = state.counter,
            estimate = to_f64(state.guess_new),
            "square root iteration stopped"
        );
        Ok(state)
    }
}

#[inline]
fn trace_update<T: Float>(state: &IterationState<T>) {
    trace!(
        iteration = state.counter,
        guess = to_f64(state.guess),
        guess_new = to_f64(state.guess_new),
        "babylonian update"
    );
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
