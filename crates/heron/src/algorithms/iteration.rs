//! Iteration state for the square-root refinement.
//!
//! ## Purpose
//!
//! [`IterationState`] holds the two estimates the loop compares and the
//! number of updates applied so far.
//!
//! ## Key concepts
//!
//! * **Seeding**: `guess = val / 2`, `guess_new = 0.01`, `counter = 0`.
//!   The seed in `guess_new` is only a comparison partner for the first
//!   test; it is never fed into the update.
//! * **Deferred shift**: the first update refines `guess` itself. From the
//!   second update on, `guess_new` is shifted into `guess` before refining.
//!
//! ## Invariants
//!
//! * After `n >= 1` updates, `guess_new` is the Babylonian refinement of
//!   `guess`.
//! * `counter` equals the number of calls to [`IterationState::advance`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::convergence::ConvergenceRule;
use crate::math::babylonian::babylonian_step;
use crate::primitives::constants::{half, seed_estimate};

/// Transient per-call state of the square-root loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationState<T> {
    /// Value whose square root is sought.
    pub val: T,

    /// Previous estimate.
    pub guess: T,

    /// Newest estimate; the value returned when the loop stops.
    pub guess_new: T,

    /// Number of updates applied.
    pub counter: usize,
}

impl<T: Float> IterationState<T> {
    /// Seed the state for `val`.
    pub fn new(val: T) -> Self {
        Self {
            val,
            guess: val * half(),
            guess_new: seed_estimate(),
            counter: 0,
        }
    }

    /// Whether `rule` asks for another update at tolerance `tol`.
    #[inline]
    pub fn pending(&self, rule: ConvergenceRule, tol: T) -> bool {
        rule.needs_update(self.guess, self.guess_new, tol)
    }

    /// Ratio the rule compares against the tolerance.
    #[inline]
    pub fn step_ratio(&self, rule: ConvergenceRule) -> T {
        rule.step_ratio(self.guess, self.guess_new)
    }

    /// Apply one update.
    #[inline]
    pub fn advance(&mut self) {
        if self.counter > 0 {
            self.guess = self.guess_new;
        }
        self.guess_new = babylonian_step(self.guess, self.val);
        self.counter += 1;
    }
}
