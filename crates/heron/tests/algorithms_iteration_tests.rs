#![cfg(feature = "dev")]
//! Tests for the iteration state.
//!
//! These tests cover seeding, the deferred shift of `guess_new` into
//! `guess`, and the update counter.

use approx::assert_relative_eq;

use heron::internals::algorithms::convergence::ConvergenceRule;
use heron::internals::algorithms::iteration::IterationState;

/// Test the seeded state.
#[test]
fn test_state_seed() {
    let state = IterationState::new(9.0_f64);

    assert_eq!(state.guess, 4.5);
    assert_eq!(state.guess_new, 0.01);
    assert_eq!(state.counter, 0);
}

/// Test that the first update refines `guess` and ignores the seed.
#[test]
fn test_state_first_update() {
    let mut state = IterationState::new(9.0_f64);
    state.advance();

    assert_eq!(state.guess, 4.5);
    assert_eq!(state.guess_new, 3.25);
    assert_eq!(state.counter, 1);
}

/// Test that later updates shift `guess_new` into `guess`.
#[test]
fn test_state_second_update() {
    let mut state = IterationState::new(9.0_f64);
    state.advance();
    state.advance();

    assert_eq!(state.guess, 3.25);
    assert_relative_eq!(state.guess_new, 0.5 * (3.25 + 9.0 / 3.25));
    assert_eq!(state.counter, 2);
}

/// Test the pending check against the seed.
#[test]
fn test_state_pending_seed() {
    let rule = ConvergenceRule::SignedRelative;

    assert!(IterationState::new(9.0_f64).pending(rule, 1e-4));
    assert!(!IterationState::new(0.02_f64).pending(rule, 1e-4));
    assert!(!IterationState::new(0.0_f64).pending(rule, 1e-4));
    assert!(!IterationState::new(-4.0_f64).pending(rule, 1e-4));
}

/// Test that a zero input under the symmetric rule divides by zero.
#[test]
fn test_state_zero_input_absolute_rule() {
    let rule = ConvergenceRule::AbsoluteRelative;
    let mut state = IterationState::new(0.0_f64);

    assert!(state.pending(rule, 1e-4));
    state.advance();

    assert!(state.guess_new.is_nan());
    assert!(!state.pending(rule, 1e-4));
}
