#![cfg(feature = "dev")]
//! Tests for the loop driver.
//!
//! ## Test Organization
//!
//! 1. **Configuration** - Defaults
//! 2. **Uncapped Runs** - `iterate`
//! 3. **Capped Runs** - `run`, cap boundary, exhaustion

use approx::assert_relative_eq;

use heron::internals::algorithms::convergence::ConvergenceRule;
use heron::internals::engine::executor::{ExecutorConfig, SqrtExecutor};
use heron::internals::primitives::errors::HeronError;

// ============================================================================
// Helper Functions
// ============================================================================

fn executor(
    tolerance: f64,
    max_iterations: Option<usize>,
    rule: ConvergenceRule,
) -> SqrtExecutor<f64> {
    SqrtExecutor::new(ExecutorConfig {
        tolerance,
        max_iterations,
        rule,
    })
}

fn signed(tolerance: f64, max_iterations: Option<usize>) -> SqrtExecutor<f64> {
    executor(tolerance, max_iterations, ConvergenceRule::SignedRelative)
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_executor_default_config() {
    let config = ExecutorConfig::<f64>::default();

    assert_eq!(config.tolerance, 1e-4);
    assert_eq!(config.max_iterations, None);
    assert_eq!(config.rule, ConvergenceRule::SignedRelative);
}

// ============================================================================
// Uncapped Run Tests
// ============================================================================

/// Test an uncapped run to its final state.
#[test]
fn test_executor_iterate() {
    let state = signed(1e-4, None).iterate(100.0);

    assert_eq!(state.counter, 6);
    assert_relative_eq!(state.guess_new, 10.0, max_relative = 1e-10);
}

/// Test that `iterate` ignores the cap.
#[test]
fn test_executor_iterate_ignores_cap() {
    let state = signed(1e-4, Some(1)).iterate(100.0);

    assert_eq!(state.counter, 6);
}

// ============================================================================
// Capped Run Tests
// ============================================================================

/// Test that `run` and `iterate` agree when the cap is not reached.
#[test]
fn test_executor_run_matches_iterate() {
    let capped = signed(1e-4, Some(100));
    let result = capped.run(100.0).unwrap();
    let state = capped.iterate(100.0);

    assert_eq!(result.value, state.guess_new);
    assert_eq!(result.iterations, state.counter);
    assert_eq!(result.input, 100.0);
}

/// Test that an uncapped `run` matches `iterate`.
#[test]
fn test_executor_run_uncapped() {
    let uncapped = signed(1e-4, None);
    let result = uncapped.run(9.0).unwrap();

    assert_eq!(result.value, uncapped.iterate(9.0).guess_new);
    assert_eq!(result.iterations, 4);
}

/// Test that a converged run exactly at the cap succeeds.
#[test]
fn test_executor_cap_boundary() {
    assert!(signed(1e-4, Some(6)).run(100.0).is_ok());
    assert!(matches!(
        signed(1e-4, Some(5)).run(100.0),
        Err(HeronError::DidNotConverge { iterations: 5, .. })
    ));
}

/// Test the estimate reported on exhaustion.
#[test]
fn test_executor_cap_estimate() {
    match signed(1e-4, Some(3)).run(9.0) {
        Err(HeronError::DidNotConverge {
            iterations,
            estimate,
        }) => {
            assert_eq!(iterations, 3);
            assert_relative_eq!(estimate, 3.000015360039322, max_relative = 1e-12);
        }
        other => panic!("expected DidNotConverge, got {:?}", other),
    }
}

/// Test that a cap bounds the symmetric rule on negative input.
#[test]
fn test_executor_cap_bounds_negative_input() {
    let capped = executor(1e-4, Some(20), ConvergenceRule::AbsoluteRelative);

    assert!(matches!(
        capped.run(-1.0),
        Err(HeronError::DidNotConverge { iterations: 20, .. })
    ));
}

/// Test that a seed return needs no update even with a cap of one.
#[test]
fn test_executor_seed_under_cap() {
    let result = signed(1e-4, Some(1)).run(0.0).unwrap();

    assert_eq!(result.iterations, 0);
    assert_eq!(result.value, 0.01);
}
