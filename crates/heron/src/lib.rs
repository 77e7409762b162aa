//! # heron: Babylonian square roots for Rust
//!
//! Iterative square-root estimation by Heron's (Babylonian) method, plus a
//! two-value arithmetic mean. Generic over `f32` and `f64`, usable in
//! `no_std` environments.
//!
//! ## Quick Start
//!
//! ### Free functions
//!
//! ```rust
//! use heron::prelude::*;
//!
//! let root = square_root(9.0_f64, 1e-4);
//! assert!((root - 3.0).abs() < 1e-9);
//!
//! // Default tolerance of 1e-4
//! assert_eq!(square_root_default(4.0), 2.0);
//!
//! assert_eq!(mean_val(2.0, 5.0), 3.5);
//! ```
//!
//! The free functions check nothing. The loop stops as soon as
//! `(guess - guess_new) / guess_new <= tol`, which is a signed test: an
//! upward first step ends the run early.
//!
//! ```rust
//! use heron::prelude::*;
//!
//! assert_eq!(square_root(2.0, 1e-4), 1.5);
//! // Inputs up to 0.02 return the 0.01 seed untouched
//! assert_eq!(square_root(0.0, 1e-4), 0.01);
//! ```
//!
//! ### Validated solver
//!
//! ```rust
//! use heron::prelude::*;
//!
//! let solver = SquareRoot::<f64>::new()
//!     .tolerance(1e-10)              // Stopping threshold
//!     .max_iterations(50)            // Fail instead of looping forever
//!     .convergence_rule(AbsoluteRelative) // Keep going through upward steps
//!     .reject_negative()             // Domain check
//!     .build()?;
//!
//! let result = solver.solve(2.0)?;
//! assert!((result.value - core::f64::consts::SQRT_2).abs() < 1e-12);
//! println!("{}", result);
//! # Result::<(), HeronError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Input:      2
//!   Estimate:   1.414213562373095
//!   Iterations: 5
//!   Rule:       AbsoluteRelative
//!   Tolerance:  0.0000000001
//!   Step ratio: 0.0000000000011277974130725558
//!   Residual:   -0.0000000000000004440892098500626
//! ```
//!
//! ### Result and Error Handling
//!
//! `solve` returns `Result<SqrtResult<T>, HeronError>`:
//!
//! ```rust
//! use heron::prelude::*;
//!
//! let solver = SquareRoot::<f64>::new().tolerance(-1.0).max_iterations(10).build()?;
//!
//! match solver.solve(9.0) {
//!     Ok(result) => println!("sqrt = {}", result.value),
//!     Err(HeronError::DidNotConverge { iterations, estimate }) => {
//!         assert_eq!(iterations, 10);
//!         assert!((estimate - 3.0).abs() < 1e-12);
//!     }
//!     Err(e) => panic!("unexpected: {}", e),
//! }
//! # Result::<(), HeronError>::Ok(())
//! ```
//!
//! ## Tracing
//!
//! The solver emits `tracing` events (`trace` per update, `debug` per
//! run). Install any subscriber to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and constants.
mod primitives;

// Layer 2: Math - pure arithmetic.
mod math;

// Layer 3: Algorithms - iteration state and stopping rules.
mod algorithms;

// Layer 4: Engine - validation and loop execution.
mod engine;

// High-level API.
mod api;

pub use api::{mean_val, square_root, square_root_default};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        mean_val, square_root, square_root_default,
        ConvergenceRule::{AbsoluteRelative, SignedRelative},
        HeronError, SqrtResult, SquareRootBuilder as SquareRoot, SquareRootSolver,
        DEFAULT_TOLERANCE,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
