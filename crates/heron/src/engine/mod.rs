//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer drives the refinement loop: it validates configuration and
//! input, runs the iteration with or without a cap, and packages the
//! outcome.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Loop driver for the square-root solver.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for solver runs.
pub mod output;
