//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure arithmetic building blocks:
//! - The Babylonian (Newton) update step for `x^2 - val`
//! - The two-value arithmetic mean
//!
//! Neither function holds state or checks its inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Babylonian update step.
pub mod babylonian;

/// Two-value arithmetic mean.
pub mod mean;
