//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational pieces shared by every other layer:
//! - Error types for solver configuration and execution
//! - Numeric constants (default tolerance, seed estimate)
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for solver operations.
pub mod errors;

/// Numeric constants shared across layers.
pub mod constants;
