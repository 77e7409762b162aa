//! Layer 3: Algorithms
//!
//! This layer implements the square-root refinement itself: the state that
//! carries successive estimates and the rules deciding when to stop. It is
//! orchestrated by the engine layer.

// Stopping rules for the refinement loop.
pub mod convergence;

// Per-call iteration state and the update sequencing.
pub mod iteration;
