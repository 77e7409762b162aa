//! Numeric constants used by the square-root iteration.
//!
//! Constants are stored as `f64` and converted into the working float type
//! on demand, so `f32` and `f64` solvers share a single definition.

// External dependencies
use num_traits::Float;

/// Default convergence tolerance of the square-root solver.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Value the "previous estimate" slot holds before the first update.
///
/// The first convergence test compares `val / 2` against this seed, so any
/// input with `val / 2 <= 0.01` stops before a single update is applied.
pub const SEED_ESTIMATE: f64 = 0.01;

/// Convert an `f64` constant into `T`.
///
/// Every `Float` implementor in practice (`f32`, `f64`) can represent these
/// constants; `fallback` is only reached for exotic types.
#[inline]
pub fn constant<T: Float>(value: f64, fallback: T) -> T {
    T::from(value).unwrap_or(fallback)
}

/// `0.5` in the working float type.
#[inline]
pub fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

/// [`DEFAULT_TOLERANCE`] in the working float type.
#[inline]
pub fn default_tolerance<T: Float>() -> T {
    constant(DEFAULT_TOLERANCE, T::epsilon())
}

/// [`SEED_ESTIMATE`] in the working float type.
#[inline]
pub fn seed_estimate<T: Float>() -> T {
    constant(SEED_ESTIMATE, T::epsilon())
}
