//! Arithmetic mean of two values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::constants::half;

/// Mean of `a` and `b`, computed as `0.5 * (a + b)`.
///
/// The sum is formed before halving, so very large operands of the same
/// sign overflow to infinity instead of being rescaled.
///
/// # Example
///
/// ```
/// use heron::prelude::*;
///
/// assert_eq!(mean_val(2.0, 5.0), 3.5);
/// ```
#[inline]
pub fn mean_val<T: Float>(a: T, b: T) -> T {
    half::<T>() * (a + b)
}
