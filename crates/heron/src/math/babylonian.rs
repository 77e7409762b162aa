//! Babylonian (Newton) update for the square root.
//!
//! Applying Newton's method to `f(x) = x^2 - val` gives
//! `x_next = x - (x^2 - val) / (2x) = 0.5 * (x + val / x)`,
//! i.e. the mean of the current estimate and `val` divided by it.
//!
//! A zero estimate divides by zero and yields `inf` or `NaN` per IEEE-754.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::mean::mean_val;

/// One Babylonian refinement of `guess` towards `sqrt(val)`.
#[inline]
pub fn babylonian_step<T: Float>(guess: T, val: T) -> T {
    mean_val(guess, val / guess)
}
