//! Stopping rules for the square-root refinement loop.
//!
//! ## Purpose
//!
//! A rule inspects the previous estimate and the newest estimate and
//! decides whether another update is required.
//!
//! ## Key concepts
//!
//! * **Signed relative** (default): `(previous - latest) / latest > tol`.
//!   The step is signed, so an upward step (`latest > previous`) reads as
//!   negative and stops the loop at once. Babylonian updates from any
//!   positive start land at or above the root, so this only happens on
//!   the first update, when `val / 4 + 1 > val / 2`.
//! * **Absolute relative**: `|previous - latest| / |latest| > tol`. Keeps
//!   iterating through an upward first step.
//!
//! ## Invariants
//!
//! * A NaN ratio never requests another update (IEEE `>` is false).
//! * Only `SignedRelative` is guaranteed to stop on negative input.
//! * Rules are pure functions of their three inputs.

// External dependencies
use num_traits::Float;

/// Rule deciding whether the refinement loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvergenceRule {
    /// `(previous - latest) / latest > tol`.
    #[default]
    SignedRelative,

    /// `|previous - latest| / |latest| > tol`.
    AbsoluteRelative,
}

impl ConvergenceRule {
    /// Step between two estimates, scaled by the newest one.
    #[inline]
    pub fn step_ratio<T: Float>(&self, previous: T, latest: T) -> T {
        match self {
            Self::SignedRelative => (previous - latest) / latest,
            Self::AbsoluteRelative => (previous - latest).abs() / latest.abs(),
        }
    }

    /// Whether another update is needed.
    #[inline]
    pub fn needs_update<T: Float>(&self, previous: T, latest: T, tol: T) -> bool {
        self.step_ratio(previous, latest) > tol
    }

    /// Whether the loop stops by itself for every negative input under a
    /// positive tolerance.
    ///
    /// The signed rule stops at once: the first ratio is
    /// `(val / 2 - 0.01) / 0.01 < -1`. Under the absolute rule the
    /// Babylonian map has no real fixed point below zero and wanders.
    pub fn settles_on_negative(&self) -> bool {
        matches!(self, Self::SignedRelative)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignedRelative => "SignedRelative",
            Self::AbsoluteRelative => "AbsoluteRelative",
        }
    }
}
