//! Tolerance constants and epsilon-aware point keys.
//!
//! Every fixed tolerance the engine relies on is defined here, once, as an
//! `f64`. Generic code converts them with [`eps`].

mod candidates;
mod key;

pub use candidates::CandidateSet;
pub use key::TolerantPoint;

use num_traits::Float;
use std::cmp::Ordering;

/// Two coordinates closer than this (per component) name the same point.
pub const POINT_EPSILON: f64 = 1e-9;

/// Segment pairs whose direction cross product is smaller than this in
/// magnitude are treated as parallel, and never intersect.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Parallel threshold used by the convex-hull operations in [`crate::hull`].
pub const HULL_PARALLEL_EPSILON: f64 = 1e-9;

/// Floor on the point tolerance, in units of `F::epsilon()` times the
/// coordinate magnitude.
pub const POINT_ULPS: f64 = 32.0;

/// Converts one of the tolerance constants to `F`.
///
/// Falls back to `F::epsilon()` for types that cannot represent the value.
#[inline]
pub fn eps<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::epsilon)
}

/// Point tolerance for coordinates of the given magnitude.
///
/// This is [`POINT_EPSILON`] unless `F` cannot resolve it at that scale, in
/// which case it grows to [`POINT_ULPS`] units in the last place. For `f64`
/// the floor only takes over beyond magnitudes of about `1e5`.
#[inline]
pub fn point_tolerance<F: Float>(magnitude: F) -> F {
    let scale = magnitude.abs().max(F::one());
    eps::<F>(POINT_EPSILON).max(F::epsilon() * eps::<F>(POINT_ULPS) * scale)
}

/// Total order on floats with every NaN sorted after all numbers.
#[inline]
pub(crate) fn cmp_nan_last<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
