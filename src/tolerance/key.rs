//! Epsilon-tolerant ordering key for points.

use super::{cmp_nan_last, point_tolerance};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// A point compared under [`point_tolerance`].
///
/// Ordering is lexicographic by `x`, then `y`. The tolerance is taken at the
/// largest coordinate magnitude of the two points, so it is symmetric. A
/// coordinate pair only decides the order when it differs by at least that
/// tolerance, so `Equal` holds exactly
/// when both components are within tolerance and `Eq` agrees with `Ord`.
/// This makes the key usable in ordered sets for near-duplicate removal.
///
/// The relation is not transitive across chains of nearby points; callers
/// use it for deduplication, where that limitation is accepted.
#[derive(Debug, Clone, Copy)]
pub struct TolerantPoint<F>(pub Point2<F>);

impl<F: Float> From<Point2<F>> for TolerantPoint<F> {
    #[inline]
    fn from(p: Point2<F>) -> Self {
        Self(p)
    }
}

impl<F: Float> Ord for TolerantPoint<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.0, other.0);
        let magnitude = a.x.abs().max(a.y.abs()).max(b.x.abs()).max(b.y.abs());
        let tolerance = point_tolerance(magnitude);

        if (a.x - b.x).abs() >= tolerance {
            return cmp_nan_last(a.x, b.x);
        }
        if (a.y - b.y).abs() >= tolerance {
            return cmp_nan_last(a.y, b.y);
        }
        Ordering::Equal
    }
}

impl<F: Float> PartialOrd for TolerantPoint<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> PartialEq for TolerantPoint<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for TolerantPoint<F> {}
