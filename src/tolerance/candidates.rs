//! Ordered, epsilon-deduplicated point collections.

use super::TolerantPoint;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::BTreeSet;

/// Points in first-insertion order with near-duplicates rejected.
///
/// Membership is decided by [`TolerantPoint`], so a point within
/// [`point_tolerance`](super::point_tolerance) of one already present is dropped
/// and the earlier occurrence keeps its position.
///
/// ```
/// use polyset::tolerance::CandidateSet;
/// use polyset::Point2;
///
/// let mut set = CandidateSet::new();
/// assert!(set.insert(Point2::new(0.0_f64, 0.0)));
/// assert!(!set.insert(Point2::new(1e-12, 0.0)));
/// assert!(set.insert(Point2::new(1.0, 0.0)));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<F> {
    points: Vec<Point2<F>>,
    seen: BTreeSet<TolerantPoint<F>>,
}

impl<F: Float> CandidateSet<F> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            seen: BTreeSet::new(),
        }
    }

    /// Adds `point` unless a tolerant duplicate is already present.
    ///
    /// Returns `true` if the point was added.
    pub fn insert(&mut self, point: Point2<F>) -> bool {
        if self.seen.insert(TolerantPoint(point)) {
            self.points.push(point);
            true
        } else {
            false
        }
    }

    /// Number of distinct points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no point has been added.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the set, returning the points in insertion order.
    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }
}

impl<F: Float> Extend<Point2<F>> for CandidateSet<F> {
    fn extend<I: IntoIterator<Item = Point2<F>>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl<F: Float> FromIterator<Point2<F>> for CandidateSet<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
