//! 2D line segment type.

use super::Point2;
use num_traits::Float;

/// A directed edge between two points.
///
/// Contours hand these out from [`Contour::edges`](crate::Contour::edges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }
}
