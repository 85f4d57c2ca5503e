//! The contour type.

use super::predicates::point_in_contour;
use super::winding::{ensure_winding, signed_area, Winding};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A closed boundary: points in order plus a hole marker.
///
/// The closing edge from the last point to the first is implicit; the first
/// point should not be repeated at the end.
///
/// `is_hole` is carried through every operation but none of the set
/// operations consult it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour<F> {
    /// The boundary points, without a repeated closing point.
    pub points: Vec<Point2<F>>,
    /// Whether the contour was drawn as a hole.
    pub is_hole: bool,
}

impl<F: Float> Contour<F> {
    /// Creates an outer (non-hole) contour.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self {
            points,
            is_hole: false,
        }
    }

    /// Creates a contour marked as a hole.
    #[inline]
    pub fn hole(points: Vec<Point2<F>>) -> Self {
        Self {
            points,
            is_hole: true,
        }
    }

    /// Creates a contour with no points.
    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the contour has fewer than three points.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// The points in order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Appends a point.
    #[inline]
    pub fn push(&mut self, point: Point2<F>) {
        self.points.push(point);
    }

    /// Iterates the closed edge cycle: `(p[0], p[1]), ..., (p[n-1], p[0])`.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment2::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed shoelace area; zero for degenerate contours.
    pub fn signed_area(&self) -> F {
        signed_area(&self.points)
    }

    /// Absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Orientation under the y-down convention.
    pub fn winding(&self) -> Winding {
        Winding::of_signed_area(self.signed_area())
    }

    /// Ray-casting containment test. See [`point_in_contour`].
    pub fn contains(&self, point: Point2<F>) -> bool {
        point_in_contour(point, self)
    }

    /// Reverses the point order in place if the orientation differs from `winding`.
    pub fn ensure_winding(&mut self, winding: Winding) {
        ensure_winding(self, winding);
    }

    /// Consuming form of [`Contour::ensure_winding`].
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.ensure_winding(winding);
        self
    }

    /// Returns a copy with the point order reversed.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            is_hole: self.is_hole,
        }
    }

    /// Arithmetic mean of the points (not the area centroid).
    ///
    /// Returns `None` for an empty contour.
    pub fn centroid_of_points(&self) -> Option<Point2<F>> {
        mean_point(&self.points)
    }
}

/// Arithmetic mean of a point list, `None` when empty.
pub(crate) fn mean_point<F: Float>(points: &[Point2<F>]) -> Option<Point2<F>> {
    if points.is_empty() {
        return None;
    }

    let mut sum_x = F::zero();
    let mut sum_y = F::zero();
    for p in points {
        sum_x = sum_x + p.x;
        sum_y = sum_y + p.y;
    }
    let count = F::from(points.len())?;
    Some(Point2::new(sum_x / count, sum_y / count))
}

impl<F: Float> From<Vec<Point2<F>>> for Contour<F> {
    #[inline]
    fn from(points: Vec<Point2<F>>) -> Self {
        Self::new(points)
    }
}

impl<F: Float> FromIterator<Point2<F>> for Contour<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
