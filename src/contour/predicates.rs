//! Containment and segment intersection tests.

use super::Contour;
use crate::primitives::Point2;
use crate::tolerance::{eps, PARALLEL_EPSILON};
use num_traits::Float;

/// Tests whether `point` lies inside `contour` by ray casting.
///
/// Counts crossings of a horizontal ray towards +x with the closed edge
/// cycle; an odd count means inside. Degenerate contours contain nothing.
/// Points exactly on an edge may report either answer.
pub fn point_in_contour<F: Float>(point: Point2<F>, contour: &Contour<F>) -> bool {
    let vertices = &contour.points;
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Hole-aware membership over a contour list.
///
/// The first contour (in order) that contains `point` decides: inside if it
/// is an outer contour, outside if it is a hole. A point contained by no
/// contour is outside.
///
/// The boolean operations in [`crate::boolean`] do not use this test.
pub fn point_in_contours<F: Float>(point: Point2<F>, contours: &[Contour<F>]) -> bool {
    contours
        .iter()
        .find(|c| point_in_contour(point, c))
        .is_some_and(|c| !c.is_hole)
}

/// Intersection point of segments `a1 -> a2` and `b1 -> b2`.
///
/// Solves `a1 + t * (a2 - a1) == b1 + u * (b2 - b1)` and accepts the point when
/// both `t` and `u` lie in `[0, 1]`, so touching endpoints intersect.
/// Parallel and collinear pairs (direction cross product below
/// [`PARALLEL_EPSILON`]) never intersect, even when they overlap.
///
/// ```
/// use polyset::contour::segments_intersect;
/// use polyset::Point2;
///
/// let hit = segments_intersect(
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(2.0, 0.0),
/// );
/// assert_eq!(hit, Some(Point2::new(1.0, 1.0)));
/// ```
pub fn segments_intersect<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> Option<Point2<F>> {
    segment_intersection_with(a1, a2, b1, b2, eps(PARALLEL_EPSILON))
}

/// [`segments_intersect`] with an explicit parallel threshold.
pub(crate) fn segment_intersection_with<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
    parallel_eps: F,
) -> Option<Point2<F>> {
    let d1 = a2 - a1;
    let d2 = b2 - b1;

    let cross = d1.cross(d2);
    if cross.abs() < parallel_eps {
        return None;
    }

    let offset = b1 - a1;
    let t = offset.cross(d2) / cross;
    let u = offset.cross(d1) / cross;

    let unit = F::zero()..=F::one();
    if unit.contains(&t) && unit.contains(&u) {
        Some(a1 + d1 * t)
    } else {
        None
    }
}
