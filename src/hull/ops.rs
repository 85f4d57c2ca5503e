//! Boolean operations on single contours, reconstructed by convex hull.

use super::convex_hull;
use crate::boolean::Operation;
use crate::contour::{point_in_contour, segment_intersection_with, Contour};
use crate::primitives::Point2;
use crate::tolerance::{eps, HULL_PARALLEL_EPSILON};
use num_traits::Float;

/// Combines two contours and returns the convex hull of the result points.
///
/// - `Intersection`: vertices of `a` inside `b`, vertices of `b` inside `a`,
///   and the edge crossings.
/// - `Union`: all vertices of both.
/// - `Difference`: vertices of `a` outside `b` and the edge crossings.
///
/// Candidates are not deduplicated; edge crossings use
/// [`HULL_PARALLEL_EPSILON`] as the parallel threshold. No candidates gives
/// an empty contour. The result is never a hole.
///
/// ```
/// use polyset::boolean::Operation;
/// use polyset::hull::convex_boolean_operation;
/// use polyset::{Contour, Point2};
///
/// let a = Contour::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
/// let b = Contour::new(vec![
///     Point2::new(2.0, 2.0),
///     Point2::new(6.0, 2.0),
///     Point2::new(6.0, 6.0),
///     Point2::new(2.0, 6.0),
/// ]);
///
/// let hull = convex_boolean_operation(&a, &b, Operation::Union);
/// assert_eq!(hull.len(), 6);
/// assert_eq!(hull.area(), 32.0);
/// ```
pub fn convex_boolean_operation<F: Float>(
    a: &Contour<F>,
    b: &Contour<F>,
    op: Operation,
) -> Contour<F> {
    let candidates = match op {
        Operation::Intersection => {
            let mut points: Vec<Point2<F>> = a
                .points
                .iter()
                .copied()
                .filter(|&p| point_in_contour(p, b))
                .collect();
            points.extend(b.points.iter().copied().filter(|&p| point_in_contour(p, a)));
            points.extend(edge_crossings(a, b));
            points
        }
        Operation::Union => a.points.iter().chain(&b.points).copied().collect(),
        Operation::Difference => {
            let mut points: Vec<Point2<F>> = a
                .points
                .iter()
                .copied()
                .filter(|&p| !point_in_contour(p, b))
                .collect();
            points.extend(edge_crossings(a, b));
            points
        }
    };

    log::debug!(
        "convex {op}: {} + {} points -> {} candidates",
        a.len(),
        b.len(),
        candidates.len()
    );

    Contour::new(convex_hull(&candidates))
}

fn edge_crossings<'a, F: Float>(
    a: &'a Contour<F>,
    b: &'a Contour<F>,
) -> impl Iterator<Item = Point2<F>> + 'a {
    let parallel_eps = eps::<F>(HULL_PARALLEL_EPSILON);
    a.edges().flat_map(move |e1| {
        b.edges().filter_map(move |e2| {
            segment_intersection_with(e1.start, e1.end, e2.start, e2.end, parallel_eps)
        })
    })
}
