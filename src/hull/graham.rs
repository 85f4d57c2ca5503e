//! Graham scan.

use crate::primitives::Point2;
use crate::tolerance::cmp_nan_last;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull of `points` with a Graham scan.
///
/// The hull starts at the point with the smallest `y` (smallest `x` on ties)
/// and proceeds by increasing polar angle around it, which is
/// counter-clockwise in a y-up frame. Collinear boundary points are dropped.
///
/// Fewer than three points are returned unchanged.
///
/// # Complexity
///
/// O(n log n) time, O(n) space.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    let mut pivot_index = 0;
    for (i, p) in sorted.iter().enumerate().skip(1) {
        let best = sorted[pivot_index];
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            pivot_index = i;
        }
    }
    sorted.swap(0, pivot_index);

    let pivot = sorted[0];
    sorted[1..].sort_by(|a, b| polar_order(pivot, *a, *b));

    let mut hull: Vec<Point2<F>> = Vec::with_capacity(sorted.len());
    hull.push(sorted[0]);
    hull.push(sorted[1]);

    for &p in &sorted[2..] {
        while hull.len() >= 2 {
            let p1 = hull[hull.len() - 2];
            let p2 = hull[hull.len() - 1];
            if (p2 - p1).cross(p - p1) <= F::zero() {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(p);
    }

    hull
}

/// Orders points by angle around `pivot`, nearer first on equal angles.
///
/// Every point lies on or above the pivot's row, so angles fall in `[0, pi)`
/// and the comparison is a total order.
fn polar_order<F: Float>(pivot: Point2<F>, a: Point2<F>, b: Point2<F>) -> Ordering {
    let va = a - pivot;
    let vb = b - pivot;
    cmp_nan_last(va.y.atan2(va.x), vb.y.atan2(vb.x))
        .then_with(|| cmp_nan_last(va.magnitude_squared(), vb.magnitude_squared()))
}
