//! Turning a candidate point set into an output contour.

use crate::contour::{mean_point, Contour, Winding};
use crate::primitives::Point2;
use crate::tolerance::{cmp_nan_last, CandidateSet};
use num_traits::Float;

/// Sorts `points` by ascending `atan2` angle around their arithmetic mean.
///
/// The result traces the boundary of the point set only when the points are
/// in convex position; for concave regions it still produces a closed
/// contour, just not the right one.
///
/// ```
/// use polyset::boolean::angular_sort;
/// use polyset::Point2;
///
/// let mut pts = vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(-1.0, -1.0),
///     Point2::new(-1.0, 1.0),
///     Point2::new(1.0, -1.0),
/// ];
/// angular_sort(&mut pts);
/// assert_eq!(pts[0], Point2::new(-1.0, -1.0));
/// assert_eq!(pts[3], Point2::new(-1.0, 1.0));
/// ```
pub fn angular_sort<F: Float>(points: &mut [Point2<F>]) {
    let Some(center) = mean_point(points) else {
        return;
    };

    let angle = |p: &Point2<F>| (p.y - center.y).atan2(p.x - center.x);
    points.sort_by(|a, b| cmp_nan_last(angle(a), angle(b)));
}

/// Builds the output contour for one candidate set.
///
/// Fewer than three points yields `None`. More than three are angularly
/// sorted; exactly three keep their insertion order. The contour is forced
/// counter-clockwise and is never a hole.
pub(crate) fn contour_from_candidates<F: Float>(
    candidates: CandidateSet<F>,
) -> Option<Contour<F>> {
    if candidates.len() < 3 {
        return None;
    }

    let mut points = candidates.into_points();
    if points.len() > 3 {
        angular_sort(&mut points);
    }

    Some(Contour::new(points).with_winding(Winding::CounterClockwise))
}
