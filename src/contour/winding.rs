//! Signed area and orientation enforcement.

use super::Contour;
use crate::primitives::Point2;
use num_traits::Float;

/// Rotational direction of a contour in screen coordinates (y down).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winding {
    /// Negative signed area.
    Clockwise,
    /// Zero or positive signed area.
    CounterClockwise,
}

impl Winding {
    /// Classifies a signed area: negative is clockwise, anything else is not.
    #[inline]
    pub fn of_signed_area<F: Float>(area: F) -> Self {
        if area < F::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

/// Signed shoelace area over the closed edge cycle.
///
/// Returns zero for fewer than three points.
pub fn signed_area<F: Float>(points: &[Point2<F>]) -> F {
    if points.len() < 3 {
        return F::zero();
    }

    let n = points.len();
    let mut area = F::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        area = area + points[i].x * points[j].y;
        area = area - points[j].x * points[i].y;
    }

    area / (F::one() + F::one())
}

/// Reverses `contour` in place when its orientation differs from `winding`.
///
/// Degenerate contours are left untouched. Idempotent: a second call with
/// the same `winding` never changes the point order.
pub fn ensure_winding<F: Float>(contour: &mut Contour<F>, winding: Winding) {
    if contour.is_degenerate() {
        return;
    }

    if Winding::of_signed_area(signed_area(&contour.points)) != winding {
        contour.points.reverse();
    }
}
