//! 2D point type.

use super::Vec2;
use crate::tolerance::TolerantPoint;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A position in the plane.
///
/// `PartialEq` is exact. Use [`Point2::approx_eq`] (or wrap the point in a
/// [`TolerantPoint`]) when coordinates that differ by less than
/// [`point_tolerance`](crate::tolerance::point_tolerance) must compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Component-wise tolerant equality.
    ///
    /// True when both `|dx|` and `|dy|` are below
    /// [`point_tolerance`](crate::tolerance::point_tolerance), which is
    /// [`POINT_EPSILON`](crate::tolerance::POINT_EPSILON) for ordinary `f64`
    /// input. This is not a Euclidean distance test.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        TolerantPoint(self) == TolerantPoint(other)
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}
