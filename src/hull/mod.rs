//! Convex hulls, and the single-contour boolean operations built on them.
//!
//! [`convex_boolean_operation`] is a simpler sibling of
//! [`boolean_operation`](crate::boolean::boolean_operation): it works on one
//! contour per operand and reconstructs the result as the convex hull of the
//! candidate points instead of sorting them by angle. Union is therefore the
//! hull of both contours together.
//!
//! # Example
//!
//! ```
//! use polyset::hull::convex_hull;
//! use polyset::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull[0], Point2::new(0.0, 0.0));
//! ```

mod graham;
mod ops;

pub use graham::convex_hull;
pub use ops::convex_boolean_operation;
