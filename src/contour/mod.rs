//! Closed point sequences and the predicates the boolean engine builds on.
//!
//! A [`Contour`] is an ordered list of points with an implicit closing edge
//! from the last point back to the first. Contours with fewer than three
//! points are legal to build and store but are *degenerate*: they have zero
//! area, contain nothing, and are skipped by winding normalization.
//!
//! Coordinates follow the screen convention (origin top-left, y grows
//! downward), under which a negative signed area means the points run
//! clockwise.
//!
//! # Example
//!
//! ```
//! use polyset::contour::{point_in_contour, Contour, Winding};
//! use polyset::Point2;
//!
//! let mut square = Contour::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(10.0, 0.0),
//! ]);
//! assert_eq!(square.winding(), Winding::Clockwise);
//!
//! square.ensure_winding(Winding::CounterClockwise);
//! assert_eq!(square.signed_area(), 100.0);
//! assert!(point_in_contour(Point2::new(5.0, 5.0), &square));
//! ```

mod core;
mod predicates;
mod winding;

pub use self::core::Contour;
pub use predicates::{point_in_contour, point_in_contours, segments_intersect};
pub(crate) use self::core::mean_point;
pub(crate) use predicates::segment_intersection_with;
pub use winding::{ensure_winding, signed_area, Winding};
