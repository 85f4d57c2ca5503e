//! polyset - Set operations on planar contour lists
//!
//! Combines two lists of closed contours into a new list representing their
//! union, intersection or difference. The operations are deliberately simple
//! point-set constructions: vertices are classified by ray casting, edge
//! crossings are collected, near-duplicates are merged under a fixed
//! tolerance, and each output boundary is rebuilt by sorting its points
//! around their mean. Results are exact for convex overlaps and approximate
//! otherwise.
//!
//! Coordinates follow the screen convention: origin top-left, y down.
//!
//! ```
//! use polyset::{boolean_operation, Contour, Operation, Point2};
//!
//! let a = vec![Contour::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ])];
//! let b = vec![Contour::new(vec![
//!     Point2::new(5.0, 5.0),
//!     Point2::new(15.0, 5.0),
//!     Point2::new(15.0, 15.0),
//!     Point2::new(5.0, 15.0),
//! ])];
//!
//! let op: Operation = "difference".parse().unwrap();
//! let rest = boolean_operation(&a, &b, op);
//! assert_eq!(rest.len(), 1);
//! assert_eq!(rest[0].area(), 87.5);
//! ```

pub mod boolean;
pub mod contour;
pub mod error;
pub mod hull;
pub mod io;
pub mod primitives;
pub mod tolerance;

pub use boolean::{boolean_operation, Operation};
pub use contour::{
    ensure_winding, point_in_contour, point_in_contours, segments_intersect, signed_area, Contour,
    Winding,
};
pub use error::PolysetError;
pub use primitives::{Point2, Segment2, Vec2};
