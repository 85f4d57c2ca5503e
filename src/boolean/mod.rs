//! Union, intersection and difference of contour lists.
//!
//! These are point-set approximations, not a clipping algorithm:
//!
//! - **Union** returns every contour of both operands, re-oriented, without
//!   merging overlaps.
//! - **Intersection** pairs every contour of A with every contour of B and
//!   builds one contour per pair from the vertices inside the other contour
//!   and the edge crossings.
//! - **Difference** builds one contour per contour of A from its vertices
//!   outside all of B plus its edge crossings with B.
//!
//! Candidate points are reordered by angle around their mean, which yields
//! the true boundary only when the region is convex. Holes are carried but
//! not interpreted. Output contours run counter-clockwise in screen
//! coordinates and are never holes.
//!
//! # Example
//!
//! ```
//! use polyset::boolean::{boolean_operation, Operation};
//! use polyset::{Contour, Point2};
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
//! let overlap = boolean_operation(&a, &b, Operation::Intersection);
//! assert_eq!(overlap.len(), 1);
//! assert_eq!(overlap[0].area(), 25.0);
//!
//! let both = boolean_operation(&a, &b, Operation::Union);
//! assert_eq!(both.len(), 2);
//! ```

mod compose;
mod reconstruct;

pub use compose::{polygon_difference, polygon_intersection, polygon_union};
pub use reconstruct::angular_sort;

use crate::contour::Contour;
use crate::error::PolysetError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Which set operation to perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Both operands, stacked.
    Union,
    /// Overlap of every contour pair.
    Intersection,
    /// A minus B.
    Difference,
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Operation; 3] = [
        Operation::Union,
        Operation::Intersection,
        Operation::Difference,
    ];

    /// Lower-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Union => "union",
            Operation::Intersection => "intersection",
            Operation::Difference => "difference",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = PolysetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PolysetError::UnknownOperation(s.to_string()))
    }
}

/// Applies `op` to operands `a` and `b`.
///
/// Inputs are only read; every returned contour is freshly allocated.
pub fn boolean_operation<F: Float>(
    a: &[Contour<F>],
    b: &[Contour<F>],
    op: Operation,
) -> Vec<Contour<F>> {
    let result = match op {
        Operation::Union => polygon_union(a, b),
        Operation::Intersection => polygon_intersection(a, b),
        Operation::Difference => polygon_difference(a, b),
    };

    log::debug!(
        "{op}: {} x {} contours -> {} contours",
        a.len(),
        b.len(),
        result.len()
    );

    result
}
